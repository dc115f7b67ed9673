//! The record kept for every course in the catalog.

/// A single course. The `course_number` is the key the catalog is ordered and searched by; it is
/// compared as an opaque, case-sensitive string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Unique identifier, e.g. `CS101`.
    pub course_number: String,
    /// Display title, e.g. `Introduction to Programming`.
    pub course_name: String,
    /// Course numbers that must be taken first, in the order they were listed.
    pub prerequisites: Vec<String>,
}

impl Course {
    /// Creates a course with no prerequisites.
    pub fn new(course_number: impl Into<String>, course_name: impl Into<String>) -> Self {
        Self {
            course_number: course_number.into(),
            course_name: course_name.into(),
            prerequisites: Vec::new(),
        }
    }

    /// Replaces the prerequisite list.
    pub fn with_prerequisites<I, S>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisites = prerequisites.into_iter().map(Into::into).collect();
        self
    }

    /// Whether any prerequisites are listed.
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }
}
