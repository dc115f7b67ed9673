//! Text rendering of courses for the interactive session.
//!
//! Prerequisite titles are looked up in the store as it is *now*, not as it was when the course
//! was loaded, so a prerequisite that has since gone missing renders as [`TITLE_NOT_FOUND`] rather
//! than failing.

use std::fmt;

use crate::course::Course;
use crate::store::CourseStore;

/// Shown in place of the title of a prerequisite that isn't in the store.
pub const TITLE_NOT_FOUND: &str = "[Title not found]";

const RULE: &str = "---------------------------------------------------------";

/// A prerequisite course number together with the course it resolved to, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPrerequisite<'a> {
    /// The course number as listed by the dependent course.
    pub course_number: &'a str,
    /// The matching course in the store.
    pub course: Option<&'a Course>,
}

impl<'a> ResolvedPrerequisite<'a> {
    /// Title of the prerequisite, if it could be found.
    pub fn title(&self) -> Option<&'a str> {
        self.course.map(|c| c.course_name.as_str())
    }
}

/// Looks up every prerequisite of `course` in `store`, keeping the listed order.
pub fn resolve_prerequisites<'a>(
    course: &'a Course,
    store: &'a CourseStore,
) -> Vec<ResolvedPrerequisite<'a>> {
    course
        .prerequisites
        .iter()
        .map(|number| ResolvedPrerequisite {
            course_number: number,
            course: store.search(number),
        })
        .collect()
}

/// One-line `NUMBER: NAME` form used when listing the catalog.
#[derive(Debug, Clone, Copy)]
pub struct CourseSummary<'a>(pub &'a Course);

impl fmt::Display for CourseSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.0.course_number, self.0.course_name)
    }
}

/// Framed block with a course and its resolved prerequisites.
#[derive(Debug, Clone, Copy)]
pub struct CourseDetails<'a> {
    course: &'a Course,
    store: &'a CourseStore,
}

impl<'a> CourseDetails<'a> {
    /// Renders `course`, resolving prerequisites against `store`.
    pub fn new(course: &'a Course, store: &'a CourseStore) -> Self {
        Self { course, store }
    }
}

impl fmt::Display for CourseDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "{}", CourseSummary(self.course))?;
        writeln!(f, "{RULE}")?;

        let resolved = resolve_prerequisites(self.course, self.store);
        if resolved.is_empty() {
            writeln!(f, "Prerequisites: None")?;
        } else {
            writeln!(f, "Prerequisites:")?;
            let last = resolved.len() - 1;
            for (i, prerequisite) in resolved.iter().enumerate() {
                let title = prerequisite.title().unwrap_or(TITLE_NOT_FOUND);
                let separator = if i < last { "," } else { "" };
                writeln!(f, "    {}: {title}{separator}", prerequisite.course_number)?;
            }
        }
        write!(f, "{RULE}")
    }
}
