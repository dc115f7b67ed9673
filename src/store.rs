//! The ordered course store: every loaded [`Course`] keyed by its course number.
//!
//! # Examples
//!
//! ```
//! use course_catalog::{Course, CourseStore};
//!
//! let mut store = CourseStore::new();
//! store.insert(Course::new("CS201", "Data Structures").with_prerequisites(["CS101"]));
//! store.insert(Course::new("CS101", "Intro to CS"));
//!
//! let found = store.search("CS201").expect("inserted above");
//! assert_eq!(found.prerequisites, ["CS101"]);
//! assert!(store.search("cs201").is_none());
//!
//! let numbers: Vec<_> = store.iter().map(|c| c.course_number.as_str()).collect();
//! assert_eq!(numbers, ["CS101", "CS201"]);
//! ```

use std::fmt;

use crate::course::Course;
use crate::tree::{self, Tree};

/// Courses ordered by course number.
///
/// The store doesn't validate anything: keys aren't checked and duplicates aren't rejected. A
/// second course with an existing number is stored but [`CourseStore::search`] keeps returning the
/// first one. Loading a validated dataset is the job of [`crate::loader`].
#[derive(Default)]
pub struct CourseStore {
    tree: Tree<String, Course>,
}

impl fmt::Debug for CourseStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl CourseStore {
    /// Generates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a course keyed by its course number. This never fails.
    pub fn insert(&mut self, course: Course) {
        self.tree.insert(course.course_number.clone(), course);
    }

    /// Finds the course with exactly this course number. Absence is a normal outcome, not an
    /// error.
    pub fn search(&self, course_number: &str) -> Option<&Course> {
        let found = self.tree.find(course_number);
        tracing::trace!(course_number, hit = found.is_some(), "search");
        found
    }

    /// Visits every course in ascending course number order.
    pub fn iter(&self) -> Courses<'_> {
        Courses(self.tree.iter())
    }

    /// Drops every course. A no-op on an empty store.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// How many courses are stored, shadowed duplicates included.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether the store holds no courses.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Height of the underlying tree. Useful to spot degenerate (sorted) load orders.
    pub fn height(&self) -> usize {
        self.tree.height()
    }
}

impl Extend<Course> for CourseStore {
    fn extend<I: IntoIterator<Item = Course>>(&mut self, iter: I) {
        for course in iter {
            self.insert(course);
        }
    }
}

impl FromIterator<Course> for CourseStore {
    fn from_iter<I: IntoIterator<Item = Course>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl<'a> IntoIterator for &'a CourseStore {
    type Item = &'a Course;
    type IntoIter = Courses<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`CourseStore`].
pub struct Courses<'a>(tree::Iter<'a, String, Course>);

impl<'a> Iterator for Courses<'a> {
    type Item = &'a Course;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, course)| course)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Courses<'_> {}
