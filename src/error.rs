//! Errors raised while loading a dataset. The store itself never fails.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a load was rejected. Whatever the variant, the store was left exactly as it was.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The dataset couldn't be opened.
    #[error("unable to open file '{}'", path.display())]
    Open {
        /// Path that was tried.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The dataset was opened but reading it failed part way through.
    #[error("failed reading line {line}")]
    Read {
        /// 1-based line that couldn't be read.
        line: usize,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A line had fewer than the course number and name fields.
    #[error("invalid course data format on line {line}: expected at least 2 fields, found {found}")]
    Structural {
        /// 1-based line number.
        line: usize,
        /// How many fields the line split into.
        found: usize,
    },

    /// A line's course number field was empty.
    #[error("invalid course data format on line {line}: course number is empty")]
    EmptyCourseNumber {
        /// 1-based line number.
        line: usize,
    },

    /// A prerequisite names a course number that appears nowhere in the dataset.
    #[error("prerequisite '{prerequisite}' not found (listed by {course} on line {line})")]
    MissingPrerequisite {
        /// 1-based line number of the course listing the prerequisite.
        line: usize,
        /// Course that lists the prerequisite.
        course: String,
        /// The unknown course number.
        prerequisite: String,
    },
}

impl LoadError {
    /// A line was malformed.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Structural { .. } | Self::EmptyCourseNumber { .. })
    }

    /// A prerequisite pointed outside the dataset.
    pub fn is_referential(&self) -> bool {
        matches!(self, Self::MissingPrerequisite { .. })
    }
}
