//! Loads a comma separated dataset into a [`CourseStore`].
//!
//! Each non-blank line is `number, name[, prerequisite...]`. Whitespace around every field is
//! ignored and empty prerequisite fields are skipped. Every prerequisite must be the course number
//! of some line in the same dataset, but it may appear later in the file, so loading is done in
//! two phases:
//!
//! 1. [`parse`] reads the whole dataset. It collects every course number first and only then
//!    checks the prerequisites against that set, producing an immutable [`CatalogBatch`]. The
//!    store isn't touched.
//! 2. [`CatalogBatch::commit`] clears the store and inserts the batch in file order.
//!
//! [`load`] does both, so a rejected dataset leaves the store exactly as it was.
//!
//! # Examples
//!
//! ```
//! use course_catalog::{loader, CourseStore};
//!
//! let mut store = CourseStore::new();
//! let data = "CS201, Data Structures, CS101\nCS101, Intro to CS\n";
//!
//! loader::load_from_reader(data.as_bytes(), &mut store).unwrap();
//! assert_eq!(store.search("CS201").unwrap().prerequisites, ["CS101"]);
//!
//! // An unknown prerequisite rejects the whole dataset.
//! let bad = "CS101, Intro to CS\nCS102, Data Structures, CS999\n";
//! assert!(loader::load_from_reader(bad.as_bytes(), &mut store).is_err());
//! assert_eq!(store.len(), 2);
//! ```

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::course::Course;
use crate::error::LoadError;
use crate::store::CourseStore;

/// Separates fields on a line.
pub const DELIMITER: char = ',';

/// Course number and name.
const MIN_FIELDS: usize = 2;

/// A fully validated dataset that hasn't been put into a store yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogBatch {
    courses: Vec<Course>,
}

impl CatalogBatch {
    /// The parsed courses in file order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// How many courses the dataset had.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the dataset had no courses at all.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Replaces the store's contents with this batch and returns how many courses were inserted.
    pub fn commit(self, store: &mut CourseStore) -> usize {
        let count = self.courses.len();
        store.clear();
        store.extend(self.courses);
        count
    }
}

/// A line that passed the structural checks, waiting for its prerequisites to be checked.
struct ParsedLine {
    line: usize,
    course_number: String,
    course_name: String,
    candidates: Vec<String>,
}

/// Reads and validates a whole dataset without touching any store.
pub fn parse<R: BufRead>(reader: R) -> Result<CatalogBatch, LoadError> {
    let mut parsed = Vec::new();
    let mut known = HashSet::new();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| LoadError::Read {
            line: line_number,
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let fields = split_fields(&line);
        if fields.len() < MIN_FIELDS {
            return Err(LoadError::Structural {
                line: line_number,
                found: fields.len(),
            });
        }
        if fields[0].is_empty() {
            return Err(LoadError::EmptyCourseNumber { line: line_number });
        }

        known.insert(fields[0].to_owned());
        parsed.push(ParsedLine {
            line: line_number,
            course_number: fields[0].to_owned(),
            course_name: fields[1].to_owned(),
            candidates: fields[2..].iter().map(|f| (*f).to_owned()).collect(),
        });
    }
    debug!(
        lines = parsed.len(),
        course_numbers = known.len(),
        "collected course numbers"
    );

    let courses = parsed
        .into_iter()
        .map(|line| resolve(line, &known))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(courses = courses.len(), "validated prerequisites");

    Ok(CatalogBatch { courses })
}

/// Builds the course for a parsed line, checking every non-empty prerequisite against the course
/// numbers of the whole dataset.
fn resolve(parsed: ParsedLine, known: &HashSet<String>) -> Result<Course, LoadError> {
    let mut prerequisites = Vec::with_capacity(parsed.candidates.len());
    for candidate in parsed.candidates.into_iter().filter(|c| !c.is_empty()) {
        if !known.contains(&candidate) {
            return Err(LoadError::MissingPrerequisite {
                line: parsed.line,
                course: parsed.course_number,
                prerequisite: candidate,
            });
        }
        prerequisites.push(candidate);
    }

    Ok(Course {
        course_number: parsed.course_number,
        course_name: parsed.course_name,
        prerequisites,
    })
}

/// Splits a line on [`DELIMITER`] and trims every field. A single delimiter at the very end of the
/// line terminates the last field rather than starting an empty one.
fn split_fields(line: &str) -> Vec<&str> {
    let line = line.strip_suffix(DELIMITER).unwrap_or(line);
    line.split(DELIMITER)
        .map(|field| field.trim_matches(|c| matches!(c, ' ' | '\t' | '\r' | '\n')))
        .collect()
}

/// Parses `reader` and, only if the whole dataset is valid, replaces the store's contents with it.
/// Returns how many courses were loaded.
pub fn load_from_reader<R: BufRead>(reader: R, store: &mut CourseStore) -> Result<usize, LoadError> {
    match parse(reader) {
        Ok(batch) => Ok(batch.commit(store)),
        Err(err) => {
            warn!(error = %err, kept = store.len(), "rejected dataset, store unchanged");
            Err(err)
        }
    }
}

/// Opens the file at `path` and loads it with [`load_from_reader`]. The file is closed again
/// before this returns, whatever the outcome.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load(path: &Path, store: &mut CourseStore) -> Result<usize, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let count = load_from_reader(BufReader::new(file), store)?;
    info!(courses = count, "loaded catalog");
    Ok(count)
}
