//! The interactive course planner session: a numbered menu read from any [`BufRead`] and written
//! to any [`Write`], so it can be driven by a terminal or by a test.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::display::{CourseDetails, CourseSummary};
use crate::loader;
use crate::store::CourseStore;

/// A menu entry picked by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// `1`: (re)load the dataset.
    Load,
    /// `2`: list every course in order.
    DisplayAll,
    /// `3`: look up one course.
    Find,
    /// `9`: leave the session.
    Exit,
    /// Any other number.
    Other(i64),
}

impl Choice {
    /// Parses a line of input. Returns `None` when it isn't a number at all.
    pub fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim().parse::<i64>().ok()? {
            1 => Self::Load,
            2 => Self::DisplayAll,
            3 => Self::Find,
            9 => Self::Exit,
            n => Self::Other(n),
        };
        Some(choice)
    }
}

/// Course numbers are stored upper case; user input is trimmed and upper-cased to match.
pub fn normalize_course_number(input: &str) -> String {
    input.trim().to_uppercase()
}

/// Owns the store for the lifetime of one interactive session.
pub struct Session<R, W> {
    input: R,
    output: W,
    dataset: PathBuf,
    store: CourseStore,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Starts a session with an empty store that loads from `dataset` when asked to.
    pub fn new(input: R, output: W, dataset: impl Into<PathBuf>) -> Self {
        Self {
            input,
            output,
            dataset: dataset.into(),
            store: CourseStore::new(),
        }
    }

    /// The courses currently loaded.
    pub fn store(&self) -> &CourseStore {
        &self.store
    }

    /// Hands back the output, e.g. to inspect what a test session printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu until the user exits or the input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.write_menu()?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                break;
            };

            match Choice::parse(&line) {
                Some(Choice::Load) => self.load()?,
                Some(Choice::DisplayAll) => self.display_all()?,
                Some(Choice::Find) => self.find()?,
                Some(Choice::Exit) => {
                    writeln!(self.output, "Thank you for using the course planner!")?;
                    break;
                }
                Some(Choice::Other(n)) => writeln!(self.output, "{n} is not a valid option.")?,
                None => writeln!(
                    self.output,
                    "Invalid input. Please enter a number from the menu."
                )?,
            }
        }
        writeln!(self.output, "Good bye.")?;
        self.output.flush()
    }

    /// Loads the dataset, reporting the outcome. A failed load leaves the store untouched.
    pub fn load(&mut self) -> io::Result<()> {
        writeln!(self.output, "Loading CSV file {}", self.dataset.display())?;
        match loader::load(&self.dataset, &mut self.store) {
            Ok(_) => writeln!(
                self.output,
                "Courses loaded successfully from '{}'",
                self.dataset.display()
            ),
            Err(err) => writeln!(self.output, "ERROR: {err}"),
        }
    }

    fn display_all(&mut self) -> io::Result<()> {
        for course in self.store.iter() {
            writeln!(self.output, "{}", CourseSummary(course))?;
        }
        Ok(())
    }

    fn find(&mut self) -> io::Result<()> {
        write!(self.output, "Enter course number: ")?;
        self.output.flush()?;
        let course_number = normalize_course_number(&self.read_line()?.unwrap_or_default());
        debug!(%course_number, "find");

        match self.store.search(&course_number) {
            Some(course) => writeln!(self.output, "{}", CourseDetails::new(course, &self.store)),
            None => writeln!(self.output, "Course Id {course_number} not found."),
        }
    }

    fn write_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "Menu:")?;
        writeln!(self.output, "  1. Load Courses")?;
        writeln!(self.output, "  2. Display All Courses")?;
        writeln!(self.output, "  3. Find Course")?;
        writeln!(self.output, "  9. Exit")?;
        write!(self.output, "Enter choice: ")?;
        self.output.flush()
    }

    /// `None` once the input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.input.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use tempfile::NamedTempFile;

    fn dataset(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn run(input: &str, dataset: &NamedTempFile) -> (String, CourseStore) {
        let mut session = Session::new(Cursor::new(input.to_owned()), Vec::new(), dataset.path());
        session.run().unwrap();
        let Session { output, store, .. } = session;
        (String::from_utf8(output).unwrap(), store)
    }

    #[test]
    fn test_choice_parse() {
        assert_eq!(Choice::parse(" 1\n"), Some(Choice::Load));
        assert_eq!(Choice::parse("9"), Some(Choice::Exit));
        assert_eq!(Choice::parse("4"), Some(Choice::Other(4)));
        assert_eq!(Choice::parse("abc"), None);
    }

    #[test]
    fn test_normalize_course_number() {
        assert_eq!(normalize_course_number("  cs101 \n"), "CS101");
    }

    #[test]
    fn test_load_list_find_exit() {
        let file = dataset("CS201,Data Structures,CS101\nCS101,Intro to CS\n");
        let (output, store) = run("1\n2\n3\ncs201\n9\n", &file);

        assert_eq!(store.len(), 2);
        assert!(output.contains("Courses loaded successfully"));
        assert!(output.contains("CS101: Intro to CS\nCS201: Data Structures\n"));
        assert!(output.contains("    CS101: Intro to CS\n"));
        assert!(output.ends_with("Thank you for using the course planner!\nGood bye.\n"));
    }

    #[test]
    fn test_failed_reload_keeps_previous_courses() {
        let file = dataset("CS101,Intro to CS\n");
        let mut session = Session::new(Cursor::new("1\n".to_owned()), Vec::new(), file.path());
        session.run().unwrap();
        assert_eq!(session.store().len(), 1);

        std::fs::write(file.path(), "CS102,Data Structures,CS999\n").unwrap();
        session.input = Cursor::new("1\n3\nCS101\n9\n".to_owned());
        session.run().unwrap();

        let output = String::from_utf8(session.into_output()).unwrap();
        assert!(output.contains("ERROR: prerequisite 'CS999' not found"));
        assert!(output.contains("CS101: Intro to CS\n"));
    }

    #[test]
    fn test_bad_input() {
        let file = dataset("");
        let (output, _) = run("x\n7\n3\nCS999\n", &file);

        assert!(output.contains("Invalid input. Please enter a number from the menu."));
        assert!(output.contains("7 is not a valid option."));
        assert!(output.contains("Course Id CS999 not found."));
        // Running out of input ends the session.
        assert!(output.ends_with("Good bye.\n"));
    }

    #[test]
    fn test_missing_dataset() {
        let file = dataset("");
        let missing = file.path().with_extension("missing");
        let mut session = Session::new(Cursor::new("1\n9\n".to_owned()), Vec::new(), &missing);
        session.run().unwrap();

        let output = String::from_utf8(session.into_output()).unwrap();
        assert!(output.contains("ERROR: unable to open file"));
    }
}
