//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Interactive course planner: load a course catalog and look up courses and their prerequisites
#[derive(Parser, Debug)]
#[command(name = "course-catalog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Comma separated dataset: number, name, prerequisites...
    #[arg(
        value_name = "DATASET",
        env = "COURSE_CATALOG_DATASET",
        default_value = "courses.csv",
        value_hint = ValueHint::FilePath
    )]
    pub dataset: PathBuf,

    /// Load the dataset before showing the menu
    #[arg(short, long)]
    pub load: bool,

    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,
}
