use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rollbook", version)]
#[command(about = "Student records kept in a single JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the data file (overrides ROLLBOOK_HOME)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the data file if needed and report what was found
    Init,

    /// Import students into a class
    #[command(alias = "i")]
    Import {
        /// Class info, e.g. "2024级1班" (falls back to the default_class setting)
        #[arg(short, long)]
        class: Option<String>,

        /// Read names from a file, one per line
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Student names
        names: Vec<String>,
    },

    /// List students
    #[command(alias = "ls")]
    List {
        /// Only students in this grade (e.g. "2024级")
        #[arg(long)]
        grade: Option<String>,

        /// Only students in this class (e.g. "1班")
        #[arg(long)]
        class: Option<String>,

        /// Print the students as JSON
        #[arg(long)]
        json: bool,
    },

    /// Correct a student's name, class or grade
    Edit {
        /// Student id
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        class: Option<String>,

        #[arg(long)]
        grade: Option<String>,
    },

    /// Show where the data lives and what it holds
    Status,

    /// Print the path of the data file
    Path,

    /// Get or set configuration values
    Config {
        /// Configuration key (data_file, default_class)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}
