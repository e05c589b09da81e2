use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "habitz", bin_name = "habitz", version)]
#[command(about = "Track daily habits from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Habits data file (overrides HABITZ_DATA_FILE and the config file)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data_file: Option<PathBuf>,

    /// Config file to read instead of the platform default
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new habit
    Add {
        /// Habit name; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Short name to reference the habit by
        #[arg(short, long)]
        short: Option<String>,
    },

    /// Mark habits as done
    Done {
        /// Indexes or short names
        #[arg(required = true, num_args = 1..)]
        refs: Vec<String>,

        /// Date to mark (YYYY-MM-DD, today, yesterday); defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Remove a date from a habit's history
    Undo {
        /// Index or short name
        reference: String,

        /// Date to remove (YYYY-MM-DD, today, yesterday); defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Rename a habit or change its short name
    Edit {
        /// Index or short name
        reference: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New short name
        #[arg(short, long)]
        short: Option<String>,
    },

    /// Delete a habit
    #[command(alias = "rm")]
    Delete {
        /// Index or short name
        reference: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List all habits (default)
    #[command(alias = "ls")]
    List,

    /// Show one habit with its streaks
    Show {
        /// Index or short name
        reference: String,
    },

    /// Write all habits to a JSON file
    Export {
        #[arg(short, long, value_name = "PATH")]
        file: PathBuf,
    },

    /// Append habits from a JSON file
    Import {
        #[arg(short, long, value_name = "PATH")]
        file: PathBuf,
    },

    /// Show the effective configuration
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("habitz").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_subcommand_means_list() {
        assert!(parse(&[]).command.is_none());
    }

    #[test]
    fn add_collects_name_words() {
        match parse(&["add", "Test", "Habit", "--short", "th"]).command {
            Some(Commands::Add { name, short }) => {
                assert_eq!(name, vec!["Test", "Habit"]);
                assert_eq!(short.as_deref(), Some("th"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn done_takes_many_refs_and_a_date() {
        match parse(&["done", "1", "w", "--date", "2023-01-01"]).command {
            Some(Commands::Done { refs, date }) => {
                assert_eq!(refs, vec!["1", "w"]);
                assert_eq!(date.as_deref(), Some("2023-01-01"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn rm_is_delete_and_global_flags_follow_subcommand() {
        let cli = parse(&["rm", "2", "-y", "--data-file", "/tmp/h.json"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Delete { ref reference, yes: true }) if reference == "2"
        ));
        assert_eq!(cli.data_file, Some(PathBuf::from("/tmp/h.json")));
    }

    #[test]
    fn add_requires_a_name() {
        assert!(Cli::try_parse_from(["habitz", "add"]).is_err());
    }
}
