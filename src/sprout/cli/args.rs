use clap::{Parser, Subcommand, ValueEnum};
use sprout::status::Status;

#[derive(Parser, Debug)]
#[command(name = "sprout", version)]
#[command(about = "Keep track of when your houseplants need water", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a plant, watered now
    #[command(alias = "a")]
    Add {
        /// Name of the plant (e.g. Basil)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Days between waterings (defaults to the configured default-frequency)
        #[arg(short, long, allow_negative_numbers = true)]
        every: Option<i64>,
    },

    /// Mark one or more plants as watered now
    #[command(alias = "w")]
    Water {
        /// Positions in the list (e.g. 1 3) or part of a name
        #[arg(required = true, num_args = 1..)]
        plants: Vec<String>,
    },

    /// Delete one or more plants
    #[command(alias = "rm")]
    Delete {
        /// Positions in the list (e.g. 1 3) or part of a name
        #[arg(required = true, num_args = 1..)]
        plants: Vec<String>,
    },

    /// List plants, newest first
    #[command(alias = "ls")]
    List {
        /// Only show plants with this status
        #[arg(short, long, value_enum)]
        status: Option<StatusArg>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, default-frequency)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Due,
    Today,
    Upcoming,
}

impl From<StatusArg> for Status {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Due => Status::Due,
            StatusArg::Today => Status::Today,
            StatusArg::Upcoming => Status::Upcoming,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_keeps_every_name_word() {
        let cli = Cli::try_parse_from(["sprout", "add", "Peace", "Lily", "--every", "5"]).unwrap();
        match cli.command {
            Some(Commands::Add { name, every }) => {
                assert_eq!(name, vec!["Peace", "Lily"]);
                assert_eq!(every, Some(5));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn add_accepts_negative_frequency_for_clamping() {
        let cli = Cli::try_parse_from(["sprout", "add", "Fern", "-e", "-2"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Add { every: Some(-2), .. })
        ));
    }

    #[test]
    fn list_status_filter() {
        let cli = Cli::try_parse_from(["sprout", "ls", "--status", "due"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::List {
                status: Some(StatusArg::Due)
            })
        ));
    }

    #[test]
    fn water_requires_a_selector() {
        assert!(Cli::try_parse_from(["sprout", "water"]).is_err());
    }

    #[test]
    fn no_command_is_allowed() {
        let cli = Cli::try_parse_from(["sprout"]).unwrap();
        assert!(cli.command.is_none());
    }
}
