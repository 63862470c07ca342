// ⌨️ Command line arguments

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::logging::LogFormat;

#[derive(Debug, Parser)]
#[command(
    name = "unimanage",
    version,
    about = "UniManage - university administration dashboard",
    long_about = "Browse, search and add students, faculty and courses.\n\n\
                  Runs the terminal dashboard by default; `summary` and `list` \
                  print the same data without taking over the terminal."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// More logging (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log output format (overrides the config file).
    #[arg(long = "log-format", value_enum, global = true)]
    pub log_format: Option<LogFormat>,

    /// Config file (default: ./unimanage.toml or $UNIMANAGE_CONFIG).
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the terminal dashboard (default).
    Tui,

    /// Print the stat cards of every page.
    Summary,

    /// Print one page's records, optionally filtered.
    List(ListArgs),
}

#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Which page to list.
    #[arg(value_enum)]
    pub entity: EntityKind,

    /// Case-insensitive search, same fields as the dashboard search box.
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntityKind {
    Students,
    Faculty,
    Courses,
}

impl Cli {
    /// True when the run will take over the terminal
    pub fn runs_tui(&self) -> bool {
        matches!(self.command, None | Some(Command::Tui))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_tui() {
        let cli = Cli::try_parse_from(["unimanage"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.runs_tui());
    }

    #[test]
    fn test_list_args() {
        let cli = Cli::try_parse_from([
            "unimanage", "list", "courses", "--query", "psych", "--json", "-vv",
        ])
        .unwrap();

        assert!(!cli.runs_tui());
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::List(args)) => {
                assert_eq!(args.entity, EntityKind::Courses);
                assert_eq!(args.query, "psych");
                assert!(args.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_log_format_flag() {
        let cli = Cli::try_parse_from(["unimanage", "summary", "--log-format", "json"]).unwrap();
        assert_eq!(cli.log_format, Some(LogFormat::Json));
    }

    #[test]
    fn test_unknown_entity_rejected() {
        assert!(Cli::try_parse_from(["unimanage", "list", "alumni"]).is_err());
    }
}
