//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

use crate::core::page::Page;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  blowup-pages                                  Browse the titles page
  blowup-pages browse tricks                    Browse the tricks page
  blowup-pages browse titles --data my.json     Browse a custom database
  blowup-pages render tricks -o tricks.html     Export the tricks page as HTML
  blowup-pages route --host titles.blowup.digital /about
                                                Show the rewritten path
  blowup-pages check data/titles.json           Validate a database file
  blowup-pages config                           Show data paths and hosts
  blowup-pages completions bash                 Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Browse and export the titles and tricks classification pages",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse a page in the terminal (default: titles)
    Browse {
        /// Page to open: titles or tricks
        page: Option<Page>,
        /// Database file to use instead of the configured/embedded data
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Export a page as a static HTML document
    Render {
        /// Page to render: titles or tricks
        page: Page,
        /// Database file to use instead of the configured/embedded data
        #[arg(long)]
        data: Option<PathBuf>,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Open every topic and subtype in the exported page
        #[arg(long)]
        expand_all: bool,
    },
    /// Print the path a request is rewritten to for a virtual host
    Route {
        /// Request host (port is ignored)
        #[arg(long)]
        host: String,
        /// Request path
        #[arg(default_value = "/")]
        path: String,
    },
    /// Validate a database file and print its counts
    Check {
        /// Database file (JSON)
        file: PathBuf,
    },
    /// Show data paths, log file, and virtual hosts
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }

    /// True when the terminal browser will own the screen.
    pub fn is_browse(&self) -> bool {
        matches!(self.command, None | Some(Commands::Browse { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_browses() {
        let args = Args::try_parse_from(["blowup-pages"]).expect("parse");
        assert!(args.is_browse());
        assert_eq!(args.log_level(), "warn");
    }

    #[test]
    fn verbosity_flags() {
        let args = Args::try_parse_from(["blowup-pages", "-vv", "config"]).expect("parse");
        assert_eq!(args.log_level(), "debug");
        assert!(!args.is_browse());
        let args = Args::try_parse_from(["blowup-pages", "check", "x.json", "-q"]).expect("parse");
        assert_eq!(args.log_level(), "error");
    }

    #[test]
    fn render_parses_page_and_flags() {
        let args = Args::try_parse_from([
            "blowup-pages",
            "render",
            "tricks",
            "-o",
            "out.html",
            "--expand-all",
        ])
        .expect("parse");
        match args.command {
            Some(Commands::Render {
                page,
                output,
                expand_all,
                data,
            }) => {
                assert_eq!(page, Page::Tricks);
                assert_eq!(output, Some(PathBuf::from("out.html")));
                assert!(expand_all);
                assert!(data.is_none());
            }
            _ => panic!("expected Render"),
        }
    }

    #[test]
    fn unknown_page_is_rejected() {
        assert!(Args::try_parse_from(["blowup-pages", "render", "nope"]).is_err());
    }

    #[test]
    fn route_path_defaults_to_root() {
        let args =
            Args::try_parse_from(["blowup-pages", "route", "--host", "h"]).expect("parse");
        match args.command {
            Some(Commands::Route { host, path }) => {
                assert_eq!(host, "h");
                assert_eq!(path, "/");
            }
            _ => panic!("expected Route"),
        }
    }
}
