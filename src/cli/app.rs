//! Main CLI application

use crate::actions::{self, style, LineStyle};
use crate::cli::validate::{self, DEFAULT_FILE};
use crate::error::Result;
use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io;

/// Default pacing delay in milliseconds per character
pub const DEFAULT_DELAY: u64 = 42;

/// Default foreground color name
pub const DEFAULT_FGCOLOR: &str = "white";

/// CLI application
pub struct App {
    /// The clap command
    command: Command,
}

impl App {
    /// Create a new app with the full command tree
    pub fn new() -> Self {
        App {
            command: build_command(),
        }
    }

    /// Run the application with command line arguments
    pub fn run(mut self) -> Result<()> {
        let matches = self.command.clone().get_matches();

        if matches.subcommand().is_none() {
            // No subcommand specified, show help
            self.command.print_help().unwrap();
            println!();
            return Ok(());
        }

        dispatch(&matches)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the clap command tree
fn build_command() -> Command {
    Command::new("quotefile")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Keep a plain-text file of quotes")
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help(format!(
                    "Path to the quotes file (defaults to {})",
                    DEFAULT_FILE
                ))
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print file contents and errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("quotes")
                .about("Work with a file that contains quotes")
                .subcommand_required(true)
                .subcommand(
                    Command::new("read")
                        .about("Read and display the file")
                        .arg(
                            Arg::new("delay")
                                .long("delay")
                                .value_name("MS_PER_CHAR")
                                .help("Delay between lines, specified as milliseconds per character in a line")
                                .value_parser(clap::value_parser!(u64))
                                .default_value(DEFAULT_DELAY.to_string()),
                        )
                        .arg(
                            Arg::new("fgcolor")
                                .long("fgcolor")
                                .value_name("COLOR")
                                .help("Foreground color of text displayed on the console")
                                .value_parser(PossibleValuesParser::new(style::PALETTE))
                                .default_value(DEFAULT_FGCOLOR),
                        )
                        .arg(
                            Arg::new("light-mode")
                                .long("light-mode")
                                .help("Use a white background instead of the default black")
                                .action(ArgAction::SetTrue),
                        ),
                )
                .subcommand(
                    Command::new("delete")
                        .about("Delete lines from the file")
                        .arg(
                            Arg::new("search-terms")
                                .long("search-terms")
                                .value_name("TERM")
                                .help("Strings to search for when deleting entries")
                                .required(true)
                                .num_args(1..)
                                .action(ArgAction::Append),
                        ),
                )
                .subcommand(
                    Command::new("add")
                        .about("Add an entry to the file")
                        .visible_alias("insert")
                        .arg(
                            Arg::new("quote")
                                .value_name("QUOTE")
                                .help("Text of quote")
                                .required(true),
                        )
                        .arg(
                            Arg::new("byline")
                                .value_name("BYLINE")
                                .help("Byline of quote")
                                .required(true),
                        ),
                ),
        )
}

/// Dispatch a parsed invocation to exactly one action
///
/// Validation, including the file-existence check for explicit `--file`
/// values, completes before any action runs.
fn dispatch(matches: &ArgMatches) -> Result<()> {
    let (leaf_name, leaf) = match matches.subcommand() {
        Some(("quotes", quotes_matches)) => match quotes_matches.subcommand() {
            Some((name, sub_matches)) => (name, sub_matches),
            None => return Ok(()),
        },
        _ => return Ok(()),
    };

    // Global options propagate down to the leaf matches
    let quiet = leaf.get_flag("quiet");
    let file = validate::resolve_file(leaf.get_one::<String>("file").map(String::as_str))?;

    match leaf_name {
        "read" => {
            let delay = leaf.get_one::<u64>("delay").copied().unwrap_or(DEFAULT_DELAY);
            let color_name = leaf
                .get_one::<String>("fgcolor")
                .map(String::as_str)
                .unwrap_or(DEFAULT_FGCOLOR);
            let fg = validate::parse_fgcolor(color_name)?;
            let line_style = LineStyle::new(fg, leaf.get_flag("light-mode"));

            let stdout = io::stdout();
            actions::read_file(&file, delay, &line_style, &mut stdout.lock())
        }
        "delete" => {
            let terms: Vec<String> = leaf
                .get_many::<String>("search-terms")
                .map(|values| values.cloned().collect())
                .unwrap_or_default();

            if !quiet {
                eprintln!("Deleting from file");
            }
            actions::delete_from_file(&file, &terms)
        }
        "add" => {
            let quote = leaf.get_one::<String>("quote").cloned().unwrap_or_default();
            let byline = leaf.get_one::<String>("byline").cloned().unwrap_or_default();

            if !quiet {
                eprintln!("Adding to file");
            }
            actions::add_to_file(&file, &quote, &byline)
        }
        _ => Ok(()),
    }
}

/// Run the CLI application with the process arguments
pub fn run() -> Result<()> {
    App::new().run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{QuoteError, ValidationError};
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> ArgMatches {
        build_command().try_get_matches_from(args).unwrap()
    }

    #[test]
    fn test_read_defaults() {
        let matches = parse(&["quotefile", "quotes", "read"]);
        let (_, quotes) = matches.subcommand().unwrap();
        let (name, read) = quotes.subcommand().unwrap();

        assert_eq!(name, "read");
        assert_eq!(read.get_one::<u64>("delay"), Some(&42));
        assert_eq!(
            read.get_one::<String>("fgcolor").map(String::as_str),
            Some("white")
        );
        assert!(!read.get_flag("light-mode"));
    }

    #[test]
    fn test_read_explicit_options() {
        let matches = parse(&[
            "quotefile",
            "quotes",
            "read",
            "--delay",
            "7",
            "--fgcolor",
            "bright-cyan",
            "--light-mode",
        ]);
        let (_, quotes) = matches.subcommand().unwrap();
        let (_, read) = quotes.subcommand().unwrap();

        assert_eq!(read.get_one::<u64>("delay"), Some(&7));
        assert_eq!(
            read.get_one::<String>("fgcolor").map(String::as_str),
            Some("bright-cyan")
        );
        assert!(read.get_flag("light-mode"));
    }

    #[test]
    fn test_fgcolor_outside_palette_fails_parsing() {
        let result = build_command().try_get_matches_from([
            "quotefile", "quotes", "read", "--fgcolor", "mauve",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_numeric_delay_fails_parsing() {
        let result = build_command()
            .try_get_matches_from(["quotefile", "quotes", "read", "--delay", "fast"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_delete_collects_multiple_terms_per_token() {
        let matches = parse(&[
            "quotefile",
            "quotes",
            "delete",
            "--search-terms",
            "hello",
            "foo",
        ]);
        let (_, quotes) = matches.subcommand().unwrap();
        let (_, delete) = quotes.subcommand().unwrap();

        let terms: Vec<&str> = delete
            .get_many::<String>("search-terms")
            .unwrap()
            .map(String::as_str)
            .collect();
        assert_eq!(terms, ["hello", "foo"]);
    }

    #[test]
    fn test_delete_requires_search_terms() {
        let result = build_command().try_get_matches_from(["quotefile", "quotes", "delete"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_insert_is_an_alias_for_add() {
        let matches = parse(&["quotefile", "quotes", "insert", "a quote", "a byline"]);
        let (_, quotes) = matches.subcommand().unwrap();
        let (name, add) = quotes.subcommand().unwrap();

        assert_eq!(name, "add");
        assert_eq!(
            add.get_one::<String>("quote").map(String::as_str),
            Some("a quote")
        );
        assert_eq!(
            add.get_one::<String>("byline").map(String::as_str),
            Some("a byline")
        );
    }

    #[test]
    fn test_add_requires_both_positionals() {
        let result =
            build_command().try_get_matches_from(["quotefile", "quotes", "add", "only quote"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_bare_quotes_fails_parsing() {
        let result = build_command().try_get_matches_from(["quotefile", "quotes"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_subcommand_fails_parsing() {
        let result = build_command().try_get_matches_from(["quotefile", "quotes", "publish"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_dispatch_add_to_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("quotes.txt");
        fs::write(&file, "seed\n").unwrap();

        let matches = parse(&[
            "quotefile",
            "--file",
            file.to_str().unwrap(),
            "quotes",
            "add",
            "new quote",
            "someone",
        ]);
        dispatch(&matches).unwrap();

        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "seed\n\n\nnew quote\n\n-someone\n"
        );
    }

    #[test]
    fn test_dispatch_delete_filters_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("quotes.txt");
        fs::write(&file, "hello world\nfoo bar\nhello foo\n").unwrap();

        let matches = parse(&[
            "quotefile",
            "--quiet",
            "--file",
            file.to_str().unwrap(),
            "quotes",
            "delete",
            "--search-terms",
            "hello",
        ]);
        dispatch(&matches).unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "foo bar\n");
    }

    #[test]
    fn test_dispatch_rejects_missing_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("missing.txt");

        let matches = parse(&[
            "quotefile",
            "--file",
            file.to_str().unwrap(),
            "quotes",
            "add",
            "quote",
            "byline",
        ]);
        let result = dispatch(&matches);

        assert!(matches!(
            result,
            Err(QuoteError::Validation(ValidationError::FileNotFound(_)))
        ));
        // Validation failed before the action, so nothing was created
        assert!(!file.exists());
    }

    #[test]
    fn test_global_file_accepted_after_subcommand() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("quotes.txt");
        fs::write(&file, "drop me\nkeep me\n").unwrap();

        let matches = parse(&[
            "quotefile",
            "quotes",
            "delete",
            "--search-terms",
            "drop",
            "--file",
            file.to_str().unwrap(),
            "--quiet",
        ]);
        dispatch(&matches).unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "keep me\n");
    }
}
