//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use csvrow::{Config, NullPolicy};

#[derive(Debug, Parser)]
#[command(
    name = "csvrow",
    version,
    about = "Convert a JSON array of objects to CSV",
    long_about = "Convert a JSON array of objects to CSV.\n\n\
                  Columns come from the keys of the first object, nested objects are\n\
                  flattened in place, and a column named \"-\" is always dropped.\n\
                  Flags take precedence over values loaded with --config."
)]
pub struct Cli {
    /// JSON input file. Reads stdin when omitted or `-`.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Write CSV to a file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// YAML file with `table` and `writer` sections.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keep only these columns (comma separated). Makes --exclude inert.
    #[arg(long, value_name = "COLUMN", value_delimiter = ',')]
    pub only: Vec<String>,

    /// Drop these columns (comma separated).
    #[arg(long, value_name = "COLUMN", value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Replace the header names, one per surviving column.
    #[arg(
        long,
        value_name = "NAME",
        value_delimiter = ',',
        conflicts_with = "no_header"
    )]
    pub header: Vec<String>,

    /// Do not write a header row.
    #[arg(long)]
    pub no_header: bool,

    /// How missing values are rendered.
    #[arg(long, value_enum, value_name = "POLICY", conflicts_with = "null_placeholder")]
    pub null: Option<NullArg>,

    /// Render missing values as this text.
    #[arg(long, value_name = "TEXT")]
    pub null_placeholder: Option<String>,

    /// Field delimiter (a single ASCII character, or `\t`).
    #[arg(short, long, value_name = "CHAR", value_parser = parse_delimiter)]
    pub delimiter: Option<char>,

    /// Terminate records with CRLF.
    #[arg(long)]
    pub crlf: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NullArg {
    /// The zero value of the column's type.
    Zero,
    /// An empty cell.
    Empty,
}

impl From<NullArg> for NullPolicy {
    fn from(arg: NullArg) -> Self {
        match arg {
            NullArg::Zero => NullPolicy::ZeroValue,
            NullArg::Empty => NullPolicy::Empty,
        }
    }
}

impl Cli {
    /// Layers the command-line flags over `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if !self.only.is_empty() {
            config.table.whitelist = self.only.clone();
        }
        if !self.exclude.is_empty() {
            config.table.blacklist = self.exclude.clone();
        }
        if self.no_header {
            config.table = config.table.omit_header();
        } else if !self.header.is_empty() {
            config.table.header = self.header.clone();
        }
        if let Some(text) = &self.null_placeholder {
            config.table.nulls = NullPolicy::Placeholder(text.clone());
        } else if let Some(null) = self.null {
            config.table.nulls = null.into();
        }
        if let Some(delimiter) = self.delimiter {
            config.writer.delimiter = delimiter;
        }
        if self.crlf {
            config.writer.crlf = true;
        }
        config
    }

    /// The input path, or `None` for stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|path| path.as_os_str() != "-")
    }
}

fn parse_delimiter(s: &str) -> Result<char, String> {
    if s == "\\t" || s.eq_ignore_ascii_case("tab") {
        return Ok('\t');
    }
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("expected a single character, got {s:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("csvrow").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_flags_keep_config() {
        let config = Config::from_yaml("table:\n  blacklist: [id]\n").unwrap();
        let applied = parse(&[]).apply(config.clone());
        assert_eq!(applied, config);
    }

    #[test]
    fn list_flags_split_on_commas() {
        let cli = parse(&["--only", "Name,Age", "--exclude", "id"]);
        assert_eq!(cli.only, vec!["Name", "Age"]);
        assert_eq!(cli.exclude, vec!["id"]);
    }

    #[test]
    fn flags_override_config() {
        let config = Config::from_yaml(
            "table:\n  whitelist: [a]\n  nulls: empty\nwriter:\n  delimiter: \";\"\n",
        )
        .unwrap();
        let applied = parse(&["--only", "b", "--null-placeholder", "N/A", "-d", "|"]).apply(config);
        assert_eq!(applied.table.whitelist, vec!["b"]);
        assert_eq!(applied.table.nulls, NullPolicy::Placeholder("N/A".into()));
        assert_eq!(applied.writer.delimiter, '|');
    }

    #[test]
    fn no_header_sets_marker() {
        let applied = parse(&["--no-header"]).apply(Config::default());
        assert!(applied.table.header_omitted());
    }

    #[test]
    fn header_conflicts_with_no_header() {
        let result = Cli::try_parse_from(["csvrow", "--header", "A", "--no-header"]);
        assert!(result.is_err());
    }

    #[test]
    fn null_policy_flag() {
        let applied = parse(&["--null", "empty"]).apply(Config::default());
        assert_eq!(applied.table.nulls, NullPolicy::Empty);
    }

    #[test]
    fn tab_delimiter_spellings() {
        assert_eq!(parse_delimiter("\\t"), Ok('\t'));
        assert_eq!(parse_delimiter("tab"), Ok('\t'));
        assert_eq!(parse_delimiter(";"), Ok(';'));
        assert!(parse_delimiter(";;").is_err());
        assert!(parse_delimiter("").is_err());
    }

    #[test]
    fn dash_input_means_stdin() {
        assert!(parse(&["-"]).input_path().is_none());
        assert!(parse(&[]).input_path().is_none());
        assert!(parse(&["data.json"]).input_path().is_some());
    }
}
