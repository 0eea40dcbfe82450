//! Conversion and writer options.
//!
//! [`TableOptions`] replaces an open-ended modifier list with named fields:
//! the inclusion policy, the header override, and the null policy.
//! [`WriterOptions`] holds the two transport settings that are passed
//! through to the CSV writer untouched. Both deserialize from YAML.
//!
//! ```
//! use csvrow::{NullPolicy, TableOptions};
//!
//! let options = TableOptions::new()
//!     .blacklist(["password"])
//!     .header(["User", "Email"])
//!     .nulls(NullPolicy::Empty);
//!
//! let from_yaml = TableOptions::from_yaml(
//!     "blacklist: [password]\nheader: [User, Email]\nnulls: empty\n",
//! )
//! .unwrap();
//! assert_eq!(options, from_yaml);
//! ```

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::schema::EXCLUDE_MARKER;

/// How a nullable wrapper holding no value is rendered.
///
/// In YAML: `zero_value`, `empty`, or `{placeholder: "N/A"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "NullPolicyRaw")]
pub enum NullPolicy {
    /// Render the inner type's zero value (`0`, `false`, empty text, the
    /// epoch for timestamps).
    #[default]
    ZeroValue,
    /// Render an empty cell.
    Empty,
    /// Render a fixed placeholder.
    Placeholder(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NullPolicyRaw {
    Placeholder { placeholder: String },
    Named(String),
}

impl TryFrom<NullPolicyRaw> for NullPolicy {
    type Error = String;

    fn try_from(raw: NullPolicyRaw) -> std::result::Result<Self, Self::Error> {
        match raw {
            NullPolicyRaw::Placeholder { placeholder } => Ok(NullPolicy::Placeholder(placeholder)),
            NullPolicyRaw::Named(s) if s == "zero_value" => Ok(NullPolicy::ZeroValue),
            NullPolicyRaw::Named(s) if s == "empty" => Ok(NullPolicy::Empty),
            NullPolicyRaw::Named(s) => Err(format!(
                "Invalid null policy: '{}'. Expected 'zero_value', 'empty' or {{placeholder: <text>}}.",
                s
            )),
        }
    }
}

impl NullPolicy {
    /// Renders a missing value whose zero value is `zero`.
    pub fn render(&self, zero: &str) -> String {
        match self {
            NullPolicy::ZeroValue => zero.to_string(),
            NullPolicy::Empty => String::new(),
            NullPolicy::Placeholder(text) => text.clone(),
        }
    }
}

/// Options controlling layout resolution and row projection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableOptions {
    /// Column names to keep. When non-empty, every other column is dropped
    /// and `blacklist` is ignored.
    pub whitelist: Vec<String>,
    /// Column names to drop.
    pub blacklist: Vec<String>,
    /// Header names replacing the resolved ones, in column order. A single
    /// `"-"` suppresses the header row.
    pub header: Vec<String>,
    /// Rendering of empty nullable values.
    pub nulls: NullPolicy,
}

impl TableOptions {
    /// Creates options that keep every column and emit the resolved header.
    pub fn new() -> Self {
        TableOptions::default()
    }

    /// Parses options from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Keeps only the named columns.
    pub fn whitelist<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.whitelist = names.into_iter().map(Into::into).collect();
        self
    }

    /// Drops the named columns. Ignored when a whitelist is set.
    pub fn blacklist<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blacklist = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the header names positionally.
    pub fn header<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header = names.into_iter().map(Into::into).collect();
        self
    }

    /// Suppresses the header row.
    pub fn omit_header(mut self) -> Self {
        self.header = vec![EXCLUDE_MARKER.to_string()];
        self
    }

    /// Sets the null policy.
    pub fn nulls(mut self, policy: NullPolicy) -> Self {
        self.nulls = policy;
        self
    }

    /// Returns `true` when the header row is suppressed.
    pub fn header_omitted(&self) -> bool {
        matches!(self.header.as_slice(), [only] if only == EXCLUDE_MARKER)
    }

    /// Applies the inclusion policy to a resolved column name.
    pub fn admits(&self, name: &str) -> bool {
        if !self.whitelist.is_empty() {
            return contains_trimmed(&self.whitelist, name);
        }
        !contains_trimmed(&self.blacklist, name)
    }
}

fn contains_trimmed(list: &[String], name: &str) -> bool {
    list.iter().any(|entry| entry.trim() == name)
}

/// Transport settings handed to the CSV writer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WriterOptions {
    /// Field delimiter. Must be ASCII.
    pub delimiter: char,
    /// Terminate records with `\r\n` instead of `\n`.
    pub crlf: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        WriterOptions {
            delimiter: ',',
            crlf: false,
        }
    }
}

impl WriterOptions {
    pub fn new() -> Self {
        WriterOptions::default()
    }

    /// Parses writer options from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn crlf(mut self, crlf: bool) -> Self {
        self.crlf = crlf;
        self
    }

    /// The delimiter as the single byte the CSV writer expects.
    pub fn delimiter_byte(&self) -> Result<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(Error::InvalidDelimiter(self.delimiter))
        }
    }
}

/// Combined options file: a `table` section and a `writer` section.
///
/// ```yaml
/// table:
///   whitelist: [Name, Age]
///   nulls:
///     placeholder: "N/A"
/// writer:
///   delimiter: ";"
///   crlf: true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub table: TableOptions,
    pub writer: WriterOptions,
}

impl Config {
    /// Parses a combined options file.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
