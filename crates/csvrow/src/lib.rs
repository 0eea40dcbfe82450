//! csvrow - flatten record collections into CSV rows.
//!
//! csvrow derives a column layout from the *shape* of a record and applies it
//! to every record of a collection, producing a matrix of strings ready for a
//! CSV writer. It supports:
//!
//! - Column names from field names, with per-field renames
//! - Embedded records spliced into the parent's columns
//! - Whitelist / blacklist column filtering
//! - Header overrides, or no header at all
//! - Type-aware cells: canonical timestamps, nullable wrappers
//!
//! # Quick Start
//!
//! ```rust
//! use csvrow::{to_table, Record, TableOptions};
//!
//! #[derive(Record)]
//! struct Person {
//!     #[csv(rename = "Name")]
//!     name: String,
//!     #[csv(rename = "Age")]
//!     age: u32,
//! }
//!
//! let people = vec![
//!     Person { name: "Ann".into(), age: 30 },
//!     Person { name: "Bo".into(), age: 25 },
//! ];
//!
//! let table = to_table(&people, &TableOptions::new()).unwrap();
//! assert_eq!(table, vec![
//!     vec!["Name", "Age"],
//!     vec!["Ann", "30"],
//!     vec!["Bo", "25"],
//! ]);
//! ```
//!
//! # Layout Rules
//!
//! Fields are enumerated depth-first in declaration order; every field gets
//! a slot whether or not it survives filtering. For each field:
//!
//! ```text
//! name     = trimmed rename if non-empty, else the field name
//! excluded = name == "-"
//! kept     = !excluded ∧ (whitelist non-empty ? name ∈ whitelist : name ∉ blacklist)
//! ```
//!
//! A header override of exactly `["-"]` drops the header row; any other
//! override must name every surviving column.
//!
//! # Cell Formatting
//!
//! | Field type | Cell |
//! |------------|------|
//! | `NaiveDateTime`, `DateTime<Tz>` | `YYYY-MM-DD HH:MM:SS` |
//! | `Option<T>` | `T`'s cell, or the [`NullPolicy`] rendering when `None` |
//! | everything else | `Display` |

mod error;
mod json;
mod options;
mod project;
mod resolve;
mod schema;
mod table;
mod traits;
mod value;
mod writer;

// Re-export public API
pub use error::{Error, Result};
pub use json::{kind_name, object_values, to_table_json, to_table_serialized};
pub use options::{Config, NullPolicy, TableOptions, WriterOptions};
pub use project::{format_cell, Row, TIMESTAMP_FORMAT};
pub use resolve::{resolve, Column, Layout};
pub use schema::{FieldSchema, FormatKind, Leaf, Schema, EXCLUDE_MARKER};
pub use table::{to_table, Matrix};
pub use traits::{Field, Record, Scalar};
pub use value::Value;
pub use writer::{to_csv_string, write_json_to, write_matrix, write_to};

pub use csvrow_macros::Record;
