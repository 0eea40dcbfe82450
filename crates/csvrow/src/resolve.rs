//! Schema resolution: from a record shape to a column layout.
//!
//! The resolver walks a [`Schema`] depth-first, assigning every leaf the next
//! slot index whether or not it survives filtering. Embedded records are
//! walked in place, so their columns appear at the embedding position and
//! consume exactly as many slots as they have leaves. The row projector
//! builds its values in the same order, which keeps the two passes aligned.

use tracing::debug;

use crate::error::{Error, Result};
use crate::options::TableOptions;
use crate::schema::{FieldSchema, FormatKind, Schema};
use crate::traits::Record;

/// One surviving column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Flattened position of the field across the whole record.
    pub slot: usize,
    /// Header name.
    pub header: String,
    /// Formatting rule.
    pub kind: FormatKind,
}

/// Resolved column layout for one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub(crate) columns: Vec<Column>,
    /// Format kind of every slot, surviving or not.
    pub(crate) slot_kinds: Vec<FormatKind>,
    pub(crate) header_omitted: bool,
}

impl Layout {
    /// Resolves the layout of a record type.
    pub fn for_record<R: Record>(options: &TableOptions) -> Result<Self> {
        resolve(&R::schema(), options)
    }

    /// Surviving columns in output order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of surviving columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` when every column was filtered out.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Total slots of the resolved shape.
    pub fn slot_count(&self) -> usize {
        self.slot_kinds.len()
    }

    /// Returns `true` when no header row is emitted.
    pub fn header_omitted(&self) -> bool {
        self.header_omitted
    }

    /// Header names in column order.
    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.header.clone()).collect()
    }
}

/// Resolves a column layout from a record shape.
///
/// Fails with [`Error::HeaderCountMismatch`] when a header override is given
/// and its length differs from the number of surviving columns. An override
/// of exactly `["-"]` suppresses the header row instead.
pub fn resolve(schema: &Schema, options: &TableOptions) -> Result<Layout> {
    let mut layout = Layout {
        columns: Vec::new(),
        slot_kinds: Vec::with_capacity(schema.slot_count()),
        header_omitted: false,
    };
    walk(schema, options, &mut layout);

    if options.header_omitted() {
        layout.header_omitted = true;
    } else if !options.header.is_empty() {
        if options.header.len() != layout.columns.len() {
            return Err(Error::HeaderCountMismatch {
                expected: layout.columns.len(),
                received: options.header.len(),
            });
        }
        for (column, header) in layout.columns.iter_mut().zip(&options.header) {
            column.header.clone_from(header);
        }
    }

    debug!(
        slots = layout.slot_count(),
        columns = layout.len(),
        header_omitted = layout.header_omitted,
        "resolved column layout"
    );
    Ok(layout)
}

fn walk(schema: &Schema, options: &TableOptions, layout: &mut Layout) {
    for field in schema.fields() {
        let leaf = match field {
            FieldSchema::Embedded(nested) => {
                walk(nested, options, layout);
                continue;
            }
            FieldSchema::Leaf(leaf) => leaf,
        };

        let slot = layout.slot_kinds.len();
        layout.slot_kinds.push(leaf.kind);

        if leaf.is_excluded() {
            continue;
        }
        let name = leaf.column_name();
        if !options.admits(name) {
            continue;
        }
        layout.columns.push(Column {
            slot,
            header: name.to_string(),
            kind: leaf.kind,
        });
    }
}
