//! Row projection: from a record to one row of cell strings.

use std::mem;

use crate::options::NullPolicy;
use crate::resolve::Layout;
use crate::schema::FormatKind;
use crate::traits::Record;
use crate::value::Value;

/// Canonical timestamp rendering: fixed, 24-hour, zero-padded.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One output row, in column order.
pub type Row = Vec<String>;

/// Formats one value according to its column's format kind.
///
/// Nullable kinds have already been unwrapped by the time a value exists;
/// an empty wrapper arrives as [`Value::Null`] and goes through `nulls`.
pub fn format_cell(value: &Value<'_>, kind: FormatKind, nulls: &NullPolicy) -> String {
    match value {
        Value::Null { zero } => nulls.render(zero),
        Value::Timestamp(ts) if kind.is_timestamp() => ts.format(TIMESTAMP_FORMAT).to_string(),
        other => other.to_string(),
    }
}

impl Layout {
    /// Projects a record onto this layout.
    pub fn project<R: Record>(&self, record: &R, nulls: &NullPolicy) -> Row {
        self.project_values(&record.values(), nulls)
    }

    /// Returns `true` when `values` has exactly one entry per slot.
    ///
    /// Records of a different shape than the one the layout was resolved
    /// from still project, but their cells may land in the wrong columns.
    pub fn fits(&self, values: &[Value<'_>]) -> bool {
        values.len() == self.slot_kinds.len()
    }

    /// Projects pre-collected slot values onto this layout.
    ///
    /// Every slot is formatted, then the surviving columns are read out in
    /// order. Slots missing from `values` render as empty cells.
    pub fn project_values(&self, values: &[Value<'_>], nulls: &NullPolicy) -> Row {
        let mut cells: Vec<String> = values
            .iter()
            .enumerate()
            .map(|(slot, value)| {
                let kind = self.slot_kinds.get(slot).copied().unwrap_or_default();
                format_cell(value, kind, nulls)
            })
            .collect();

        self.columns
            .iter()
            .map(|column| {
                cells
                    .get_mut(column.slot)
                    .map(mem::take)
                    .unwrap_or_default()
            })
            .collect()
    }
}
