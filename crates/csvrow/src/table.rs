//! Collection-level conversion.

use tracing::{trace, warn};

use crate::error::Result;
use crate::options::TableOptions;
use crate::project::Row;
use crate::resolve::Layout;
use crate::traits::Record;
use crate::value::Value;

/// Rows of cell strings, header row first when present.
pub type Matrix = Vec<Row>;

/// Converts a collection of records into a string matrix.
///
/// The layout is resolved once from the record type; an empty collection
/// yields an empty matrix with no header. When every column is filtered out,
/// the result holds at most the (empty) header row and no data rows.
///
/// ```
/// use csvrow::{to_table, Record, TableOptions};
///
/// #[derive(Record)]
/// struct Person {
///     #[csv(rename = "Name")]
///     name: String,
///     #[csv(rename = "Age")]
///     age: u32,
/// }
///
/// let people = vec![
///     Person { name: "Ann".into(), age: 30 },
///     Person { name: "Bo".into(), age: 25 },
/// ];
///
/// let table = to_table(&people, &TableOptions::new().whitelist(["Age"])).unwrap();
/// assert_eq!(table, vec![vec!["Age"], vec!["30"], vec!["25"]]);
/// ```
pub fn to_table<R: Record>(records: &[R], options: &TableOptions) -> Result<Matrix> {
    if records.is_empty() {
        return Ok(Matrix::new());
    }
    let layout = Layout::for_record::<R>(options)?;
    Ok(assemble(&layout, options, records.iter().map(R::values)))
}

/// Builds the matrix from a resolved layout and per-record slot values.
pub(crate) fn assemble<'a, I>(layout: &Layout, options: &TableOptions, records: I) -> Matrix
where
    I: ExactSizeIterator<Item = Vec<Value<'a>>>,
{
    let mut matrix = Matrix::with_capacity(records.len() + 1);
    if !layout.header_omitted() {
        matrix.push(layout.headers());
    }
    if layout.is_empty() {
        trace!("no surviving columns, skipping projection");
        return matrix;
    }

    for (index, values) in records.enumerate() {
        if !layout.fits(&values) {
            warn!(
                record = index,
                expected = layout.slot_count(),
                received = values.len(),
                "record shape differs from the first record, cells may be misaligned"
            );
        }
        matrix.push(layout.project_values(&values, &options.nulls));
    }
    trace!(rows = matrix.len(), "projected table");
    matrix
}
