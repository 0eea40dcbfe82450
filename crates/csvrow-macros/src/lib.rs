//! Proc macros for csvrow.
//!
//! # Available Macros
//!
//! - [`Record`] - Generate the column schema and slot values of a struct
//!
//! The generated code refers to `::csvrow`, so use the derive through the
//! re-export in the `csvrow` crate rather than depending on this crate
//! directly.

mod record;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives `Record` (and `Field`) for a struct with named fields.
///
/// Every field becomes one slot, in declaration order. Field types must
/// implement `csvrow::Field`: scalars, strings, timestamps and `Option`s of
/// those do out of the box, and every derived record does too, which is how
/// embedding works. A field whose type is itself a record is spliced into the
/// parent's columns instead of producing a column of its own.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `rename = "..."` | Column name; `"-"` excludes the column but keeps its slot |
/// | `skip` | Leave the field out entirely (no slot, no `Field` bound) |
/// | `display` | Format through `Display` instead of `Field` |
///
/// # Example
///
/// ```ignore
/// use csvrow::Record;
///
/// #[derive(Record)]
/// struct Address {
///     street: String,
///     city: String,
/// }
///
/// #[derive(Record)]
/// struct Customer {
///     #[csv(rename = "Name")]
///     name: String,
///     address: Address,
///     #[csv(rename = "-")]
///     internal_id: u64,
///     #[csv(display)]
///     tier: Tier,
///     #[csv(skip)]
///     cache: Vec<u8>,
/// }
///
/// // Columns: Name, street, city, tier
/// ```
///
/// # Compile-Time Errors
///
/// - Applied to an enum, union or tuple struct
/// - Unknown `#[csv(...)]` keys, or a non-string `rename`
/// - `skip` combined with `rename` or `display`
#[proc_macro_derive(Record, attributes(csv))]
pub fn record_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::record_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
