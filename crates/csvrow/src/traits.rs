//! Traits for derive macro integration.
//!
//! [`Record`] is implemented by `#[derive(Record)]` and describes a whole
//! record type. [`Field`] is implemented by every type that may appear as a
//! field of a record: scalars occupy one slot, records are spliced in.
//! [`Scalar`] is the single-slot value conversion behind the scalar `Field`
//! impls.

use crate::schema::{FieldSchema, FormatKind, Schema};
use crate::value::Value;

/// A record type whose shape can be turned into a column layout.
///
/// This trait is typically derived using `#[derive(Record)]`, but can also be
/// implemented manually. The two methods must agree: `collect_values` pushes
/// exactly one value per leaf of `schema()`, in the same depth-first order.
///
/// # Derive Usage
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
/// let table = to_table(&people, &TableOptions::new()).unwrap();
/// assert_eq!(table[0], vec!["Name", "Age"]);
/// assert_eq!(table[1], vec!["Ann", "30"]);
/// ```
///
/// # Manual Implementation
///
/// ```
/// use csvrow::{Field, FormatKind, Record, Schema, Value};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Record for Point {
///     fn schema() -> Schema {
///         Schema::default()
///             .leaf("x", None, FormatKind::Plain)
///             .leaf("y", None, FormatKind::Plain)
///     }
///
///     fn collect_values<'a>(&'a self, out: &mut Vec<Value<'a>>) {
///         self.x.collect(out);
///         self.y.collect(out);
///     }
/// }
///
/// assert_eq!(Point::schema().slot_count(), 2);
/// ```
pub trait Record {
    /// Returns the shape of this record type.
    fn schema() -> Schema;

    /// Pushes this record's values in slot order.
    fn collect_values<'a>(&'a self, out: &mut Vec<Value<'a>>);

    /// Collects this record's values into a new vector.
    fn values(&self) -> Vec<Value<'_>> {
        let mut out = Vec::new();
        self.collect_values(&mut out);
        out
    }
}

/// A type usable as a field of a [`Record`].
///
/// `#[derive(Record)]` calls `describe` and `collect` on every field type, so
/// a field typed as another derived record is embedded without any extra
/// annotation.
pub trait Field {
    /// Describes a field of this type declared as `name`, optionally renamed.
    fn describe(name: &str, rename: Option<&str>) -> FieldSchema;

    /// Pushes this field's values in slot order.
    fn collect<'a>(&'a self, out: &mut Vec<Value<'a>>);
}

/// A single-slot value.
///
/// Implement this for your own types when they should format as one cell;
/// or mark the field `#[csv(display)]` to use its `Display` impl.
pub trait Scalar {
    /// Formatting rule for this type.
    const KIND: FormatKind;

    /// Borrows this value for formatting.
    fn to_value(&self) -> Value<'_>;
}

impl<T: Field + ?Sized> Field for &T {
    fn describe(name: &str, rename: Option<&str>) -> FieldSchema {
        T::describe(name, rename)
    }

    fn collect<'a>(&'a self, out: &mut Vec<Value<'a>>) {
        T::collect(*self, out)
    }
}

impl<T: Field + ?Sized> Field for Box<T> {
    fn describe(name: &str, rename: Option<&str>) -> FieldSchema {
        T::describe(name, rename)
    }

    fn collect<'a>(&'a self, out: &mut Vec<Value<'a>>) {
        T::collect(self.as_ref(), out)
    }
}
