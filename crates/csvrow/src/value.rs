//! Runtime values for cell formatting.
//!
//! The [`Value`] enum is what a record hands to the row projector for each
//! slot. Scalars borrow from the record; timestamps are copied out as naive
//! local date-times so every timezone formats the same way.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::options::NullPolicy;
use crate::project::format_cell;
use crate::schema::{FieldSchema, FormatKind, Leaf};
use crate::traits::{Field, Scalar};

/// Runtime value of one slot, borrowed from the source record.
#[derive(Clone)]
pub enum Value<'a> {
    /// Text value (borrowed).
    Str(&'a str),
    /// Any value formatted through its `Display` impl.
    Display(&'a dyn fmt::Display),
    /// Date-time in its own local offset.
    Timestamp(NaiveDateTime),
    /// A nullable wrapper holding nothing. `zero` is the inner type's zero
    /// value, already formatted.
    Null { zero: String },
}

impl Value<'_> {
    /// Returns `true` if this is a `Null` value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null { .. })
    }

    /// Extracts the timestamp, if present.
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            Value::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }
}

/// Generic stringification. Nulls render as their zero value.
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Display(d) => fmt::Display::fmt(d, f),
            Value::Timestamp(ts) => fmt::Display::fmt(ts, f),
            Value::Null { zero } => f.write_str(zero),
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Display(d) => f.debug_tuple("Display").field(&d.to_string()).finish(),
            Value::Timestamp(ts) => f.debug_tuple("Timestamp").field(ts).finish(),
            Value::Null { zero } => f.debug_struct("Null").field("zero", zero).finish(),
        }
    }
}

// ============================================================================
// Scalar impls
// ============================================================================

macro_rules! display_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                const KIND: FormatKind = FormatKind::Plain;

                fn to_value(&self) -> Value<'_> {
                    Value::Display(self)
                }
            }
        )*
    };
}

display_scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
    NaiveDate, NaiveTime,
);

impl Scalar for str {
    const KIND: FormatKind = FormatKind::Plain;

    fn to_value(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl Scalar for String {
    const KIND: FormatKind = FormatKind::Plain;

    fn to_value(&self) -> Value<'_> {
        Value::Str(self.as_str())
    }
}

impl Scalar for Cow<'_, str> {
    const KIND: FormatKind = FormatKind::Plain;

    fn to_value(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl Scalar for NaiveDateTime {
    const KIND: FormatKind = FormatKind::Timestamp;

    fn to_value(&self) -> Value<'_> {
        Value::Timestamp(*self)
    }
}

impl<Tz: TimeZone> Scalar for DateTime<Tz> {
    const KIND: FormatKind = FormatKind::Timestamp;

    fn to_value(&self) -> Value<'_> {
        Value::Timestamp(self.naive_local())
    }
}

// ============================================================================
// Field impls for scalars
// ============================================================================

fn describe_scalar<T: Scalar + ?Sized>(name: &str, rename: Option<&str>) -> FieldSchema {
    FieldSchema::Leaf(Leaf::new(name, rename, T::KIND))
}

macro_rules! scalar_field {
    ($($t:ty),* $(,)?) => {
        $(
            impl Field for $t {
                fn describe(name: &str, rename: Option<&str>) -> FieldSchema {
                    describe_scalar::<Self>(name, rename)
                }

                fn collect<'a>(&'a self, out: &mut Vec<Value<'a>>) {
                    out.push(self.to_value());
                }
            }
        )*
    };
}

scalar_field!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
    str, String, Cow<'_, str>, NaiveDate, NaiveTime, NaiveDateTime,
);

impl<Tz: TimeZone> Field for DateTime<Tz> {
    fn describe(name: &str, rename: Option<&str>) -> FieldSchema {
        describe_scalar::<Self>(name, rename)
    }

    fn collect<'a>(&'a self, out: &mut Vec<Value<'a>>) {
        out.push(self.to_value());
    }
}

/// Nullable wrapper: unwraps one level. An empty wrapper carries the inner
/// type's zero value so the null policy can fall back to it.
impl<T: Scalar + Default> Field for Option<T> {
    fn describe(name: &str, rename: Option<&str>) -> FieldSchema {
        FieldSchema::Leaf(Leaf::new(name, rename, T::KIND.nullable()))
    }

    fn collect<'a>(&'a self, out: &mut Vec<Value<'a>>) {
        match self {
            Some(inner) => out.push(inner.to_value()),
            None => out.push(Value::Null {
                zero: zero_value::<T>(),
            }),
        }
    }
}

fn zero_value<T: Scalar + Default>() -> String {
    let zero = T::default();
    format_cell(&zero.to_value(), T::KIND, &NullPolicy::ZeroValue)
}
