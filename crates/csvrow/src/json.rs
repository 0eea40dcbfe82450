//! Dynamic records from JSON.
//!
//! An array of JSON objects is treated as a record collection: the shape is
//! introspected from the first object, nested objects are embedded records,
//! and every key keeps its document order. Arrays are not expanded; they
//! render as compact JSON text.

use serde::Serialize;
use serde_json::{Map, Value as Json};

use crate::error::{Error, Result};
use crate::options::TableOptions;
use crate::resolve::resolve;
use crate::schema::{FieldSchema, FormatKind, Leaf, Schema};
use crate::table::{assemble, Matrix};
use crate::value::Value;

impl Schema {
    /// Introspects the shape of a JSON object.
    ///
    /// `null` members become nullable columns; nested objects are embedded.
    pub fn from_json_object(object: &Map<String, Json>) -> Schema {
        let fields = object
            .iter()
            .map(|(key, value)| match value {
                Json::Object(nested) => FieldSchema::Embedded(Schema::from_json_object(nested)),
                Json::Null => FieldSchema::Leaf(Leaf::new(key.as_str(), None, FormatKind::Nullable)),
                _ => FieldSchema::Leaf(Leaf::new(key.as_str(), None, FormatKind::Plain)),
            })
            .collect();
        Schema::new(fields)
    }
}

/// Name of a JSON value's kind, for type errors.
pub fn kind_name(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

/// Converts a JSON array of objects into a string matrix.
///
/// Fails with [`Error::TypeError`] when `value` is not an array or one of its
/// elements is not an object.
///
/// ```
/// use csvrow::{to_table_json, TableOptions};
/// use serde_json::json;
///
/// let data = json!([
///     {"Name": "Ann", "Age": 30},
///     {"Name": "Bo", "Age": 25},
/// ]);
///
/// let table = to_table_json(&data, &TableOptions::new()).unwrap();
/// assert_eq!(table, vec![vec!["Name", "Age"], vec!["Ann", "30"], vec!["Bo", "25"]]);
/// ```
pub fn to_table_json(value: &Json, options: &TableOptions) -> Result<Matrix> {
    let items = match value {
        Json::Array(items) => items,
        other => {
            return Err(Error::TypeError {
                expected: "array",
                received: kind_name(other),
            })
        }
    };

    let objects = items
        .iter()
        .map(|item| match item {
            Json::Object(object) => Ok(object),
            other => Err(Error::TypeError {
                expected: "object",
                received: kind_name(other),
            }),
        })
        .collect::<Result<Vec<_>>>()?;

    let Some(first) = objects.first() else {
        return Ok(Matrix::new());
    };

    let layout = resolve(&Schema::from_json_object(first), options)?;
    Ok(assemble(
        &layout,
        options,
        objects.iter().map(|&object| object_values(object)),
    ))
}

/// Converts any serializable collection through its JSON form.
///
/// Useful for types that already derive `Serialize` but not `Record`. Struct
/// field order is kept; nested structs become embedded records.
///
/// ```
/// use csvrow::{to_table_serialized, TableOptions};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Person {
///     name: &'static str,
///     age: u32,
/// }
///
/// let people = [Person { name: "Ann", age: 30 }];
/// let table = to_table_serialized(&people, &TableOptions::new()).unwrap();
/// assert_eq!(table, vec![vec!["name", "age"], vec!["Ann", "30"]]);
/// ```
pub fn to_table_serialized<T: Serialize + ?Sized>(
    data: &T,
    options: &TableOptions,
) -> Result<Matrix> {
    let value = serde_json::to_value(data)?;
    to_table_json(&value, options)
}

/// Slot values of a JSON object, depth-first.
pub fn object_values(object: &Map<String, Json>) -> Vec<Value<'_>> {
    let mut out = Vec::with_capacity(object.len());
    collect_object(object, &mut out);
    out
}

fn collect_object<'a>(object: &'a Map<String, Json>, out: &mut Vec<Value<'a>>) {
    for value in object.values() {
        match value {
            Json::Object(nested) => collect_object(nested, out),
            Json::Null => out.push(Value::Null {
                zero: String::new(),
            }),
            Json::String(s) => out.push(Value::Str(s)),
            other => out.push(Value::Display(other)),
        }
    }
}
