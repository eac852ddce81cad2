use serde_json::{Map, Value};

use crate::{
    error::{CartolaError, Result},
    table::{Row, Table},
};


/// Separator between parent and child keys in flattened column names.
pub const SEPARATOR: char = '.';

/// Flatten one record: nested objects become dotted columns, everything else
/// (arrays included) is kept as the cell value.
pub fn flatten_record(record: &Map<String, Value>) -> Row {
    let mut row = Row::new();
    flatten_into(&mut row, None, record);
    row
}

fn flatten_into(row: &mut Row, prefix: Option<&str>, object: &Map<String, Value>) {
    for (key, value) in object {
        let column = match prefix {
            Some(p) => format!("{p}{SEPARATOR}{key}"),
            None => key.clone(),
        };
        match value {
            Value::Object(nested) => flatten_into(row, Some(&column), nested),
            other => {
                row.insert(column, other.clone());
            }
        }
    }
}

/// Build a table with one row per record. Every record must be an object.
pub fn normalize_records<'a, I>(records: I) -> Result<Table>
where
    I: IntoIterator<Item = &'a Value>,
{
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| match record {
            Value::Object(map) => Ok(flatten_record(map)),
            other => Err(CartolaError::InvalidRecord {
                index,
                found: json_type_name(other),
            }),
        })
        .collect::<Result<Vec<_>>>()
        .map(Table::new)
}

/// Look up `key` in a payload that must be a JSON object.
pub fn lookup<'a>(payload: &'a Value, key: &str) -> Result<&'a Value> {
    let Some(object) = payload.as_object() else {
        return Err(CartolaError::UnexpectedShape {
            key: key.to_string(),
            expected: "object payload",
            found: json_type_name(payload),
        });
    };
    object.get(key).ok_or_else(|| CartolaError::MissingKey {
        key: key.to_string(),
    })
}

/// Flatten the array stored at `key`.
pub fn normalize_list(payload: &Value, key: &str) -> Result<Table> {
    match lookup(payload, key)? {
        Value::Array(items) => normalize_records(items),
        other => Err(CartolaError::UnexpectedShape {
            key: key.to_string(),
            expected: "array",
            found: json_type_name(other),
        }),
    }
}

/// Flatten the values of the object stored at `key`, dropping its keys.
pub fn normalize_map_values(payload: &Value, key: &str) -> Result<Table> {
    match lookup(payload, key)? {
        Value::Object(entries) => normalize_records(entries.values()),
        other => Err(CartolaError::UnexpectedShape {
            key: key.to_string(),
            expected: "object",
            found: json_type_name(other),
        }),
    }
}

/// A payload with nothing in it: null, false, zero, or an empty string/array/object.
pub fn is_empty_payload(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
