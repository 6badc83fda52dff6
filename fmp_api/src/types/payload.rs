use serde::Serialize;
use serde_json::Value;

/// One decoded response row, exactly as the API sent it.
pub type Record = serde_json::Map<String, Value>;

/// A decoded response body.
///
/// Most endpoints answer with a JSON array of objects; a few answer with a
/// single object. Anything else that is still valid JSON (a bare string, a
/// number, an array mixing objects and scalars) is passed through untouched
/// as [`Payload::Other`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Records(Vec<Record>),
    Record(Record),
    Other(Value),
}

impl Payload {
    pub fn len(&self) -> usize {
        match self {
            Payload::Records(records) => records.len(),
            Payload::Record(_) => 1,
            Payload::Other(Value::Array(items)) => items.len(),
            Payload::Other(Value::Null) => 0,
            Payload::Other(_) => 1,
        }
    }

    /// An empty array, an object without keys, or `null`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
            || matches!(self, Payload::Record(record) if record.is_empty())
    }

    /// Borrows the payload as a slice of records; a single object is a slice
    /// of one. [`Payload::Other`] has no records.
    pub fn records(&self) -> &[Record] {
        match self {
            Payload::Records(records) => records,
            Payload::Record(record) => std::slice::from_ref(record),
            Payload::Other(_) => &[],
        }
    }

    pub fn into_records(self) -> Vec<Record> {
        match self {
            Payload::Records(records) => records,
            Payload::Record(record) => vec![record],
            Payload::Other(_) => Vec::new(),
        }
    }

    /// The body as plain JSON, whatever its shape.
    pub fn into_value(self) -> Value {
        match self {
            Payload::Records(records) => {
                Value::Array(records.into_iter().map(Value::Object).collect())
            }
            Payload::Record(record) => Value::Object(record),
            Payload::Other(value) => value,
        }
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(record) => Payload::Record(record),
            Value::Array(items) if items.iter().all(Value::is_object) => Payload::Records(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::Object(record) => Some(record),
                        _ => None,
                    })
                    .collect(),
            ),
            other => Payload::Other(other),
        }
    }
}
