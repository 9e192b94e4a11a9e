//! Read-only access to a catalog record.
//!
//! The catalog does not guarantee a schema, so the record is kept as a [`serde_json::Value`]
//! tree and every lookup returns an [`Option`]: `None` when a key is absent and `Some` when it is
//! present, even if the value itself is empty.

use serde_json::{Map, Value};

use crate::{Error, ErrorKind};

/// A single matched entry from the catalog.
///
/// Most bibliographic fields live in the nested `details.details` mapping, while a few have an
/// alternate location in the `data` mapping of the entry itself.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    details: Map<String, Value>,
    entry: Map<String, Value>,
}

impl Record {
    /// The primary details mapping found at `details.details`.
    #[must_use]
    pub const fn details(&self) -> &Map<String, Value> {
        &self.details
    }

    /// The alternate `data` mapping of the entry.
    #[must_use]
    pub fn data(&self) -> Option<&Map<String, Value>> {
        self.entry.get("data").and_then(Value::as_object)
    }

    /// The identifiers the catalog knows for this entry.
    #[must_use]
    pub fn isbns(&self) -> Option<&Value> {
        self.entry.get("isbns")
    }

    /// Looks up a key in the details mapping.
    #[must_use]
    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details().get(key)
    }

    /// Looks up a key in the alternate data mapping.
    #[must_use]
    pub fn datum(&self, key: &str) -> Option<&Value> {
        self.data().and_then(|data| data.get(key))
    }
}

impl TryFrom<Value> for Record {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(entry) = value else {
            return Err(Error::new(
                ErrorKind::Deserialize,
                "Matched record is not a JSON object",
            ));
        };

        let details = match entry.get("details").and_then(|d| d.get("details")) {
            Some(Value::Object(details)) => details.clone(),
            _ => return Err(Error::new(ErrorKind::NoValue, "missing key 'details'")),
        };

        Ok(Self { details, entry })
    }
}

/// Renders a scalar JSON value the way it should be shown to a reader.
///
/// Strings are shown without quotes, `null` is treated as empty and any other value is shown as
/// compact JSON.
pub(crate) fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Collects `field` of every object in a list value, failing if any element does not have it.
pub(crate) fn pluck<'a>(list: &'a Value, field: &str) -> Option<Vec<&'a Value>> {
    list.as_array()?
        .iter()
        .map(|item| item.get(field))
        .collect()
}
