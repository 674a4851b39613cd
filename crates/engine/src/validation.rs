//! Input checks applied to record bodies before they reach a collection.

use serde::Deserialize;
use serde_json::Value;

use crate::{EngineError, Record, ResultEngine};

/// Per-collection policy for create and replace bodies.
///
/// The only structural requirement is that a body is a JSON object. Any
/// field listed in `required_fields` must also be present; its value is
/// not inspected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RecordPolicy {
    pub required_fields: Vec<String>,
}

impl RecordPolicy {
    pub fn require<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required_fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Turn `value` into a [`Record`], or explain why it cannot be one.
    pub fn check(&self, kind: &str, value: Value) -> ResultEngine<Record> {
        let Value::Object(record) = value else {
            return Err(EngineError::Malformed(format!(
                "{kind} must be a JSON object"
            )));
        };

        if let Some(missing) = self
            .required_fields
            .iter()
            .find(|field| !record.contains_key(field.as_str()))
        {
            return Err(EngineError::Malformed(format!(
                "{kind} is missing field `{missing}`"
            )));
        }

        Ok(record)
    }
}
