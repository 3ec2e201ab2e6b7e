use serde::{Deserialize, Serialize};
use std::fmt;

/// A value the activities API may send either as a JSON number or a string.
/// Anything else is kept verbatim so one odd row cannot sink the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(value) => write!(f, "{value}"),
            FieldValue::Float(value) => write!(f, "{value}"),
            FieldValue::Text(value) => f.write_str(value),
            FieldValue::Other(value) => write!(f, "{value}"),
        }
    }
}

/// One row as the API returns it. Missing or `null` columns read as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    pub id: Option<FieldValue>,
    pub title: Option<FieldValue>,
    pub consumption_in_wh: Option<FieldValue>,
    pub image_path: Option<FieldValue>,
    pub source: Option<FieldValue>,
}

/// Form fields every create/edit submission has to carry.
pub const REQUIRED_FIELDS: [&str; 4] = ["title", "consumption_in_wh", "image_path", "source"];

#[derive(Debug, Deserialize)]
pub struct JsonForm {
    pub json: String,
}

#[derive(Debug, Deserialize)]
pub struct RemoveForm {
    pub id: String,
}
