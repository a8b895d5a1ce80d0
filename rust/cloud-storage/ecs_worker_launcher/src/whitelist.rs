use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The accepted S3 key suffixes.
///
/// The shape is decided once when the config is deserialized. Shapes other than a string or a
/// list of strings are kept as [SuffixWhitelist::Unsupported] so the filter can fail closed
/// instead of failing the config load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SuffixWhitelist {
    /// No whitelist configured, every key is accepted
    #[default]
    Absent,
    /// A single suffix
    Single(String),
    /// Any of these suffixes
    Many(Vec<String>),
    /// Anything else found in the config
    Unsupported(Value),
}

impl SuffixWhitelist {
    /// Returns true if the key is accepted by this whitelist.
    pub fn matches(&self, key: &str) -> bool {
        match self {
            SuffixWhitelist::Absent => true,
            SuffixWhitelist::Single(suffix) => key.ends_with(suffix.as_str()),
            SuffixWhitelist::Many(suffixes) => suffixes
                .iter()
                .any(|suffix| key.ends_with(suffix.as_str())),
            SuffixWhitelist::Unsupported(value) => {
                tracing::warn!(
                    whitelist_type = json_type(value),
                    whitelist = %value,
                    "unsupported whitelist type"
                );
                false
            }
        }
    }
}

impl From<Value> for SuffixWhitelist {
    fn from(value: Value) -> Self {
        match value {
            // `false` is what older deployments wrote when no whitelist was wanted
            Value::Null | Value::Bool(false) => SuffixWhitelist::Absent,
            Value::String(suffix) => SuffixWhitelist::Single(suffix),
            Value::Array(items) if items.iter().all(Value::is_string) => SuffixWhitelist::Many(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(suffix) => Some(suffix),
                        _ => None,
                    })
                    .collect(),
            ),
            other => SuffixWhitelist::Unsupported(other),
        }
    }
}

impl<'de> Deserialize<'de> for SuffixWhitelist {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(SuffixWhitelist::from)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
