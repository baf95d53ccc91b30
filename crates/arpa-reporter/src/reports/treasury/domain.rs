use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Closed set of record kinds sourced from the grants database for one
/// reporting period. The `ec*` kinds are project records grouped by Treasury
/// expenditure category; the remainder are aggregate award/expenditure rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Ec1,
    Ec2,
    Ec3,
    Ec4,
    Ec5,
    Ec7,
    Expenditures50k,
    Awards,
    Awards50k,
}

impl RecordKind {
    /// Project records carry a subcategory with a detailed EC code; aggregate
    /// kinds are classified by kind alone.
    pub fn is_project(self) -> bool {
        matches!(
            self,
            Self::Ec1 | Self::Ec2 | Self::Ec3 | Self::Ec4 | Self::Ec5 | Self::Ec7
        )
    }
}

/// Scalar cell value carried in a record's content map. Upstream data is
/// loosely typed, so every formatter accepts any variant and nulls out what
/// it cannot use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<FieldValue>),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Plain text rendering used for pass-through columns. Integral numbers
    /// render without a decimal point, matching the upstream spreadsheets.
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Bool(value) => Some(value.to_string()),
            Self::Number(value) => Some(render_number(*value)),
            Self::Text(value) => Some(value.clone()),
            Self::List(values) => Some(
                values
                    .iter()
                    .filter_map(FieldValue::render)
                    .collect::<Vec<_>>()
                    .join(";"),
            ),
        }
    }
}

pub(crate) fn render_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// One expenditure/project record scoped to a single report run. Immutable
/// once fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "type")]
    pub kind: RecordKind,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub content: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.content.get(name).filter(|value| !value.is_null())
    }

    /// Extract the detailed expenditure category code ("major.minor") from
    /// the leading characters of the subcategory, e.g. "2.1 Something" ->
    /// "2.1". Codes are opaque strings compared by exact match; "5.1" and
    /// "5.10" are distinct codes.
    pub fn detailed_ec_code(&self) -> Option<&str> {
        let subcategory = self.subcategory.as_deref()?;
        detailed_ec_code(subcategory)
    }
}

pub(crate) fn detailed_ec_code(subcategory: &str) -> Option<&str> {
    let bytes = subcategory.as_bytes();
    if bytes.len() < 3 || !bytes[0].is_ascii_digit() || bytes[1] != b'.' {
        return None;
    }
    if !bytes[2].is_ascii_digit() {
        return None;
    }
    let end = if bytes.len() > 3 && bytes[3].is_ascii_digit() {
        4
    } else {
        3
    };
    Some(&subcategory[..end])
}
