use serde::{Deserialize, Deserializer, Serialize};

/// Display value used when a record has neither an output nor an error.
pub const NO_PERMID_INFORMATION: &str = "No PermID information";

/// Symbology lookup request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbologyRequest {
    pub from: Vec<SymbologyFrom>,
    pub to: Vec<SymbologyTo>,
    pub reference: Vec<String>,
    #[serde(rename = "type")]
    pub lookup_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbologyFrom {
    pub identifier_types: Vec<String>,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbologyTo {
    pub object_types: Vec<String>,
    pub identifier_types: Vec<String>,
}

impl SymbologyRequest {
    /// RIC → organization PermID, with name/status/classification reference
    /// fields and automatic resolution.
    pub fn ric_to_organization_permid(rics: &[String]) -> Self {
        Self {
            from: vec![SymbologyFrom {
                identifier_types: vec![String::from("RIC")],
                values: rics.to_vec(),
            }],
            to: vec![SymbologyTo {
                object_types: vec![String::from("organization")],
                identifier_types: vec![String::from("PermID")],
            }],
            reference: ["name", "status", "classification"]
                .into_iter()
                .map(String::from)
                .collect(),
            lookup_type: String::from("auto"),
        }
    }
}

/// Symbology lookup response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SymbologyResponse {
    pub data: Vec<SymbologyRecord>,
}

/// One per-ticker lookup result.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SymbologyRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub input: Vec<IdentifierValue>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub output: Vec<IdentifierValue>,
    #[serde(default)]
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IdentifierValue {
    pub value: String,
    #[serde(rename = "identifierType", default)]
    pub identifier_type: Option<String>,
}

/// A `null` list decodes the same as a missing one.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<IdentifierValue>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<IdentifierValue>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl SymbologyRecord {
    /// The ticker this record was resolved from.
    pub fn ric(&self) -> &str {
        self.input.first().map_or("", |input| input.value.as_str())
    }

    /// First output value, else first error, else [`NO_PERMID_INFORMATION`].
    pub fn display_value(&self) -> &str {
        if let Some(output) = self.output.first() {
            return &output.value;
        }

        self.errors
            .as_ref()
            .and_then(|errors| errors.first())
            .map_or(NO_PERMID_INFORMATION, String::as_str)
    }
}

/// One rendered `(RIC, PermID)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermIdRow {
    #[serde(rename = "RIC")]
    pub ric: String,
    #[serde(rename = "PermID")]
    pub perm_id: String,
}

impl PermIdRow {
    pub fn new(ric: impl Into<String>, perm_id: impl Into<String>) -> Self {
        Self {
            ric: ric.into(),
            perm_id: perm_id.into(),
        }
    }
}

impl From<&SymbologyRecord> for PermIdRow {
    fn from(record: &SymbologyRecord) -> Self {
        Self::new(record.ric(), record.display_value())
    }
}

/// Ordered display table, same order as the lookup response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PermIdTable {
    pub rows: Vec<PermIdRow>,
}

impl PermIdTable {
    pub fn from_response(response: &SymbologyResponse) -> Self {
        Self {
            rows: response.data.iter().map(PermIdRow::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
