use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /fact/create`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewFact {
    pub title: String,
    pub content: String,
    pub number_of_question: u32,
}

/// Response of `POST /fact/create`.
///
/// The contract field is `id`. The backend currently answers `{"Id": ..}`, so
/// the capitalised spelling is accepted on input; when a body carries both,
/// `id` wins. `id` stays optional here so a body without either spelling can
/// be reported as a missing identifier rather than a parse failure.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct FactCreated {
    pub id: Option<i64>,
}

impl<'de> Deserialize<'de> for FactCreated {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Wire {
            #[serde(default)]
            id: Option<i64>,
            #[serde(default, rename = "Id")]
            capitalised: Option<i64>,
        }

        let wire = Wire::deserialize(deserializer)?;
        Ok(Self {
            id: wire.id.or(wire.capitalised),
        })
    }
}

/// A stored fact as returned by `GET /fact/getFact`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Fact {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub number_of_question: u32,
}
