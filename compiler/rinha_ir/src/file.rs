//! Root document of a decoded program.

use serde::Deserialize;

use crate::Term;

/// A program as emitted by the external parser: a name and one root term.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct File {
    pub name: String,
    pub expression: Term,
}

impl File {
    pub fn new(name: impl Into<String>, expression: Term) -> Self {
        File {
            name: name.into(),
            expression,
        }
    }

    /// Decode a program from its JSON form.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }
}
