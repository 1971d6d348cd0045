pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod parser;

pub use batch::{Importer, ParsedRow};
pub use config::Config;
pub use error::{Error, Result};
pub use parser::{NameParser, Vocabulary};

use serde::{Deserialize, Serialize};

/// One person reconstructed from a homeowner field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub title: Option<String>,
    pub initial: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Result of extracting a single homeowner field.
///
/// Serializes as a bare object for one person and as an array when the
/// field named several people, so per-record grouping survives in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Extraction {
    Single(PersonRecord),
    Multiple(Vec<PersonRecord>),
}

impl Extraction {
    pub fn people(&self) -> &[PersonRecord] {
        match self {
            Extraction::Single(person) => std::slice::from_ref(person),
            Extraction::Multiple(people) => people,
        }
    }

    pub fn into_people(self) -> Vec<PersonRecord> {
        match self {
            Extraction::Single(person) => vec![person],
            Extraction::Multiple(people) => people,
        }
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Extraction::Multiple(_))
    }

    pub fn len(&self) -> usize {
        self.people().len()
    }

    pub fn is_empty(&self) -> bool {
        self.people().is_empty()
    }
}
