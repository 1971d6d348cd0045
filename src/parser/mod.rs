pub mod builder;
pub mod classifier;
pub mod tokenizer;
pub mod vocabulary;

pub use vocabulary::Vocabulary;

use crate::Extraction;
use tracing::debug;

/// Splits homeowner fields into structured person records.
///
/// Holds only the vocabulary; every call works on its own state, so one
/// parser can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct NameParser {
    vocabulary: Vocabulary,
}

impl NameParser {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Extract titles, initials, first and last names from `homeowner`.
    ///
    /// Returns a single record unless a connector ("and", "&") was found.
    pub fn extract_name_components(&self, homeowner: &str) -> Extraction {
        let tokens = tokenizer::normalize(homeowner);
        let mut ctx = classifier::classify(tokens, &self.vocabulary);

        debug!(
            input = homeowner,
            titles = ?ctx.titles,
            connectors = ?ctx.connectors,
            initials = ?ctx.initials,
            remaining = ?ctx.remaining,
            "classified homeowner"
        );

        if ctx.names_several_people() {
            Extraction::Multiple(builder::build_multiple(&mut ctx))
        } else {
            Extraction::Single(builder::build_single(&mut ctx, None, None))
        }
    }
}
