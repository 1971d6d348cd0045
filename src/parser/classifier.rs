use crate::parser::Vocabulary;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::VecDeque;

lazy_static! {
    static ref INITIAL: Regex = Regex::new(r"^[A-Za-z]$").unwrap();
}

/// Working state for one extraction call.
///
/// Built fresh by [`classify`] and consumed by the result builder; it never
/// outlives the call that created it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionContext {
    /// Harvested titles, in vocabulary order.
    pub titles: Vec<String>,
    /// Connectors seen, each recorded once.
    pub connectors: Vec<String>,
    /// Initials not yet claimed by a built record.
    pub initials: VecDeque<String>,
    /// Tokens left over for first and last names.
    pub remaining: Vec<String>,
}

impl ExtractionContext {
    pub fn names_several_people(&self) -> bool {
        !self.connectors.is_empty()
    }
}

/// Run the title, connector and initial passes over `tokens`.
pub fn classify(tokens: Vec<String>, vocabulary: &Vocabulary) -> ExtractionContext {
    let mut ctx = ExtractionContext {
        remaining: tokens,
        ..Default::default()
    };

    extract_titles(&mut ctx, vocabulary);
    extract_connectors(&mut ctx, vocabulary);
    extract_initials(&mut ctx);

    ctx
}

pub fn is_initial(token: &str) -> bool {
    INITIAL.is_match(token)
}

fn extract_titles(ctx: &mut ExtractionContext, vocabulary: &Vocabulary) {
    for title in vocabulary.titles() {
        let occurrences = ctx.remaining.iter().filter(|t| *t == title).count();
        if occurrences == 0 {
            continue;
        }

        ctx.titles.extend(std::iter::repeat(title.clone()).take(occurrences));
        ctx.remaining.retain(|t| t != title);
    }
}

fn extract_connectors(ctx: &mut ExtractionContext, vocabulary: &Vocabulary) {
    for connector in vocabulary.connectors() {
        if !ctx.remaining.contains(connector) {
            continue;
        }

        ctx.connectors.push(connector.clone());
        ctx.remaining.retain(|t| t != connector);
    }
}

// Split by position: a token only leaves `remaining` if it is itself an initial.
fn extract_initials(ctx: &mut ExtractionContext) {
    let (initials, remaining): (Vec<String>, Vec<String>) = std::mem::take(&mut ctx.remaining)
        .into_iter()
        .partition(|t| is_initial(t));

    ctx.initials = initials.into();
    ctx.remaining = remaining;
}
