/// Honorifics recognised by default, in extraction precedence order.
pub const DEFAULT_TITLES: &[&str] = &["Mr", "Mrs", "Ms", "Master", "Dr", "Mister", "Prof"];

/// Words that join several people in one homeowner field.
pub const DEFAULT_CONNECTORS: &[&str] = &["and", "&"];

/// Closed word sets the classifier matches tokens against.
///
/// Matching is exact and case-sensitive. The order of `titles` decides the
/// order of harvested titles, not the order they appear in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    titles: Vec<String>,
    connectors: Vec<String>,
}

impl Vocabulary {
    pub fn new<T, C>(titles: T, connectors: C) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
            connectors: connectors.into_iter().map(Into::into).collect(),
        }
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn connectors(&self) -> &[String] {
        &self.connectors
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(
            DEFAULT_TITLES.iter().copied(),
            DEFAULT_CONNECTORS.iter().copied(),
        )
    }
}
