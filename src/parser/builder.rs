use crate::parser::classifier::ExtractionContext;
use crate::PersonRecord;

/// First and last name handed to [`build_single`] by the multi-person path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamePair {
    pub first: Option<String>,
    pub last: Option<String>,
}

impl NamePair {
    pub fn full(first: &str, last: &str) -> Self {
        Self {
            first: Some(first.to_string()),
            last: Some(last.to_string()),
        }
    }

    pub fn surname(last: &str) -> Self {
        Self {
            first: None,
            last: Some(last.to_string()),
        }
    }

    pub fn given(first: &str) -> Self {
        Self {
            first: Some(first.to_string()),
            last: None,
        }
    }

    fn from_position(tokens: &[String]) -> Self {
        match tokens {
            [first, last, ..] => Self::full(first, last),
            [last] => Self::surname(last),
            [] => Self::default(),
        }
    }
}

/// Build one record, claiming the next unclaimed initial.
///
/// `title` falls back to the first harvested title. Explicit `names` win
/// over the positional reading of the remaining tokens.
pub fn build_single(
    ctx: &mut ExtractionContext,
    title: Option<String>,
    names: Option<NamePair>,
) -> PersonRecord {
    let initial = ctx.initials.pop_front();
    let title = title.or_else(|| ctx.titles.first().cloned());
    let NamePair { first, last } = names.unwrap_or_else(|| NamePair::from_position(&ctx.remaining));

    PersonRecord {
        title,
        initial,
        first_name: first,
        last_name: last,
    }
}

/// Build the records for a field that names several people.
///
/// Dispatches on how many name tokens are left; titles are matched to
/// names purely by index.
pub fn build_multiple(ctx: &mut ExtractionContext) -> Vec<PersonRecord> {
    let tokens = ctx.remaining.clone();
    let first_title = ctx.titles.first().cloned();
    let second_title = ctx.titles.get(1).cloned();

    let mut people = Vec::new();

    match tokens.as_slice() {
        [last] => {
            people.push(build_single(ctx, first_title, Some(NamePair::surname(last))));
            if second_title.is_some() {
                people.push(build_single(ctx, second_title, Some(NamePair::surname(last))));
            }
        }
        [first, last] => {
            people.push(build_single(ctx, first_title, Some(NamePair::full(first, last))));
            if second_title.is_some() {
                people.push(build_single(ctx, second_title, Some(NamePair::full(first, last))));
            }
        }
        [first_a, last_a, first_b, last_b] => {
            people.push(build_single(ctx, first_title, Some(NamePair::full(first_a, last_a))));
            people.push(build_single(ctx, second_title, Some(NamePair::full(first_b, last_b))));
        }
        _ => people = pair_by_position(ctx, &tokens),
    }

    people
}

/// Pair tokens two by two and cycle through the titles by index.
///
/// A trailing unpaired token fills only the first name. With no tokens at
/// all a single empty pair is used so the harvested title is not lost.
fn pair_by_position(ctx: &mut ExtractionContext, tokens: &[String]) -> Vec<PersonRecord> {
    let pairs: Vec<NamePair> = if tokens.is_empty() {
        vec![NamePair::default()]
    } else {
        tokens
            .chunks(2)
            .map(|chunk| match chunk {
                [first, last] => NamePair::full(first, last),
                [first] => NamePair::given(first),
                _ => NamePair::default(),
            })
            .collect()
    };

    let title_count = ctx.titles.len();
    let mut people = Vec::with_capacity(pairs.len());

    for (index, names) in pairs.into_iter().enumerate() {
        let title = if title_count > 0 {
            Some(ctx.titles[index % title_count].clone())
        } else {
            None
        };
        people.push(build_single(ctx, title, Some(names)));
    }

    people
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(titles: &[&str], initials: &[&str], remaining: &[&str]) -> ExtractionContext {
        ExtractionContext {
            titles: titles.iter().map(|s| s.to_string()).collect(),
            connectors: vec!["and".to_string()],
            initials: initials.iter().map(|s| s.to_string()).collect(),
            remaining: remaining.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn person(title: Option<&str>, initial: Option<&str>, first: Option<&str>, last: Option<&str>) -> PersonRecord {
        PersonRecord {
            title: title.map(String::from),
            initial: initial.map(String::from),
            first_name: first.map(String::from),
            last_name: last.map(String::from),
        }
    }

    #[test]
    fn test_single_positional() {
        let mut ctx = context(&["Dr"], &["K"], &["Ada", "Lovelace", "Byron"]);
        let record = build_single(&mut ctx, None, None);
        assert_eq!(record, person(Some("Dr"), Some("K"), Some("Ada"), Some("Lovelace")));
        assert!(ctx.initials.is_empty());
    }

    #[test]
    fn test_single_surname_only() {
        let mut ctx = context(&[], &[], &["Onifade"]);
        let record = build_single(&mut ctx, None, None);
        assert_eq!(record, person(None, None, None, Some("Onifade")));
    }

    #[test]
    fn test_single_overrides_win() {
        let mut ctx = context(&["Mr"], &[], &["Seyi", "Onifade"]);
        let record = build_single(&mut ctx, Some("Ms".to_string()), Some(NamePair::surname("Smith")));
        assert_eq!(record, person(Some("Ms"), None, None, Some("Smith")));
    }

    #[test]
    fn test_initials_claimed_in_order() {
        let mut ctx = context(&["Mr", "Mrs"], &["A", "B"], &["Smith"]);
        let people = build_multiple(&mut ctx);
        assert_eq!(
            people,
            vec![
                person(Some("Mr"), Some("A"), None, Some("Smith")),
                person(Some("Mrs"), Some("B"), None, Some("Smith")),
            ]
        );
    }

    #[test]
    fn test_one_token_one_title() {
        let mut ctx = context(&["Mr"], &[], &["Smith"]);
        let people = build_multiple(&mut ctx);
        assert_eq!(people, vec![person(Some("Mr"), None, None, Some("Smith"))]);
    }

    #[test]
    fn test_two_tokens_shared_by_titles() {
        let mut ctx = context(&["Mr", "Mrs"], &[], &["Seyi", "Onifade"]);
        let people = build_multiple(&mut ctx);
        assert_eq!(
            people,
            vec![
                person(Some("Mr"), None, Some("Seyi"), Some("Onifade")),
                person(Some("Mrs"), None, Some("Seyi"), Some("Onifade")),
            ]
        );
    }

    #[test]
    fn test_four_tokens_missing_second_title_falls_back() {
        let mut ctx = context(&["Dr"], &[], &["Ada", "Byron", "Alan", "Turing"]);
        let people = build_multiple(&mut ctx);
        assert_eq!(
            people,
            vec![
                person(Some("Dr"), None, Some("Ada"), Some("Byron")),
                person(Some("Dr"), None, Some("Alan"), Some("Turing")),
            ]
        );
    }

    #[test]
    fn test_three_tokens_trailing_first_name() {
        let mut ctx = context(&["Mr", "Mrs"], &[], &["John", "Smith", "Jones"]);
        let people = build_multiple(&mut ctx);
        assert_eq!(
            people,
            vec![
                person(Some("Mr"), None, Some("John"), Some("Smith")),
                person(Some("Mrs"), None, Some("Jones"), None),
            ]
        );
    }

    #[test]
    fn test_titles_cycle_by_modulo() {
        let mut ctx = context(&["Mr", "Mrs"], &[], &["A1", "B1", "A2", "B2", "A3", "B3"]);
        let titles: Vec<_> = build_multiple(&mut ctx)
            .into_iter()
            .map(|p| p.title.unwrap())
            .collect();
        assert_eq!(titles, vec!["Mr", "Mrs", "Mr"]);
    }

    #[test]
    fn test_no_titles_in_default_branch() {
        let mut ctx = context(&[], &[], &["Ann", "Lee", "Bo"]);
        let people = build_multiple(&mut ctx);
        assert!(people.iter().all(|p| p.title.is_none()));
        assert_eq!(people.len(), 2);
        assert_eq!(people[1], person(None, None, Some("Bo"), None));
    }

    #[test]
    fn test_five_tokens_unpaired_first_name_claims_initial() {
        let mut ctx = context(&["Dr"], &["Q", "R", "S"], &["Ann", "Lee", "Bo", "Day", "Cy"]);
        let people = build_multiple(&mut ctx);
        assert_eq!(
            people,
            vec![
                person(Some("Dr"), Some("Q"), Some("Ann"), Some("Lee")),
                person(Some("Dr"), Some("R"), Some("Bo"), Some("Day")),
                person(Some("Dr"), Some("S"), Some("Cy"), None),
            ]
        );
    }

    #[test]
    fn test_no_tokens_keeps_title() {
        let mut ctx = context(&["Mr", "Mrs"], &[], &[]);
        let people = build_multiple(&mut ctx);
        assert_eq!(people, vec![person(Some("Mr"), None, None, None)]);
    }
}
