/// Turn a raw homeowner field into word tokens.
///
/// Periods are dropped so `Y.` and `Y` read the same, and any run of
/// whitespace counts as one separator. Never yields empty tokens.
pub fn normalize(raw: &str) -> Vec<String> {
    raw.replace('.', "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
