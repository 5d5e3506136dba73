//! Match highlighting for suggestion lists.

/// Splits `name` after its first `match_len` characters.
///
/// The first half is the part that matched the typed term. Splitting happens
/// on character boundaries and clamps to the whole name.
pub fn highlight(name: &str, match_len: usize) -> (&str, &str) {
    let split = name
        .char_indices()
        .nth(match_len)
        .map_or(name.len(), |(idx, _)| idx);
    name.split_at(split)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Apple Watch", 3, "App", "le Watch" ; "ascii prefix")]
    #[test_case("Soap", 0, "", "Soap" ; "nothing typed")]
    #[test_case("Soap", 4, "Soap", "" ; "whole name")]
    #[test_case("Soap", 9, "Soap", "" ; "clamped past end")]
    #[test_case("Café Noir", 4, "Café", " Noir" ; "multibyte boundary")]
    fn test_highlight(name: &str, len: usize, matched: &str, rest: &str) {
        assert_eq!(highlight(name, len), (matched, rest));
    }
}
