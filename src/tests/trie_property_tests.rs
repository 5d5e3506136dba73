//! Property-based tests for the prefix trie.

use proptest::prelude::*;

use crate::data_structures::Trie;
use crate::tests::{string_strategy, word_list_strategy, word_strategy};

fn build(words: &[String]) -> Trie<usize> {
    words
        .iter()
        .enumerate()
        .map(|(id, word)| (word.as_str(), id))
        .collect()
}

/// Id of the last insert of each distinct lowercased word.
fn last_ids(words: &[String]) -> std::collections::BTreeMap<String, usize> {
    words
        .iter()
        .enumerate()
        .map(|(id, word)| (word.to_lowercase(), id))
        .collect()
}

proptest! {
    // Property: every inserted word suggests its own (latest) payload
    #[test]
    fn prop_inserted_words_are_suggested(words in word_list_strategy()) {
        let trie = build(&words);
        for (word, id) in last_ids(&words) {
            prop_assert!(trie.get_suggestions(&word).contains(&&id));
        }
    }

    // Property: an empty prefix never yields suggestions
    #[test]
    fn prop_empty_prefix_has_no_suggestions(words in word_list_strategy()) {
        let trie = build(&words);
        prop_assert!(trie.get_suggestions("").is_empty());
    }

    // Property: the path for an empty prefix is exactly the root
    #[test]
    fn prop_empty_prefix_path_is_root(words in word_list_strategy()) {
        let trie = build(&words);
        let path = trie.get_path("");
        prop_assert_eq!(path.len(), 1);
        prop_assert!(path[0].ptr_eq(trie.root()));
    }

    // Property: a matched prefix has one node per character plus the root
    #[test]
    fn prop_matched_prefix_path_length(words in word_list_strategy(), cut in 0usize..16) {
        let trie = build(&words);
        let word = &words[0];
        let prefix: String = word.chars().take(cut).collect();

        let path = trie.get_path(&prefix);
        prop_assert_eq!(path.len(), prefix.to_lowercase().chars().count() + 1);
        prop_assert!(path.is_complete());
    }

    // Property: the path never grows past the prefix and stays inside the trie
    #[test]
    fn prop_path_is_bounded(words in word_list_strategy(), prefix in string_strategy(20)) {
        let trie = build(&words);
        let path = trie.get_path(&prefix);
        prop_assert!(path.len() <= prefix.to_lowercase().chars().count() + 1);
        prop_assert!(path[0].is_root());
    }

    // Property: suggestions are exactly the words extending the prefix, sorted
    #[test]
    fn prop_suggestions_match_sorted_extensions(
        words in word_list_strategy(),
        prefix in word_strategy(),
    ) {
        let trie = build(&words);
        let lowered = prefix.to_lowercase();

        let expected: Vec<usize> = last_ids(&words)
            .into_iter()
            .filter(|(word, _)| word.starts_with(&lowered))
            .map(|(_, id)| id)
            .collect();
        let actual: Vec<usize> = trie.get_suggestions(&prefix).into_iter().copied().collect();

        prop_assert_eq!(actual, expected);
    }

    // Property: queries are deterministic and case-insensitive
    #[test]
    fn prop_queries_are_deterministic(words in word_list_strategy(), prefix in word_strategy()) {
        let trie = build(&words);
        let first = trie.get_suggestions(&prefix);
        prop_assert_eq!(&first, &trie.get_suggestions(&prefix));
        prop_assert_eq!(&first, &trie.get_suggestions(prefix.to_uppercase()));
    }

    // Property: word count equals the number of distinct lowercased words
    #[test]
    fn prop_len_counts_distinct_words(words in word_list_strategy()) {
        let trie = build(&words);
        prop_assert_eq!(trie.len(), last_ids(&words).len());
    }
}
