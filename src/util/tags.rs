//! Tag normalization shared by the write and read paths.
//!
//! The same tokenizer is applied to stored tag sets at write time and to
//! free-text queries at read time, so tag matching reduces to an
//! intersection-non-empty test over normalized tokens.

/// Splits free text into normalized tag tokens.
///
/// Tokens are lowercased and stripped of characters outside `[a-z0-9-]`;
/// empty tokens are dropped.
pub fn tokenize(input: &str) -> Vec<String> {
    input
        .split_whitespace()
        .map(|word| {
            word.to_lowercase()
                .chars()
                .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
                .collect::<String>()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

/// Normalizes a user-supplied tag list for storage.
///
/// Each tag is run through the tokenizer (a multi-word tag contributes one
/// token per word) and duplicates are removed, preserving first-seen order.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut seen = Vec::new();
    for tag in tags {
        for token in tokenize(tag) {
            if !seen.contains(&token) {
                seen.push(token);
            }
        }
    }
    seen
}

/// Reads a JSON array column into a `Vec<String>`, skipping non-string items.
pub fn string_array(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_and_lowercases() {
        assert_eq!(tokenize("Payments API"), vec!["payments", "api"]);
    }

    #[test]
    fn keeps_hyphenated_tokens_intact() {
        assert_eq!(tokenize("speech-to-text"), vec!["speech-to-text"]);
    }

    #[test]
    fn drops_tokens_with_no_valid_characters() {
        assert_eq!(tokenize("@@@ !!!"), Vec::<String>::new());
    }

    #[test]
    fn normalize_tags_deduplicates() {
        let tags = vec![
            "Payments".to_string(),
            "payments".to_string(),
            "API".to_string(),
        ];
        assert_eq!(normalize_tags(&tags), vec!["payments", "api"]);
    }

    #[test]
    fn string_array_reads_json_arrays() {
        let value = serde_json::json!(["payments", "api"]);
        assert_eq!(string_array(&value), vec!["payments", "api"]);
        assert_eq!(string_array(&serde_json::json!(null)), Vec::<String>::new());
    }
}
