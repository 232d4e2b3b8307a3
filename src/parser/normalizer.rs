// file: src/parser/normalizer.rs
// description: whitespace normalization for text pulled out of the CF xml files
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex =
        Regex::new(r"\s+").expect("WHITESPACE_RUN regex is valid");
}

pub struct TextNormalizer;

impl TextNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Collapses every whitespace run, line breaks included, into one space.
    /// A run at either end becomes a single space as well; callers that need
    /// a bare token trim it themselves.
    pub fn normalize(&self, text: &str) -> String {
        WHITESPACE_RUN.replace_all(text, " ").into_owned()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_breaks_collapse() {
        let normalizer = TextNormalizer::new();
        let text = "Pancreatic\n   enzyme\tactivity\r\n  in children";

        assert_eq!(
            normalizer.normalize(text),
            "Pancreatic enzyme activity in children"
        );
    }

    #[test]
    fn test_edge_runs_collapse_to_one_space() {
        let normalizer = TextNormalizer::new();
        assert_eq!(
            normalizer.normalize("What are the effects\npatients?\n"),
            "What are the effects patients? "
        );
        assert_eq!(normalizer.normalize("\n  00001 \n"), " 00001 ");
        assert_eq!(normalizer.normalize(" \n\t "), " ");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let normalizer = TextNormalizer::new();
        let inputs = ["a  b", "  lead", "trail\n", "x\n\ny", "already clean", ""];

        for input in inputs {
            let once = normalizer.normalize(input);
            assert_eq!(normalizer.normalize(&once), once);
        }
    }
}
