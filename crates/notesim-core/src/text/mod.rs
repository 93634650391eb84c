//! Text processing utilities for tokenization

pub mod stopwords;

use regex::Regex;
use std::sync::OnceLock;

pub use stopwords::StopWords;

/// Runs of Hangul syllables or ASCII Latin letters
static WORD_RE: OnceLock<Regex> = OnceLock::new();

/// Unicode word runs of two or more characters, as seen by the vectorizer
static VECTOR_TOKEN_RE: OnceLock<Regex> = OnceLock::new();

fn word_re() -> &'static Regex {
    WORD_RE.get_or_init(|| Regex::new(r"[가-힣]+|[a-zA-Z]+").expect("valid regex"))
}

fn vector_token_re() -> &'static Regex {
    VECTOR_TOKEN_RE.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("valid regex"))
}

/// Split prose into Latin-letter runs and Hangul runs, lowercasing Latin.
///
/// Digits, punctuation, and other scripts act as separators.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    word_re()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Tokenize a pseudo-document for the TF-IDF vector space.
///
/// Lowercases, then keeps Unicode word runs of at least two characters, so
/// structural phrases like "Getting Started" contribute "getting" and "started".
pub fn vectorizer_tokens(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    vector_token_re()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        let tokens = tokenize("Hello world! This is a test.");
        assert_eq!(tokens, vec!["hello", "world", "this", "is", "a", "test"]);
    }

    #[test]
    fn test_tokenize_drops_digits_and_punctuation() {
        let tokens = tokenize("rust2024 edition, v1.85");
        assert_eq!(tokens, vec!["rust", "edition", "v"]);
    }

    #[test]
    fn test_tokenize_hangul_runs() {
        let tokens = tokenize("지식 그래프와 Graph 이론");
        assert_eq!(tokens, vec!["지식", "그래프와", "graph", "이론"]);
    }

    #[test]
    fn test_tokenize_splits_mixed_script() {
        let tokens = tokenize("API를 호출");
        assert_eq!(tokens, vec!["api", "를", "호출"]);
    }

    #[test]
    fn test_tokenize_ignores_other_scripts() {
        let tokens = tokenize("café naïve");
        assert_eq!(tokens, vec!["caf", "na", "ve"]);
    }

    #[test]
    fn test_vectorizer_tokens_split_phrases() {
        let tokens = vectorizer_tokens("Getting Started rust rust a");
        assert_eq!(tokens, vec!["getting", "started", "rust", "rust"]);
    }

    #[test]
    fn test_vectorizer_tokens_keep_digits_and_hangul() {
        let tokens = vectorizer_tokens("HTTP2 지식 x_y");
        assert_eq!(tokens, vec!["http2", "지식", "x_y"]);
    }
}
