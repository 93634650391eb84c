//! Stopword sets for English and Korean

use std::collections::HashSet;

/// The standard English stopword list (NLTK corpus, 179 words)
pub const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Common Korean particles, conjunctions, and function words
pub const KOREAN: &[&str] = &[
    "의", "가", "이", "은", "들", "는", "좀", "잘", "걍", "과", "도", "를", "으로", "자", "에", "와",
    "한", "하다", "그", "저", "것", "수", "등", "년", "월", "일", "있다", "없다", "되다", "하는",
    "한다", "있는", "없는", "대한", "위한", "통해", "매우", "정말", "너무", "조금", "많이", "같은",
    "다른", "새로운", "따라", "또한", "그리고", "하지만", "그러나", "또는", "및", "때문", "이런",
    "저런", "어떤", "무엇", "누구", "언제", "어디", "왜", "어떻게", "이다", "아니다",
];

/// Immutable stopword configuration consulted by the keyword extractor.
///
/// Built once and passed in; nothing here is global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    english: HashSet<String>,
    korean: HashSet<String>,
}

impl StopWords {
    /// Build from explicit word lists
    pub fn new<E, K>(english: E, korean: K) -> Self
    where
        E: IntoIterator,
        E::Item: Into<String>,
        K: IntoIterator,
        K::Item: Into<String>,
    {
        Self {
            english: english.into_iter().map(Into::into).collect(),
            korean: korean.into_iter().map(Into::into).collect(),
        }
    }

    /// No stopwords at all
    pub fn empty() -> Self {
        Self::new(Vec::<String>::new(), Vec::<String>::new())
    }

    /// Extend the English side with additional (lowercased) words
    pub fn with_extra<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.english
            .extend(words.into_iter().map(|w| w.into().to_lowercase()));
        self
    }

    /// Whether the term is a stopword in either language
    pub fn contains(&self, term: &str) -> bool {
        self.english.contains(term) || self.korean.contains(term)
    }

    pub fn english_len(&self) -> usize {
        self.english.len()
    }

    pub fn korean_len(&self) -> usize {
        self.korean.len()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new(ENGLISH.iter().copied(), KOREAN.iter().copied())
    }
}
