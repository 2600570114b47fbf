//! English stopword table for the heuristic analyzer.

/// Closed-class English words. Lookup is case-insensitive.
static STOPWORDS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "some", "any", "each", "every", "no",
    "and", "or", "but", "nor", "so", "yet", "if", "then", "else", "because", "although", "while",
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "to", "from", "up", "down", "out", "off",
    "over", "under", "again", "further", "here", "there", "where", "when", "why", "how",
    "i", "me", "my", "mine", "we", "us", "our", "ours", "you", "your", "yours", "he", "him",
    "his", "she", "her", "hers", "it", "its", "they", "them", "their", "theirs", "who", "whom",
    "which", "what", "whose", "is", "am", "are", "was", "were", "be", "been", "being", "have",
    "has", "had", "having", "do", "does", "did", "doing", "will", "would", "shall", "should",
    "can", "could", "may", "might", "must", "not", "only", "own", "same", "than", "too", "very",
    "just", "also", "both", "more", "most", "other", "such", "as", "all",
];

/// Case-insensitive stopword check.
pub fn is_stopword(word: &str) -> bool {
    let lower = word.to_lowercase();
    STOPWORDS.contains(&lower.as_str())
}
