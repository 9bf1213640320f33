use super::{DELAYED_SENT_START, SENT_END};

/// Function words left lowercase in headline mode
const ALWAYS_LOWER: [&str; 33] = [
    "a", "after", "against", "and", "any", "as", "at", "be", "because", "between", "by",
    "during", "for", "from", "his", "in", "is", "its", "last", "not", "of", "off", "on",
    "than", "the", "their", "this", "to", "was", "were", "which", "will", "with",
];

/// Heuristic recaser for lowercased output
#[derive(Debug, Clone, Copy, Default)]
pub struct Detruecaser;

impl Detruecaser {
    pub fn new() -> Self {
        Self
    }

    /// Capitalize sentence starts; in headline mode also every token
    /// outside the function-word list
    pub fn detruecase_tokens<S: AsRef<str>>(
        &self,
        tokens: &[S],
        is_headline: bool,
    ) -> Vec<String> {
        let mut sentence_start = true;
        let mut cased = Vec::with_capacity(tokens.len());

        for token in tokens.iter().map(AsRef::as_ref) {
            let capitalize = sentence_start
                || (is_headline
                    && !ALWAYS_LOWER.contains(&token)
                    && !token.starts_with("al-")
                    && !token.starts_with("el-"));
            cased.push(if capitalize {
                upper_first(token)
            } else {
                token.to_string()
            });

            if SENT_END.contains(&token) {
                sentence_start = true;
            } else if !DELAYED_SENT_START.contains(&token) {
                sentence_start = false;
            }
        }
        cased
    }

    /// [`Detruecaser::detruecase_tokens`] over a whitespace-tokenized line
    pub fn detruecase(&self, text: &str, is_headline: bool) -> Vec<String> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        self.detruecase_tokens(&tokens, is_headline)
    }

    pub fn detruecase_to_string(&self, text: &str, is_headline: bool) -> String {
        self.detruecase(text, is_headline).join(" ")
    }
}

fn upper_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_start() {
        let detruecaser = Detruecaser::new();
        assert_eq!(
            detruecaser.detruecase_to_string("the adventures of Sherlock Holmes", false),
            "The adventures of Sherlock Holmes"
        );
    }

    #[test]
    fn test_headline() {
        let detruecaser = Detruecaser::new();
        assert_eq!(
            detruecaser.detruecase_to_string("the adventures of Sherlock Holmes", true),
            "The Adventures of Sherlock Holmes"
        );
        assert_eq!(
            detruecaser.detruecase("news from al-jazeera", true),
            vec!["News", "from", "al-jazeera"]
        );
    }

    #[test]
    fn test_restarts_after_sentence_end() {
        let detruecaser = Detruecaser::new();
        assert_eq!(
            detruecaser.detruecase_to_string("hello . ( \" world \" ) again", false),
            "Hello . ( \" World \" ) again"
        );
    }

    #[test]
    fn test_token_list_input() {
        let detruecaser = Detruecaser::new();
        let tokens: Vec<String> = ["the", "end", ".", "of"].map(String::from).to_vec();
        assert_eq!(
            detruecaser.detruecase_tokens(&tokens, false),
            vec!["The", "end", ".", "Of"]
        );
        assert!(detruecaser.detruecase_tokens::<&str>(&[], true).is_empty());
    }

    #[test]
    fn test_non_ascii_first_letter() {
        assert_eq!(upper_first("élan"), "Élan");
        assert_eq!(upper_first(""), "");
    }
}
