//! Casing statistics from tokenized text

use super::{is_xml_tag, static_regex, DELAYED_SENT_START, SENT_END};
use super::model::CasingStats;
use regex::Regex;
use std::sync::OnceLock;

static CASED_LETTER: OnceLock<Regex> = OnceLock::new();

fn has_cased_letter(token: &str) -> bool {
    static_regex(&CASED_LETTER, r"[\p{Ll}\p{Lu}\p{Lt}]").is_match(token)
}

/// Per-token weights for one sentence as `(lowercase, surface, weight)`
///
/// Sentence-initial words carry no casing evidence unless
/// `possibly_use_first_token` is set, in which case a lowercase initial
/// word counts fully and a capitalized one counts a tenth, but only when it
/// is the whole sentence.
pub(crate) fn sentence_weights<'a, T: AsRef<str>>(
    tokens: &'a [T],
    possibly_use_first_token: bool,
) -> Vec<(String, &'a str, f64)> {
    let single = tokens.len() == 1;
    let mut is_first_word = true;
    let mut weights = Vec::new();

    for token in tokens.iter().map(AsRef::as_ref) {
        if is_xml_tag(token) || DELAYED_SENT_START.contains(&token) {
            continue;
        }
        if !is_first_word && SENT_END.contains(&token) {
            is_first_word = true;
            continue;
        }
        if !has_cased_letter(token) {
            continue;
        }

        let weight = if !is_first_word {
            1.0
        } else if !possibly_use_first_token {
            0.0
        } else if token.chars().next().is_some_and(char::is_lowercase) {
            1.0
        } else if single {
            0.1
        } else {
            0.0
        };

        if weight > 0.0 {
            weights.push((token.to_lowercase(), token, weight));
        }
        is_first_word = false;
    }
    weights
}

/// Accumulate casing statistics over many sentences
pub(crate) fn accumulate<D, S, T>(
    stats: &mut CasingStats,
    documents: D,
    possibly_use_first_token: bool,
) where
    D: IntoIterator<Item = S>,
    S: AsRef<[T]>,
    T: AsRef<str>,
{
    for sentence in documents {
        for (lower, surface, weight) in
            sentence_weights(sentence.as_ref(), possibly_use_first_token)
        {
            stats.add(&lower, surface, weight);
        }
    }
}
