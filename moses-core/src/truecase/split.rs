//! Splitting truecaser input into markup tags and words

use super::static_regex;
use crate::error::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

static TAG: OnceLock<Regex> = OnceLock::new();
static WORD: OnceLock<Regex> = OnceLock::new();
static ANY: OnceLock<Regex> = OnceLock::new();
static FACTOR_PIPES: OnceLock<Regex> = OnceLock::new();

/// Split a tokenized line into tag and word tokens
///
/// A tag written directly after a word ending in `|` is a factor value and
/// stays glued to that word. Lines that cannot be decomposed, such as ones
/// with embedded newlines, are reported as [`Error::MalformedXml`].
pub fn split_xml(line: &str) -> Result<Vec<String>> {
    let tag = static_regex(&TAG, r"^\s*(<\S[^>]*>)(.*)$");
    let word = static_regex(&WORD, r"^\s*([^\s<>]+)(.*)$");
    let any = static_regex(&ANY, r"^\s*(\S+)(.*)$");
    let factor_pipes = static_regex(&FACTOR_PIPES, r"^(\|+)(.*)$");

    let mut rest = line.trim();
    let mut tokens: Vec<String> = Vec::new();

    while !rest.is_empty() {
        if let Some(caps) = tag.captures(rest) {
            let markup = group(&caps, 1);
            let mut next = group(&caps, 2);
            let attached = !rest.starts_with(char::is_whitespace);
            match tokens.last_mut() {
                Some(last) if attached && last.ends_with('|') => {
                    last.push_str(markup);
                    if let Some(pipes) = factor_pipes.captures(next) {
                        last.push_str(group(&pipes, 1));
                        next = group(&pipes, 2);
                    }
                }
                _ => tokens.push(markup.to_string()),
            }
            rest = next;
        } else if let Some(caps) = word.captures(rest).or_else(|| any.captures(rest)) {
            tokens.push(group(&caps, 1).to_string());
            rest = group(&caps, 2);
        } else {
            return Err(Error::MalformedXml(format!("cannot split `{rest}`")));
        }
    }
    Ok(tokens)
}

fn group<'t>(caps: &regex::Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}
