//! Integration tests for the Moses and Penn tokenizers

use moses_core::{ProtectedPatterns, TokenizeOptions, Tokenizer};

fn split(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

#[test]
fn test_symbols_are_padded() {
    let tokenizer = Tokenizer::new("en").unwrap();
    let text = "This, is a sentence with weird\u{bb} symbols\u{2026} appearing everywhere\u{bf}";
    assert_eq!(
        tokenizer.tokenize_to_string(text, &TokenizeOptions::default()),
        "This , is a sentence with weird \u{bb} symbols \u{2026} appearing everywhere \u{bf}"
    );
}

#[test]
fn test_final_period_and_numeric_only_prefix() {
    let tokenizer = Tokenizer::new("en").unwrap();
    let options = TokenizeOptions::default();
    assert_eq!(
        tokenizer.tokenize("abc def.", &options),
        vec!["abc", "def", "."]
    );
    assert_eq!(
        tokenizer.tokenize("2016, pp.", &options),
        vec!["2016", ",", "pp", "."]
    );
}

#[test]
fn test_escape_switch() {
    let tokenizer = Tokenizer::new("en").unwrap();
    let text = "This ain't funny. It's actually hillarious, yet double Ls. | [] < > [ ] & You're gonna shake it off? Don't?";

    let escaped = tokenizer.tokenize(text, &TokenizeOptions::default());
    assert_eq!(
        escaped,
        split(
            "This ain &apos;t funny . It &apos;s actually hillarious , yet double Ls . \
             &#124; &#91; &#93; &lt; &gt; &#91; &#93; &amp; You &apos;re gonna shake it off ? \
             Don &apos;t ?"
        )
    );

    let raw = tokenizer.tokenize(text, &TokenizeOptions::default().escape(false));
    assert_eq!(
        raw,
        split(
            "This ain 't funny . It 's actually hillarious , yet double Ls . \
             | [ ] < > [ ] & You 're gonna shake it off ? Don 't ?"
        )
    );
}

#[test]
fn test_quoted_word() {
    let tokenizer = Tokenizer::new("en").unwrap();
    assert_eq!(
        tokenizer.tokenize("this 'is' the thing", &TokenizeOptions::default()),
        vec!["this", "&apos;", "is", "&apos;", "the", "thing"]
    );
    assert_eq!(
        tokenizer.tokenize("'Hello.'", &TokenizeOptions::default()),
        vec!["&apos;Hello", ".", "&apos;"]
    );
}

#[test]
fn test_aggressive_dash_split() {
    let tokenizer = Tokenizer::new("en").unwrap();
    assert_eq!(
        tokenizer.tokenize("foo-bar", &TokenizeOptions::default()),
        vec!["foo-bar"]
    );
    let options = TokenizeOptions::default().aggressive_dash_splits(true);
    assert_eq!(
        tokenizer.tokenize("foo-bar", &options),
        vec!["foo", "@-@", "bar"]
    );
    assert_eq!(
        tokenizer.tokenize("a-b-c", &options),
        vec!["a", "@-@", "b", "@-@", "c"]
    );
}

#[test]
fn test_brackets_and_abbreviations() {
    let tokenizer = Tokenizer::new("en").unwrap();
    let options = TokenizeOptions::default();
    let text = "By the mid 1990s a version of the game became a Latvian television series (with a parliamentary setting, and played by Latvian celebrities).";
    assert_eq!(
        tokenizer.tokenize(text, &options),
        split("By the mid 1990s a version of the game became a Latvian television series ( with a parliamentary setting , and played by Latvian celebrities ) .")
    );
    let text = "The meeting will take place at 11:00 a.m. Tuesday.";
    assert_eq!(
        tokenizer.tokenize(text, &options),
        split("The meeting will take place at 11 : 00 a.m. Tuesday .")
    );
}

#[test]
fn test_comma_after_number() {
    let tokenizer = Tokenizer::new("en").unwrap();
    let text = "Sie sollten vor dem Upgrade eine Sicherung dieser Daten erstellen (wie unter Abschnitt 4.1.1, \u{201e}Sichern aller Daten und Konfigurationsinformationen\u{201c} beschrieben). ";
    assert_eq!(
        tokenizer.tokenize(text, &TokenizeOptions::default()),
        split("Sie sollten vor dem Upgrade eine Sicherung dieser Daten erstellen ( wie unter Abschnitt 4.1.1 , \u{201e} Sichern aller Daten und Konfigurationsinformationen \u{201c} beschrieben ) .")
    );
}

#[test]
fn test_protected_patterns() {
    let tokenizer = Tokenizer::new("en").unwrap();
    let text = "this is a webpage https://stackoverflow.com/questions/6181381/how-to-print-variables-in-perl that kicks ass";
    let expected = vec![
        "this",
        "is",
        "a",
        "webpage",
        "https://stackoverflow.com/questions/6181381/how-to-print-variables-in-perl",
        "that",
        "kicks",
        "ass",
    ];

    let basic = TokenizeOptions::default().protected_patterns(ProtectedPatterns::basic());
    assert_eq!(tokenizer.tokenize(text, &basic), expected);

    let custom = ProtectedPatterns::compile([concat!(
        r"(?:http|ftp)s?://",
        r"(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]{2,}\.?))",
        r"(?::\d+)?",
        r"(?:/\w+)*",
        r"(?:(?:\.[a-z]+)|/?)"
    )]);
    let options = TokenizeOptions::default().protected_patterns(custom);
    assert_eq!(tokenizer.tokenize(text, &options), expected);
}

#[test]
fn test_placeholder_lookalike_text_is_kept() {
    let tokenizer = Tokenizer::new("en").unwrap();
    let urls = ProtectedPatterns::compile([r"https?://\S+"]);
    let options = TokenizeOptions::default().protected_patterns(urls);
    assert_eq!(
        tokenizer.tokenize("code THISISPROTECTED000 and http://x.org/a", &options),
        vec!["code", "THISISPROTECTED000", "and", "http://x.org/a"]
    );
}

#[test]
fn test_dot_marker_lookalike_text_is_kept() {
    let tokenizer = Tokenizer::new("en").unwrap();
    let options = TokenizeOptions::default();
    assert_eq!(
        tokenizer.tokenize("the DOTMULTI token", &options),
        vec!["the", "DOTMULTI", "token"]
    );
    assert_eq!(
        tokenizer.tokenize("the DOTMULTI and DOTDOTMULTI token...", &options),
        vec!["the", "DOTMULTI", "and", "DOTDOTMULTI", "token", "..."]
    );
}

#[test]
fn test_penn_ellipsis_marker_lookalike_text_is_kept() {
    let tokenizer = Tokenizer::new("en").unwrap();
    assert_eq!(
        tokenizer.penn_tokenize("say _ELLIPSIS_ twice..."),
        split("say _ELLIPSIS_ twice ...")
    );
}

#[test]
fn test_cjk_languages() {
    let options = TokenizeOptions::default();

    let chinese = Tokenizer::new("zh").unwrap();
    assert_eq!(
        chinese.tokenize("记者 应谦 美国", &options),
        vec!["记者", "应谦", "美国"]
    );

    let korean = Tokenizer::new("ko").unwrap();
    assert_eq!(
        korean.tokenize("세계 에서 가장 강력한.", &options),
        vec!["세계", "에서", "가장", "강력한", "."]
    );

    let japanese = Tokenizer::new("ja").unwrap();
    let text = "電話でんわの邪魔じゃまをしないでください";
    assert_eq!(japanese.tokenize(text, &options), vec![text]);

    let english = Tokenizer::new("en").unwrap();
    assert_eq!(
        english.tokenize("Japan is 日本 in Japanese.", &options),
        vec!["Japan", "is", "日", "本", "in", "Japanese", "."]
    );
}

#[test]
fn test_french_elision() {
    let tokenizer = Tokenizer::new("fr").unwrap();
    let text = "L'amitié nous a fait forts d'esprit";
    assert_eq!(
        tokenizer.tokenize(text, &TokenizeOptions::default()),
        split("L&apos; amitié nous a fait forts d&apos; esprit")
    );
}

#[test]
fn test_custom_prefixes_keep_period() {
    let prefixes = moses_core::NonBreakingPrefixes::parse("Approx\n").unwrap();
    let tokenizer = Tokenizer::builder()
        .language("en")
        .custom_prefixes(prefixes)
        .build()
        .unwrap();
    assert_eq!(
        tokenizer.tokenize("It weighs Approx. 5 kg", &TokenizeOptions::default()),
        vec!["It", "weighs", "Approx.", "5", "kg"]
    );
    // the built-in list is still active
    assert_eq!(
        tokenizer.tokenize("Mr. Smith left.", &TokenizeOptions::default()),
        vec!["Mr.", "Smith", "left", "."]
    );
}

#[test]
fn test_penn_tokenize() {
    let tokenizer = Tokenizer::new("en").unwrap();
    assert_eq!(
        tokenizer.penn_tokenize("Good muffins cost $3.88 in New York."),
        split("Good muffins cost $ 3.88 in New York .")
    );
    assert_eq!(
        tokenizer.penn_tokenize("(hi) and/or"),
        split("-LRB- hi -RRB- and @/@ or")
    );
}
