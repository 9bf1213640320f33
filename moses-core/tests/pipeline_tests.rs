//! Configuration-driven pipeline: normalize, tokenize, detokenize in batches

use moses_core::batch::map_lines;
use moses_core::{CharacterClasses, Detokenizer, MosesConfig, Tokenizer};
use std::sync::Arc;

#[test]
fn test_config_driven_pipeline() {
    let config = MosesConfig::from_toml_str(
        r#"
[tokenizer]
language = "en"
aggressive_dash_splits = true

[normalizer]
language = "en"
"#,
    )
    .unwrap();

    let normalizer = config.normalizer.builder().build().unwrap();
    let tokenizer = config.tokenizer.builder().build().unwrap();
    let options = config.tokenizer.options().unwrap();

    let lines = vec![
        "“Well-known” facts ( mostly ) !".to_string(),
        "It costs 1\u{a0}000 dollars.".to_string(),
    ];
    let tokenized = map_lines(&lines, 2, |line| {
        tokenizer.tokenize_to_string(&normalizer.normalize(line), &options)
    })
    .unwrap();

    assert_eq!(
        tokenized,
        vec![
            "&quot; Well @-@ known &quot; facts ( mostly ) !",
            "It costs 1.000 dollars .",
        ]
    );
}

#[test]
fn test_shared_character_classes() {
    let classes = Arc::new(CharacterClasses::unicode().unwrap());
    let tokenizer = Tokenizer::builder()
        .language("de")
        .character_classes(Arc::clone(&classes))
        .build()
        .unwrap();
    let detokenizer = Detokenizer::builder()
        .language("de")
        .character_classes(Arc::clone(&classes))
        .build()
        .unwrap();

    let lines = ["Das ist gut.", "Er sagte: Ja!"];
    let restored = map_lines(&lines, 0, |line| {
        let tokens = tokenizer.tokenize(line, &Default::default());
        detokenizer.detokenize(&tokens)
    })
    .unwrap();
    assert_eq!(restored, vec!["Das ist gut.", "Er sagte: Ja!"]);
}
