//! Moses-compatible text normalization
//!
//! This crate reproduces the preprocessing scripts of the Moses statistical
//! machine translation toolkit: punctuation normalization, tokenization
//! (Moses and Penn Treebank flavours), detokenization, truecasing and
//! detruecasing. Output is meant to match the reference scripts token for
//! token, including their language-specific quirks.
//!
//! # Architecture
//!
//! - **Data**: Unicode character classes ([`CharacterClasses`]) and
//!   per-language non-breaking prefixes ([`NonBreakingPrefixes`]), built
//!   once and shared read-only
//! - **Rules**: ordered rewrite tables ([`RuleTable`]) compiled at
//!   construction time
//! - **Components**: [`Tokenizer`], [`Detokenizer`], [`Truecaser`],
//!   [`Detruecaser`] and [`PunctNormalizer`], each safe to share across
//!   threads once built
//!
//! # Example
//!
//! ```rust
//! use moses_core::{Detokenizer, TokenizeOptions, Tokenizer};
//!
//! let tokenizer = Tokenizer::new("en").unwrap();
//! let tokens = tokenizer.tokenize("Hello, world!", &TokenizeOptions::default());
//! assert_eq!(tokens, vec!["Hello", ",", "world", "!"]);
//!
//! let detokenizer = Detokenizer::new("en").unwrap();
//! assert_eq!(detokenizer.detokenize(&tokens), "Hello, world!");
//! ```

pub mod batch;
pub mod charclass;
pub mod config;
pub mod detokenizer;
pub mod error;
pub mod escape;
pub mod language;
pub mod normalizer;
pub mod rules;
pub mod tokenizer;
pub mod truecase;

pub use charclass::{is_cjk, CharClass, CharacterClasses};
pub use config::MosesConfig;
pub use detokenizer::{DetokenizeOptions, Detokenizer, DetokenizerBuilder};
pub use error::{Error, Result};
pub use escape::{escape_xml, escape_xml_penn, unescape_xml};
pub use language::{available_prefix_languages, Language, NonBreakingPrefixes};
pub use normalizer::{PunctNormalizer, PunctNormalizerBuilder};
pub use rules::{Rule, RuleTable};
pub use tokenizer::{ProtectedPatterns, TokenizeOptions, Tokenizer, TokenizerBuilder};
pub use truecase::{split_xml, CasingModel, Detruecaser, Truecaser, TruecaserBuilder};
