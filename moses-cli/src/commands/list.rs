//! List command implementation

use anyhow::Result;
use moses_core::{available_prefix_languages, Language};
use std::io::{self, Write};

/// Print every language with dedicated rules and whether it has
/// built-in non-breaking prefixes
pub fn languages() -> Result<()> {
    let with_prefixes = available_prefix_languages();
    let mut out = io::stdout().lock();

    writeln!(out, "Available languages:")?;
    for language in Language::known() {
        let marker = if with_prefixes.contains(&language.code()) {
            "prefixes"
        } else {
            "-"
        };
        writeln!(
            out,
            "  {:<4} {:<24} {}",
            language.code(),
            language.name(),
            marker
        )?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Any other alphabetic code is accepted and uses the generic rules."
    )?;
    Ok(())
}
