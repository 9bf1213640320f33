//! Penn Treebank flavoured rewrite tables

use crate::charclass::{CharClass, CharacterClasses};
use crate::error::Result;
use crate::rules::{Rule, RuleTable};

/// Stand-in for `...` while the splitting rules run
pub(crate) const ELLIPSIS_MARKER: &str = "_ELLIPSIS_";

/// Penn rewrite tables, split around ellipsis masking and period resolution
#[derive(Debug)]
pub(crate) struct PennRules {
    /// Whitespace cleanup and directional quotes
    pub quotes: RuleTable,
    /// Comma, symbol, bracket and contraction splitting
    pub splits: RuleTable,
    /// Space cleanup after period resolution, escaping excluded
    pub cleanup: RuleTable,
}

impl PennRules {
    pub(crate) fn build(classes: &CharacterClasses, alnum: &CharClass) -> Result<Self> {
        Ok(Self {
            quotes: quote_rules()?,
            splits: split_rules(classes, alnum)?,
            cleanup: RuleTable::from_patterns(&[("  *", " "), ("^ *", ""), (" *$", "")])?,
        })
    }
}

fn quote_rules() -> Result<RuleTable> {
    RuleTable::from_patterns(&[
        (r"\s+", " "),
        (r"[\x00-\x1f]", ""),
        // directional quotes
        (r"^``", "`` "),
        (r#"^""#, "`` "),
        (r"^`([^`])", "` ${1}"),
        (r"^'", "`  "),
        (r#"([ (\[{<])""#, "${1} `` "),
        (r"([ (\[{<])``", "${1} `` "),
        (r"([ (\[{<])`([^`])", "${1} ` ${2}"),
        (r"([ (\[{<])'", "${1} ` "),
    ])
}

fn split_rules(classes: &CharacterClasses, alnum: &CharClass) -> Result<RuleTable> {
    let n = classes.numeric.expr();
    let sc = classes.currency.expr();
    let so = classes.symbol.expr();
    let an = alnum.expr();

    let mut table = RuleTable::new();
    for (pattern, replacement) in [
        (format!(r"([^{n}])[,]([^{n}])"), "${1} , ${2}"),
        (format!(r"({n})[,]([^{n}])"), "${1} , ${2}"),
        (format!(r"([^{n}])[,]({n})"), "${1} , ${2}"),
        (format!(r"([;:@#$%\&{sc}{so}])"), " ${1} "),
        (format!(r"({an})/({an})"), "${1} @/@ ${2}"),
    ] {
        table.push(Rule::regex(&pattern, replacement)?);
    }

    table.append(RuleTable::from_patterns(&[
        (r#"([^.])([.])([\])}>"']*) ?$"#, "${1} ${2}${3}"),
        (r"([?!])", " ${1} "),
        (r"([\]\[(){}<>])", " ${1} "),
    ])?);
    table.append(RuleTable::from_literals(&[
        ("(", "-LRB-"),
        (")", "-RRB-"),
        ("[", "-LSB-"),
        ("]", "-RSB-"),
        ("{", "-LCB-"),
        ("}", "-RCB-"),
        ("--", " -- "),
    ]));
    table.append(RuleTable::from_patterns(&[
        ("^", " "),
        ("$", " "),
        ("\"", " '' "),
        (r"([^'])' ", "${1} ' "),
        (r"([^'])'", "${1} ' "),
        // contractions
        (r"'([sSmMdD]) ", " '${1} "),
        ("'ll ", " 'll "),
        ("'re ", " 're "),
        ("'ve ", " 've "),
        ("n't ", " n't "),
        ("'LL ", " 'LL "),
        ("'RE ", " 'RE "),
        ("'VE ", " 'VE "),
        ("N'T ", " N'T "),
        (" ([Cc])annot ", " ${1}an not "),
        (" ([Dd])'ye ", " ${1}' ye "),
        (" ([Gg])imme ", " ${1}im me "),
        (" ([Gg])onna ", " ${1}on na "),
        (" ([Gg])otta ", " ${1}ot ta "),
        (" ([Ll])emme ", " ${1}em me "),
        (" ([Mm])ore'n ", " ${1}ore 'n "),
        (" '([Tt])is ", " '${1} is "),
        (" '([Tt])was ", " '${1} was "),
        (" ([Ww])anna ", " ${1}an na "),
    ])?);
    Ok(table)
}
