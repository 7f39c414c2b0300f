use lazy_static::lazy_static;

use crate::symbols::{
    AND_SIGN, EQUAL_SIGN, FALSE_SIGN, IF_SIGN, NAND_SIGN, NOR_SIGN, NOT_SIGN, OR_SIGN, TRUE_SIGN,
    UNEQUAL_SIGN, XOR_SIGN,
};

lazy_static! {
    /// Alias-to-sign table, applied by plain substring replacement in order.
    /// Longer aliases come before the aliases they contain ("unequals" before
    /// "equal", "!=" before "!", "nand" before "and"), so every listed alias
    /// can actually match.
    static ref REPLACEMENTS: Vec<(&'static str, char)> = vec![
        ("true", TRUE_SIGN),
        ("false", FALSE_SIGN),
        ("unequals", UNEQUAL_SIGN),
        ("unequal", UNEQUAL_SIGN),
        ("!=", UNEQUAL_SIGN),
        ("equals", EQUAL_SIGN),
        ("equal", EQUAL_SIGN),
        ("==", EQUAL_SIGN),
        ("nand", NAND_SIGN),
        ("nor", NOR_SIGN),
        ("xor", XOR_SIGN),
        ("and", AND_SIGN),
        ("&&", AND_SIGN),
        ("or", OR_SIGN),
        ("||", OR_SIGN),
        ("not", NOT_SIGN),
        ("!", NOT_SIGN),
        ("-", NOT_SIGN),
        ("if", IF_SIGN),
        (">", IF_SIGN),
        ("=", EQUAL_SIGN),
    ];
}

/// Normalizes raw formula text into the canonical sign alphabet: replaces
/// aliases, lower-cases, strips whitespace, drops a dangling trailing
/// negation and cancels doubled negations. Total; malformed input surfaces
/// during validation and parsing.
pub fn normalize(expression: &str) -> String {
    let mut text = expression.to_string();
    for (alias, sign) in REPLACEMENTS.iter() {
        text = text.replace(alias, &sign.to_string());
    }

    let mut text: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    // a dangling trailing negation (or a whole run of them) negates nothing
    while text.ends_with(NOT_SIGN) {
        text.pop();
    }

    remove_redundant_negations(text)
}

/// Cancels adjacent negation pairs until none remain.
fn remove_redundant_negations(mut text: String) -> String {
    let pair: String = [NOT_SIGN, NOT_SIGN].iter().collect();
    while text.contains(&pair) {
        text = text.replace(&pair, "");
    }
    text
}
