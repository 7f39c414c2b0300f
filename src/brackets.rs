use rustc_hash::FxHashMap;

use crate::error::SolverError;
use crate::symbols::{CLOSING_BRACKET, OPENING_BRACKET};

/// Scans the normalized text and returns the opening-to-closing bracket index
/// map. Closers match the nearest unmatched opener (stack discipline).
///
/// Faults: a closer without an opener, a closer directly after its opener
/// (empty pair), or an opener that never closes.
pub fn matching_brackets(chars: &[char]) -> Result<FxHashMap<usize, usize>, SolverError> {
    let mut matches = FxHashMap::default();
    let mut unmatched: Vec<usize> = Vec::new();

    for (idx, &c) in chars.iter().enumerate() {
        if c == OPENING_BRACKET {
            unmatched.push(idx);
        } else if c == CLOSING_BRACKET {
            match unmatched.pop() {
                None => {
                    return Err(SolverError::invalid_bracket(
                        chars,
                        idx,
                        "missing matching opening bracket",
                    ))
                }
                Some(opener) if opener + 1 == idx => {
                    return Err(SolverError::invalid_bracket(chars, idx, "empty brackets"))
                }
                Some(opener) => {
                    matches.insert(opener, idx);
                }
            }
        }
    }

    // report the outermost unclosed opener, the first one still on the stack
    if let Some(&opener) = unmatched.first() {
        return Err(SolverError::invalid_bracket(
            chars,
            opener,
            "missing matching closing bracket",
        ));
    }

    Ok(matches)
}
