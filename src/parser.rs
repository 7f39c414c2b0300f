use itertools::Itertools;

use crate::brackets;
use crate::error::SolverError;
use crate::symbols::{
    is_special, BinaryOperator, CLOSING_BRACKET, FALSE_SIGN, NOT_SIGN, OPENING_BRACKET, TRUE_SIGN,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    False,
    True,
    Var(String),
    Not(Box<Expr>),
    BinaryOp(BinaryOperator, Box<Expr>, Box<Expr>),
}

/// A parsed formula: the syntax tree plus its distinct variables in order of
/// first appearance (left to right, depth first). The variable order fixes
/// truth-table column order and row bit-weighting, so it is part of the
/// observable contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFormula {
    pub vars: Vec<String>,
    pub expr: Expr,
}

impl ParsedFormula {
    /// Parses a normalized formula. Bracket validation gates the descent.
    pub fn parse(normalized: &str) -> Result<Self, SolverError> {
        let chars: Vec<char> = normalized.chars().collect();
        brackets::matching_brackets(&chars)?;

        let (vars, expr) = build_expr(&chars)?;
        Ok(Self { vars, expr })
    }
}

/// Strips negations and bracket pairs that wrap the whole slice, repeating
/// until neither applies. Returns the accumulated negation parity and the
/// minimally wrapped slice. A negation sign still attached to a minimal
/// token is resolved by [`minimal_expr`], which folds it into the parity.
fn polish(mut chars: &[char]) -> (bool, &[char]) {
    let mut negated = false;
    loop {
        let to_check = match chars.first() {
            Some(&c) if c == NOT_SIGN => &chars[1..],
            _ => chars,
        };

        if !surrounded(to_check) {
            return (negated, chars);
        }

        if chars[0] == NOT_SIGN {
            negated = !negated;
            chars = &chars[1..];
        }
        chars = &chars[1..chars.len() - 1];
    }
}

/// Whether one bracket pair encloses the whole slice: the depth may only
/// return to zero at the final character.
fn surrounded(chars: &[char]) -> bool {
    if chars.len() <= 1 {
        return false;
    }

    let mut depth = 0i32;
    for (idx, &c) in chars.iter().enumerate() {
        if c == OPENING_BRACKET {
            depth += 1;
        } else if c == CLOSING_BRACKET {
            depth -= 1;
        }

        if depth == 0 && idx != chars.len() - 1 {
            return false;
        }
    }
    true
}

/// Recursive descent over a polished slice: resolve minimal tokens directly,
/// otherwise split at the top-level operator selected by the hierarchy and
/// recurse into both operands.
fn build_expr(chars: &[char]) -> Result<(Vec<String>, Expr), SolverError> {
    let (negated, chars) = polish(chars);

    if chars.len() <= 2 {
        return minimal_expr(negated, chars);
    }

    // after every completed operand at bracket depth zero the next character
    // must be a binary connective; collect them all in position order
    let mut operators: Vec<(usize, BinaryOperator)> = Vec::new();
    let mut depth = 0i32;
    let mut idx = 0;
    while idx < chars.len() - 1 {
        let c = chars[idx];
        if c == OPENING_BRACKET {
            depth += 1;
        } else if c == CLOSING_BRACKET {
            depth -= 1;
        }

        if c != NOT_SIGN && depth == 0 {
            match BinaryOperator::from_sign(chars[idx + 1]) {
                Some(op) => operators.push((idx + 1, op)),
                None => {
                    return Err(SolverError::invalid_character(
                        chars,
                        idx + 1,
                        "expected operator",
                    ))
                }
            }
            idx += 1;
        }
        idx += 1;
    }

    let (split, op) = BinaryOperator::HIERARCHY
        .into_iter()
        .find_map(|wanted| operators.iter().copied().find(|&(_, op)| op == wanted))
        .ok_or_else(|| {
            SolverError::invalid_character(chars, chars.len() - 1, "expected operator")
        })?;

    let (left_vars, left) = build_expr(&chars[..split])?;
    let (right_vars, right) = build_expr(&chars[split + 1..])?;

    let vars = left_vars.into_iter().chain(right_vars).unique().collect();
    let expr = Expr::BinaryOp(op, Box::new(left), Box::new(right));

    Ok((vars, wrap_negated(negated, expr)))
}

/// A minimal token is one variable character or one constant sign, with an
/// optional negation prefix that folds into the parity.
fn minimal_expr(negated: bool, chars: &[char]) -> Result<(Vec<String>, Expr), SolverError> {
    let (negated, token) = match chars.first() {
        Some(&c) if c == NOT_SIGN => (!negated, &chars[1..]),
        _ => (negated, chars),
    };

    match *token {
        [c] if c == TRUE_SIGN => Ok((vec![], wrap_negated(negated, Expr::True))),
        [c] if c == FALSE_SIGN => Ok((vec![], wrap_negated(negated, Expr::False))),
        [c] if !is_special(c) => {
            let name = c.to_string();
            Ok((vec![name.clone()], wrap_negated(negated, Expr::Var(name))))
        }
        _ => {
            let offset = chars.len() - token.len();
            let bad = token
                .iter()
                .position(|&c| is_special(c))
                .unwrap_or_else(|| token.len().saturating_sub(1));
            Err(SolverError::invalid_character(
                chars,
                offset + bad,
                "expected variable or constant",
            ))
        }
    }
}

fn wrap_negated(negated: bool, expr: Expr) -> Expr {
    if negated {
        Expr::Not(Box::new(expr))
    } else {
        expr
    }
}

/// Serializes a tree back to canonical infix notation. The root level stays
/// unbracketed; every nested binary operator gets exactly one bracket pair,
/// and negation binds without brackets of its own.
pub fn reconstruct(expr: &Expr) -> String {
    reconstruct_level(expr, true)
}

fn reconstruct_level(expr: &Expr, root: bool) -> String {
    match expr {
        Expr::True => TRUE_SIGN.to_string(),
        Expr::False => FALSE_SIGN.to_string(),
        Expr::Var(name) => name.clone(),
        Expr::Not(child) => format!("{}{}", NOT_SIGN, reconstruct_level(child, false)),
        Expr::BinaryOp(op, left, right) => {
            let body = format!(
                "{} {} {}",
                reconstruct_level(left, false),
                op.sign(),
                reconstruct_level(right, false)
            );
            if root {
                body
            } else {
                format!("({body})")
            }
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", reconstruct(self))
    }
}
