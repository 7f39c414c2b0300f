use itertools::Itertools;

use crate::parser::Expr;
use crate::symbols::BinaryOperator;
use crate::truth_table::{all_ones, all_zeros, signature_bits, variable_bits};

/// Two-variable result columns, bit `r` = row `r` of the four-row table.
/// Checked in order; the first exact match decides the replacement.
const SIGNATURES: [(u64, Replacement); 8] = [
    (0b1000, Replacement::Gate(BinaryOperator::And)),
    (0b0111, Replacement::Gate(BinaryOperator::Nand)),
    (0b1110, Replacement::Gate(BinaryOperator::Or)),
    (0b0001, Replacement::Gate(BinaryOperator::Nor)),
    (0b0110, Replacement::Gate(BinaryOperator::Xor)),
    (0b1001, Replacement::Gate(BinaryOperator::Equal)),
    (0b1111, Replacement::Constant(true)),
    (0b0000, Replacement::Constant(false)),
];

#[derive(Debug, Clone, Copy)]
enum Replacement {
    Gate(BinaryOperator),
    Constant(bool),
}

/// Rewrites every derived connective into an AND/OR/NOT composition,
/// children first. Afterwards the tree contains only constants, variables,
/// negations, conjunctions and disjunctions.
pub fn rewrite_normal_form(expr: Expr) -> Expr {
    match expr {
        Expr::True | Expr::False | Expr::Var(_) => expr,
        Expr::Not(child) => Expr::Not(Box::new(rewrite_normal_form(*child))),
        Expr::BinaryOp(op, left, right) => {
            let left = rewrite_normal_form(*left);
            let right = rewrite_normal_form(*right);
            rewrite_binary(op, left, right)
        }
    }
}

fn rewrite_binary(op: BinaryOperator, left: Expr, right: Expr) -> Expr {
    match op {
        BinaryOperator::And | BinaryOperator::Or => {
            Expr::BinaryOp(op, Box::new(left), Box::new(right))
        }
        // a ⊼ b becomes ¬(a ∧ b)
        BinaryOperator::Nand => Expr::Not(Box::new(and(left, right))),
        // a ⊽ b becomes ¬(a ∨ b)
        BinaryOperator::Nor => Expr::Not(Box::new(or(left, right))),
        // a → b becomes ¬a ∨ b
        BinaryOperator::If => or(negated(left), right),
        // a ↔ b becomes (a ∧ b) ∨ ¬(a ∨ b)
        BinaryOperator::Equal => or(
            and(left.clone(), right.clone()),
            Expr::Not(Box::new(or(left, right))),
        ),
        // a ⇹ b becomes (a ∨ b) ∧ ¬(a ∧ b)
        BinaryOperator::Unequal => and(
            or(left.clone(), right.clone()),
            Expr::Not(Box::new(and(left, right))),
        ),
        // a ⊻ b becomes (a ∧ ¬b) ∨ (¬a ∧ b)
        BinaryOperator::Xor => or(
            and(left.clone(), negated(right.clone())),
            and(negated(left), right),
        ),
    }
}

fn and(left: Expr, right: Expr) -> Expr {
    Expr::BinaryOp(BinaryOperator::And, Box::new(left), Box::new(right))
}

fn or(left: Expr, right: Expr) -> Expr {
    Expr::BinaryOp(BinaryOperator::Or, Box::new(left), Box::new(right))
}

/// Negation without stacking: an already negated operand is unwrapped
/// instead of wrapped a second time.
fn negated(expr: Expr) -> Expr {
    match expr {
        Expr::Not(child) => *child,
        other => Expr::Not(Box::new(other)),
    }
}

/// Bottom-up truth-table simplification over a rewritten tree: every
/// negation and binary node is evaluated over its own free variables and
/// replaced when the result column matches a known signature, a constant
/// column, or a single variable's column. Brute force by construction,
/// exponential in the free-variable count of a subtree.
///
/// A two-variable match may reintroduce a derived connective (⊼, ⊽, ⊻, ↔);
/// the reconstructor handles all nine.
pub fn simplify(expr: Expr) -> Expr {
    match expr {
        Expr::True | Expr::False | Expr::Var(_) => expr,
        Expr::Not(child) => reduce(Expr::Not(Box::new(simplify(*child)))),
        Expr::BinaryOp(op, left, right) => reduce(Expr::BinaryOp(
            op,
            Box::new(simplify(*left)),
            Box::new(simplify(*right)),
        )),
    }
}

fn reduce(expr: Expr) -> Expr {
    let vars = free_variables(&expr);
    let bits = signature_bits(&expr, &vars);
    let rows = 1usize << vars.len();

    if vars.len() == 2 {
        for (signature, replacement) in SIGNATURES {
            if bits[0] == signature {
                return match replacement {
                    Replacement::Constant(true) => Expr::True,
                    Replacement::Constant(false) => Expr::False,
                    Replacement::Gate(op) => Expr::BinaryOp(
                        op,
                        Box::new(Expr::Var(vars[0].clone())),
                        Box::new(Expr::Var(vars[1].clone())),
                    ),
                };
            }
        }
        return expr;
    }

    if all_ones(&bits, rows) {
        return Expr::True;
    }
    if all_zeros(&bits) {
        return Expr::False;
    }

    // a subtree that mirrors one of its own variables is redundant
    for (position, var) in vars.iter().enumerate() {
        if bits == variable_bits(position, vars.len()) {
            return Expr::Var(var.clone());
        }
    }

    expr
}

/// Free variables of a subtree in order of first appearance.
pub fn free_variables(expr: &Expr) -> Vec<String> {
    match expr {
        Expr::True | Expr::False => vec![],
        Expr::Var(name) => vec![name.clone()],
        Expr::Not(child) => free_variables(child),
        Expr::BinaryOp(_, left, right) => free_variables(left)
            .into_iter()
            .chain(free_variables(right))
            .unique()
            .collect(),
    }
}
