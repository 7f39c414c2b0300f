use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::parser::Expr;
use crate::symbols::{FALSE_SIGN, TRUE_SIGN};

/// Per-row variable bindings. Built fresh for every row and passed down the
/// evaluation explicitly, so independent rows (and independent subtrees in
/// the simplifier) evaluate without shared state.
pub type Environment = FxHashMap<String, bool>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub assignment: Vec<bool>,
    pub result: bool,
    pub trace: String,
}

/// The exhaustive truth table of a formula over an ordered variable set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    pub vars: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl TruthTable {
    /// Builds all 2^N rows and evaluates `expr` under each assignment. Rows
    /// are independent, so they evaluate in parallel.
    pub fn build(vars: &[String], expr: &Expr) -> Self {
        let rows = (0..1usize << vars.len())
            .into_par_iter()
            .map(|row| {
                let assignment = row_assignment(vars.len(), row);
                let env: Environment = vars
                    .iter()
                    .cloned()
                    .zip(assignment.iter().copied())
                    .collect();
                let (result, trace) = evaluate_traced(expr, &env);
                TableRow {
                    assignment,
                    result,
                    trace,
                }
            })
            .collect();

        Self {
            vars: vars.to_vec(),
            rows,
        }
    }

    /// The result column, row by row.
    pub fn results(&self) -> Vec<bool> {
        self.rows.iter().map(|row| row.result).collect()
    }
}

/// Row `row` assigns the variable at position `i` the bit
/// `(row >> (n - 1 - i)) & 1`: row zero is all-false and the leftmost
/// variable toggles slowest.
pub fn row_assignment(n: usize, row: usize) -> Vec<bool> {
    (0..n).map(|i| (row >> (n - 1 - i)) & 1 == 1).collect()
}

/// Evaluates the tree under the given bindings. Both operands of a binary
/// node are always evaluated; there is no short-circuiting, so the traced
/// variant visits exactly the same nodes.
///
/// A variable without a binding is an invariant violation (the parser puts
/// every variable into the set the table was built over) and panics rather
/// than producing a wrong row.
pub fn evaluate(expr: &Expr, env: &Environment) -> bool {
    match expr {
        Expr::True => true,
        Expr::False => false,
        Expr::Var(name) => *env
            .get(name)
            .unwrap_or_else(|| panic!("unbound variable '{name}'")),
        Expr::Not(child) => !evaluate(child, env),
        Expr::BinaryOp(op, left, right) => {
            let left = evaluate(left, env);
            let right = evaluate(right, env);
            op.apply(left, right)
        }
    }
}

/// Evaluates while rendering the row trace: every intermediate result is
/// substituted inline between the traces of its operands. Negation keeps
/// only its own result, matching the table layout this feeds.
pub fn evaluate_traced(expr: &Expr, env: &Environment) -> (bool, String) {
    match expr {
        Expr::True => (true, TRUE_SIGN.to_string()),
        Expr::False => (false, FALSE_SIGN.to_string()),
        Expr::Var(name) => {
            let value = *env
                .get(name)
                .unwrap_or_else(|| panic!("unbound variable '{name}'"));
            (value, bit(value).to_string())
        }
        Expr::Not(child) => {
            let (child_value, _) = evaluate_traced(child, env);
            let value = !child_value;
            (value, format!(" {}", bit(value)))
        }
        Expr::BinaryOp(op, left, right) => {
            let (left_value, left_trace) = evaluate_traced(left, env);
            let (right_value, right_trace) = evaluate_traced(right, env);
            let value = op.apply(left_value, right_value);
            (value, format!(" {left_trace} {} {right_trace} ", bit(value)))
        }
    }
}

/// The result column of `expr` over exactly `vars`, packed into a bit vector
/// with bit `row` of the vector holding row `row`. Traceless; this is the
/// evaluation path the simplifier compares signatures with.
pub fn signature_bits(expr: &Expr, vars: &[String]) -> Vec<u64> {
    let n = vars.len();
    let rows = 1usize << n;
    let mut bits = vec![0u64; words(rows)];

    let mut env = Environment::default();
    for row in 0..rows {
        for (i, var) in vars.iter().enumerate() {
            env.insert(var.clone(), (row >> (n - 1 - i)) & 1 == 1);
        }
        if evaluate(expr, &env) {
            bits[row / 64] |= 1 << (row % 64);
        }
    }
    bits
}

/// The assignment column of the variable at `position` among `n` variables,
/// packed like [`signature_bits`].
pub fn variable_bits(position: usize, n: usize) -> Vec<u64> {
    let rows = 1usize << n;
    let mut bits = vec![0u64; words(rows)];
    for row in 0..rows {
        if (row >> (n - 1 - position)) & 1 == 1 {
            bits[row / 64] |= 1 << (row % 64);
        }
    }
    bits
}

pub fn all_ones(bits: &[u64], rows: usize) -> bool {
    (0..rows).all(|row| bits[row / 64] >> (row % 64) & 1 == 1)
}

pub fn all_zeros(bits: &[u64]) -> bool {
    bits.iter().all(|&word| word == 0)
}

const fn words(rows: usize) -> usize {
    (rows + 63) / 64
}

const fn bit(value: bool) -> char {
    if value {
        TRUE_SIGN
    } else {
        FALSE_SIGN
    }
}
