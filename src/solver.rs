use crate::error::SolverError;
use crate::normalize::normalize;
use crate::parser::{reconstruct, Expr, ParsedFormula};
use crate::rewriter::{rewrite_normal_form, simplify};
use crate::truth_table::TruthTable;

/// Pipeline switches, mirroring the front-end flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOptions {
    /// Normalize the raw text first (aliases, case, whitespace, doubled
    /// negations). Off means the input is already in canonical signs.
    pub pre_process: bool,
    /// Run the normal-form rewrite and the signature simplification.
    pub optimize: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            pre_process: true,
            optimize: true,
        }
    }
}

/// A solved formula, one field per pipeline stage the display layer consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub normalized: String,
    pub vars: Vec<String>,
    /// The tree as parsed, before any optimization pass.
    pub parsed: Expr,
    /// The final tree; the table is evaluated over this one.
    pub expr: Expr,
    pub table: TruthTable,
}

impl Solution {
    /// Canonical infix form of the final tree.
    pub fn statement(&self) -> String {
        reconstruct(&self.expr)
    }

    /// Canonical infix form of the unoptimized parse.
    pub fn parsed_statement(&self) -> String {
        reconstruct(&self.parsed)
    }
}

/// The single entry point: normalize, validate, parse, optionally optimize,
/// and evaluate the truth table.
pub fn solve(expression: &str, optimize: bool) -> Result<Solution, SolverError> {
    solve_with(
        expression,
        SolveOptions {
            optimize,
            ..SolveOptions::default()
        },
    )
}

pub fn solve_with(expression: &str, options: SolveOptions) -> Result<Solution, SolverError> {
    let normalized = if options.pre_process {
        normalize(expression)
    } else {
        expression.to_string()
    };

    let ParsedFormula { vars, expr: parsed } = ParsedFormula::parse(&normalized)?;

    let expr = if options.optimize {
        simplify(rewrite_normal_form(parsed.clone()))
    } else {
        parsed.clone()
    };

    // the rendered table is always over the final tree, but it keeps the full
    // parse-time variable set even when simplification eliminated variables
    let table = TruthTable::build(&vars, &expr);

    Ok(Solution {
        normalized,
        vars,
        parsed,
        expr,
        table,
    })
}
