use pretty_assertions::assert_eq;

use truthtab::parser::Expr;
use truthtab::{solve, solve_with, SolveOptions, SolverError};

#[test]
fn test_and_table() {
    let solution = solve("p and q", false).expect("formula should solve");

    assert_eq!(solution.vars, vec!["p", "q"]);
    assert_eq!(solution.table.rows.len(), 4);

    // rows count up from the all-false assignment; the leftmost variable
    // toggles slowest
    assert_eq!(solution.table.rows[0].assignment, vec![false, false]);
    assert_eq!(solution.table.rows[1].assignment, vec![false, true]);
    assert_eq!(solution.table.rows[2].assignment, vec![true, false]);
    assert_eq!(solution.table.rows[3].assignment, vec![true, true]);
    assert_eq!(solution.table.results(), vec![false, false, false, true]);
}

#[test]
fn test_trace_substitutes_intermediate_results() {
    let solution = solve("p and q", false).expect("formula should solve");
    assert_eq!(solution.table.rows[0].trace, " 0 0 0 ");
    assert_eq!(solution.table.rows[3].trace, " 1 1 1 ");

    let negated = solve("not p", false).expect("formula should solve");
    assert_eq!(negated.table.rows[0].trace, " 1");
    assert_eq!(negated.table.rows[1].trace, " 0");
}

#[test]
fn test_connective_semantics() {
    let cases = vec![
        ("p and q", vec![false, false, false, true]),
        ("p nand q", vec![true, true, true, false]),
        ("p or q", vec![false, true, true, true]),
        ("p nor q", vec![true, false, false, false]),
        ("p xor q", vec![false, true, true, false]),
        ("p if q", vec![true, true, false, true]),
        ("p equal q", vec![true, false, false, true]),
        ("p unequal q", vec![false, true, true, false]),
    ];

    for (formula, expected) in cases {
        let solution = solve(formula, false).expect("formula should solve");
        assert_eq!(solution.table.results(), expected, "evaluating {formula:?}");
    }
}

#[test]
fn test_implication_optimizes_to_or() {
    let solution = solve("p if q", true).expect("formula should solve");
    assert_eq!(solution.statement(), "¬p ∨ q");
    assert_eq!(solution.table.results(), vec![true, true, false, true]);
}

#[test]
fn test_equal_self_is_tautology() {
    let solution = solve("p equal p", true).expect("formula should solve");
    assert_eq!(solution.expr, Expr::True);
    assert!(solution.table.results().into_iter().all(|result| result));

    // the table keeps the parse-time variable set even when the final tree
    // lost it
    assert_eq!(solution.vars, vec!["p"]);
    assert_eq!(solution.table.rows.len(), 2);
}

#[test]
fn test_double_negation_normalizes_away() {
    let solution = solve("--p", false).expect("formula should solve");
    assert_eq!(solution.normalized, "p");
    assert_eq!(solution.parsed, Expr::Var("p".to_string()));
}

#[test]
fn test_simplification_is_sound() {
    let formulas = vec![
        "p and q",
        "p or q",
        "p xor q",
        "p nand q",
        "p nor q",
        "p if q",
        "p equal q",
        "p unequal q",
        "-(p and q) equal (-p or -q)",
        "(p if q) and (q if r)",
        "(a xor b) or (a and -c)",
        "not (p or (q and not r))",
        "-(--((-p or --q) and -(q and -p)) equal ((q if p) and (-p or --q)))",
    ];

    for formula in formulas {
        let plain = solve(formula, false).expect("formula should solve");
        let optimized = solve(formula, true).expect("formula should solve");

        assert_eq!(optimized.vars, plain.vars);
        assert_eq!(
            optimized.table.results(),
            plain.table.results(),
            "optimizing changed the table of {formula:?}"
        );
    }
}

#[test]
fn test_skip_pre_processing() {
    let options = SolveOptions {
        pre_process: false,
        optimize: false,
    };
    let solution = solve_with("p∧q", options).expect("formula should solve");
    assert_eq!(solution.normalized, "p∧q");
    assert_eq!(solution.table.results(), vec![false, false, false, true]);
}

#[test]
fn test_caret_diagnostic() {
    let err = solve("(p and q", true).expect_err("formula should be rejected");
    assert_eq!(
        err.diagnostic(),
        "(p∧q\n^\nInvalidBracket: missing matching closing bracket\n"
    );

    let err = solve("pq and r", true).expect_err("formula should be rejected");
    assert_eq!(err.kind_name(), "InvalidCharacter");
    assert_eq!(
        err.diagnostic(),
        "pq∧r\n ^\nInvalidCharacter: expected operator\n"
    );
}

#[test]
fn test_errors_carry_offsets() {
    let err = solve("p and (q or ())", true).expect_err("formula should be rejected");
    match err {
        SolverError::InvalidBracket { idx, message, .. } => {
            assert_eq!(message, "empty brackets");
            assert_eq!(idx, 6);
        }
        other => panic!("expected an InvalidBracket fault, got {other:?}"),
    }
}
