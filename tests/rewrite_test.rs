use pretty_assertions::assert_eq;

use truthtab::normalize::normalize;
use truthtab::parser::{Expr, ParsedFormula};
use truthtab::rewriter::{free_variables, rewrite_normal_form, simplify};
use truthtab::BinaryOperator;

fn parsed(input: &str) -> Expr {
    ParsedFormula::parse(&normalize(input))
        .expect("formula should parse")
        .expr
}

fn assert_normal_form(expr: &Expr) {
    match expr {
        Expr::True | Expr::False | Expr::Var(_) => {}
        Expr::Not(child) => assert_normal_form(child),
        Expr::BinaryOp(op, left, right) => {
            assert!(
                matches!(op, BinaryOperator::And | BinaryOperator::Or),
                "derived connective {op:?} survived the rewrite"
            );
            assert_normal_form(left);
            assert_normal_form(right);
        }
    }
}

#[test]
fn test_rewrite_if() {
    assert_eq!(rewrite_normal_form(parsed("p if q")), parsed("-p or q"));
    // an already negated antecedent is unwrapped, not double-negated
    assert_eq!(rewrite_normal_form(parsed("-p if q")), parsed("p or q"));
}

#[test]
fn test_rewrite_equal() {
    assert_eq!(
        rewrite_normal_form(parsed("p equal q")),
        parsed("(p and q) or -(p or q)")
    );
}

#[test]
fn test_rewrite_unequal() {
    assert_eq!(
        rewrite_normal_form(parsed("p unequal q")),
        parsed("(p or q) and -(p and q)")
    );
}

#[test]
fn test_rewrite_xor() {
    assert_eq!(
        rewrite_normal_form(parsed("p xor q")),
        parsed("(p and -q) or (-p and q)")
    );
    // negated operands are unwrapped on the side that negates them
    assert_eq!(
        rewrite_normal_form(parsed("-p xor q")),
        parsed("(-p and -q) or (p and q)")
    );
}

#[test]
fn test_rewrite_nand_nor() {
    assert_eq!(rewrite_normal_form(parsed("p nand q")), parsed("-(p and q)"));
    assert_eq!(rewrite_normal_form(parsed("p nor q")), parsed("-(p or q)"));
}

#[test]
fn test_rewrite_eliminates_derived_connectives() {
    let cases = vec![
        "p nand (q nor r)",
        "a xor (b unequal c)",
        "p if (q equal r)",
        "-(p nand q) xor (r if -s)",
        "(a equal b) nor (a unequal c)",
    ];

    for raw in cases {
        assert_normal_form(&rewrite_normal_form(parsed(raw)));
    }
}

#[test]
fn test_rewrite_keeps_plain_trees() {
    let expr = parsed("-(p and q) or -r");
    assert_eq!(rewrite_normal_form(expr.clone()), expr);
}

#[test]
fn test_simplify_tautology_and_contradiction() {
    assert_eq!(simplify(rewrite_normal_form(parsed("p or -p"))), Expr::True);
    assert_eq!(
        simplify(rewrite_normal_form(parsed("p and -p"))),
        Expr::False
    );
}

#[test]
fn test_simplify_signature_match() {
    // de Morgan: ¬(¬p ∨ ¬q) carries the conjunction column
    assert_eq!(
        simplify(rewrite_normal_form(parsed("-(-p or -q)"))),
        parsed("p and q")
    );
    // an exclusive-or written out in normal form is folded back to the gate
    assert_eq!(
        simplify(rewrite_normal_form(parsed("(p and -q) or (-p and q)"))),
        parsed("p xor q")
    );
    // implication has no two-variable signature and stays as rewritten
    assert_eq!(
        simplify(rewrite_normal_form(parsed("p if q"))),
        parsed("-p or q")
    );
}

#[test]
fn test_simplify_variable_redundancy() {
    assert_eq!(simplify(rewrite_normal_form(parsed("p and p"))), parsed("p"));
    // three free variables collapse onto a single variable's column
    assert_eq!(
        simplify(rewrite_normal_form(parsed("(p and (q and r)) or p"))),
        parsed("p")
    );
}

#[test]
fn test_simplify_constant_operands() {
    assert_eq!(simplify(rewrite_normal_form(parsed("p and false"))), Expr::False);
    assert_eq!(simplify(rewrite_normal_form(parsed("p or true"))), Expr::True);
    assert_eq!(simplify(rewrite_normal_form(parsed("p and true"))), parsed("p"));
    assert_eq!(simplify(rewrite_normal_form(parsed("true and false"))), Expr::False);
}

#[test]
fn test_free_variables_first_seen() {
    assert_eq!(free_variables(&parsed("q and (p or q)")), vec!["q", "p"]);
    assert_eq!(free_variables(&parsed("true or false")), Vec::<String>::new());
    assert_eq!(free_variables(&parsed("-x")), vec!["x"]);
}
