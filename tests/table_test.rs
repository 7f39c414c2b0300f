use pretty_assertions::assert_eq;

use truthtab::parser_io::ExprGraph;
use truthtab::table_io::{render_table, write_csv};
use truthtab::solve;

#[test]
fn test_render_single_variable() {
    let solution = solve("p", false).expect("formula should solve");

    let expected = format!(
        "|  p   | p |  #  |\n{}\n   0   |0|  0  |\n   1   |1|  1  |\n",
        "-".repeat(18)
    );
    assert_eq!(render_table(&solution), expected);
}

#[test]
fn test_render_header_and_rows() {
    let solution = solve("p and q", false).expect("formula should solve");
    let rendered = render_table(&solution);
    let mut lines = rendered.lines();

    let header = lines.next().expect("missing header line");
    assert_eq!(header, "|  p  |  q   | p ∧ q |  #  |");

    let rule = lines.next().expect("missing rule line");
    assert_eq!(rule.chars().count(), header.chars().count());
    assert!(rule.chars().all(|c| c == '-'));

    assert_eq!(lines.count(), 4);
}

#[test]
fn test_csv_export() {
    let solution = solve("p and q", false).expect("formula should solve");

    let mut buffer = Vec::new();
    write_csv(&solution, &mut buffer).expect("csv export should succeed");
    let text = String::from_utf8(buffer).expect("csv output should be utf-8");

    assert_eq!(text, "p,q,p ∧ q\n0,0,0\n0,1,0\n1,0,0\n1,1,1\n");
}

#[test]
fn test_dot_export() {
    let solution = solve("not (p and q)", false).expect("formula should solve");

    let mut buffer = Vec::new();
    ExprGraph::new(&solution.expr)
        .render_dot(&mut buffer)
        .expect("dot export should succeed");
    let text = String::from_utf8(buffer).expect("dot output should be utf-8");

    assert!(text.starts_with("digraph syntax_tree {"));
    // two variables, the conjunction and the negation
    assert_eq!(text.matches("Var").count(), 2);
    assert!(text.contains("And"));
}
