use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;

use truthtab::parser::Expr;
use truthtab::solve;

fn file_assert_simplifies_to<P: AsRef<Path>>(file: P, expected: &Expr) {
    let contents = fs::read_to_string(&file).expect("could not read corpus file");

    for line in contents.lines() {
        let formula = line.trim();
        if formula.is_empty() || formula.starts_with('#') {
            continue;
        }

        let solution = solve(formula, true).expect("could not solve corpus formula");
        assert_eq!(
            &solution.expr,
            expected,
            "simplifying {formula:?} from {}",
            file.as_ref().display()
        );
    }
}

#[test]
fn test_files_true() {
    for file in glob::glob("tests/data/*_is_true.txt").expect("invalid glob pattern") {
        let f = file.expect("unreadable glob entry");
        println!("testing {}", f.display());
        file_assert_simplifies_to(f, &Expr::True);
    }
}

#[test]
fn test_files_false() {
    for file in glob::glob("tests/data/*_is_false.txt").expect("invalid glob pattern") {
        let f = file.expect("unreadable glob entry");
        println!("testing {}", f.display());
        file_assert_simplifies_to(f, &Expr::False);
    }
}
