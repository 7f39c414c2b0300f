use std::io::Write;

use crate::solver::Solution;
use crate::symbols::{FALSE_SIGN, TRUE_SIGN};

const fn bit(value: bool) -> char {
    if value {
        TRUE_SIGN
    } else {
        FALSE_SIGN
    }
}

/// Renders the fixed-width table: one column per variable, the reconstructed
/// statement column carrying each row's evaluation trace, and a final `#`
/// result column.
pub fn render_table(solution: &Solution) -> String {
    let statement = solution.statement();
    let count = solution.vars.len();

    let mut header = String::from("|");
    for (i, var) in solution.vars.iter().enumerate() {
        header.push_str("  ");
        header.push_str(var);
        header.push_str("  ");
        if i + 1 >= count {
            header.push(' ');
        }
        header.push('|');
    }
    header.push_str(&format!(" {statement} |  #  |"));

    let mut out = format!("{header}\n{}\n", "-".repeat(header.chars().count()));

    for row in &solution.table.rows {
        for (i, &value) in row.assignment.iter().enumerate() {
            out.push_str("   ");
            out.push(bit(value));
            out.push_str("  ");
            if i + 1 >= count {
                out.push(' ');
            }
        }
        out.push_str(&format!("|{}|  {}  |\n", row.trace, bit(row.result)));
    }

    out
}

/// Writes the table as CSV: one column per variable, then the reconstructed
/// statement column holding the row results.
pub fn write_csv<W: Write>(solution: &Solution, writer: W) -> csv::Result<()> {
    let mut out = csv::Writer::from_writer(writer);

    let mut header = solution.vars.clone();
    header.push(solution.statement());
    out.write_record(&header)?;

    for row in &solution.table.rows {
        let mut record: Vec<String> = row
            .assignment
            .iter()
            .map(|&value| bit(value).to_string())
            .collect();
        record.push(bit(row.result).to_string());
        out.write_record(&record)?;
    }

    out.flush()?;
    Ok(())
}
