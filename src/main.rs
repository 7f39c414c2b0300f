use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use truthtab::parser_io::ExprGraph;
use truthtab::solve;
use truthtab::table_io;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(value_parser, value_name = "FORMULA")]
    /// Formulas to solve (interactive prompt when omitted and no input file is given)
    formulas: Vec<String>,

    #[clap(value_parser, short, long, value_name = "FILE")]
    /// Read formulas from a file, one per line ('#' lines are skipped)
    input: Option<PathBuf>,

    #[clap(value_parser, short, long, value_name = "FILE")]
    /// The output filename (or stdout if not provided)
    output: Option<PathBuf>,

    #[clap(short = 'n', long)]
    /// Skip the normal-form rewrite and simplification passes
    no_optimize: bool,

    #[clap(short, long)]
    /// Print every pipeline stage before the table
    verbose: bool,

    #[clap(long)]
    /// Emit the truth table as CSV instead of the fixed-width layout
    csv: bool,

    #[clap(value_parser, short, long, value_name = "FILE")]
    /// Render the final syntax tree as a GraphViz dot graph
    dot: Option<PathBuf>,

    #[clap(short, long)]
    /// Print solve timings
    benchmark: bool,
}

fn main() -> anyhow::Result<()> {
    let raw_args =
        argfile::expand_args_from(wild::args_os(), argfile::parse_fromfile, argfile::PREFIX)?;
    let args = Args::parse_from(raw_args);

    let mut formulas = args.formulas.clone();
    if let Some(input_file) = &args.input {
        let file = File::open(input_file)?;
        for line in BufReader::new(file).lines() {
            let line = line?;
            let formula = line.trim();
            if !formula.is_empty() && !formula.starts_with('#') {
                formulas.push(formula.to_string());
            }
        }
    }

    let mut writer = if let Some(output_file) = &args.output {
        let file = File::create(output_file)?;
        Box::new(BufWriter::new(file)) as Box<dyn Write>
    } else {
        Box::new(BufWriter::new(io::stdout())) as Box<dyn Write>
    };

    if formulas.is_empty() {
        interactive(&args, &mut writer)?;
    } else {
        for formula in &formulas {
            solve_and_render(formula, &args, &mut writer)?;
        }
    }

    // flush the writer before dropping it
    writer.flush()?;

    Ok(())
}

/// Prompt-solve-print loop until EOF. Solver faults are printed and the loop
/// continues; only I/O faults abort.
fn interactive(args: &Args, writer: &mut Box<dyn Write>) -> anyhow::Result<()> {
    let stdin = io::stdin();

    loop {
        print!("Formula: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let formula = line.trim();
        if formula.is_empty() {
            continue;
        }

        solve_and_render(formula, args, writer)?;
        writer.flush()?;
    }
}

fn solve_and_render(
    formula: &str,
    args: &Args,
    writer: &mut Box<dyn Write>,
) -> anyhow::Result<()> {
    let start = Instant::now();
    let solution = match solve(formula, !args.no_optimize) {
        Ok(solution) => solution,
        Err(fault) => {
            eprint!("{}", fault.diagnostic());
            return Ok(());
        }
    };
    let elapsed = start.elapsed();

    if args.verbose {
        writeln!(writer, "Original Statement: {formula}")?;
        writeln!(writer, "Pre-processed: {}", solution.normalized)?;
        writeln!(writer, "Parsed Statement: {}", solution.parsed_statement())?;
        if !args.no_optimize {
            writeln!(writer, "Optimized Statement: {}", solution.statement())?;
        }
    }

    if args.benchmark {
        writeln!(
            writer,
            "solved in {:?} ({} rows)",
            elapsed,
            solution.table.rows.len()
        )?;
    }

    if args.csv {
        table_io::write_csv(&solution, writer.as_mut())?;
    } else {
        write!(writer, "{}", table_io::render_table(&solution))?;
    }

    if let Some(dot_file) = &args.dot {
        let mut dot_writer = File::create(dot_file)?;
        ExprGraph::new(&solution.expr).render_dot(&mut dot_writer)?;
    }

    Ok(())
}
