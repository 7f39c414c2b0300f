use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use rand::prelude::*;
use rand::rngs::StdRng;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(value_parser, value_name = "COUNT")]
    /// The number of formulas to generate
    count: Option<usize>,

    #[clap(value_parser, short = 'm', long, value_name = "VARS", default_value_t = 3)]
    /// The number of distinct variables to draw from (a, b, ...)
    variables: u8,

    #[clap(value_parser, short, long, value_name = "DEPTH", default_value_t = 3)]
    /// Maximum nesting depth per formula
    depth: usize,

    #[clap(value_parser, short, long, value_name = "SEED")]
    /// Seed for reproducible output
    seed: Option<u64>,

    #[clap(value_parser, short, long, value_name = "FILE")]
    /// The output filename (or stdout if not provided)
    output: Option<PathBuf>,

    #[clap(long)]
    /// Emit canonical signs instead of word aliases
    symbolic: bool,
}

const WORD_OPERATORS: [&str; 8] = ["and", "nand", "or", "nor", "xor", "if", "equal", "unequal"];
const SIGN_OPERATORS: [&str; 8] = ["∧", "⊼", "∨", "⊽", "⊻", "→", "↔", "⇹"];

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.variables == 0 || args.variables > 26 {
        Err(anyhow::anyhow!("variable count must be between 1 and 26"))?
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut writer = if let Some(output_file) = args.output {
        let file = File::create(output_file)?;
        Box::new(BufWriter::new(file)) as Box<dyn Write>
    } else {
        Box::new(BufWriter::new(io::stdout())) as Box<dyn Write>
    };

    for _ in 0..args.count.unwrap_or(10) {
        let formula = generate(&mut rng, args.variables, args.symbolic, args.depth);
        writeln!(writer, "{formula}")?;
    }

    // flush the writer before dropping it
    writer.flush()?;

    Ok(())
}

fn generate(rng: &mut StdRng, variables: u8, symbolic: bool, depth: usize) -> String {
    // leaves get more likely as the depth budget runs out
    if depth == 0 || rng.gen_range(0..4) == 0 {
        let var = (b'a' + rng.gen_range(0..variables)) as char;
        return match rng.gen_range(0..8) {
            0 => format!("{}{var}", if symbolic { "¬" } else { "not " }),
            1 => String::from(if symbolic { "1" } else { "true" }),
            2 => String::from(if symbolic { "0" } else { "false" }),
            _ => var.to_string(),
        };
    }

    let operators = if symbolic {
        &SIGN_OPERATORS
    } else {
        &WORD_OPERATORS
    };
    let operator = operators[rng.gen_range(0..operators.len())];

    let left = generate(rng, variables, symbolic, depth - 1);
    let right = generate(rng, variables, symbolic, depth - 1);

    format!("({left} {operator} {right})")
}
