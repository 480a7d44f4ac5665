use std::fs;

use clap::Parser;
use treecalc::{
    ast::AngleUnit,
    calculate_with,
    interpreter::io::{NullSink, OutputSink, StdinLines, StdoutSink},
};

/// treecalc evaluates infix expressions with arithmetic, comparisons, boolean
/// logic, trigonometry and conditionals.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells treecalc to read the expression from a file.
    #[arg(short, long)]
    file: bool,

    /// Measure angles in degrees instead of radians.
    #[arg(short, long)]
    degrees: bool,

    /// Number of decimal places the result is rounded to.
    #[arg(short, long, default_value_t = 5)]
    precision: u8,

    /// Suppress characters printed by the output operator.
    #[arg(short, long)]
    quiet: bool,

    /// Text printed before reading a line for the input operator.
    #[arg(long)]
    prompt: Option<String>,

    contents: String,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let angle_unit = if args.degrees {
        AngleUnit::Degrees
    } else {
        AngleUnit::Radians
    };

    let mut sink: Box<dyn OutputSink> = if args.quiet {
        Box::new(NullSink)
    } else {
        Box::new(StdoutSink)
    };

    let mut input = args.prompt.map_or_else(StdinLines::default, StdinLines::with_prompt);

    match calculate_with(&source, angle_unit, &mut input, sink.as_mut()) {
        Ok(value) => println!("{}", value.rounded(args.precision)),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
