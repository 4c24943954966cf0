use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing::Level;

use qa_prolog::{compile_source, Error, Parameters};

/// Compile a Quantum-Annealing Prolog program to Verilog
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Prolog source file to compile (reads standard input if omitted)
    infile: Option<PathBuf>,

    /// Minimum integer width in bits
    #[arg(long, default_value_t = 0)]
    int_bits: u32,

    /// Write Verilog here instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/**
 * File name without directory or extension, used to name this program in
 * messages.
 */
fn base_name(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

fn read_source(infile: Option<&Path>) -> anyhow::Result<String> {
    let mut source = String::new();
    match infile {
        Some(path) => {
            source = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
        }
        None => {
            io::stdin()
                .read_to_string(&mut source)
                .context("failed to read standard input")?;
        }
    }
    Ok(source)
}

fn write_output(output: Option<&Path>, verilog: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => fs::write(path, verilog)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(verilog.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/**
 * Formats a compilation error the way the user sees it: positioned errors
 * point into the input file, compiler defects are flagged as such.
 */
fn describe(err: &Error, params: &Parameters) -> String {
    match err.position() {
        Some(pos) => format!("{}:{}:{}: {}", params.in_file_name, pos.line, pos.column, err),
        None if err.is_internal() => format!("{} (this is a bug in {})", err, params.prog_name),
        None => err.to_string(),
    }
}

fn run(cli: &Cli, params: &Parameters) -> anyhow::Result<()> {
    let source = read_source(cli.infile.as_deref())?;
    let verilog = compile_source(&source, params).map_err(|e| anyhow::anyhow!(describe(&e, params)))?;
    write_output(cli.output.as_deref(), &verilog)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let prog_name = std::env::args()
        .next()
        .map(|arg0| base_name(&arg0))
        .unwrap_or_else(|| String::from(env!("CARGO_PKG_NAME")));
    let params = Parameters {
        prog_name: prog_name.clone(),
        in_file_name: cli
            .infile
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| String::from("<stdin>")),
        int_bits: cli.int_bits,
    };

    if let Err(e) = run(&cli, &params) {
        eprintln!("{}: {:#}", prog_name, e);
        process::exit(1);
    }
}
