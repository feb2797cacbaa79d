//! sival-cli - dimensioned quantity arithmetic from the command line
//!
//! Usage:
//!   sival-cli circuit                          # 6.22µF+6µF and 2µF+8.54µF pairs at 90 V
//!   sival-cli circuit -V 12 -P 10,22 -P 4.7,4.7
//!   sival-cli prefixes                         # SI prefix table
//!   sival-cli units                            # named unit constants

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use sival_core::{units, Prefix};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod circuit;

#[derive(Parser, Debug)]
#[command(name = "sival-cli")]
#[command(about = "Dimensioned quantity arithmetic with SI units", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Digits printed after the decimal point
    #[arg(short, long, global = true, default_value_t = 4)]
    precision: usize,

    /// Log more (-v debug, -vv trace); RUST_LOG is used otherwise
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Charge series capacitor pairs wired in parallel
    Circuit {
        /// Supply voltage in volts
        #[arg(short = 'V', long, default_value_t = 90.0)]
        voltage: f64,

        /// Capacitances of one series pair in microfarads, e.g. `6.22,6`
        #[arg(short = 'P', long = "pair", value_name = "A,B", value_parser = circuit::parse_pair)]
        pairs: Vec<(f64, f64)>,
    },
    /// List the SI prefix table
    Prefixes,
    /// List the named unit constants in base units
    Units,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Circuit { voltage, pairs } => {
            let pairs = if pairs.is_empty() {
                circuit::DEFAULT_PAIRS.to_vec()
            } else {
                pairs
            };
            let report = circuit::charge(voltage, &pairs)?;
            for line in report.lines(args.precision)? {
                println!("{line}");
            }
        }
        Command::Prefixes => print_prefixes(),
        Command::Units => print_units(args.precision),
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn print_prefixes() {
    for prefix in Prefix::all() {
        let name = if prefix.is_unit() { "(none)" } else { prefix.name };
        println!("{:<8} {:>4} {}", name, prefix.scale, prefix.symbol);
    }
}

fn print_units(precision: usize) {
    for unit in units::all() {
        println!("{:<10} {:.*}", unit.to_string(), precision, unit.value());
    }
}
