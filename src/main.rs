use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Evaluate a wire circuit
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Circuit definitions, one `<expr> -> <wire>` per line
    #[arg(value_name = "CIRCUIT_FILE")]
    circuit_file: PathBuf,

    /// Wire whose value is printed
    #[arg(short, long, default_value = "a")]
    wire: String,

    /// Feed the first answer into this wire as a constant and resolve again
    #[arg(short = 'o', long = "override", value_name = "WIRE")]
    feedback: Option<String>,

    /// Print every wire in name order
    #[arg(long)]
    all: bool,
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let path = args.circuit_file.display();
    let code = std::fs::read_to_string(&args.circuit_file)
        .with_context(|| format!("failed to read {path}"))?;
    let mut registry = wirelogic::load(&code).with_context(|| format!("in {path}"))?;

    if args.all {
        for name in registry.names() {
            println!("{}: {}", name, registry.resolve(name)?);
        }
    }

    match &args.feedback {
        Some(feedback) => {
            let (first, second) = wirelogic::rewire(&mut registry, &args.wire, feedback)?;
            println!("{}: {}", args.wire, first);
            println!("{}: {} ({} = {})", args.wire, second, feedback, first);
        }
        None if !args.all => println!("{}: {}", args.wire, registry.resolve(&args.wire)?),
        None => {}
    }

    Ok(())
}
