use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lottie_recolor::cli::{Args, Command};
use lottie_recolor::commands;

fn init_tracing(args: &Args) {
    // --quiet silences everything, --verbose honours RUST_LOG or falls back to
    // debug, and the default shows one line per recolored node.
    let filter = if args.quiet {
        EnvFilter::new("off")
    } else if args.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("lottie_recolor=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args);

    match &args.command {
        Command::Extract(extract) => {
            print!("{}", commands::extract::run(extract)?);
        }
        Command::Rewrite(rewrite) => {
            let outcome = commands::rewrite::run(rewrite)?;
            println!("{}", outcome.summary());
        }
    }
    Ok(())
}
