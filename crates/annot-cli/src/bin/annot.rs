use anyhow::Result;
use clap::Parser;
use std::io::{IsTerminal, Write};

use annot_cli::args::CliArgs;
use annot_cli::driver;

fn main() -> Result<()> {
    // Initialize tracing if ANNOT_LOG or RUST_LOG is set (zero cost otherwise).
    annot::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let stdout = std::io::stdout();
    let color = !args.no_color && stdout.is_terminal();

    let output = driver::run(&args, color)?;
    let mut handle = stdout.lock();
    handle.write_all(output.as_bytes())?;
    handle.flush()?;
    Ok(())
}
