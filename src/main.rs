use beach_forecast::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // One fetch per run, nothing to parallelize
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap_or_else(|e| {
            eprintln!("Failed to create async runtime: {}", e);
            process::exit(1);
        });

    // No signal handling: Ctrl-C ends the process
    if let Err(error) = runtime.block_on(commands::run(args)) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}
