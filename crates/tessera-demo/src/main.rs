#![forbid(unsafe_code)]

//! Tessera demo binary entry point.

use std::io;
use std::process;

use tessera_demo::cli::{self, Command, Opts};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_logging();

    let opts = match Opts::parse() {
        Ok(Command::Run(opts)) => opts,
        Ok(Command::Help) => {
            println!("{}", cli::HELP_TEXT);
            return;
        }
        Ok(Command::Version) => {
            println!("tessera-demo {}", cli::VERSION);
            return;
        }
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Run with --help for usage information.");
            process::exit(2);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = tessera_demo::run(&opts, &mut out) {
        tessera_core::error!(error = %e, "demo failed");
        eprintln!("tessera-demo: {e}");
        process::exit(1);
    }
}
