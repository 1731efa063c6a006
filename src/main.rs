use std::io;

use clap::Parser;
use env_logger::Env;
use log::debug;

use urlcode::{run, Args, Options, StdoutTerminal};

fn main() {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or("warn"));

    // Parse command line arguments
    let args = Args::parse();
    let options = Options::from(&args);
    debug!("Resolved options: {:?}", options);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run(&options, &args.strings, &mut out, &StdoutTerminal) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
