//! examlens command line entry point.

use std::env;
use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;

use examlens::cli::args::ExamLensArgs;
use examlens::cli::commands::{execute_command, exit_code};

fn init_logging(args: &ExamLensArgs) {
    let mut builder = Builder::new();
    builder.filter_level(args.log_level()).format(|buf, record| {
        writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
    });

    // RUST_LOG directives refine the level chosen by -v/-q
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    builder.init();
}

fn main() {
    let args = ExamLensArgs::parse();
    init_logging(&args);

    log::debug!("running {:?}", args.command);

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(exit_code(&e));
    }
}
