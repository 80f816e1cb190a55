use cell_stats::cli::{self, Args};
use clap::Parser;
use std::process;

fn main() {
    let args = Args::parse();
    cli::setup_logging(&args);

    match cli::run(&args) {
        Ok(report) => {
            print!("{}", report);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
