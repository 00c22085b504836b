use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use hashcrack::cli::{run, Cli};

fn main() -> ExitCode {
    println!("{}", "=== HashCrack ===".bold());
    println!("Dictionary-based hash recovery tool");
    println!();

    let cli = Cli::parse();
    run(cli)
}
