// CLI module
// Argument surface and input validation performed before the engine runs

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::crack::hex;
use crate::crack::{AlgorithmDescriptor, AlgorithmRegistry, CrackError, CrackResult, Cracker};

#[derive(Parser)]
#[command(name = "hashcrack", version, about = "Dictionary-based hash recovery tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Crack a single target hash against a wordlist
    Crack {
        /// Algorithm name or registry index (e.g. md5, sha256, 3)
        algorithm: String,
        /// Target hash in hexadecimal
        hash: String,
        /// Path to the wordlist file
        wordlist: PathBuf,
    },
    /// Crack every hash in a file against a wordlist
    Batch {
        /// Algorithm name or registry index (e.g. md5, sha256, 3)
        algorithm: String,
        /// File containing target hashes, one per line
        hash_file: PathBuf,
        /// Path to the wordlist file
        wordlist: PathBuf,
    },
    /// List all supported algorithms
    List,
}

/// Dispatch a parsed command and map the outcome to a process exit code
pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Crack {
            algorithm,
            hash,
            wordlist,
        } => run_crack(&algorithm, &hash, &wordlist),
        Command::Batch {
            algorithm,
            hash_file,
            wordlist,
        } => run_batch(&algorithm, &hash_file, &wordlist),
        Command::List => {
            print_algorithms();
            Ok(ExitCode::SUCCESS)
        }
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", format!("Error: {}", err).red());
            ExitCode::FAILURE
        }
    }
}

/// Reject malformed targets before the engine is invoked: hex charset
/// first, then length against the algorithm's digest size
pub fn validate_target(descriptor: &AlgorithmDescriptor, hash: &str) -> Result<(), CrackError> {
    if !hex::is_hex(hash) {
        return Err(CrackError::InvalidHashFormat {
            hash: hash.to_string(),
        });
    }

    let expected = descriptor.digest_length * 2;
    if hash.len() != expected {
        return Err(CrackError::HashLengthMismatch {
            algorithm: descriptor.name.to_string(),
            expected,
            actual: hash.len(),
        });
    }

    Ok(())
}

fn run_crack(selector: &str, hash: &str, wordlist: &Path) -> Result<ExitCode, CrackError> {
    let descriptor = AlgorithmRegistry::resolve(selector)?;
    validate_target(descriptor, hash)?;

    println!("Algorithm : {} (id: {})", descriptor.name, descriptor.id);
    println!("Target    : {}", hash);
    println!("Wordlist  : {}", wordlist.display());
    println!();

    let cracker = Cracker::with_progress(io::stderr().is_terminal());
    match cracker.crack(descriptor, hash, wordlist)? {
        CrackResult::Found(candidate) => {
            println!("{}", format!("Found: {}", candidate).green().bold());
            Ok(ExitCode::SUCCESS)
        }
        CrackResult::NotFound => {
            println!("No match found in wordlist.");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_batch(selector: &str, hash_file: &Path, wordlist: &Path) -> Result<ExitCode, CrackError> {
    let descriptor = AlgorithmRegistry::resolve(selector)?;

    println!("Algorithm : {} (id: {})", descriptor.name, descriptor.id);
    println!("Hash file : {}", hash_file.display());
    println!("Wordlist  : {}", wordlist.display());
    println!();

    let cracker = Cracker::with_progress(io::stderr().is_terminal());
    let summary = cracker.crack_batch(descriptor, hash_file, wordlist)?;
    summary.display();

    if summary.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Print the algorithm catalog in registry order
pub fn print_algorithms() {
    println!("=== Supported hash algorithms ===");
    for info in AlgorithmRegistry::list() {
        println!(
            " [{}] {:<10} - id: {} - {:>2} bytes - {}",
            info.index, info.name, info.id, info.digest_length, info.description
        );
    }
}
