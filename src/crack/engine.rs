// Cracking engine
// Streams wordlist candidates against one or many target hashes

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::{Duration, Instant};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use super::algorithm::AlgorithmDescriptor;
use super::error::CrackError;
use super::hex;
use super::wordlist::LineReader;

// Spinner refresh interval while scanning large wordlists
const PROGRESS_UPDATE_INTERVAL_MS: u64 = 100;

/// Outcome of one cracking attempt. I/O failures travel on the error
/// channel, never through this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrackResult {
    /// First candidate (in file order) whose digest matched the target
    Found(String),
    /// Wordlist exhausted without a match
    NotFound,
}

impl CrackResult {
    pub fn is_found(&self) -> bool {
        matches!(self, CrackResult::Found(_))
    }
}

/// Aggregate counters for one batch run. Owned by the single in-flight
/// `crack_batch` call and reported once at the end.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    /// Non-blank, non-comment lines considered (valid or not)
    pub total: usize,
    /// Lines rejected as malformed hex or wrong length
    pub invalid: usize,
    /// Valid hashes that got a full wordlist scan
    pub attempted: usize,
    /// Attempted hashes that matched a candidate
    pub cracked: usize,
}

impl BatchSummary {
    fn new() -> Self {
        Self::default()
    }

    /// Attempted hashes that exhausted the wordlist without a match
    pub fn not_cracked(&self) -> usize {
        self.attempted - self.cracked
    }

    /// A batch succeeds when at least one hash was cracked
    pub fn is_success(&self) -> bool {
        self.cracked > 0
    }

    /// Display the final summary block
    pub fn display(&self) {
        println!();
        println!("=== Summary ===");
        println!("Total hashes processed: {}", self.total);
        println!("Successfully cracked:   {}", self.cracked);
        println!("Failed to crack:        {}", self.not_cracked());
        println!("Invalid hashes:         {}", self.invalid);
        println!("===============");
    }
}

/// Engine for cracking target hashes against a wordlist
pub struct Cracker {
    progress: bool,
}

impl Cracker {
    /// Create a new engine with progress reporting disabled
    pub fn new() -> Self {
        Self { progress: false }
    }

    /// Create a new engine, optionally reporting scan progress on stderr
    pub fn with_progress(progress: bool) -> Self {
        Self { progress }
    }

    /// Attempt to crack a single target hash against the wordlist at
    /// `wordlist`. Candidates are streamed one line at a time and the scan
    /// stops at the first match in file order.
    ///
    /// `target_hex` must already be validated (hex charset and length);
    /// comparison against computed digests is case-insensitive.
    pub fn crack(
        &self,
        descriptor: &AlgorithmDescriptor,
        target_hex: &str,
        wordlist: &Path,
    ) -> Result<CrackResult, CrackError> {
        let file = File::open(wordlist)
            .map_err(|e| CrackError::from_io_error(e, "opening", Some(wordlist.to_path_buf())))?;
        let mut reader = LineReader::new(BufReader::new(file));

        let spinner = if self.progress {
            Some(scan_spinner(descriptor.name))
        } else {
            None
        };
        let update_interval = Duration::from_millis(PROGRESS_UPDATE_INTERVAL_MS);
        let mut last_update = Instant::now();
        let mut candidates: u64 = 0;

        loop {
            let next = reader.next_line().map_err(|e| {
                if let Some(pb) = &spinner {
                    pb.finish_and_clear();
                }
                CrackError::from_io_error(e, "reading", Some(wordlist.to_path_buf()))
            })?;

            let candidate = match next {
                Some(candidate) => candidate,
                None => break,
            };
            candidates += 1;

            let digest = descriptor.compute(candidate.as_bytes());
            let digest_hex = hex::encode(&digest);

            if hex::matches(&digest_hex, target_hex) {
                let found = candidate.to_string();
                if let Some(pb) = &spinner {
                    pb.finish_and_clear();
                }
                return Ok(CrackResult::Found(found));
            }

            if let Some(pb) = &spinner {
                let now = Instant::now();
                if now.duration_since(last_update) >= update_interval {
                    pb.set_message(format!("{} candidates tried", candidates));
                    last_update = now;
                }
            }
        }

        if let Some(pb) = &spinner {
            pb.finish_and_clear();
        }
        Ok(CrackResult::NotFound)
    }

    /// Crack every valid hash in `hash_file` against the wordlist, one
    /// independent full scan per hash. Blank lines and `#` comments are
    /// skipped; malformed lines are reported with their line number,
    /// counted as invalid and skipped without aborting the batch.
    ///
    /// A wordlist read failure mid-batch aborts the whole run and the
    /// partial summary is discarded.
    pub fn crack_batch(
        &self,
        descriptor: &AlgorithmDescriptor,
        hash_file: &Path,
        wordlist: &Path,
    ) -> Result<BatchSummary, CrackError> {
        let hashes = File::open(hash_file).map_err(|e| {
            CrackError::from_io_error(e, "opening hash file", Some(hash_file.to_path_buf()))
        })?;
        // Preflight the wordlist so a bad path aborts before any hash is
        // processed
        File::open(wordlist)
            .map_err(|e| CrackError::from_io_error(e, "opening", Some(wordlist.to_path_buf())))?;

        let mut reader = LineReader::new(BufReader::new(hashes));
        let mut summary = BatchSummary::new();
        let mut line_number = 0usize;
        let expected_len = descriptor.digest_length * 2;

        loop {
            line_number += 1;
            let next = reader.next_line().map_err(|e| {
                CrackError::from_io_error(e, "reading hash file", Some(hash_file.to_path_buf()))
            })?;

            let target = match next {
                Some(line) => line.trim(),
                None => break,
            };

            if target.is_empty() || target.starts_with('#') {
                continue;
            }
            summary.total += 1;

            if !hex::is_hex(target) {
                eprintln!(
                    "{}",
                    format!("Line {}: invalid hash format '{}'", line_number, target).yellow()
                );
                summary.invalid += 1;
                continue;
            }

            if target.len() != expected_len {
                eprintln!(
                    "{}",
                    format!(
                        "Line {}: hash length mismatch for algorithm '{}': expected {} characters, got {}",
                        line_number,
                        descriptor.name,
                        expected_len,
                        target.len()
                    )
                    .yellow()
                );
                summary.invalid += 1;
                continue;
            }

            summary.attempted += 1;
            println!("Processing hash {}: {}", summary.attempted, target);

            match self.crack(descriptor, target, wordlist)? {
                CrackResult::Found(candidate) => {
                    summary.cracked += 1;
                    println!("{}", format!("  Found: {}", candidate).green());
                }
                CrackResult::NotFound => {
                    println!("  Not found in wordlist.");
                }
            }
        }

        Ok(summary)
    }
}

impl Default for Cracker {
    fn default() -> Self {
        Self::new()
    }
}

fn scan_spinner(algorithm: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.set_message(format!("Scanning wordlist with {}", algorithm));
    pb.enable_steady_tick(Duration::from_millis(PROGRESS_UPDATE_INTERVAL_MS));
    pb
}
