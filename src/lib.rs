// Library module for hashcrack
// Re-exports modules for use in integration tests and the binary

pub mod cli;
pub mod crack;

pub use crack::{
    AlgorithmDescriptor, AlgorithmInfo, AlgorithmRegistry, BatchSummary, CrackError, CrackResult,
    Cracker, HashAlgorithm, LineReader, ALGORITHMS,
};
