// Cracking core
// Algorithm registry, hex codec and the wordlist cracking engine

pub mod algorithm;
pub mod engine;
pub mod error;
pub mod hex;
pub mod registry;
pub mod wordlist;

// Re-export commonly used types for convenience
pub use algorithm::{AlgorithmDescriptor, HashAlgorithm};
pub use engine::{BatchSummary, CrackResult, Cracker};
pub use error::CrackError;
pub use registry::{AlgorithmInfo, AlgorithmRegistry, ALGORITHMS};
pub use wordlist::LineReader;
