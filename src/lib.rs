//! Sum Forge - fixed-length string generation under an exact code-sum constraint
//!
//! Produces strings over a restricted alphabet (by default `0-9A-Za-z`) whose
//! character codes add up to a target value, either by walking the whole
//! space when it is small enough or by constrained random sampling.

pub mod alphabet;
pub mod collector;
pub mod config;
pub mod enumerator;
pub mod error;
pub mod feasibility;
pub mod forge;
pub mod sampler;
pub mod types;

// Re-export commonly used types
pub use alphabet::Alphabet;
pub use config::GeneratorConfig;
pub use error::{Result, SumForgeError};
pub use feasibility::{is_feasible, SumBounds};
pub use types::{Candidate, GenerationReport, SampleBatch, SpaceSize, Strategy};

// Re-export main functionality
pub use collector::SampleCollector;
pub use enumerator::{Enumeration, ExhaustiveEnumerator, MixedRadixCounter};
pub use forge::SumForge;
pub use sampler::ConstrainedSampler;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
