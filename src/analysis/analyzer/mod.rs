//! Analyzer implementations that combine tokenizers and filters.

pub mod analyzer;
pub mod ngram;
pub mod normalizer;
pub mod pipeline;

pub use analyzer::Analyzer;
pub use ngram::NGramAnalyzer;
pub use normalizer::Normalizer;
pub use pipeline::PipelineAnalyzer;
