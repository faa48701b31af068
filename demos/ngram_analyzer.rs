//! Example demonstrating the NGramAnalyzer
//!
//! This example shows how key lookup text is normalized and expanded into
//! n-grams, and how the same stages can be combined by hand in a pipeline.

use keylookup::analysis::{
    Analyzer, LowercaseFilter, NGramAnalyzer, NGramTokenFilter, Normalizer, PipelineAnalyzer,
    UnicodeWordTokenizer,
};
use keylookup::config::NGramConfig;
use std::sync::Arc;

fn main() -> keylookup::error::Result<()> {
    let text = "Hotel Yak & Yeti, Kathmandu";

    println!("Analyzing text: \"{}\"", text);
    println!();

    // Words only
    let normalizer = Normalizer::new();
    let words: Vec<_> = normalizer.analyze(text)?.collect();

    println!("Normalized words:");
    for (i, token) in words.iter().enumerate() {
        println!(
            "  [{}] \"{}\" (offset: {}-{}, position: {})",
            i, token.text, token.start_offset, token.end_offset, token.position
        );
    }

    // Default n-gram settings: 3..=5, short words kept
    println!("\n--- NGramAnalyzer (3..=5, preserve original) ---");
    let analyzer = NGramAnalyzer::default();
    let tokens: Vec<_> = analyzer.analyze(text)?.collect();

    for (i, token) in tokens.iter().enumerate() {
        println!(
            "  [{}] \"{}\" (offset: {}-{}, position: {}, increment: {}, type: {})",
            i,
            token.text,
            token.start_offset,
            token.end_offset,
            token.position,
            token.position_increment,
            token.token_type
        );
    }
    println!();
    println!("Total tokens: {}", tokens.len());

    // Hand-built pipeline with Unicode word boundaries and bigrams only
    println!("\n--- Custom pipeline (unicode words, bigrams, short words dropped) ---");
    let pipeline = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
        .add_filter(Arc::new(LowercaseFilter::new()))
        .add_filter(Arc::new(NGramTokenFilter::new(NGramConfig::new(2, 2, false)?)))
        .with_name("bigrams");

    let bigrams: Vec<_> = pipeline.analyze("Yak & Yeti")?.map(|t| t.text).collect();
    println!("Bigrams: {:?}", bigrams);

    // Malformed input bytes separate words
    println!("\n--- Malformed UTF-8 input ---");
    let tokens: Vec<_> = analyzer.analyze_bytes(b"Pokhara\xFFLakeside")?.collect();
    for token in &tokens {
        println!(
            "  \"{}\" (offset: {}-{}, position: {})",
            token.text, token.start_offset, token.end_offset, token.position
        );
    }

    Ok(())
}
