//! Example of analysing text with the library API

use textmetry_core::{AnalyzerConfig, Input, TextAnalyzer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example 1: Simple usage with default configuration
    println!("=== Example 1: Simple Usage ===");
    let analyzer = TextAnalyzer::new();
    let text = "Dr. Smith went to the store. He bought milk. The price was reasonable.";
    let result = analyzer.analyze(text);

    println!("Input text: {}", text);
    println!(
        "{} words, {} sentences, {} paragraphs",
        result.statistics.word_count,
        result.statistics.sentence_count,
        result.statistics.paragraph_count
    );
    for (name, score) in result.readability.named() {
        println!("  {:<22}{:.1}", name, score);
    }

    // Example 2: Custom reading rates
    println!("\n=== Example 2: Custom Configuration ===");
    let config = AnalyzerConfig::builder()
        .reading_wpm(250)
        .speaking_wpm(150)
        .top_words(3)
        .build()?;
    let custom = TextAnalyzer::with_config(config)?;
    let long_text = "Readable prose uses short sentences. ".repeat(40);
    let custom_result = custom.analyze_input(Input::from_text(long_text))?;

    println!(
        "Reading: {}s, speaking: {}s",
        custom_result.times.reading_seconds, custom_result.times.speaking_seconds
    );
    for entry in &custom_result.top_words {
        println!("  {} ({})", entry.word, entry.count);
    }

    // Example 3: Batch analysis
    println!("\n=== Example 3: Batch ===");
    let docs = ["One sentence.", "Two sentences here. Yes.", ""];
    for (doc, result) in docs.iter().zip(custom.analyze_batch(&docs)) {
        println!("{:?}: {} sentence(s)", doc, result.statistics.sentence_count);
    }

    Ok(())
}
