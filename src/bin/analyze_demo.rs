//! Demo that analyzes keywords from the command line, prints the ranked
//! metrics as JSON, and lists related-keyword suggestions for the first one.
//!
//! Usage: `cargo run --bin analyze_demo -- "how to lose weight fast" seo`

use seo_keyword_analyzer::{generate_related_keywords, KeywordAnalyzer};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let keywords = if args.is_empty() {
        vec![
            "how to lose weight fast".to_string(),
            "buy running shoes online".to_string(),
            "seo".to_string(),
            "best ai software for small business".to_string(),
        ]
    } else {
        args
    };

    let analyzer = KeywordAnalyzer::new();
    let ranked = analyzer.analyze_batch(&keywords)?;
    println!("{}", serde_json::to_string_pretty(&ranked)?);

    if let Some(first) = keywords.first() {
        println!("\nrelated to {first:?}:");
        for suggestion in generate_related_keywords(first) {
            println!("  {suggestion}");
        }
    }

    Ok(())
}
