//! Detect a business type from a description and print the prompt-ready
//! template JSON.
//!
//! Usage: onboard_detect "I run a nail salon downtown"

use std::env;
use std::process;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use onboard_core::classifier::MAX_SUGGESTIONS;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <business description>", args[0]);
        eprintln!("Example: {} \"I run a nail salon downtown\"", args[0]);
        process::exit(1);
    }
    let description = args[1..].join(" ");

    let engine = onboard_core::engine();
    match engine.detect(&description) {
        Some(detection) => {
            println!(
                "Detected: {} ({})",
                detection.business_type,
                detection.family.label()
            );
            match engine.resolve_as_prompt_text(&detection.business_type, detection.family) {
                Some(json) => println!("{}", json),
                None => {
                    eprintln!(
                        "No template backing '{}' in {}",
                        detection.business_type, detection.family
                    );
                    process::exit(1);
                }
            }
        }
        None => {
            eprintln!("No business type matched.");
            let suggestions = engine.suggest_phrases(&description, MAX_SUGGESTIONS);
            if !suggestions.is_empty() {
                eprintln!("Did you mean:");
                for s in &suggestions {
                    eprintln!("  {} ({}, score {:.2})", s.phrase, s.business_type, s.score);
                }
            }
            process::exit(1);
        }
    }

    Ok(())
}
