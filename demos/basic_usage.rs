// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with numbers to write out, e.g.:
//
//     cargo run --example basic_usage --features logging -- 21 3.1 1000000

use propys::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Propys Example ===\n");

    let formatter = LoggingFormatter::new(UkrainianFormatter::new());

    let mut inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        inputs = ["0", "1", "21", "2.05", "3.1", "1000000", "2000001", "-5", "abc"]
            .iter()
            .map(|s| s.to_string())
            .collect();
    }

    for input in &inputs {
        println!("{}:", input);

        match formatter.text_in_words(input) {
            Ok(words) => println!("  in words: {}", words),
            Err(err) => println!("  in words: error: {}", err),
        }

        match Decimal::from_str(input.trim()) {
            Ok(amount) => match formatter.currency_in_words(amount, false) {
                Ok(words) => println!("  money:    {}", words),
                Err(err) => println!("  money:    error: {}", err),
            },
            Err(_) => println!("  money:    not a decimal amount"),
        }
    }

    // Counted nouns
    println!("\n=== Counted Nouns ===");
    let forms: WordForms = "книжка, книжки, книжок".parse().expect("three forms");
    for n in [1i128, 2, 5, 11, 22, 101] {
        match render_integer(n, Gender::Feminine, &forms) {
            Ok(words) => println!("  {:>4} -> {}", n, words),
            Err(err) => println!("  {:>4} -> error: {}", n, err),
        }
    }

    println!("\n=== Plural Phrases ===");
    for n in [0i128, 1, 3, 12] {
        match get_plural_phrase_packed(n, "файл, файли, файлів, немає файлів") {
            Ok(phrase) => println!("  {}", phrase),
            Err(err) => println!("  error: {}", err),
        }
    }
}
