//! Basic usage of the cleaning pipeline

use seiri_core::{clean_text_with_language, CleanConfig, TextCleaner};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let raw = "12:01 嗯 大家好歡迎收聽\n這個 今天我們要討論的主題是文字清理\n44:12 最後謝謝大家\n";

    // Method 1: convenience function with language defaults
    println!("=== Method 1: Convenience Function ===");
    let cleaned = clean_text_with_language(raw, "zh")?;
    println!("{cleaned}\n");

    // Method 2: count mode with a custom group size
    println!("=== Method 2: Count Mode ===");
    let config = CleanConfig::builder()
        .language("zh")
        .units_per_paragraph(2)
        .build()?;
    let cleaner = TextCleaner::new(config)?;
    println!("{}\n", cleaner.clean(raw));

    // Method 3: length mode wraps toward a character target
    println!("=== Method 3: Length Mode ===");
    let config = CleanConfig::builder()
        .language("zh")
        .target_chars(20)
        .build()?;
    let cleaner = TextCleaner::new(config)?;
    println!("{}", cleaner.clean(raw));

    Ok(())
}
