use crate::maturity::classify_maturity_level;
use anyhow::Result;
use colored::*;

pub fn handle_classify(score: f64) -> Result<()> {
    let maturity = classify_maturity_level(score)?;
    println!(
        "{} ({}-{})",
        maturity.to_string().bold(),
        maturity.range.0,
        maturity.range.1
    );
    println!("  {}", maturity.description);
    Ok(())
}
