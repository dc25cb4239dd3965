//! List the parser's vocabulary.

use std::path::Path;

use colored::Colorize;

/// Print every canonical term with its synonyms.
pub fn run(aliases: Option<&Path>) -> Result<(), String> {
    let table = super::load_aliases(aliases)?;
    println!("{} canonical terms:", table.canonicals().len());
    for canonical in table.canonicals() {
        let synonyms: Vec<String> = table
            .expansions(&canonical)
            .into_iter()
            .skip(1)
            .collect();
        println!("  {:<10} {}", canonical.bold(), synonyms.join(", "));
    }
    Ok(())
}
