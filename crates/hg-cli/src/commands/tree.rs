//! Dump the demo world's containment tree.

use colored::Colorize;
use hg_core::tree;

use crate::demo;

/// Print every room's subtree. Hidden broken forms render with a `-`
/// marker; everything else with `+`.
pub fn run() -> Result<(), String> {
    let demo = demo::build().map_err(|e| e.to_string())?;
    println!("{}", demo.world.name.bold());
    for room in demo.rooms {
        print!("{}", tree::render(&demo.world, room));
    }
    Ok(())
}
