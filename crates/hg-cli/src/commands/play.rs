//! The interactive play loop.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use hg_engine::{Session, SessionConfig};
use log::debug;

use crate::demo;

/// Run the demo house as an interactive session over stdin/stdout.
pub fn run(aliases: Option<&Path>, trace: bool) -> Result<(), String> {
    let aliases = super::load_aliases(aliases)?;
    let demo = demo::build().map_err(|e| e.to_string())?;
    let config = SessionConfig::default().with_trace(trace);
    let mut session = Session::new(demo.world, demo.actor, demo.start, aliases, config)
        .map_err(|e| e.to_string())?;

    println!("{}", session.world().name.bold());
    println!("Type \"help\" for a list of actions, \"quit\" to leave.");
    println!();
    print_turn(&mut session, "look")?;

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;
        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| e.to_string())?;
        if read == 0 {
            break;
        }
        let input = line.trim();
        debug!("input: {input:?}");
        match input {
            "" => {}
            "quit" | "exit" => break,
            "debug" => {
                let on = session.toggle_trace();
                println!("Trace {}.", if on { "on" } else { "off" });
            }
            _ => print_turn(&mut session, input)?,
        }
    }
    println!("Goodbye.");
    Ok(())
}

fn print_turn(session: &mut Session, input: &str) -> Result<(), String> {
    let output = session.turn(input).map_err(|e| e.to_string())?;
    for line in &output.trace {
        println!("{}", format!("  [{line}]").dimmed());
    }
    println!("{}", output.narration);
    Ok(())
}
