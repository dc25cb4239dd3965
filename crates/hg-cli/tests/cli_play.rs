//! Integration tests for the `hausgeist` CLI.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn hausgeist() -> Command {
    Command::cargo_bin("hausgeist").unwrap()
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_describes_the_living_room_and_quits() {
    hausgeist()
        .arg("play")
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The Demo House")
                .and(predicate::str::contains("You look at the Living Room."))
                .and(predicate::str::contains("Goodbye.")),
        );
}

#[test]
fn play_walks_the_key_puzzle() {
    hausgeist()
        .arg("play")
        .write_stdin("grab key\nmove south\nuse key\ns\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You grab the Brass Key.")
                .and(predicate::str::contains("The Oak Door is locked."))
                .and(predicate::str::contains(
                    "You unlock the Oak Door with the Brass Key.",
                ))
                .and(predicate::str::contains(
                    "You move through the Oak Door into the Dining Room.",
                )),
        );
}

#[test]
fn play_understands_misspelled_nonsense_gracefully() {
    hausgeist()
        .arg("play")
        .write_stdin("frobnicate the bazzle\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("I don't understand that action."));
}

#[test]
fn debug_toggles_trace_output() {
    hausgeist()
        .arg("play")
        .write_stdin("debug\nlook door\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Trace on.").and(predicate::str::contains("selectable")),
        );
}

#[test]
fn trace_flag_enables_traces_from_the_start() {
    hausgeist()
        .args(["play", "--trace"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("selectable"));
}

#[test]
fn custom_alias_file_replaces_vocabulary() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("aliases.csv");
    fs::write(&path, "snatch,grab\n").unwrap();

    hausgeist()
        .args(["play", "--aliases", path.to_str().unwrap()])
        .write_stdin("snatch key\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You grab the Brass Key."));
}

#[test]
fn malformed_alias_file_stops_startup() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("aliases.csv");
    fs::write(&path, "snatch,grab\nnocomma\n").unwrap();

    hausgeist()
        .args(["play", "--aliases", path.to_str().unwrap()])
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed alias on line 2"));
}

// ---------------------------------------------------------------------------
// tree
// ---------------------------------------------------------------------------

#[test]
fn tree_shows_hidden_entities() {
    hausgeist()
        .arg("tree")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("+ Living Room")
                .and(predicate::str::contains("- Broken Crate"))
                .and(predicate::str::contains("+ Monster")),
        );
}

// ---------------------------------------------------------------------------
// vocab
// ---------------------------------------------------------------------------

#[test]
fn vocab_lists_canonical_terms_with_synonyms() {
    hausgeist()
        .arg("vocab")
        .assert()
        .success()
        .stdout(predicate::str::contains("grab").and(predicate::str::contains("take")));
}
