//! Build script for fieldpath-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("fieldpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse and inspect dotted value paths")
        .long_about(
            "Command-line tool for parsing and inspecting dotted value paths into resource fields",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("parse")
                .about("Parse a subject string and print its segments")
                .long_about("Parse a dotted subject string and print its segment sequence"),
            Command::new("render")
                .about("Print the dotted rendering of a parsed path")
                .long_about("Parse a subject string and print its field identifiers joined by dots"),
            Command::new("validate")
                .about("Check that a subject string is well-formed")
                .long_about("Parse a subject string and exit with status 1 if it is invalid"),
            Command::new("assert-prefix")
                .about("Assert that a dotted candidate prefixes a path")
                .long_about(
                    "Check whether a dotted candidate matches a path's leading field identifiers",
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main fieldpath.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("fieldpath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
