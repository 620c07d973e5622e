//! Build script for pathinfo-cli.
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
    Command::new("pathinfo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Show parent, name, and absolute path of filesystem paths")
        .long_about(
            "Command-line tool for decomposing filesystem path strings into \
             parent, name, and absolute path",
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
        .subcommand(
            Command::new("show")
                .about("Show path information for a single path")
                .long_about("Decompose a single path string; the path need not exist"),
        )
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main pathinfo.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("pathinfo.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
