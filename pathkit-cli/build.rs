//! Build script for pathkit-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("pathkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Join, normalize, resolve and parse paths")
        .long_about(
            "Command-line tool for manipulating filesystem paths as strings under POSIX or Windows rules",
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
        .arg(
            Arg::new("platform")
                .long("platform")
                .help("Path rules to apply")
                .value_name("PLATFORM")
                .global(true)
                .env("PATHKIT_PLATFORM"),
        )
        .arg(
            Arg::new("cwd")
                .long("cwd")
                .help("Directory relative paths resolve against (must be absolute)")
                .value_name("DIR")
                .global(true)
                .env("PATHKIT_CWD"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file layered over the user configuration")
                .value_name("FILE")
                .global(true)
                .env("PATHKIT_CONFIG"),
        )
        .subcommands(vec![
            Command::new("join")
                .about("Join fragments with the platform separator")
                .long_about("Concatenate fragments with the separator and collapse duplicate separators"),
            Command::new("resolve")
                .about("Resolve fragments to an absolute path")
                .long_about("Process fragments right to left until an absolute path is formed"),
            Command::new("normalize")
                .about("Collapse separators and dot segments")
                .long_about("Remove '.' segments, apply '..' segments and collapse separators"),
            Command::new("relative")
                .about("Print the relative path between two locations")
                .long_about("Print the path that leads from the first location to the second"),
            Command::new("parse")
                .about("Decompose a path into its parts")
                .long_about("Print dir, base, filename and extension as JSON, YAML or plain text"),
            Command::new("format")
                .about("Assemble a path from its parts")
                .long_about("Join a directory with a base name, or a file name and extension"),
            Command::new("basename").about("Print the last segment of a path"),
            Command::new("dirname").about("Print the directory part of a path"),
            Command::new("extension").about("Print the extension of a path"),
            Command::new("is-absolute")
                .about("Assert that a path is absolute")
                .long_about("Exit with status 1 when the path is relative under the active platform"),
            Command::new("convert").about("Rewrite separators for another platform"),
            Command::new("case").about("Change the casing of an identifier"),
            Command::new("show-config")
                .about("Show the effective configuration")
                .long_about("Display the platform, separators and directory used by the other commands"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    // Generate man pages at build time
    let out_dir = PathBuf::from(
        std::env::var_os("OUT_DIR")
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR not set"))?,
    );
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("pathkit.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
