//! Argument builders for the CLI.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Blob file to read (positional).
pub fn blob_path_arg() -> Arg {
    Arg::new("blob_path")
        .value_name("BLOB")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("DDR blob file")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Diagnostic verbosity (-v, repeatable).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("Log decoding details to stderr (-v info, -vv debug, -vvv trace)")
}
