//! Command builder for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI.
pub fn build_cli() -> Command {
    Command::new("ddrblob")
        .about("Dump the header, strings and structures of a DDR blob")
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(
            r#"EXAMPLES:
  ddrblob j9ddr.dat                 # full report
  ddrblob j9ddr.dat --color never   # plain text
  ddrblob j9ddr.dat -vv             # log byte order and region layout"#,
        )
        .arg(blob_path_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}
