mod cli;
mod commands;
mod logging;

use cli::{DumpParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    let params = DumpParams::from_matches(&matches);
    logging::init(params.verbosity);
    commands::dump::run(params.into());
}
