mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, filter};
use ipfilter_common::config::Config;
use terminal::logging;

fn main() -> ExitCode {
    let cfg: Config = CommandLine::parse_args().into_config();

    logging::init_logging(&cfg);

    match filter::filter(&cfg) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            logging::report_fatal(&e);
            if cfg.exit_zero {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
