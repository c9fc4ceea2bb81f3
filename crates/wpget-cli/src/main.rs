use wpget_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse_args();

    if let Err(err) = logging::init_logging(cli.verbose) {
        eprintln!("wpget: {:#}", err);
    }

    if let Err(err) = cli.run() {
        eprintln!("wpget error: {:#}", err);
        std::process::exit(1);
    }
}
