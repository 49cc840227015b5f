#[macro_use]
extern crate log;
extern crate libpivec;

mod args;
mod clilog;

use std::env;
use std::process::exit;

use libpivec::errors::*;
use libpivec::{hwcore, platform};

/// Prints `err` with its causes and exits with its code.
fn exit_app(err: &Error) -> ! {
    eprintln!("Error: {}", err);
    for cause in err.iter().skip(1) {
        eprintln!("caused by: {}", cause);
    }
    if err.is_usage_error() {
        eprint!("\n{}", args::USAGE);
    }
    exit(err.exit_code())
}

fn main() {
    if let Err(e) = clilog::init() {
        eprintln!("Warning: could not install logger: {}", e);
    }

    let config = match args::parse(env::args().skip(1)) {
        Ok(args::Action::Run(config)) => config,
        Ok(args::Action::Help) => {
            print!("{}", args::USAGE);
            exit(EXIT_OK)
        }
        Err(e) => exit_app(&e),
    };
    clilog::set_verbose(config.verbose);
    debug!("{:?}", config);

    let firmware = match platform::ProcFirmware::init() {
        Ok(firmware) => firmware,
        Err(e) => exit_app(&e),
    };
    let result = hwcore::run(&config, &firmware);
    // `exit` skips destructors, so shut the firmware interface down first
    drop(firmware);

    match result {
        Ok(Some(report)) => print!("{}", report),
        Ok(None) => {}
        Err(e) => exit_app(&e),
    }
}
