use std::{io, process::ExitCode};

use sckshot::{CaptureOptions, run};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = CaptureOptions::from_env();
    log::debug!("capture options: {options:?}");

    match run(&options, &mut io::stdout().lock()) {
        Ok(written) => {
            log::info!("wrote {} file(s)", written.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("sckshot: {err}");
            ExitCode::FAILURE
        }
    }
}
