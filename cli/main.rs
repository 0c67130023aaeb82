mod args;
mod proc_state;
mod tools;
mod util;
mod version;

use crate::args::flags_from_vec;
use crate::args::AppConfig;
use crate::args::EngageSubcommand;
use crate::args::Flags;

use engage_runtime::colors;
use engage_runtime::tokio_util::run_local;
use errors::anyhow::Error;
use libs::clap;
use libs::dotenv;
use libs::log::Level;
use std::env;

async fn run_subcommand(flags: Flags, config: AppConfig) -> Result<i32, Error> {
    match flags.subcommand {
        EngageSubcommand::Info(_info_flags) => {
            tools::info::info(&config);
            Ok(0)
        }
        EngageSubcommand::Serve(_serve_flags) => {
            tools::serve::serve(config).await?;
            Ok(0)
        }
    }
}

fn setup_panic_hook() {
    // Tokio does not exit the process when a task panics, so the hook does it
    // after printing where to report the bug.
    let orig_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        eprintln!("\n============================================================");
        eprintln!("Engage has panicked. This is a bug in Engage. Please report this");
        eprintln!("together with the steps that lead to it. Re-run with the");
        eprintln!("RUST_BACKTRACE=1 env var set and include the backtrace.");
        eprintln!();
        eprintln!("Platform: {} {}", env::consts::OS, env::consts::ARCH);
        eprintln!("Version: {}", version::engage());
        eprintln!();
        orig_hook(panic_info);
        std::process::exit(1);
    }));
}

fn unwrap_or_exit<T>(result: Result<T, Error>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => {
            let error_string = format!("{error:?}");
            let error_code = 1;

            eprintln!(
                "{}: {}",
                colors::red_bold("error"),
                error_string.trim_start_matches("error: ")
            );
            std::process::exit(error_code);
        }
    }
}

pub fn main() {
    setup_panic_hook();
    // A missing .env file is fine.
    let _ = dotenv::dotenv();
    let args: Vec<String> = env::args().collect();

    let flags = match flags_from_vec(args) {
        Ok(flags) => flags,
        Err(err @ clap::Error { .. })
            if err.kind() == clap::error::ErrorKind::DisplayHelp
                || err.kind() == clap::error::ErrorKind::DisplayVersion =>
        {
            let _ = err.print();
            std::process::exit(0);
        }
        Err(err) => unwrap_or_exit(Err(Error::from(err))),
    };

    let config = unwrap_or_exit(AppConfig::from_env(&flags));
    let log_level = flags
        .log_level
        .or_else(|| config.debug.then_some(Level::Debug));
    util::logger::init(log_level);

    let future = run_subcommand(flags, config);
    let exit_code = unwrap_or_exit(run_local(future).map_err(Error::from).and_then(|r| r));

    std::process::exit(exit_code);
}
