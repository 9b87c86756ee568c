use std::process::ExitCode;

use tracing::{debug, error};

use portal_infrastructure::AppConfig;
use portal_interfaces_cli::{dispatch, Command, StdinTerminal};

use crate::context::AppContext;
use crate::logging::init_logging;

pub async fn run(command: Command) -> ExitCode {
    let config = match AppConfig::load().await {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err:#}");
            return ExitCode::from(2);
        }
    };
    let _guard = match init_logging(&config) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("{err:#}");
            return ExitCode::from(1);
        }
    };
    debug!(api_base_url = %config.api_base_url, "configuration loaded");

    let context = match AppContext::new(&config).await {
        Ok(context) => context,
        Err(err) => {
            error!("startup failed: {:#}", err);
            eprintln!("startup failed: {err:#}");
            return ExitCode::from(1);
        }
    };

    match dispatch(&context.state, command, &StdinTerminal).await {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!(exit_code = err.exit_code(), "command failed: {}", err);
            eprintln!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
