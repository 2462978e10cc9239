use crate::runtime::config::{Demo, RuntimeConfig, HELP};
use crate::runtime::logging::init_tracing;
use device_core::{Console, ConsoleError};
use device_io::{run_adapter_demo, run_bridge_demo};
use std::io;
use std::process::ExitCode;
use tracing::{error, info};

pub fn run_from_args() -> ExitCode {
    let config = match RuntimeConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };
    if config.show_help {
        RuntimeConfig::print_help();
        return ExitCode::SUCCESS;
    }
    run(config)
}

pub fn run(config: RuntimeConfig) -> ExitCode {
    init_tracing(config.json_logs, config.verbose);

    info!(
        demo = ?config.demo,
        seed = ?config.seed,
        diag_format = ?config.diag_format,
        "Starting device shell"
    );

    match execute(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Demo aborted");
            ExitCode::FAILURE
        }
    }
}

fn execute(config: &RuntimeConfig) -> Result<(), ConsoleError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match config.demo {
        Demo::Visitor => {
            let stdin = io::stdin();
            let mut console = Console::new(stdin.lock(), out, config.console_config());
            let stats = console.run()?;
            info!(
                commands_dispatched = stats.commands_dispatched,
                unknown_commands = stats.unknown_commands,
                starts = stats.starts,
                stops = stats.stops,
                diagnostics = stats.diagnostics,
                "Session complete"
            );
        }
        Demo::Adapter => {
            run_adapter_demo(&mut out)?;
            info!("Adapter demo complete");
        }
        Demo::Bridge => {
            run_bridge_demo(&mut out)?;
            info!("Bridge demo complete");
        }
    }
    Ok(())
}
