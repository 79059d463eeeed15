//! `workstation` binary.
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use workstation_cli::cli::{Cli, Command};
use workstation_cli::commands;
use workstation_cli::logging::{self, Logger};

/// Exit code used after Ctrl-C, as shells report for SIGINT.
const INTERRUPTED: i32 = 130;

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Install(_) => "install",
        Command::Check => "check",
        Command::Test => "test",
        Command::Infra(_) => "infra",
        Command::Completions(_) => "completions",
        Command::Version => "version",
    }
}

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();

    match &args.command {
        Command::Version => return exit_code(commands::version::run().map_err(Into::into)),
        Command::Completions(opts) => {
            commands::completions::run(opts);
            return ExitCode::SUCCESS;
        }
        _ => {}
    }

    let name = command_name(&args.command);
    logging::init_subscriber(args.verbose, name);
    let log = Arc::new(Logger::new(name));

    let on_interrupt = Arc::clone(&log);
    if let Err(e) = ctrlc::set_handler(move || {
        on_interrupt.warn("interrupted");
        on_interrupt.print_summary();
        std::process::exit(INTERRUPTED);
    }) {
        log.debug(&format!("cannot install Ctrl-C handler: {e}"));
    }

    let result = match &args.command {
        Command::Install(opts) => commands::install::run(&args.global, opts, &log),
        Command::Check => commands::check::run(&args.global, &log),
        Command::Test => commands::test::run(&args.global, &log),
        Command::Infra(cmd) => commands::infra::run(&args.global, cmd, &log),
        Command::Completions(_) | Command::Version => Ok(()),
    };
    if let Err(e) = &result {
        log.error(&format!("{e:#}"));
    }
    exit_code(result)
}

fn exit_code(result: anyhow::Result<()>) -> ExitCode {
    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
