use cidr_expand::cli::{Cli, CliOutcome};
use cidr_expand::config::{init_logging, Config};
use cidr_expand::{run, ExpandError};
use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env();
    if let Err(e) = init_logging(&config) {
        eprintln!("Error initializing logging: {e}");
    }
    log::debug!("#Start main() {config:?}");

    let cli = match Cli::try_from_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(CliOutcome::Info(e)) => e.exit(),
        Err(outcome) => return report(ExpandError::from(outcome)),
    };

    let stdin = io::stdin();
    if cli.cidr.is_none() && stdin.is_terminal() {
        eprint!("CIDR: ");
        io::stderr().flush().ok();
    }

    let mut stdin = stdin.lock();
    let mut stdout = io::stdout().lock();
    match run(&cli, &mut stdin, &mut stdout) {
        Ok(count) => {
            log::debug!("#End main() {count} addresses");
            ExitCode::SUCCESS
        }
        Err(e) => report(e),
    }
}

fn report(err: ExpandError) -> ExitCode {
    log::debug!("report({err:?})");
    match &err {
        ExpandError::Usage(usage) => eprint!("{usage}"),
        _ => eprintln!("{} {err}", "error:".red().bold()),
    }
    ExitCode::from(err.exit_code())
}
