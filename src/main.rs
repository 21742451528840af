use clap::Parser;
use sedoctool::cli::{run_cli, Cli};
use sedoctool::logging::{init_logging, LogConfig};
use std::process;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            eprintln!("sedoctool exiting for: {e}");
            process::exit(1);
        }
        // --help / --version
        Err(e) => e.exit(),
    };

    if let Err(e) = init_logging(&LogConfig::from_env()) {
        eprintln!("warning: {e:#}");
    }

    if let Err(e) = run_cli(cli) {
        eprintln!("sedoctool exiting for: {e:#}");
        process::exit(1);
    }
}
