//! Main entry point for the path_helper CLI.
//!
//! Prints shell commands that set `PATH` (and `MANPATH`, if it is already
//! set) from `/etc/paths`, `/etc/paths.d`, `/etc/manpaths` and
//! `/etc/manpaths.d`. Typical use from a login script:
//!
//! ```sh
//! eval `/usr/libexec/path_helper -s`
//! ```

mod cli;
mod commands;
mod error;

use cli::Cli;
use commands::EmitCommand;
use pathhelper::ProcessEnvironment;

fn main() {
    // Parse CLI arguments; clap exits with usage on anything but -c or -s
    let cli = Cli::try_parse_args(std::env::args_os()).unwrap_or_else(|e| e.exit());

    let env = ProcessEnvironment;
    let logger = pathhelper::init_logger(&env);

    let stdout = std::io::stdout();
    let result = EmitCommand::from_cli(&cli, &env).execute(&env, logger, &mut stdout.lock());

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("path_helper: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
