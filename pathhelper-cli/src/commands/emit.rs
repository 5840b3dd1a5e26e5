//! The default (and only) command: print the PATH and MANPATH assignments.

use crate::cli::Cli;
use crate::error::CliError;
use pathhelper::output::write_assignments;
use pathhelper::{Config, Environment, Logger, PathConstructor, ShellStyle};
use std::io::Write;

/// Construct PATH, and MANPATH when it is already set, then print them.
#[derive(Debug, Clone, Copy)]
pub struct EmitCommand {
    /// Output syntax.
    pub style: ShellStyle,
}

impl EmitCommand {
    /// Build the command from parsed arguments and the `SHELL` variable.
    pub fn from_cli(cli: &Cli, env: &dyn Environment) -> Self {
        let shell = env.var_os("SHELL");
        let shell = shell.as_ref().map(|s| s.to_string_lossy());
        Self {
            style: cli.style(shell.as_deref()),
        }
    }

    /// Execute the command, writing the statements to `out`.
    ///
    /// Nothing is written unless every required construction succeeds.
    pub fn execute<W: Write>(
        self,
        env: &dyn Environment,
        logger: Logger,
        out: &mut W,
    ) -> Result<(), CliError> {
        // 1. Resolve sources
        let config = Config::load(env)?;
        let constructor = PathConstructor::new(env, logger);

        // 2. PATH is always constructed
        let path = constructor.construct(&config.path)?;

        // 3. MANPATH only if the caller already has one
        let manpath = if env.is_set(config.manpath.var_name()) {
            Some(constructor.construct(&config.manpath)?)
        } else {
            logger.debug("MANPATH is unset; skipping");
            None
        };

        // 4. Emit
        let mut assignments = vec![(config.path.var_name(), &path)];
        if let Some(manpath) = &manpath {
            assignments.push((config.manpath.var_name(), manpath));
        }
        write_assignments(out, self.style, &assignments)?;

        Ok(())
    }
}
