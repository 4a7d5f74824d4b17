//! Flags shared by the batch commands.

/// Configuration for `rewrite`, `notebook` and `normalize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Compute every change but write nothing (dry run).
    pub check: bool,
    /// Print a line diff of each changed file instead of writing it.
    pub diff: bool,
    /// Ignore `.ioliftignore` files. Built-in directory skips still apply.
    pub no_ignore: bool,
}

impl RunConfig {
    /// Whether this run writes to disk.
    pub fn writes(&self) -> bool {
        !self.check && !self.diff
    }
}

/// Result of parsing a batch command's arguments.
#[derive(Debug, PartialEq, Eq)]
pub enum ParsedArgs {
    Run {
        config: RunConfig,
        /// Target paths; `.` when none were given.
        paths: Vec<String>,
    },
    Help,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArgError {
    #[error("unknown option: {0}")]
    UnknownOption(String),
}

/// Parse the arguments that follow a batch subcommand.
///
/// Flags and paths may be mixed in any order. `--help` wins over
/// everything else.
pub fn parse_run_args(args: &[String]) -> Result<ParsedArgs, ArgError> {
    let mut config = RunConfig::default();
    let mut paths = Vec::new();

    for arg in args {
        match arg.as_str() {
            "--check" | "--dry-run" => config.check = true,
            "--diff" => config.diff = true,
            "--no-ignore" => config.no_ignore = true,
            "--help" | "-h" => return Ok(ParsedArgs::Help),
            flag if flag.starts_with('-') && flag != "-" => {
                return Err(ArgError::UnknownOption(flag.to_owned()));
            }
            _ => paths.push(arg.clone()),
        }
    }

    if paths.is_empty() {
        paths.push(".".to_owned());
    }
    Ok(ParsedArgs::Run { config, paths })
}
