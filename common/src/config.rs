use std::path::PathBuf;

pub struct Config {
    /// Reads addresses from this file instead of standard input.
    pub input: Option<PathBuf>,
    /// Only the fatal error report reaches stderr.
    pub quiet: bool,
    /// Number of `-v` flags given on the command line.
    pub verbose: u8,
    /// Exits with status 0 even when the input could not be parsed.
    ///
    /// Keeps the behavior of the older tool for scripts that depend on it.
    pub exit_zero: bool,
}
