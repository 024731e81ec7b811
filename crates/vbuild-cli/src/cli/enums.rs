use clap::ValueEnum;
use vbuild_config::Mode;

/// Build mode selected on the command line
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ModeArg {
    /// Stable filenames, dev server, hot module replacement
    #[value(name = "development")]
    Development,

    /// Content-hashed filenames, style extraction, chunk splitting
    #[value(name = "production")]
    Production,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Development => Mode::Development,
            ModeArg::Production => Mode::Production,
        }
    }
}

/// Pick the explicit mode, or read `NODE_ENV` when none was given.
pub fn effective_mode(arg: Option<ModeArg>) -> Mode {
    arg.map(Mode::from).unwrap_or_else(Mode::from_env)
}
