#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports environment variable overrides via the `TESSERA_DEMO_*` prefix.

use std::env;
use std::fmt;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
Tessera demo: labels arranged in a fixed-column grid

USAGE:
    tessera-demo [OPTIONS]

OPTIONS:
    --columns=N      Number of grid columns (default: 2)
    --width=N        Available width in cells (default: terminal width)
    --padding=N      Padding around each label in cells (default: 1)
    --inset-top=N    Rows reserved for the status line (default: 1)
    --items=N        Number of labels to show (default: 5)
    --help, -h       Show this help message
    --version, -V    Show version

ENVIRONMENT VARIABLES:
    TESSERA_DEMO_COLUMNS      Override --columns
    TESSERA_DEMO_WIDTH        Override --width
    TESSERA_DEMO_PADDING      Override --padding
    TESSERA_DEMO_INSET_TOP    Override --inset-top
    TESSERA_DEMO_ITEMS        Override --items
    RUST_LOG                  Log filter for stderr output (default: warn)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Grid column count. Zero is accepted here and rejected by the layout.
    pub columns: u16,
    /// Available width; `None` means ask the terminal.
    pub width: Option<u16>,
    /// Padding on every side of each label.
    pub padding: u16,
    /// Rows above the grid holding the status line.
    pub inset_top: u16,
    /// Number of labels.
    pub items: u16,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            columns: 2,
            width: None,
            padding: 1,
            inset_top: 1,
            items: 5,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Opts),
    Help,
    Version,
}

/// A malformed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptsError {
    InvalidValue { flag: &'static str, value: String },
    UnknownArgument(String),
}

impl fmt::Display for OptsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { flag, value } => write!(f, "invalid {flag} value: {value}"),
            Self::UnknownArgument(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for OptsError {}

const FLAGS: [(&str, &str); 5] = [
    ("--columns=", "TESSERA_DEMO_COLUMNS"),
    ("--width=", "TESSERA_DEMO_WIDTH"),
    ("--padding=", "TESSERA_DEMO_PADDING"),
    ("--inset-top=", "TESSERA_DEMO_INSET_TOP"),
    ("--items=", "TESSERA_DEMO_ITEMS"),
];

impl Opts {
    /// Parse the process arguments and environment.
    pub fn parse() -> Result<Command, OptsError> {
        Self::parse_from(env::args().skip(1), |key| env::var(key).ok())
    }

    /// Parse `args` (without the program name), reading overrides through
    /// `var`.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags. Unparseable environment values are
    /// ignored; unparseable flags are an error.
    pub fn parse_from<I, S, V>(args: I, var: V) -> Result<Command, OptsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        V: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        for (flag, key) in FLAGS {
            if let Some(val) = var(key)
                && let Ok(n) = val.trim().parse::<u16>()
            {
                opts.set(flag, n);
            }
        }

        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                other => {
                    let Some((flag, val)) = FLAGS
                        .iter()
                        .find_map(|(flag, _)| other.strip_prefix(flag).map(|val| (*flag, val)))
                    else {
                        return Err(OptsError::UnknownArgument(other.to_string()));
                    };
                    let n = val.parse::<u16>().map_err(|_| OptsError::InvalidValue {
                        flag: flag.trim_end_matches('='),
                        value: val.to_string(),
                    })?;
                    opts.set(flag, n);
                }
            }
        }

        Ok(Command::Run(opts))
    }

    fn set(&mut self, flag: &str, n: u16) {
        match flag {
            "--columns=" => self.columns = n,
            "--width=" => self.width = Some(n),
            "--padding=" => self.padding = n,
            "--inset-top=" => self.inset_top = n,
            "--items=" => self.items = n,
            _ => {}
        }
    }
}
