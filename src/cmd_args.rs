use std::ffi::OsString;

pub use clap::Parser;

use crate::config::DEFAULT_QUIT_EVENT;
use crate::mvc::EventCode;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Event script to replay
    /// JSON file of the form {"steps": [[1, 2], [3]]}. Overrides MVCKIT_SCRIPT_PATH.
    #[clap(short = 's', long, help = "path to a JSON event script")]
    script: Option<String>,

    /// Inline events, one per step
    #[clap(
        short = 'e',
        long,
        value_delimiter = ',',
        conflicts_with = "script",
        allow_hyphen_values = true,
        help = "comma-separated event codes, one per step"
    )]
    events: Vec<EventCode>,

    /// Event code that stops the loop early
    #[clap(short = 'q', long, default_value_t = DEFAULT_QUIT_EVENT, help = "quit event code")]
    quit_event: EventCode,

    /// Enable debug logging
    #[clap(short = 'v', long, help = "verbose output")]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    script: Option<String>,
    events: Vec<EventCode>,
    quit_event: EventCode,
    verbose: bool,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn events(&self) -> &[EventCode] {
        &self.events
    }

    pub fn quit_event(&self) -> EventCode {
        self.quit_event
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            script: args.script,
            events: args.events,
            quit_event: args.quit_event,
            verbose: args.verbose,
        }
    }
}
