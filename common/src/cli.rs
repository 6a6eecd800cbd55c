use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

pub const DEFAULT_CONFIG: &str = "rules.toml";

pub fn cli() -> Command {
    Command::new("chain-route")
        .version("0.1.0")
        .about("Route input lines through a chain of rule consumers")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("CONFIG")
                .help("TOML file with the [[rules]] of the chain, in chain order")
                .default_value(DEFAULT_CONFIG)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("fallback")
                .long("fallback")
                .action(ArgAction::SetTrue)
                .help("Append a rule named `fallback` that claims every line"),
        )
        .arg(
            Arg::new("input")
                .help("Lines to route, stdin is read when none are given")
                .required(false)
                .num_args(1..)
                .allow_hyphen_values(true)
                .trailing_var_arg(true),
        )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteArgs {
    pub config: PathBuf,
    pub fallback: bool,
    pub input: Vec<String>,
}

impl RouteArgs {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            config: matches
                .get_one::<PathBuf>("config")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG)),
            fallback: matches.get_flag("fallback"),
            input: matches
                .get_many::<String>("input")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
        }
    }

    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = cli().try_get_matches_from(args)?;
        Ok(Self::from_matches(&matches))
    }
}
