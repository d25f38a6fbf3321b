use clap::ValueEnum;
use serde::Deserialize;

/// Default tag when neither `--token` nor the config names one.
pub const DEFAULT_TOKEN: &str = "div";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OutputMode {
    Human,
    Json,
}
