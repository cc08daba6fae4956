use clap::ValueEnum;

/// Output format for `pagemap emit`
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum EmitFormat {
    /// Pretty-printed JSON object
    #[default]
    #[value(name = "json")]
    Json,

    /// One `key<TAB>path` line per entry, for shell pipelines
    #[value(name = "lines")]
    Lines,
}
