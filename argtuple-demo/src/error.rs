use argtuple::ConversionError;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("invalid {var}={value:?}: {source}")]
    Config {
        var: &'static str,
        value: String,
        source: ConversionError,
    },

    #[error("--count must be at least 1")]
    ZeroCount,
}
