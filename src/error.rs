use thiserror::Error;

#[derive(Error, Debug)]
pub enum MendelError {
    #[error("Unknown genotype: {0}")]
    UnknownGenotype(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialisation error: {0}")]
    Serialise(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MendelError>;
