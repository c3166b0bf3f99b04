use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuarryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Snapshot error: {0}")]
    SnapshotError(#[from] crate::world::snapshot::SnapshotError),
}

pub type Result<T> = std::result::Result<T, QuarryError>;
