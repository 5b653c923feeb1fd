use thiserror::Error;

pub type Result<T> = ::std::result::Result<T, FormatError>;

/// Happens while reading or writing converted `.vem` models.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Could not (de)serialize model data: {0}")]
    SerializationError(#[from] Box<bincode::ErrorKind>),
    #[error("Could not access model file: {0}")]
    IoError(#[from] std::io::Error),
}
