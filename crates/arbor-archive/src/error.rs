use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to encode archive: {0}")]
    Encode(#[from] zip::result::ZipError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
