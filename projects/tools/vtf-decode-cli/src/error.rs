use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    FileDecode(#[from] vtf_decode::FileDecodeError),
    #[error("Texture has no {plane} {index}; it has {available}")]
    PlaneOutOfRange {
        plane: &'static str,
        index: u32,
        available: u32,
    },
}
