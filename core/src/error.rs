use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Training data I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Training frames have mismatched shapes: {0}")]
    Shape(#[from] ndarray::ShapeError),
    #[error("Failed to write training archive: {0}")]
    Npz(#[from] ndarray_npy::WriteNpzError),
}
