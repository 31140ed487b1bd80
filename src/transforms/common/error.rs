use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    #[error("Not supported: {0}")]
    NotSupported(String),
}

pub type Result<T> = std::result::Result<T, TransformError>;

/// Shared precondition of the spatial transforms: axes 0 and 1 are rows and columns.
pub(crate) fn ensure_spatial(ndim: usize, op: &str) -> Result<()> {
    if ndim < 2 {
        return Err(TransformError::ShapeMismatch(format!(
            "{op} needs at least 2 axes (rows, columns), got {ndim}"
        )));
    }
    Ok(())
}
