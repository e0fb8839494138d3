use thiserror::Error;

/// Errors raised at the fallible edges around the engine.
///
/// The engine itself never fails: configuration problems are clamped and
/// missing geometry keeps it detached. These variants exist for the code that
/// reads configuration and looks up host elements.
#[derive(Error, Debug)]
pub enum TiltError {
    /// Configuration text could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    /// The container has not been laid out or is gone.
    #[error("container geometry unavailable")]
    GeometryUnavailable,

    /// A host element lookup or DOM call failed.
    #[error("dom error: {0}")]
    Dom(String),
}

pub type TiltResult<T> = Result<T, TiltError>;
