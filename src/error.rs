use std::any::Any;

/// Errors produced while counting and ranking words.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A configuration value was out of range, e.g. a zero chunk size.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// A counting task did not complete. No partial result is returned.
    #[error("counting task failed: {0}")]
    TaskFailed(String),
    /// The worker pool could not be started.
    #[error("unable to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            String::from("unknown panic")
        };

        Error::TaskFailed(message)
    }
}
