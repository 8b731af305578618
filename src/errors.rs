use thiserror::Error;

/// Failures surfaced by the splitter and the ranking metrics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Malformed shapes, out-of-range indices or an unusable parameter.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Input that leaves the requested quantity undefined, such as an
    /// all-zero truth vector whose ideal DCG is zero.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}
