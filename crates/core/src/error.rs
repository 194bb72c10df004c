use thiserror::Error;

/// Failures the input layer can actually detect. A delay that was too short
/// for the target application to settle is not observable here and has no
/// variant.
#[derive(Debug, Error)]
pub enum InputError {
    /// The host refuses to generate synthetic input (missing Accessibility
    /// permission, no backend for this OS).
    #[error("synthetic input unavailable: {0}")]
    Unavailable(String),

    /// A key name outside the supported vocabulary.
    #[error("unrecognized key name \"{0}\"")]
    UnrecognizedKey(String),

    /// The OS rejected an individual event post.
    #[error("input injection failed: {0}")]
    Inject(String),
}

pub type Result<T> = std::result::Result<T, InputError>;
