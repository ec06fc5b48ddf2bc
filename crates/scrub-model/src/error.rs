use thiserror::Error;

/// Schema-level failures. Individual malformed values are handled by the
/// per-column cleaning policies and never surface as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("required column `{0}` is missing from the input table")]
    MissingColumn(&'static str),
}
