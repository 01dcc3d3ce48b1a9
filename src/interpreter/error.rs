use thiserror::Error;

/// Errors raised while evaluating a program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A name was not bound anywhere in the scope chain.
    #[error("LookupError: variable {name} is not defined")]
    Lookup { name: String },

    #[error("RuntimeError: condition {found} is not a Bool")]
    NotABool { found: String },

    #[error("RuntimeError: {found} is not a function")]
    NotCallable { found: String },

    /// A native received a value of the wrong kind.
    #[error("RuntimeError: expected a {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("RuntimeError: no binding for {name} defined")]
    MissingEntry { name: String },

    #[error("DuplicateBindingError: multiple definitions for '{name}'")]
    DuplicateBinding { name: String },
}
