//! Error types for the emulated foreign-interface surface

/// Result type for VM-level operations
pub type VmResult<T> = Result<T, VmError>;

/// Expected, recoverable failure conditions.
///
/// Structural contract violations (instantiating an arbitrary class,
/// registering an instance method on one) are not `VmError`s — they abort
/// with a panic because they indicate a misconfigured binding layer, not a
/// condition the caller is expected to branch on.
#[derive(Debug, Clone, thiserror::Error)]
pub enum VmError {
    /// A class with this binary name is already registered
    #[error("Class already registered: {0}")]
    DuplicateClass(String),

    /// No class with this binary name is registered
    #[error("Class not found: {0}")]
    ClassNotFound(String),

    /// Type mismatch during value conversion
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        /// Expected type name
        expected: String,
        /// Actual type name
        got: String,
    },
}
