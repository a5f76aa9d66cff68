use thiserror::Error;

/// Result type alias for TODO operations
pub type Result<T> = std::result::Result<T, TodoError>;

/// Error kinds observable at the service layer.
///
/// `NotFound` is the only distinguished store outcome: it is raised when an
/// update targets an absent row. Everything else the store reports collapses
/// into `Database`. `Validation` never reaches the store; the HTTP layer
/// raises it before dispatching.
///
/// # Examples
///
/// ```rust
/// use todo_core::error::TodoError;
///
/// let not_found = TodoError::not_found_id(42);
/// assert!(not_found.is_not_found());
/// assert_eq!(not_found.status_code(), 404);
///
/// let invalid = TodoError::empty_field("subject");
/// assert!(invalid.is_validation());
/// assert_eq!(invalid.status_code(), 400);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// No TODO exists with the given id
    #[error("TODO not found: {0}")]
    NotFound(i64),

    /// Request data failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Store failure (connectivity, constraint, cancellation)
    #[error("Database error: {0}")]
    Database(String),
}

impl TodoError {
    /// Create a not found error for a TODO id
    pub fn not_found_id(id: i64) -> Self {
        Self::NotFound(id)
    }

    /// Create a validation error for an empty required field
    pub fn empty_field(field: &str) -> Self {
        Self::Validation(format!("Field '{field}' cannot be empty"))
    }

    /// Create a validation error for a field holding an unusable value
    pub fn invalid_field(field: &str, value: impl std::fmt::Display) -> Self {
        Self::Validation(format!("Invalid value for '{field}': {value}"))
    }

    /// Check if this error indicates a not found condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, TodoError::NotFound(_))
    }

    /// Check if this error indicates a validation problem
    pub fn is_validation(&self) -> bool {
        matches!(self, TodoError::Validation(_))
    }

    /// Check if this error indicates a database problem
    pub fn is_database(&self) -> bool {
        matches!(self, TodoError::Database(_))
    }

    /// Convert to appropriate HTTP status code equivalent
    pub fn status_code(&self) -> u16 {
        match self {
            TodoError::NotFound(_) => 404,
            TodoError::Validation(_) => 400,
            TodoError::Database(_) => 500,
        }
    }
}
