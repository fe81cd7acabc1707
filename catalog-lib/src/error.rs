//! Error types for the product catalog.

/// A single product field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The id must be 3 to 10 characters of lowercase letters, digits, or dashes.
    #[error("id must be 3-10 characters of [a-z0-9-]")]
    InvalidId,

    /// The name must be 5 to 100 characters long.
    #[error("name must be 5-100 characters")]
    InvalidName,

    /// The description must be 10 to 200 characters long.
    #[error("description must be 10-200 characters")]
    InvalidDescription,

    /// The logo must be an absolute URL.
    #[error("logo must be a valid URL")]
    InvalidLogo,

    /// The release date may not lie in the past.
    #[error("release date must be today or later")]
    ReleaseInPast,

    /// The revision date must be exactly one year after the release date.
    #[error("revision date must be exactly one year after release")]
    RevisionNotPlusOneYear,
}

/// Errors returned by the product repository port.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// No product with the given id exists.
    #[error("product not found: {id}")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },

    /// A product with the given id already exists.
    #[error("duplicate product id: {id}")]
    DuplicateId {
        /// The id that collided.
        id: String,
    },

    /// The product failed validation.
    #[error("invalid product: {0}")]
    Invalid(#[from] ValidationError),
}

impl RepositoryError {
    /// Creates a not-found error for the given id.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Creates a duplicate-id error for the given id.
    pub fn duplicate(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }
}
