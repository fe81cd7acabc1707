//! Product catalog domain library
//!
//! Product model with catalog validation rules, the async repository port
//! with an in-memory adapter, one-shot edit-authorization tokens, and a
//! transient notification bus.

pub mod edit_intent;
pub mod error;
pub mod model;
pub mod notify;
pub mod repository;

pub use edit_intent::EditIntents;
pub use error::{RepositoryError, ValidationError};
pub use model::Product;
pub use notify::{Toast, ToastBus, ToastLevel};
pub use repository::{InMemoryProductRepository, ProductRepository};
