//! Application layer turning domain state into display-ready values.

/// Data transfer objects.
pub mod dto;
/// Application services.
pub mod services;

pub use dto::ViewState;
pub use services::StringCatalog;
