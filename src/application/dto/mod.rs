//! Data transfer objects for the application layer.

mod view_state;

pub use view_state::ViewState;
