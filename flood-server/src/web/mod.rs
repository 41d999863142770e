//! Web layer for the flood-monitoring server.
//!
//! Provides the HTML pages (`/`, `/station/:id`) and the JSON API.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
