//! Web front end for departure reports.
//!
//! Renders the same text report as the CLI inside an HTML page.

mod routes;
mod state;
pub mod templates;

pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
