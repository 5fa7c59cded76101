//! Web layer for the subway network server.
//!
//! Provides JSON endpoints for stations, lines, sections and extra fees.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
