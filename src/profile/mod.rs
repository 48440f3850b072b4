use crate::state::AppState;
use axum::Router;

mod dto;
pub(crate) mod extractors;
pub mod handlers;
pub mod repo;
pub mod service;
mod validation;

pub fn router() -> Router<AppState> {
    handlers::profile_routes()
}
