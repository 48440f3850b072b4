use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    error::ApiError,
    profile::{
        dto::{ProfileRequest, ProfileResponse},
        extractors::AuthedEmail,
        service,
    },
    state::AppState,
};

pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/profile", get(get_profile))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<ProfileRequest>,
) -> Result<(StatusCode, Json<ProfileResponse>), ApiError> {
    let profile = service::create_profile(state.users.as_ref(), payload).await?;

    // Welcome mail is fire and forget; the response never waits on it and a
    // delivery failure never rolls back the registration.
    let mailer = state.mailer.clone();
    let (to, name) = (profile.email.clone(), profile.name.clone());
    tokio::spawn(async move {
        if let Err(e) = mailer.send_welcome_email(&to, &name).await {
            warn!(error = %e, email = %to, "welcome email failed");
        }
    });

    info!(user_id = %profile.user_id, email = %profile.email, "user registered");
    Ok((StatusCode::CREATED, Json(profile)))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthedEmail(email): AuthedEmail,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = service::get_profile(state.users.as_ref(), &email).await?;
    Ok(Json(profile))
}
