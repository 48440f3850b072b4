use tracing::debug;
use uuid::Uuid;

use crate::error::ApiError;
use crate::profile::dto::{ProfileRequest, ProfileResponse};
use crate::profile::repo::{NewUserAccount, UserStore};
use crate::profile::validation::validate_registration;

/// Create an account from a registration request.
///
/// Validates first and touches the store only when every field is acceptable.
pub async fn create_profile(
    store: &dyn UserStore,
    mut req: ProfileRequest,
) -> Result<ProfileResponse, ApiError> {
    let errors = validate_registration(&req);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    req.name = req.name.trim().to_string();
    req.email = req.email.trim().to_lowercase();

    // Friendly duplicate check; the unique index still decides races.
    if store.find_by_email(&req.email).await?.is_some() {
        return Err(ApiError::Conflict("Email already registered".into()));
    }

    let new = NewUserAccount {
        user_id: Uuid::new_v4().to_string(),
        name: req.name,
        email: req.email,
        password: req.password,
    };
    let user = store.insert(new).await?;
    debug!(user_id = %user.user_id, "profile created");
    Ok(ProfileResponse::from(user))
}

/// Fetch the profile view for an authenticated caller's email.
pub async fn get_profile(store: &dyn UserStore, email: &str) -> Result<ProfileResponse, ApiError> {
    match store.find_by_email(email).await? {
        Some(user) => Ok(ProfileResponse::from(user)),
        None => Err(ApiError::NotFound("Profile not found".into())),
    }
}
