use serde::{Deserialize, Serialize};

use crate::profile::repo::UserAccount;

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Public view of an account returned to the client.
/// Never carries the password or OTP fields.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub is_account_verified: bool,
}

impl From<UserAccount> for ProfileResponse {
    fn from(user: UserAccount) -> Self {
        Self {
            user_id: user.user_id,
            name: user.name,
            email: user.email,
            is_account_verified: user.is_account_verified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_response_serialization() {
        let response = ProfileResponse {
            user_id: uuid::Uuid::new_v4().to_string(),
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
            is_account_verified: false,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("ada@x.com"));
        assert!(json.contains("userId"));
        assert!(json.contains("isAccountVerified"));
        assert!(!json.contains("password"));
    }
}
