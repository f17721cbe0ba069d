use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::accounts::repo_types::UserAccount;

/// Request body for account creation. The credential arrives already
/// hashed; this service never sees plaintext passwords.
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub email: String,
    pub hashed_password: String,
    pub full_name: Option<String>,
    pub travel_preferences: Option<serde_json::Value>,
}

/// Request body for partial updates. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAccountRequest {
    pub email: Option<String>,
    pub hashed_password: Option<String>,
    pub full_name: Option<String>,
    pub travel_preferences: Option<serde_json::Value>,
}

/// Query parameters for lookup by email.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// Account representation returned to clients.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub travel_preferences: Option<serde_json::Value>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<UserAccount> for AccountResponse {
    fn from(account: UserAccount) -> Self {
        Self {
            id: account.id,
            email: account.email,
            full_name: account.full_name,
            travel_preferences: account.travel_preferences,
            created_at: account.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn response_omits_credential_hash() {
        let response = AccountResponse::from(UserAccount {
            id: Uuid::new_v4(),
            email: "trip@example.com".into(),
            hashed_password: "$argon2id$stub".into(),
            full_name: None,
            travel_preferences: Some(serde_json::json!({"budget": "mid"})),
            created_at: datetime!(2026-01-15 10:00 UTC),
        });

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("trip@example.com"));
        assert!(json.contains("budget"));
        assert!(!json.contains("argon2id"));
    }

    #[test]
    fn update_request_defaults_absent_fields_to_none() {
        let req: UpdateAccountRequest =
            serde_json::from_str(r#"{"full_name": "Ada Wanderer"}"#).unwrap();
        assert_eq!(req.full_name.as_deref(), Some("Ada Wanderer"));
        assert!(req.email.is_none());
        assert!(req.hashed_password.is_none());
        assert!(req.travel_preferences.is_none());
    }

    #[test]
    fn create_request_accepts_nested_preferences() {
        let req: CreateAccountRequest = serde_json::from_str(
            r#"{
                "email": "a@x.com",
                "hashed_password": "$h",
                "travel_preferences": {"regions": ["alps", "andes"], "flags": {"red_eye": false}}
            }"#,
        )
        .unwrap();
        assert_eq!(req.email, "a@x.com");
        assert!(req.full_name.is_none());
        let prefs = req.travel_preferences.unwrap();
        assert_eq!(prefs["regions"][1], "andes");
        assert_eq!(prefs["flags"]["red_eye"], false);
    }
}
