use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User account record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserAccount {
    pub id: Uuid,                     // unique account ID, assigned once at creation
    pub email: String,                // login email, unique case-insensitively
    #[serde(skip_serializing)]
    pub hashed_password: String,      // pre-hashed credential, not exposed in JSON
    pub full_name: Option<String>,
    pub travel_preferences: Option<serde_json::Value>, // opaque JSON document, no schema
    pub created_at: OffsetDateTime,   // creation timestamp, never rewritten
}

/// Input for account creation. `id` and `created_at` are filled in the
/// create path when absent.
#[derive(Debug, Clone)]
pub struct NewUserAccount {
    pub id: Option<Uuid>,
    pub email: String,
    pub hashed_password: String,
    pub full_name: Option<String>,
    pub travel_preferences: Option<serde_json::Value>,
    pub created_at: Option<OffsetDateTime>,
}

impl NewUserAccount {
    /// Resolve `id` and `created_at` for insertion, generating defaults
    /// for omitted values. The schema declares no column defaults; this
    /// is the only place defaults come from.
    pub(crate) fn identity(&self) -> (Uuid, OffsetDateTime) {
        (
            self.id.unwrap_or_else(Uuid::new_v4),
            self.created_at.unwrap_or_else(OffsetDateTime::now_utc),
        )
    }
}

/// Partial update. `None` leaves the field unchanged; `id` and
/// `created_at` are not expressible as input.
#[derive(Debug, Clone, Default)]
pub struct UserAccountPatch {
    pub email: Option<String>,
    pub hashed_password: Option<String>,
    pub full_name: Option<String>,
    pub travel_preferences: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn new_account() -> NewUserAccount {
        NewUserAccount {
            id: None,
            email: "trip@example.com".into(),
            hashed_password: "$argon2id$stub".into(),
            full_name: None,
            travel_preferences: None,
            created_at: None,
        }
    }

    #[test]
    fn identity_generates_when_absent() {
        let new = new_account();
        let (id_a, _) = new.identity();
        let (id_b, _) = new.identity();
        assert_ne!(id_a, id_b, "each call draws a fresh random id");
    }

    #[test]
    fn identity_respects_supplied_values() {
        let id = Uuid::new_v4();
        let created_at = datetime!(2026-01-15 10:00 UTC);
        let new = NewUserAccount {
            id: Some(id),
            created_at: Some(created_at),
            ..new_account()
        };
        assert_eq!(new.identity(), (id, created_at));
    }

    #[test]
    fn record_serialization_skips_hashed_password() {
        let account = UserAccount {
            id: Uuid::new_v4(),
            email: "trip@example.com".into(),
            hashed_password: "$argon2id$stub".into(),
            full_name: Some("Ada Wanderer".into()),
            travel_preferences: Some(serde_json::json!({"seat": "window"})),
            created_at: datetime!(2026-01-15 10:00 UTC),
        };

        let json = serde_json::to_string(&account).unwrap();
        assert!(json.contains("trip@example.com"));
        assert!(json.contains("window"));
        assert!(!json.contains("hashed_password"));
        assert!(!json.contains("argon2id"));
    }
}
