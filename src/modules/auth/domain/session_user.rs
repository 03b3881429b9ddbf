use serde::{Deserialize, Serialize};

/// The identity attached to the running session.
///
/// Created on login, restored from durable storage at startup, destroyed
/// on logout or expiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_img: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_without_an_absent_avatar() {
        let user = SessionUser {
            id: 1,
            name: "Rin".to_string(),
            email: "rin@example.com".to_string(),
            profile_img: None,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("profile_img"));

        let back: SessionUser = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
