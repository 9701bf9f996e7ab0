use std::fmt;

use serde::Serialize;

/// Login credentials posted to the authorize endpoint.
///
/// `account_id` selects a tenant account; leave it unset for grid
/// administrators. Only kept in memory so the session can log in again.
#[derive(Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub cookie: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub csrf_token: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    /// Credentials for a tenant account user.
    pub fn for_account(
        account_id: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            account_id: Some(account_id.into()),
            ..Self::new(username, password)
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("account_id", &self.account_id)
            .field("cookie", &self.cookie)
            .field("csrf_token", &self.csrf_token)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_only_set_fields() {
        let creds = Credentials::new("root", "secret");
        let json = serde_json::to_value(&creds).unwrap();
        assert_eq!(json, serde_json::json!({"username": "root", "password": "secret"}));
    }

    #[test]
    fn test_account_credentials() {
        let mut creds = Credentials::for_account("27825399029832", "admin", "pw");
        creds.csrf_token = true;
        let json = serde_json::to_value(&creds).unwrap();
        assert_eq!(json["accountId"], "27825399029832");
        assert_eq!(json["csrfToken"], true);
        assert!(json.get("cookie").is_none());
    }

    #[test]
    fn test_debug_hides_password() {
        let creds = Credentials::new("root", "hunter2");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("root"));
        assert!(!debug.contains("hunter2"));
    }
}
