use serde::{Deserialize, Serialize};

/// Prefix every local tenant user's unique name carries.
pub const USER_PREFIX: &str = "user/";

/// A tenant user (local or federated).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// `user/<name>` or `federated-user/<name>`; the part after the slash
    /// is the sign-in name.
    pub unique_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Group ids this user belongs to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub member_of: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub federated: Option<bool>,
    #[serde(rename = "userURN", skip_serializing_if = "Option::is_none")]
    pub user_urn: Option<String>,
}

impl User {
    pub fn new(unique_name: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            unique_name: unique_name.into(),
            full_name: Some(full_name.into()),
            ..Default::default()
        }
    }

    /// The sign-in name, i.e. the unique name without its prefix.
    pub fn short_name(&self) -> &str {
        self.unique_name.rsplit('/').next().unwrap_or("")
    }
}
