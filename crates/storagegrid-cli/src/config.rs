//! Connection settings for the command-line tool, read from the environment.

use anyhow::{bail, Context, Result};
use storagegrid_core::{ApiClient, Credentials};

pub const ENDPOINT_VAR: &str = "STORAGEGRID_ENDPOINT";
pub const USERNAME_VAR: &str = "STORAGEGRID_USERNAME";
pub const PASSWORD_VAR: &str = "STORAGEGRID_PASSWORD";
pub const ACCOUNT_ID_VAR: &str = "STORAGEGRID_ACCOUNT_ID";
pub const SKIP_SSL_VAR: &str = "STORAGEGRID_SKIP_SSL";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub endpoint: String,
    pub username: String,
    /// Prompted for when unset
    pub password: Option<String>,
    pub account_id: Option<String>,
    pub skip_ssl: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let Some(endpoint) = get(ENDPOINT_VAR) else {
            bail!("{} is not set", ENDPOINT_VAR);
        };
        let Some(username) = get(USERNAME_VAR) else {
            bail!("{} is not set", USERNAME_VAR);
        };

        Ok(Self {
            endpoint,
            username,
            password: get(PASSWORD_VAR),
            account_id: get(ACCOUNT_ID_VAR),
            skip_ssl: get(SKIP_SSL_VAR).map(|v| v.eq_ignore_ascii_case("true")).unwrap_or(false),
        })
    }

    /// Build a client, signing in to the tenant account when `tenant` is set.
    pub fn client(&self, tenant: bool) -> Result<ApiClient> {
        let password = match self.password {
            Some(ref password) => password.clone(),
            None => rpassword::prompt_password(format!("Password for {}: ", self.username))
                .context("Failed to read password")?,
        };

        let credentials = if tenant {
            let account_id = self
                .account_id
                .as_deref()
                .with_context(|| format!("{} is required for tenant commands", ACCOUNT_ID_VAR))?;
            Credentials::for_account(account_id, &self.username, password)
        } else {
            Credentials::new(&self.username, password)
        };

        let client = ApiClient::builder()
            .endpoint(&self.endpoint)
            .credentials(credentials)
            .skip_tls_verify(self.skip_ssl)
            .build()?;
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_from_lookup() {
        let config = Config::from_lookup(lookup(&[
            (ENDPOINT_VAR, "grid.example.com"),
            (USERNAME_VAR, "root"),
            (PASSWORD_VAR, "secret"),
            (SKIP_SSL_VAR, "TRUE"),
        ]))
        .unwrap();

        assert_eq!(config.endpoint, "grid.example.com");
        assert_eq!(config.password.as_deref(), Some("secret"));
        assert!(config.account_id.is_none());
        assert!(config.skip_ssl);
    }

    #[test]
    fn test_missing_endpoint() {
        let err = Config::from_lookup(lookup(&[(USERNAME_VAR, "root")])).unwrap_err();
        assert!(err.to_string().contains(ENDPOINT_VAR));
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let config = Config::from_lookup(lookup(&[
            (ENDPOINT_VAR, "grid"),
            (USERNAME_VAR, "root"),
            (PASSWORD_VAR, "  "),
            (SKIP_SSL_VAR, "yes"),
        ]))
        .unwrap();
        assert!(config.password.is_none());
        assert!(!config.skip_ssl);
    }

    #[test]
    fn test_tenant_client_requires_account() {
        let config = Config::from_lookup(lookup(&[
            (ENDPOINT_VAR, "grid"),
            (USERNAME_VAR, "root"),
            (PASSWORD_VAR, "secret"),
        ]))
        .unwrap();

        assert!(config.client(false).is_ok());
        let err = config.client(true).err().unwrap();
        assert!(err.to_string().contains(ACCOUNT_ID_VAR));
    }
}
