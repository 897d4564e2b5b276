//! Service account authentication for the Google Sheets API.
//!
//! The key file is signed into a JWT assertion and exchanged for a short-lived
//! bearer token. Every failure here is an `AuthFailure`.

use std::{
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SyncError};

pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const TOKEN_LIFETIME_SECS: u64 = 3600;

/// The fields of a service account key file that are needed to sign in.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: u64,
    exp: u64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl ServiceAccountKey {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|err| {
            SyncError::AuthFailure(format!(
                "Failed to read credentials {}: {}",
                path.display(),
                err
            ))
        })?;
        Self::parse(&content).map_err(|err| match err {
            SyncError::AuthFailure(message) => {
                SyncError::AuthFailure(format!("{}: {}", path.display(), message))
            }
            other => other,
        })
    }

    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|err| {
            SyncError::AuthFailure(format!("Invalid service account key: {}", err))
        })
    }

    /// Build the signed JWT assertion for `scope`, issued at `issued_at`.
    fn assertion(&self, scope: &str, issued_at: u64) -> Result<String> {
        let claims = Claims {
            iss: &self.client_email,
            scope,
            aud: &self.token_uri,
            iat: issued_at,
            exp: issued_at + TOKEN_LIFETIME_SECS,
        };
        let key = EncodingKey::from_rsa_pem(self.private_key.as_bytes())
            .map_err(|err| SyncError::AuthFailure(format!("Invalid private key: {}", err)))?;
        jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &key)
            .map_err(|err| SyncError::AuthFailure(format!("Failed to sign assertion: {}", err)))
    }

    /// Exchange a signed assertion for an access token.
    pub async fn access_token(&self, client: &Client, scope: &str) -> Result<String> {
        let issued_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        let assertion = self.assertion(scope, issued_at)?;

        let response = client
            .post(&self.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(|err| SyncError::AuthFailure(format!("Token request failed: {}", err)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::AuthFailure(format!(
                "Token endpoint returned {}: {}",
                status,
                body.trim()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|err| SyncError::AuthFailure(format!("Invalid token response: {}", err)))?;
        Ok(token.access_token)
    }
}
