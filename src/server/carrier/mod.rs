//! HTTP client for the FedEx tracking API.
//!
//! Every tracking lookup performs a fresh OAuth client-credentials exchange
//! before the tracking request. Tokens are short-lived and lookups are rare,
//! so no token cache is kept.

pub mod model;

use serde::Deserialize;
use thiserror::Error;

use crate::server::carrier::model::TrackResponse;

#[derive(Error, Debug)]
pub enum CarrierError {
    #[error("Carrier request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Carrier token exchange failed with status {0}")]
    TokenExchange(u16),
    #[error("Carrier tracking request failed with status {0}")]
    Tracking(u16),
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Clone)]
pub struct CarrierClient {
    http: reqwest::Client,
    base_url: String,
    client_id: String,
    client_secret: String,
}

impl CarrierClient {
    pub fn new(base_url: String, client_id: String, client_secret: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            client_id,
            client_secret,
        }
    }

    async fn fetch_token(&self) -> Result<String, CarrierError> {
        let response = self
            .http
            .post(format!("{}/oauth/token", self.base_url))
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CarrierError::TokenExchange(response.status().as_u16()));
        }

        let token: TokenResponse = response.json().await?;

        Ok(token.access_token)
    }

    /// Fetches raw tracking data for a tracking number, including the full
    /// scan event history.
    pub async fn track(&self, tracking_number: &str) -> Result<TrackResponse, CarrierError> {
        let token = self.fetch_token().await?;

        let body = serde_json::json!({
            "trackingInfo": [
                {
                    "trackingNumberInfo": {
                        "trackingNumber": tracking_number,
                    }
                }
            ],
            "includeDetailedScans": true,
        });

        let response = self
            .http
            .post(format!("{}/track/v1/trackingnumbers", self.base_url))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CarrierError::Tracking(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }
}
