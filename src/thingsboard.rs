//! Minimal ThingsBoard REST client (login, device lookup, telemetry deletion).

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::config::TbConfig;
use crate::timerange::DeletionWindow;
use crate::{Error, Result};

/// Client for the ThingsBoard tenant REST API.
///
/// Every call is one blocking round-trip from the caller's point of view;
/// the JWT token obtained from [`login`](Self::login) is passed explicitly
/// to the subsequent calls.
#[derive(Debug, Clone)]
pub struct ThingsBoardClient {
    http: Client,
    config: TbConfig,
}

impl ThingsBoardClient {
    /// Create a client with the given connection settings.
    pub fn new(config: TbConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(format!("delete_telemetry/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::ConnectionError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Create a client from environment configuration.
    pub fn from_env() -> Result<Self> {
        Self::new(TbConfig::from_env()?)
    }

    /// Authenticate and get a JWT token.
    pub async fn login(&self) -> Result<String> {
        let url = format!("{}/api/auth/login", self.config.base_url);
        let payload = LoginRequest {
            username: &self.config.username,
            password: &self.config.password,
        };

        let response = self
            .http
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::ConnectionError(format!("Failed to reach {}: {}", url, e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::ConnectionError(format!("Failed to read login response: {}", e)))?;

        if status != StatusCode::OK {
            return Err(Error::LoginFailed(format!(
                "HTTP {}: {}",
                status.as_u16(),
                text
            )));
        }

        let body: LoginResponse = serde_json::from_str(&text)
            .map_err(|e| Error::LoginFailed(format!("Unexpected login response: {} ({})", text, e)))?;

        let token = body
            .token
            .ok_or_else(|| Error::LoginFailed(format!("No token in login response: {}", text)))?;

        info!(user = %self.config.username, "✅ Logged in to ThingsBoard");
        Ok(token)
    }

    /// Resolve a device UUID by its display name.
    pub async fn get_device_id(&self, token: &str, device_name: &str) -> Result<Uuid> {
        let url = format!("{}/api/tenant/devices", self.config.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("deviceName", device_name)])
            .header("X-Authorization", format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| Error::ConnectionError(format!("Failed to reach {}: {}", url, e)))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            Error::ConnectionError(format!("Failed to read device response: {}", e))
        })?;

        if status != StatusCode::OK {
            return Err(Error::ApiError {
                status: status.as_u16(),
                body: text,
            });
        }

        let device: Device = serde_json::from_str(&text)?;
        let device_id = device
            .id
            .and_then(|entity| entity.id)
            .ok_or_else(|| Error::DeviceNotFound(device_name.to_string()))?;

        info!(device = device_name, id = %device_id, "✅ Resolved device");
        Ok(device_id)
    }

    /// Delete the device's timeseries data inside `window`.
    ///
    /// `rewriteLatestIfDeleted` asks the platform to rewrite its
    /// latest-value cache when the most recent point falls in the range.
    pub async fn delete_timeseries(
        &self,
        token: &str,
        device_id: Uuid,
        window: DeletionWindow,
    ) -> Result<()> {
        let url = format!(
            "{}/api/plugins/telemetry/DEVICE/{}/timeseries/delete",
            self.config.base_url, device_id
        );

        let response = self
            .http
            .delete(&url)
            .query(&[
                ("startTs", window.start_ms.to_string()),
                ("endTs", window.end_ms.to_string()),
                ("rewriteLatestIfDeleted", "true".to_string()),
            ])
            .header("X-Authorization", format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| Error::ConnectionError(format!("Failed to reach {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::ApiError {
                status: status.as_u16(),
                body: text,
            });
        }

        info!(
            device_id = %device_id,
            start_ts = window.start_ms,
            end_ts = window.end_ms,
            "🗑️ Deleted telemetry"
        );
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: Option<String>,
}

/// Device payload; only the nested entity id matters here.
#[derive(Debug, Deserialize)]
struct Device {
    id: Option<EntityId>,
    #[allow(dead_code)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EntityId {
    id: Option<Uuid>,
    #[serde(rename = "entityType")]
    #[allow(dead_code)]
    entity_type: Option<String>,
}
