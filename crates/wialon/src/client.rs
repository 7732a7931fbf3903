use std::env;

use async_trait::async_trait;
use model::fleet::{FleetUnit, Position};
use serde_json::{json, Value};
use tokio::sync::RwLock;
use transfer::fleet::{self, FleetError, FleetTracking};

use crate::{
    model::{
        LoginResponse, SearchItemResponse, SearchItemsResponse, UnitData, FLAG_BASE,
        FLAG_POSITION,
    },
    ApiError, INVALID_SESSION,
};

pub const WIALON_API_URL: &str = "https://hst-api.wialon.com/wialon/ajax.html";

#[derive(Clone, Debug)]
pub struct WialonCredentials {
    pub token: String,
    pub api_url: String,
}

impl WialonCredentials {
    pub fn env() -> Self {
        let token = env::var("WIALON_TOKEN").expect("Expected Wialon API token.");
        let api_url =
            env::var("WIALON_API_URL").unwrap_or_else(|_| WIALON_API_URL.to_owned());

        Self { token, api_url }
    }
}

/// Session-holding client for the vendor's ajax endpoint. `token/login`
/// yields a session id which every query carries as `sid`; an
/// invalid-session answer triggers one transparent re-login.
pub struct WialonClient {
    pub credentials: WialonCredentials,
    http: reqwest::Client,
    session: RwLock<Option<String>>,
}

impl WialonClient {
    pub fn new(credentials: WialonCredentials) -> Self {
        Self {
            credentials,
            http: reqwest::Client::new(),
            session: RwLock::new(None),
        }
    }

    pub async fn login(&self) -> Result<String, ApiError> {
        let response = self
            .request(
                "token/login",
                &json!({ "token": self.credentials.token }),
                None,
            )
            .await?;
        let login: LoginResponse = serde_json::from_value(response)?;

        match &login.user {
            Some(user) => log::info!("wialon session established for {}", user.nm),
            None => log::info!("wialon session established"),
        }

        let mut session = self.session.write().await;
        *session = Some(login.eid.clone());
        Ok(login.eid)
    }

    async fn session_id(&self) -> Result<String, ApiError> {
        let session = self.session.read().await;
        match session.as_ref() {
            Some(sid) => Ok(sid.clone()),
            None => {
                drop(session);
                self.login().await
            }
        }
    }

    /// One query against the ajax endpoint, without session handling.
    async fn request(
        &self,
        svc: &str,
        params: &Value,
        sid: Option<&str>,
    ) -> Result<Value, ApiError> {
        let mut query =
            vec![("svc", svc.to_owned()), ("params", params.to_string())];
        if let Some(sid) = sid {
            query.push(("sid", sid.to_owned()));
        }

        let response = self
            .http
            .get(&self.credentials.api_url)
            .query(&query)
            .send()
            .await?;

        let status_code = response.status();
        if !status_code.is_success() {
            let url = response.url().to_string();
            return Err(ApiError::InvalidResponse {
                status_code,
                url,
                response: response.text().await.ok(),
            });
        }

        let value: Value = response.json().await?;
        if let Some(code) = value.get("error").and_then(|error| error.as_i64()) {
            return Err(ApiError::Api { code: code as i32 });
        }
        Ok(value)
    }

    /// A session query; re-logs in once when the session has expired.
    async fn request_with_session(
        &self,
        svc: &str,
        params: &Value,
    ) -> Result<Value, ApiError> {
        let sid = self.session_id().await?;
        match self.request(svc, params, Some(&sid)).await {
            Err(ApiError::Api {
                code: INVALID_SESSION,
            }) => {
                log::info!("wialon session expired, logging in again");
                let sid = self.login().await?;
                self.request(svc, params, Some(&sid)).await
            }
            other => other,
        }
    }

    pub async fn search_units(&self) -> Result<Vec<UnitData>, ApiError> {
        let params = json!({
            "spec": {
                "itemsType": "avl_unit",
                "propName": "sys_name",
                "propValueMask": "*",
                "sortType": "sys_name"
            },
            "force": 1,
            "flags": FLAG_BASE | FLAG_POSITION,
            "from": 0,
            "to": 0
        });
        let value = self.request_with_session("core/search_items", &params).await?;
        let response: SearchItemsResponse = serde_json::from_value(value)?;
        Ok(response.items)
    }

    pub async fn search_unit(&self, unit_id: u64) -> Result<Option<UnitData>, ApiError> {
        let params = json!({
            "id": unit_id,
            "flags": FLAG_BASE | FLAG_POSITION
        });
        let value = self.request_with_session("core/search_item", &params).await?;
        let response: SearchItemResponse = serde_json::from_value(value)?;
        Ok(response.item)
    }
}

#[async_trait]
impl FleetTracking for WialonClient {
    async fn units(&self) -> fleet::Result<Vec<FleetUnit>> {
        let units = self
            .search_units()
            .await
            .map_err(|why| FleetError::Provider(Box::new(why)))?;
        Ok(units.iter().map(UnitData::to_unit).collect())
    }

    async fn unit_position(&self, unit_id: u64) -> fleet::Result<Position> {
        let unit = self
            .search_unit(unit_id)
            .await
            .map_err(|why| FleetError::Provider(Box::new(why)))?
            .ok_or(FleetError::UnitNotFound)?;
        let position = unit.pos.ok_or(FleetError::NoPosition)?;
        Ok(position.to_position())
    }
}
