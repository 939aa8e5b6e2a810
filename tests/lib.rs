//! Shared fixtures for chainperm behaviour tests.
//!
//! [`FakePlatform`] is an in-memory stand-in for the RDP REST platform. It
//! routes requests by path, records every request, and answers symbology
//! lookups by echoing the requested RICs unless a response is scripted.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

pub use chainperm_core::{
    ChainJob, ChainPipeline, ClientError, Credentials, EndpointConfig, HttpClient, HttpError,
    HttpMethod, HttpRequest, HttpResponse, PermIdTable, SessionClient,
};

pub const BASE_URL: &str = "https://rdp.test";
pub const CLIENT_ID: &str = "app-key";
pub const ACCESS_TOKEN: &str = "access-1";

pub const TOKEN_JSON: &str = r#"{"access_token":"access-1","refresh_token":"refresh-1","expires_in":"600","scope":"trapi","token_type":"Bearer"}"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Token,
    Revoke,
    Chain,
    Symbology,
}

impl Route {
    pub fn of(url: &str) -> Option<Self> {
        let path = url.strip_prefix(BASE_URL)?;
        let path = path.split('?').next().unwrap_or(path);
        match path {
            "/auth/oauth2/v1/token" => Some(Self::Token),
            "/auth/oauth2/v1/revoke" => Some(Self::Revoke),
            "/data/pricing/chains/v1" => Some(Self::Chain),
            "/discovery/symbology/v1/lookup" => Some(Self::Symbology),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct FakePlatform {
    scripted: Mutex<HashMap<Route, HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakePlatform {
    /// Grants a token, expands the chain to `constituents`, echoes lookups
    /// and accepts the revoke.
    pub fn with_chain(constituents: &[&str]) -> Arc<Self> {
        let platform = Self::default();
        platform.script(Route::Token, HttpResponse::ok_json(TOKEN_JSON));
        platform.script(Route::Chain, HttpResponse::ok_json(chain_json(constituents)));
        platform.script(Route::Revoke, HttpResponse::new(200, ""));
        Arc::new(platform)
    }

    pub fn script(&self, route: Route, response: HttpResponse) {
        self.scripted
            .lock()
            .expect("script store should not be poisoned")
            .insert(route, response);
    }

    pub fn session(self: &Arc<Self>) -> SessionClient {
        SessionClient::new(
            EndpointConfig::default().with_base_url(BASE_URL),
            self.clone(),
        )
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.requests()
            .iter()
            .filter_map(|request| Route::of(&request.url))
            .collect()
    }

    pub fn requests_to(&self, route: Route) -> Vec<HttpRequest> {
        self.requests()
            .into_iter()
            .filter(|request| Route::of(&request.url) == Some(route))
            .collect()
    }

    /// RICs carried by the first symbology request, in request order.
    pub fn symbology_values(&self) -> Vec<String> {
        let Some(request) = self.requests_to(Route::Symbology).into_iter().next() else {
            return Vec::new();
        };
        let body: serde_json::Value =
            serde_json::from_str(request.body.as_deref().unwrap_or("{}")).unwrap_or_default();
        body["from"][0]["values"]
            .as_array()
            .map(|values| {
                values
                    .iter()
                    .filter_map(|value| value.as_str().map(str::to_owned))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn respond(&self, request: &HttpRequest) -> HttpResponse {
        let Some(route) = Route::of(&request.url) else {
            return HttpResponse::new(404, "no such route");
        };

        if let Some(response) = self
            .scripted
            .lock()
            .expect("script store should not be poisoned")
            .get(&route)
        {
            return response.clone();
        }

        match route {
            Route::Symbology => echo_symbology(request),
            _ => HttpResponse::new(500, "unscripted route"),
        }
    }
}

impl HttpClient for FakePlatform {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let response = self.respond(&request);
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        Box::pin(async move { Ok(response) })
    }
}

pub fn credentials() -> Credentials {
    Credentials::new("user@example.com", "secret", CLIENT_ID)
}

pub fn chain_json(constituents: &[&str]) -> String {
    serde_json::json!({ "data": { "constituents": constituents } }).to_string()
}

/// Deterministic PermID for the `index`-th requested RIC.
pub fn perm_id_for(index: usize) -> String {
    format!("42950{index:05}")
}

fn echo_symbology(request: &HttpRequest) -> HttpResponse {
    let body: serde_json::Value =
        serde_json::from_str(request.body.as_deref().unwrap_or("{}")).unwrap_or_default();
    let records: Vec<serde_json::Value> = body["from"][0]["values"]
        .as_array()
        .map(|values| {
            values
                .iter()
                .enumerate()
                .map(|(index, ric)| {
                    serde_json::json!({
                        "input": [{ "value": ric, "identifierType": "RIC" }],
                        "output": [{ "value": perm_id_for(index), "identifierType": "PermID" }]
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    HttpResponse::ok_json(serde_json::json!({ "data": records }).to_string())
}
