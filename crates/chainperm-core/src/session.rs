//! Session client for the RDP REST platform.
//!
//! Wraps the four remote operations used by a run: password/refresh grant
//! authentication, token revocation, chain expansion and symbology lookup.
//! The client holds no session state; the caller owns the [`SessionToken`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::config::EndpointConfig;
use crate::domain::{ChainResponse, Credentials, SessionToken, SymbologyRequest, SymbologyResponse};
use crate::error::ClientError;
use crate::http_client::{
    HttpAuth, HttpClient, HttpRequest, HttpResponse, DEFAULT_TIMEOUT_MS,
};

/// OAuth scope requested on the password grant.
pub const SCOPE: &str = "trapi";
/// Sent on every grant so this login takes over any other live session.
pub const TAKE_EXCLUSIVE_SIGN_ON_CONTROL: bool = true;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const JSON_CONTENT_TYPE: &str = "application/json";
const REDACTED: &str = "<redacted>";

const OP_AUTHENTICATE: &str = "authenticate";
const OP_REVOKE: &str = "revoke";
const OP_FETCH_CHAIN: &str = "fetch_chain";
const OP_RESOLVE_SYMBOLOGY: &str = "resolve_symbology";

#[derive(Clone)]
pub struct SessionClient {
    config: EndpointConfig,
    http_client: Arc<dyn HttpClient>,
    timeout_ms: u64,
}

impl SessionClient {
    pub fn new(config: EndpointConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            config,
            http_client,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Request a token. An empty `refresh_token` sends a password grant,
    /// anything else sends a refresh grant.
    pub async fn authenticate(
        &self,
        credentials: &Credentials,
        refresh_token: &str,
    ) -> Result<SessionToken, ClientError> {
        if credentials.username.is_empty()
            || credentials.password.is_empty()
            || credentials.client_id.is_empty()
        {
            return Err(ClientError::invalid_argument(
                OP_AUTHENTICATE,
                "username, password and client id must not be empty",
            ));
        }

        let url = self.config.auth_url();
        info!(%url, "requesting authentication token");

        let form = grant_form(credentials, refresh_token);
        debug!(
            operation = OP_AUTHENTICATE,
            body = %encode_form_redacted(&form),
            "outgoing request message"
        );

        let request = HttpRequest::post(url)
            .with_header("content-type", FORM_CONTENT_TYPE)
            .with_body(encode_form(&form));
        let response = self.send(OP_AUTHENTICATE, request).await?;

        if !response.is_success() {
            warn!(status = response.status, "authentication failed");
            return Err(ClientError::Authentication {
                status: response.status,
                body: response.body,
            });
        }

        info!("authentication granted");
        decode(OP_AUTHENTICATE, &response.body)
    }

    /// Refresh-grant login using the refresh token of a live session.
    pub async fn refresh(
        &self,
        credentials: &Credentials,
        token: &SessionToken,
    ) -> Result<SessionToken, ClientError> {
        if token.refresh_token.is_empty() {
            return Err(ClientError::invalid_argument(
                OP_AUTHENTICATE,
                "refresh token must not be empty",
            ));
        }
        self.authenticate(credentials, &token.refresh_token).await
    }

    /// Revoke an access token. Authenticates with HTTP Basic `client_id:`.
    pub async fn revoke(&self, client_id: &str, access_token: &str) -> Result<(), ClientError> {
        if client_id.is_empty() || access_token.is_empty() {
            return Err(ClientError::invalid_argument(
                OP_REVOKE,
                "client id and access token must not be empty",
            ));
        }

        let url = self.config.revoke_url();
        info!(%url, "requesting authentication revoke");

        let form = [("token", access_token.to_owned())];
        debug!(
            operation = OP_REVOKE,
            body = %encode_form_redacted(&form),
            "outgoing request message"
        );

        let request = HttpRequest::post(url)
            .with_header("content-type", FORM_CONTENT_TYPE)
            .with_auth(&HttpAuth::basic_client_id(client_id))
            .with_body(encode_form(&form));
        let response = self.send(OP_REVOKE, request).await?;

        if !response.is_success() {
            return Err(ClientError::Authentication {
                status: response.status,
                body: response.body,
            });
        }

        info!("authentication revoked");
        Ok(())
    }

    /// Expand a chain into its constituent RICs.
    pub async fn fetch_chain(
        &self,
        symbol: &str,
        access_token: &str,
    ) -> Result<ChainResponse, ClientError> {
        if symbol.is_empty() || access_token.is_empty() {
            return Err(ClientError::invalid_argument(
                OP_FETCH_CHAIN,
                "chain symbol and access token must not be empty",
            ));
        }

        let url = format!(
            "{}?universe={}",
            self.config.chain_url(),
            urlencoding::encode(symbol)
        );
        info!(%url, "requesting chain data");

        let request = HttpRequest::get(url)
            .with_header("accept", JSON_CONTENT_TYPE)
            .with_auth(&HttpAuth::BearerToken(access_token.to_owned()));
        let response = self.send(OP_FETCH_CHAIN, request).await?;

        if !response.is_success() {
            return Err(ClientError::ChainLookup {
                status: response.status,
                body: response.body,
            });
        }

        let chain: ChainResponse = decode(OP_FETCH_CHAIN, &response.body)?;
        info!(
            constituents = chain.constituents().len(),
            "expand chain data success"
        );
        Ok(chain)
    }

    /// Resolve RICs to organization PermIDs.
    pub async fn resolve_symbology(
        &self,
        rics: &[String],
        access_token: &str,
    ) -> Result<SymbologyResponse, ClientError> {
        if rics.is_empty() || access_token.is_empty() {
            return Err(ClientError::invalid_argument(
                OP_RESOLVE_SYMBOLOGY,
                "ticker list and access token must not be empty",
            ));
        }

        let url = self.config.symbology_url();
        info!(%url, "requesting PermID data");

        let payload = SymbologyRequest::ric_to_organization_permid(rics);
        let body = serde_json::to_string(&payload).map_err(|error| ClientError::Decode {
            operation: OP_RESOLVE_SYMBOLOGY,
            message: error.to_string(),
        })?;
        debug!(
            operation = OP_RESOLVE_SYMBOLOGY,
            body = %body,
            "outgoing request message"
        );

        let request = HttpRequest::post(url)
            .with_header("content-type", JSON_CONTENT_TYPE)
            .with_auth(&HttpAuth::BearerToken(access_token.to_owned()))
            .with_body(body);
        let response = self.send(OP_RESOLVE_SYMBOLOGY, request).await?;

        if !response.is_success() {
            return Err(ClientError::Symbology {
                status: response.status,
                body: response.body,
            });
        }

        info!("get symbology data success");
        decode(OP_RESOLVE_SYMBOLOGY, &response.body)
    }

    async fn send(
        &self,
        operation: &'static str,
        request: HttpRequest,
    ) -> Result<HttpResponse, ClientError> {
        debug!(operation, method = request.method.as_str(), url = %request.url, "sending request");
        self.http_client
            .execute(request.with_timeout_ms(self.timeout_ms))
            .await
            .map_err(|error| ClientError::Transport {
                operation,
                message: error.message().to_owned(),
            })
    }
}

fn grant_form(credentials: &Credentials, refresh_token: &str) -> Vec<(&'static str, String)> {
    let exclusive = TAKE_EXCLUSIVE_SIGN_ON_CONTROL.to_string();
    if refresh_token.is_empty() {
        vec![
            ("username", credentials.username.clone()),
            ("client_id", credentials.client_id.clone()),
            ("password", credentials.password.clone()),
            ("scope", String::from(SCOPE)),
            ("grant_type", String::from("password")),
            ("takeExclusiveSignOnControl", exclusive),
        ]
    } else {
        vec![
            ("username", credentials.username.clone()),
            ("client_id", credentials.client_id.clone()),
            ("refresh_token", refresh_token.to_owned()),
            ("grant_type", String::from("refresh_token")),
            ("takeExclusiveSignOnControl", exclusive),
        ]
    }
}

fn encode_form(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_form_redacted(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| match *name {
            "password" | "refresh_token" | "token" => format!("{name}={REDACTED}"),
            _ => format!("{}={}", name, urlencoding::encode(value)),
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn decode<T: DeserializeOwned>(operation: &'static str, body: &str) -> Result<T, ClientError> {
    serde_json::from_str(body).map_err(|error| ClientError::Decode {
        operation,
        message: error.to_string(),
    })
}
