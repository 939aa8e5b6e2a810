//! # Chainperm Core
//!
//! Session client and chain-to-PermID pipeline for the RDP REST platform.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Endpoint origin and paths, overridable from the environment |
//! | [`domain`] | Credentials, session token, chain and symbology records |
//! | [`error`] | [`ClientError`] taxonomy |
//! | [`http_client`] | HTTP exchange abstraction and reqwest transport |
//! | [`pipeline`] | Authenticate → chain → limit → symbology → render → revoke |
//! | [`session`] | The four remote operations |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use chainperm_core::{
//!     ChainJob, ChainPipeline, Credentials, EndpointConfig, ReqwestHttpClient, SessionClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = SessionClient::new(EndpointConfig::from_env(), Arc::new(ReqwestHttpClient::new()));
//!     let job = ChainJob::new(Credentials::new("user", "password", "app-key")).with_chain("0#.SETI");
//!
//!     let table = ChainPipeline::new(session)
//!         .run(&job, |table| {
//!             for row in &table.rows {
//!                 println!("{} {}", row.ric, row.perm_id);
//!             }
//!             Ok(())
//!         })
//!         .await?;
//!     assert!(table.len() <= job.limit);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  CLI / User     │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ChainPipeline   │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ SessionClient   │────▶│ HTTP Client      │
//! │                 │     │ (reqwest/fake)   │
//! └─────────────────┘     └──────────────────┘
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod pipeline;
pub mod session;

pub use config::EndpointConfig;

pub use domain::{
    ChainData, ChainResponse, Credentials, IdentifierValue, PermIdRow, PermIdTable,
    SessionToken, SymbologyRecord, SymbologyRequest, SymbologyResponse, NO_PERMID_INFORMATION,
};

pub use error::ClientError;

pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient,
};

pub use pipeline::{select_constituents, ChainJob, ChainPipeline, Stage};

pub use session::SessionClient;
