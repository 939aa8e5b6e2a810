//! Chain-to-PermID pipeline.
//!
//! Runs one linear session:
//!
//! ```text
//! Start → Authenticated → ChainFetched → LimitValidated
//!       → SymbologyResolved → Rendered → Revoked → Done
//! ```
//!
//! Any error moves the run to `Aborted` and is returned to the caller. The
//! render callback runs before revoke, so a failed revoke still leaves the
//! table printed.

use std::fmt::{Display, Formatter};
use std::io;

use tracing::{debug, warn};

use crate::domain::{Credentials, PermIdTable};
use crate::error::ClientError;
use crate::session::SessionClient;

pub const DEFAULT_CHAIN: &str = ".AV.O";
pub const DEFAULT_LIMIT: usize = 10;

/// Pipeline position, logged on every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    Authenticated,
    ChainFetched,
    LimitValidated,
    SymbologyResolved,
    Rendered,
    Revoked,
    Done,
    Aborted,
}

impl Stage {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Authenticated => "authenticated",
            Self::ChainFetched => "chain_fetched",
            Self::LimitValidated => "limit_validated",
            Self::SymbologyResolved => "symbology_resolved",
            Self::Rendered => "rendered",
            Self::Revoked => "revoked",
            Self::Done => "done",
            Self::Aborted => "aborted",
        }
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainJob {
    pub credentials: Credentials,
    pub chain: String,
    pub limit: usize,
}

impl ChainJob {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            chain: String::from(DEFAULT_CHAIN),
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_chain(mut self, chain: impl Into<String>) -> Self {
        self.chain = chain.into();
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

pub struct ChainPipeline {
    session: SessionClient,
}

impl ChainPipeline {
    pub fn new(session: SessionClient) -> Self {
        Self { session }
    }

    /// Run the full session. `render` receives the table before the token is
    /// revoked; its error aborts the run ahead of revoke.
    pub async fn run<F>(&self, job: &ChainJob, render: F) -> Result<PermIdTable, ClientError>
    where
        F: FnOnce(&PermIdTable) -> io::Result<()>,
    {
        let mut stage = Stage::Start;
        let result = self.run_stages(job, render, &mut stage).await;
        match &result {
            Ok(table) => debug!(stage = %Stage::Done, rows = table.len(), "pipeline stage"),
            Err(error) => warn!(stage = %Stage::Aborted, after = %stage, %error, "pipeline aborted"),
        }
        result
    }

    async fn run_stages<F>(
        &self,
        job: &ChainJob,
        render: F,
        stage: &mut Stage,
    ) -> Result<PermIdTable, ClientError>
    where
        F: FnOnce(&PermIdTable) -> io::Result<()>,
    {
        let token = self.session.authenticate(&job.credentials, "").await?;
        advance(stage, Stage::Authenticated);
        debug!(?token, "session token");

        let chain = self
            .session
            .fetch_chain(&job.chain, &token.access_token)
            .await?;
        advance(stage, Stage::ChainFetched);

        let constituents = chain.constituents();
        debug!(chain = %job.chain, ?constituents, "chain constituents");
        let selected = select_constituents(&job.chain, constituents, job.limit)?;
        advance(stage, Stage::LimitValidated);

        let resolved = self
            .session
            .resolve_symbology(selected, &token.access_token)
            .await?;
        advance(stage, Stage::SymbologyResolved);

        let table = PermIdTable::from_response(&resolved);
        if table.is_empty() {
            warn!(chain = %job.chain, "symbology lookup returned no records");
        }
        render(&table)?;
        advance(stage, Stage::Rendered);

        self.session
            .revoke(&job.credentials.client_id, &token.access_token)
            .await?;
        advance(stage, Stage::Revoked);

        Ok(table)
    }
}

/// Empty chains are rejected first, then any limit above the chain size.
/// Returns the leading `limit` constituents in chain order.
pub fn select_constituents<'a>(
    chain: &str,
    constituents: &'a [String],
    limit: usize,
) -> Result<&'a [String], ClientError> {
    if constituents.is_empty() {
        return Err(ClientError::ChainEmpty {
            chain: chain.to_owned(),
        });
    }

    if limit > constituents.len() {
        return Err(ClientError::LimitExceeded {
            limit,
            available: constituents.len(),
        });
    }

    Ok(&constituents[..limit])
}

fn advance(current: &mut Stage, next: Stage) {
    *current = next;
    debug!(stage = %next, "pipeline stage");
}
