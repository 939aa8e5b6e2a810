//! # Domain Records
//!
//! Typed wire and display records for the chain-to-PermID flow.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Credentials`] | Username, password and client id |
//! | [`SessionToken`] | Bearer/refresh token pair returned by the token endpoint |
//! | [`ChainResponse`] | Expanded chain constituents |
//! | [`SymbologyRequest`] | RIC → organization PermID lookup body |
//! | [`SymbologyResponse`] | Per-ticker lookup records |
//! | [`PermIdTable`] | Display rows built from a lookup response |
//!
//! Response records decode defensively: absent `output` / `errors` lists on a
//! symbology record are treated as empty rather than as a decode failure.

mod chain;
mod session;
mod symbology;

pub use chain::{ChainData, ChainResponse};
pub use session::{Credentials, SessionToken};
pub use symbology::{
    IdentifierValue, PermIdRow, PermIdTable, SymbologyFrom, SymbologyRecord, SymbologyRequest,
    SymbologyResponse, SymbologyTo, NO_PERMID_INFORMATION,
};
