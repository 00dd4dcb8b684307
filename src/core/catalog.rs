// src/core/catalog.rs
use crate::models::error::SError;
use crate::models::settings::AppId;
use serde_json::Value;
use tracing::{debug, warn};

/// Decodes the installed-apps payload.
///
/// The host answers with a JSON string whose contents are themselves a JSON
/// array of app ids; a bare array is accepted as well.
pub fn decode_installed_apps(payload: &Value) -> Result<Vec<AppId>, SError> {
    match payload {
        Value::String(encoded) => serde_json::from_str::<Vec<AppId>>(encoded)
            .map_err(|e| SError::ParseError(format!("installed apps payload: {e}"))),
        Value::Array(_) => serde_json::from_value::<Vec<AppId>>(payload.clone())
            .map_err(|e| SError::ParseError(format!("installed apps payload: {e}"))),
        other => Err(SError::ParseError(format!(
            "installed apps payload must be a list, got {other}"
        ))),
    }
}

/// Marks one outstanding catalog request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Orders catalog requests so a late answer to an old request never
/// overwrites a newer one.
#[derive(Debug, Default)]
pub struct CatalogTracker {
    issued: u64,
    accepted: Option<u64>,
}

impl CatalogTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> RequestTicket {
        self.issued += 1;
        debug!(ticket = self.issued, "catalog request issued");
        RequestTicket(self.issued)
    }

    /// Whether a response for `ticket` is still the one to apply.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        let superseded = ticket.0 < self.issued;
        let already_applied = self.accepted.is_some_and(|a| ticket.0 <= a);
        !(superseded || already_applied)
    }

    /// Marks `ticket` as the newest applied response. Returns false, and
    /// changes nothing, if the response is stale.
    pub fn accept(&mut self, ticket: RequestTicket) -> bool {
        if !self.is_current(ticket) {
            warn!(ticket = ticket.0, latest = self.issued, "ignoring stale catalog response");
            return false;
        }

        self.accepted = Some(ticket.0);
        true
    }
}
