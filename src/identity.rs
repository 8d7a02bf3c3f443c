// src/identity.rs
//! Caller identity resolution
//!
//! Authentication itself happens upstream; the store only needs a stable
//! user id or "nobody".

use axum::http::header::HeaderName;
use axum::http::HeaderMap;

use crate::model::UserId;

/// Resolves the authenticated caller of a request
pub trait IdentityResolver: Send + Sync {
    /// `None` means unauthenticated
    fn resolve(&self, headers: &HeaderMap) -> Option<UserId>;
}

/// Trusts a header set by an authenticating reverse proxy
#[derive(Debug, Clone)]
pub struct HeaderIdentity {
    header: HeaderName,
}

impl HeaderIdentity {
    pub fn new(header: HeaderName) -> Self {
        Self { header }
    }

    /// Parse a header name from configuration
    pub fn from_name(name: &str) -> Result<Self, axum::http::header::InvalidHeaderName> {
        Ok(Self::new(HeaderName::try_from(name)?))
    }
}

impl IdentityResolver for HeaderIdentity {
    fn resolve(&self, headers: &HeaderMap) -> Option<UserId> {
        let value = headers.get(&self.header)?.to_str().ok()?.trim();
        if value.is_empty() {
            None
        } else {
            Some(UserId::new(value))
        }
    }
}
