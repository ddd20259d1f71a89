//! Process-wide host identity
//!
//! Hostname and invoking user are resolved once at logger construction and
//! read-only afterwards; lookup failures degrade to empty strings so a
//! misconfigured host never blocks logging.

#[derive(Debug, Clone, Default)]
pub struct HostIdentity {
    pub hostname: String,
    pub username: String,
}

impl HostIdentity {
    /// Resolve the local hostname and invoking user name.
    pub fn resolve() -> Self {
        Self {
            hostname: whoami::fallible::hostname().unwrap_or_default(),
            username: whoami::fallible::username().unwrap_or_default(),
        }
    }
}
