// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Invest Gate - Session Lookup

use crate::error::GateError;
use crate::types::User;

/// Startup session lookup. Queried exactly once per gate.
pub trait SessionSource {
    fn current_user(&self) -> Option<User>;
}

impl<F> SessionSource for F
where
    F: Fn() -> Option<User>,
{
    fn current_user(&self) -> Option<User> {
        self()
    }
}

/// A user record persisted by the host (e.g. a local-storage entry).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredSession {
    user: Option<User>,
}

impl StoredSession {
    pub fn new(user: Option<User>) -> Self {
        Self { user }
    }

    /// Absent or blank input means nobody is signed in.
    pub fn from_json(raw: Option<&str>) -> Result<Self, GateError> {
        let user = match raw.map(str::trim) {
            None | Some("") | Some("null") => None,
            Some(s) => Some(serde_json::from_str::<User>(s)?),
        };
        Ok(Self { user })
    }

    pub fn to_json(&self) -> Result<Option<String>, GateError> {
        self.user
            .as_ref()
            .map(|u| serde_json::to_string(u).map_err(GateError::from))
            .transpose()
    }
}

impl From<User> for StoredSession {
    fn from(user: User) -> Self {
        Self { user: Some(user) }
    }
}

impl SessionSource for StoredSession {
    fn current_user(&self) -> Option<User> {
        self.user.clone()
    }
}
