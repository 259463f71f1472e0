// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Invest Gate - Configuration

use serde::{Deserialize, Serialize};

use crate::error::GateError;
use crate::policy::AccessPolicy;
use crate::types::Page;

/// Host-tunable gate behaviour. Every field has a default, so `{}` is a
/// valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct GateConfig {
    /// Page shown before startup and after logout.
    pub landing_page: Page,
    pub redirect_verified_from_verification: bool,
    /// Show anonymous visitors the register form rather than login.
    pub register_form_without_session: bool,
    /// Drop the pending selection when navigating away from `payment`.
    pub discard_selection_on_leave: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            landing_page: Page::Home,
            redirect_verified_from_verification: true,
            register_form_without_session: false,
            discard_selection_on_leave: true,
        }
    }
}

impl GateConfig {
    pub fn from_json(raw: &str) -> Result<Self, GateError> {
        let config: GateConfig =
            serde_json::from_str(raw).map_err(|e| GateError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// The landing page is rendered before any session exists, so it must
    /// not depend on one.
    pub fn validate(&self) -> Result<(), GateError> {
        if self.landing_page.requires_identity() || self.landing_page == Page::Payment {
            return Err(GateError::Config(format!(
                "landing page {} cannot be shown without a session",
                self.landing_page
            )));
        }
        Ok(())
    }

    pub fn policy(&self) -> AccessPolicy {
        AccessPolicy {
            redirect_verified_from_verification: self.redirect_verified_from_verification,
            register_form_without_session: self.register_form_without_session,
        }
    }
}
