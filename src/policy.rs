// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Invest Gate - Authorization Policy

//! Maps a stored page and the current session to the view that renders.
//!
//! Every render branch goes through [`AccessPolicy::resolve`], so guards are
//! defined once. Substitution never touches the stored page: asking for
//! `dashboard` without a session renders the login view while the stored
//! page stays `dashboard`.

use serde::{Deserialize, Serialize};

use crate::types::{Page, User};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DashboardTab {
    Overview,
    Portfolio,
}

/// The view actually rendered for a stored page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "view", content = "tab", rename_all = "lowercase")]
pub enum View {
    Home,
    Dashboard(DashboardTab),
    Funds,
    Sip,
    Fno,
    Education,
    Login,
    Register,
    Verification,
    Payment,
}

impl View {
    /// Whether this view differs from what the page would show unguarded.
    pub fn substitutes(&self, page: Page) -> bool {
        let natural = match page {
            Page::Home => View::Home,
            Page::Dashboard => View::Dashboard(DashboardTab::Overview),
            Page::Portfolio => View::Dashboard(DashboardTab::Portfolio),
            Page::Funds => View::Funds,
            Page::Sip => View::Sip,
            Page::Fno => View::Fno,
            Page::Education => View::Education,
            Page::Login => View::Login,
            Page::Register => View::Register,
            Page::Verification => View::Verification,
            Page::Payment => View::Payment,
        };
        *self != natural
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessPolicy {
    /// Send an already-verified session from `verification` to the dashboard,
    /// the way `login` and `register` already do.
    pub redirect_verified_from_verification: bool,
    /// Let anonymous visitors see the register form instead of login.
    pub register_form_without_session: bool,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self {
            redirect_verified_from_verification: true,
            register_form_without_session: false,
        }
    }
}

impl AccessPolicy {
    pub fn resolve(&self, session: Option<&User>, page: Page) -> View {
        let view = match (page, session) {
            (Page::Home, _) => View::Home,
            (Page::Funds, _) => View::Funds,
            (Page::Sip, _) => View::Sip,
            (Page::Fno, _) => View::Fno,
            (Page::Education, _) => View::Education,
            // Empty selection is the payment view's concern
            (Page::Payment, _) => View::Payment,

            (Page::Dashboard, Some(_)) => View::Dashboard(DashboardTab::Overview),
            (Page::Portfolio, Some(_)) => View::Dashboard(DashboardTab::Portfolio),
            (Page::Login | Page::Register, Some(_)) => View::Dashboard(DashboardTab::Overview),
            (Page::Verification, Some(user)) => {
                if user.is_verified && self.redirect_verified_from_verification {
                    View::Dashboard(DashboardTab::Overview)
                } else {
                    View::Verification
                }
            }

            (Page::Register, None) if self.register_form_without_session => View::Register,
            (
                Page::Dashboard | Page::Portfolio | Page::Login | Page::Register | Page::Verification,
                None,
            ) => View::Login,
        };

        if view.substitutes(page) {
            log::debug!("render substitution: {} -> {:?}", page, view);
        }
        view
    }
}
