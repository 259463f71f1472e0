// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Invest Gate - Navigation Reducer

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::config::GateConfig;
use crate::policy::{AccessPolicy, View};
use crate::session::SessionSource;
use crate::types::{Fund, Page, User};

// ─── State & Events ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GateState {
    pub session: Option<User>,
    pub page: Page,
    /// Pending selection; only set while the payment flow is active.
    pub selection: Option<Fund>,
    pub started: bool,
}

impl GateState {
    pub fn new(landing_page: Page) -> Self {
        Self { page: landing_page, ..Self::default() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GateEvent {
    Startup { session: Option<User> },
    Navigate { page: Page },
    Invest { fund: Fund },
    LoginComplete { user: User },
    VerificationComplete { user: User },
    PaymentComplete,
    Logout,
}

impl GateEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Startup { .. } => "startup",
            Self::Navigate { .. } => "navigate",
            Self::Invest { .. } => "invest",
            Self::LoginComplete { .. } => "login_complete",
            Self::VerificationComplete { .. } => "verification_complete",
            Self::PaymentComplete => "payment_complete",
            Self::Logout => "logout",
        }
    }
}

/// Where a signed-in user lands after their session changes.
fn home_for(user: &User) -> Page {
    if user.is_verified { Page::Dashboard } else { Page::Verification }
}

// ─── Reducer (pure) ──────────────────────────────────────────────────────────

pub fn reduce(mut state: GateState, event: GateEvent, config: &GateConfig) -> GateState {
    match event {
        GateEvent::Startup { session } => {
            if state.started {
                log::warn!("startup already ran; ignoring repeated session lookup");
                return state;
            }
            state.started = true;
            if let Some(user) = session {
                state.page = home_for(&user);
                state.session = Some(user);
            }
        }

        GateEvent::Navigate { page } => {
            state.page = page;
        }

        GateEvent::Invest { fund } => match &state.session {
            None => {
                log::info!("invest in {} requested without a session; routing to login", fund.id);
                state.page = Page::Login;
            }
            Some(user) if !user.is_verified => {
                log::info!("invest in {} requested by unverified user {}", fund.id, user.id);
                state.page = Page::Verification;
            }
            Some(_) => {
                state.selection = Some(fund);
                state.page = Page::Payment;
            }
        },

        GateEvent::LoginComplete { user } => {
            state.page = home_for(&user);
            state.session = Some(user);
        }

        GateEvent::VerificationComplete { user } => {
            state.session = Some(user);
            state.page = Page::Dashboard;
        }

        // Navigation after payment is the caller's call
        GateEvent::PaymentComplete => {
            state.selection = None;
        }

        GateEvent::Logout => {
            state.session = None;
            state.selection = None;
            state.page = config.landing_page;
        }
    }

    // A pending selection only survives on the payment page
    if state.page != Page::Payment && config.discard_selection_on_leave {
        if let Some(fund) = state.selection.take() {
            log::debug!("left payment for {}; pending selection {} dropped", state.page, fund.id);
        }
    }
    state
}

// ─── NavigationGate ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Transition {
    pub event: &'static str,
    pub from: Page,
    pub to: Page,
    pub view: View,
}

#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct NavigationGate {
    pub(crate) state: GateState,
    pub(crate) config: GateConfig,
    pub(crate) policy: AccessPolicy,
}

impl NavigationGate {
    pub fn with_config(config: GateConfig) -> Self {
        Self {
            state: GateState::new(config.landing_page),
            policy: config.policy(),
            config,
        }
    }

    /// One-time session restoration. Later calls are no-ops and do not
    /// query the source again.
    pub fn start<S: SessionSource + ?Sized>(&mut self, source: &S) -> Transition {
        let session = if self.state.started {
            None
        } else {
            source.current_user()
        };
        self.dispatch(GateEvent::Startup { session })
    }

    pub fn dispatch(&mut self, event: GateEvent) -> Transition {
        let name = event.name();
        let from = self.state.page;
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, event, &self.config);
        let transition = Transition { event: name, from, to: self.state.page, view: self.view() };
        log::debug!(
            "{}: {} -> {} (renders {:?})",
            transition.event, transition.from, transition.to, transition.view
        );
        transition
    }

    pub fn request_page(&mut self, page: Page) -> Transition {
        self.dispatch(GateEvent::Navigate { page })
    }

    pub fn request_invest(&mut self, fund: Fund) -> Transition {
        self.dispatch(GateEvent::Invest { fund })
    }

    pub fn complete_login(&mut self, user: User) -> Transition {
        self.dispatch(GateEvent::LoginComplete { user })
    }

    pub fn complete_verification(&mut self, user: User) -> Transition {
        self.dispatch(GateEvent::VerificationComplete { user })
    }

    pub fn complete_payment(&mut self) -> Transition {
        self.dispatch(GateEvent::PaymentComplete)
    }

    pub fn logout(&mut self) -> Transition {
        self.dispatch(GateEvent::Logout)
    }

    /// View rendered for the stored page under the current session.
    pub fn view(&self) -> View {
        self.policy.resolve(self.state.session.as_ref(), self.state.page)
    }

    pub fn page(&self) -> Page { self.state.page }
    pub fn user(&self) -> Option<&User> { self.state.session.as_ref() }
    pub fn pending(&self) -> Option<&Fund> { self.state.selection.as_ref() }
    pub fn state(&self) -> &GateState { &self.state }
    pub fn config(&self) -> &GateConfig { &self.config }
}

impl Default for NavigationGate {
    fn default() -> Self {
        Self::with_config(GateConfig::default())
    }
}
