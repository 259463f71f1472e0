// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Invest Gate - Client-side navigation and authorization gate

pub mod types;
pub mod error;
pub mod config;
pub mod policy;
pub mod session;
pub mod gate;
pub mod sip;
pub mod logging;

pub use config::GateConfig;
pub use error::GateError;
pub use gate::{reduce, GateEvent, GateState, NavigationGate, Transition};
pub use policy::{AccessPolicy, DashboardTab, View};
pub use session::{SessionSource, StoredSession};
pub use sip::{SipPlan, SipProjection};
pub use types::*;

use wasm_bindgen::prelude::*;

// ─── WASM Interface ──────────────────────────────────────────────────────────

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, GateError> {
    Ok(serde_wasm_bindgen::from_value(value)?)
}

fn to_js<T: serde::Serialize + ?Sized>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

#[wasm_bindgen]
impl NavigationGate {
    /// `config` may be `undefined`/`null` for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<NavigationGate, JsValue> {
        logging::init_console_logger();

        let config = if config.is_null() || config.is_undefined() {
            GateConfig::default()
        } else {
            let config: GateConfig = from_js(config)?;
            config.validate()?;
            config
        };
        Ok(NavigationGate::with_config(config))
    }

    /// Called once with the result of the host's session lookup.
    #[wasm_bindgen(js_name = start)]
    pub fn start_js(&mut self, session: JsValue) -> Result<JsValue, JsValue> {
        let user: Option<User> = if session.is_null() || session.is_undefined() {
            None
        } else {
            Some(from_js(session)?)
        };
        let stored = StoredSession::new(user);
        Ok(to_js(&self.start(&stored)))
    }

    pub fn navigate(&mut self, page: &str) -> Result<JsValue, JsValue> {
        let page: Page = page.parse()?;
        Ok(to_js(&self.request_page(page)))
    }

    pub fn invest(&mut self, fund: JsValue) -> Result<JsValue, JsValue> {
        let fund: Fund = from_js(fund)?;
        fund.validate()?;
        Ok(to_js(&self.request_invest(fund)))
    }

    pub fn login(&mut self, user: JsValue) -> Result<JsValue, JsValue> {
        let user: User = from_js(user)?;
        Ok(to_js(&self.complete_login(user)))
    }

    pub fn verified(&mut self, user: JsValue) -> Result<JsValue, JsValue> {
        let user: User = from_js(user)?;
        Ok(to_js(&self.complete_verification(user)))
    }

    pub fn payment_complete(&mut self) -> JsValue {
        to_js(&self.complete_payment())
    }

    #[wasm_bindgen(js_name = logout)]
    pub fn logout_js(&mut self) -> JsValue {
        to_js(&self.logout())
    }

    pub fn current_page(&self) -> String {
        self.page().as_str().to_string()
    }

    pub fn current_view(&self) -> JsValue {
        to_js(&self.view())
    }

    pub fn session(&self) -> JsValue {
        to_js(&self.user())
    }

    pub fn selection(&self) -> JsValue {
        to_js(&self.pending())
    }
}

/// SIP projection for the calculator page.
#[wasm_bindgen]
pub fn project_sip(plan: JsValue) -> Result<JsValue, JsValue> {
    let plan: SipPlan = from_js(plan)?;
    Ok(to_js(&plan.project()?))
}
