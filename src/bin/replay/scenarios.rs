// Replay Scenarios: built-in navigation journeys plus JSON-file scenarios
// Each scenario carries the page/view it must end on

use invest_gate::*;
use rust_decimal_macros::dec;
use serde::Deserialize;

// ─── Scenario Definition ────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub config: GateConfig,
    /// What the host's session lookup returns at startup
    #[serde(default)]
    pub stored_session: Option<User>,
    pub events: Vec<GateEvent>,
    #[serde(default)]
    pub expect: Expectation,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Expectation {
    pub page: Option<Page>,
    pub view: Option<View>,
    pub has_selection: Option<bool>,
}

impl Expectation {
    /// Returns the list of mismatches against the final gate state.
    pub fn check(&self, gate: &NavigationGate) -> Vec<String> {
        let mut failures = Vec::new();
        if let Some(page) = self.page {
            if gate.page() != page {
                failures.push(format!("page: expected {}, got {}", page, gate.page()));
            }
        }
        if let Some(view) = self.view {
            if gate.view() != view {
                failures.push(format!("view: expected {:?}, got {:?}", view, gate.view()));
            }
        }
        if let Some(has) = self.has_selection {
            if gate.pending().is_some() != has {
                failures.push(format!("selection: expected present={}", has));
            }
        }
        failures
    }
}

pub fn load_file(path: &std::path::Path) -> Result<Vec<Scenario>, GateError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| GateError::Decode(format!("{}: {}", path.display(), e)))?;
    // A file may hold a single scenario or a list
    let scenarios = match serde_json::from_str::<Vec<Scenario>>(&raw) {
        Ok(list) => list,
        Err(_) => vec![serde_json::from_str::<Scenario>(&raw)?],
    };
    for s in &scenarios {
        s.config.validate()?;
    }
    Ok(scenarios)
}

// ─── Built-in Journeys ──────────────────────────────────────────────────────

fn investor() -> User {
    User::new("u-100", "Asha Rao", "asha@example.com", UserRole::Investor)
}

fn index_fund() -> Fund {
    Fund {
        id: "f-nifty50".to_string(),
        name: "Nifty 50 Index Fund".to_string(),
        category: FundCategory::Index,
        risk_level: RiskLevel::Moderate,
        nav: dec!(212.40),
        returns_1y: dec!(11.2),
        returns_3y: dec!(13.0),
        returns_5y: dec!(12.1),
        rating: 5,
        description: "Passive large-cap exposure".to_string(),
        fund_manager: "S. Iyer".to_string(),
        expense_ratio: dec!(0.20),
    }
}

fn scenario(name: &str, label: &str, stored: Option<User>, events: Vec<GateEvent>, expect: Expectation) -> Scenario {
    Scenario {
        name: name.to_string(),
        label: label.to_string(),
        config: GateConfig::default(),
        stored_session: stored,
        events,
        expect,
    }
}

pub fn builtin() -> Vec<Scenario> {
    vec![
        scenario(
            "ANON_BROWSE",
            "Anonymous visitor browses open pages",
            None,
            vec![
                GateEvent::Navigate { page: Page::Funds },
                GateEvent::Navigate { page: Page::Sip },
                GateEvent::Navigate { page: Page::Education },
            ],
            Expectation { page: Some(Page::Education), view: Some(View::Education), has_selection: Some(false) },
        ),
        scenario(
            "ANON_DASHBOARD",
            "Dashboard without a session renders login",
            None,
            vec![GateEvent::Navigate { page: Page::Dashboard }],
            Expectation { page: Some(Page::Dashboard), view: Some(View::Login), has_selection: None },
        ),
        scenario(
            "INVEST_FULL_JOURNEY",
            "Invest, log in, verify, invest again, pay",
            None,
            vec![
                GateEvent::Navigate { page: Page::Funds },
                GateEvent::Invest { fund: index_fund() },
                GateEvent::LoginComplete { user: investor() },
                GateEvent::Navigate { page: Page::Funds },
                GateEvent::Invest { fund: index_fund() },
                GateEvent::VerificationComplete { user: investor().verified() },
                GateEvent::Navigate { page: Page::Funds },
                GateEvent::Invest { fund: index_fund() },
            ],
            Expectation { page: Some(Page::Payment), view: Some(View::Payment), has_selection: Some(true) },
        ),
        scenario(
            "PAYMENT_COMPLETE",
            "Completed payment clears the selection",
            Some(investor().verified()),
            vec![
                GateEvent::Navigate { page: Page::Funds },
                GateEvent::Invest { fund: index_fund() },
                GateEvent::PaymentComplete,
                GateEvent::Navigate { page: Page::Portfolio },
            ],
            Expectation {
                page: Some(Page::Portfolio),
                view: Some(View::Dashboard(DashboardTab::Portfolio)),
                has_selection: Some(false),
            },
        ),
        scenario(
            "RESTORE_UNVERIFIED",
            "Stored unverified session lands on verification",
            Some(investor()),
            vec![],
            Expectation { page: Some(Page::Verification), view: Some(View::Verification), has_selection: None },
        ),
        scenario(
            "LOGOUT",
            "Logout returns to the landing page",
            Some(investor().verified()),
            vec![GateEvent::Logout, GateEvent::Navigate { page: Page::Portfolio }],
            Expectation { page: Some(Page::Portfolio), view: Some(View::Login), has_selection: Some(false) },
        ),
    ]
}
