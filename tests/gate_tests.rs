#[cfg(test)]
mod tests {
    use invest_gate::*;
    use rust_decimal_macros::dec;

    fn fund_x() -> Fund {
        Fund {
            id: "fund-x".to_string(),
            name: "Flexi Cap Growth".to_string(),
            category: FundCategory::Equity,
            risk_level: RiskLevel::High,
            nav: dec!(56.78),
            returns_1y: dec!(21.5),
            returns_3y: dec!(16.2),
            returns_5y: dec!(15.0),
            rating: 4,
            description: "Diversified equity".to_string(),
            fund_manager: "P. Nair".to_string(),
            expense_ratio: dec!(0.65),
        }
    }

    fn user(verified: bool) -> User {
        let u = User::new("u-42", "Meera", "meera@example.com", UserRole::Investor);
        if verified { u.verified() } else { u }
    }

    fn started_with(session: Option<User>) -> NavigationGate {
        let mut gate = NavigationGate::default();
        gate.start(&StoredSession::new(session));
        gate
    }

    // ========== Render Substitution ==========

    #[test]
    fn test_identity_pages_without_session_render_login() {
        let mut gate = started_with(None);
        for page in [Page::Dashboard, Page::Portfolio, Page::Login, Page::Register, Page::Verification] {
            let t = gate.request_page(page);
            assert_eq!(t.view, View::Login, "{} should render login", page);
            // Substitution, not mutation
            assert_eq!(gate.page(), page);
        }
    }

    #[test]
    fn test_register_form_for_anonymous_visitors_is_opt_in() {
        let config = GateConfig { register_form_without_session: true, ..GateConfig::default() };
        let mut gate = NavigationGate::with_config(config);
        gate.start(&StoredSession::new(None));
        assert_eq!(gate.request_page(Page::Register).view, View::Register);
        assert_eq!(gate.request_page(Page::Dashboard).view, View::Login);
    }

    #[test]
    fn test_login_and_register_with_session_render_dashboard() {
        let mut gate = started_with(Some(user(false)));
        assert_eq!(gate.request_page(Page::Login).view, View::Dashboard(DashboardTab::Overview));
        assert_eq!(gate.request_page(Page::Register).view, View::Dashboard(DashboardTab::Overview));
    }

    #[test]
    fn test_open_pages_always_permitted() {
        for session in [None, Some(user(false)), Some(user(true))] {
            let mut gate = started_with(session);
            assert_eq!(gate.request_page(Page::Home).view, View::Home);
            assert_eq!(gate.request_page(Page::Funds).view, View::Funds);
            assert_eq!(gate.request_page(Page::Sip).view, View::Sip);
            assert_eq!(gate.request_page(Page::Fno).view, View::Fno);
            assert_eq!(gate.request_page(Page::Education).view, View::Education);
        }
    }

    #[test]
    fn test_payment_without_selection_still_renders_payment() {
        let mut gate = started_with(None);
        let t = gate.request_page(Page::Payment);
        assert_eq!(t.view, View::Payment);
        assert!(gate.pending().is_none());
    }

    #[test]
    fn test_verified_session_on_verification_page_is_configurable() {
        let mut gate = started_with(Some(user(true)));
        assert_eq!(
            gate.request_page(Page::Verification).view,
            View::Dashboard(DashboardTab::Overview)
        );
        // Stored page is untouched by the redirect
        assert_eq!(gate.page(), Page::Verification);

        let config = GateConfig { redirect_verified_from_verification: false, ..GateConfig::default() };
        let mut gate = NavigationGate::with_config(config);
        gate.start(&StoredSession::new(Some(user(true))));
        assert_eq!(gate.request_page(Page::Verification).view, View::Verification);
    }

    // ========== Invest Requests ==========

    #[test]
    fn test_invest_without_session_goes_to_login() {
        let mut gate = started_with(None);
        let t = gate.request_invest(fund_x());
        assert_eq!(t.to, Page::Login);
        assert!(gate.pending().is_none());
    }

    #[test]
    fn test_invest_unverified_goes_to_verification() {
        let mut gate = started_with(Some(user(false)));
        gate.request_page(Page::Funds);
        let t = gate.request_invest(fund_x());
        assert_eq!(t.to, Page::Verification);
        assert!(gate.pending().is_none());
    }

    #[test]
    fn test_invest_verified_goes_to_payment() {
        let mut gate = started_with(Some(user(true)));
        gate.request_page(Page::Funds);
        let t = gate.request_invest(fund_x());
        assert_eq!(t.to, Page::Payment);
        assert_eq!(gate.pending(), Some(&fund_x()));
    }

    #[test]
    fn test_selection_implies_payment_page() {
        let mut gate = started_with(Some(user(true)));
        gate.request_invest(fund_x());
        for page in Page::ALL {
            gate.request_page(page);
            if gate.pending().is_some() {
                assert_eq!(gate.page(), Page::Payment);
            }
        }
        assert!(gate.pending().is_none());
    }

    // ========== Startup ==========

    #[test]
    fn test_startup_verified_session_lands_on_dashboard() {
        let gate = started_with(Some(user(true)));
        assert_eq!(gate.page(), Page::Dashboard);
        assert_eq!(gate.view(), View::Dashboard(DashboardTab::Overview));
    }

    #[test]
    fn test_startup_unverified_session_lands_on_verification() {
        let gate = started_with(Some(user(false)));
        assert_eq!(gate.page(), Page::Verification);
        assert_eq!(gate.view(), View::Verification);
    }

    #[test]
    fn test_startup_without_session_stays_home() {
        let gate = started_with(None);
        assert_eq!(gate.page(), Page::Home);
        assert!(gate.user().is_none());
    }

    #[test]
    fn test_startup_queries_source_once() {
        use std::cell::Cell;
        let calls = Cell::new(0);
        let source = || {
            calls.set(calls.get() + 1);
            Some(User::new("u-1", "Ravi", "ravi@example.com", UserRole::Analyst).verified())
        };
        let mut gate = NavigationGate::default();
        gate.start(&source);
        gate.request_page(Page::Funds);
        gate.start(&source);
        assert_eq!(calls.get(), 1);
        assert_eq!(gate.page(), Page::Funds);
    }

    // ========== Completion Handlers ==========

    #[test]
    fn test_login_complete_routes_by_verification() {
        let mut gate = started_with(None);
        assert_eq!(gate.complete_login(user(false)).to, Page::Verification);
        let mut gate = started_with(None);
        assert_eq!(gate.complete_login(user(true)).to, Page::Dashboard);
    }

    #[test]
    fn test_verification_complete_always_dashboard() {
        for prior in Page::ALL {
            let mut gate = started_with(Some(user(false)));
            gate.request_page(prior);
            let t = gate.complete_verification(user(true));
            assert_eq!(t.to, Page::Dashboard, "from {}", prior);
            assert_eq!(gate.user().map(|u| u.is_verified), Some(true));
        }
    }

    #[test]
    fn test_payment_complete_clears_selection_only() {
        let mut gate = started_with(Some(user(true)));
        gate.request_invest(fund_x());
        let t = gate.complete_payment();
        assert_eq!(t.to, Page::Payment);
        assert!(gate.pending().is_none());
    }

    #[test]
    fn test_logout_clears_session() {
        let mut gate = started_with(Some(user(true)));
        gate.request_invest(fund_x());
        let t = gate.logout();
        assert_eq!(t.to, Page::Home);
        assert!(gate.user().is_none());
        assert!(gate.pending().is_none());
        assert_eq!(gate.request_page(Page::Dashboard).view, View::Login);
    }

    // ========== Pure Reducer ==========

    #[test]
    fn test_reducer_replays_event_log() {
        let config = GateConfig::default();
        let log: Vec<GateEvent> = serde_json::from_str(
            r#"[
                {"type":"startup","session":null},
                {"type":"navigate","page":"funds"},
                {"type":"login_complete","user":{"id":"u-9","name":"Anil","email":"anil@example.com","role":"INVESTOR","isVerified":true}},
                {"type":"navigate","page":"portfolio"}
            ]"#,
        )
        .unwrap();

        let state = log
            .into_iter()
            .fold(GateState::new(config.landing_page), |s, e| reduce(s, e, &config));
        assert_eq!(state.page, Page::Portfolio);
        assert_eq!(
            config.policy().resolve(state.session.as_ref(), state.page),
            View::Dashboard(DashboardTab::Portfolio)
        );
    }
}
