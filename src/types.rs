// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Invest Gate - Type Definitions

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GateError;

// ─── Page ────────────────────────────────────────────────────────────────────

/// Symbolic page identifier. The set is closed: every transition table in the
/// crate matches on it exhaustively.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Dashboard,
    Portfolio,
    Funds,
    Sip,
    Fno,
    Education,
    Login,
    Register,
    Verification,
    Payment,
}

impl Default for Page {
    fn default() -> Self { Page::Home }
}

impl Page {
    pub const ALL: [Page; 11] = [
        Page::Home,
        Page::Dashboard,
        Page::Portfolio,
        Page::Funds,
        Page::Sip,
        Page::Fno,
        Page::Education,
        Page::Login,
        Page::Register,
        Page::Verification,
        Page::Payment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Dashboard => "dashboard",
            Self::Portfolio => "portfolio",
            Self::Funds => "funds",
            Self::Sip => "sip",
            Self::Fno => "fno",
            Self::Education => "education",
            Self::Login => "login",
            Self::Register => "register",
            Self::Verification => "verification",
            Self::Payment => "payment",
        }
    }

    /// Pages whose rendering depends on a current session.
    pub fn requires_identity(&self) -> bool {
        matches!(
            self,
            Self::Dashboard | Self::Portfolio | Self::Login | Self::Register | Self::Verification
        )
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Page {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| GateError::UnknownPage(s.to_string()))
    }
}

// ─── User (Session record) ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    Investor,
    Advisor,
    Analyst,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    // Absent on freshly registered accounts
    #[serde(default)]
    pub is_verified: bool,
}

impl User {
    pub fn new(id: &str, name: &str, email: &str, role: UserRole) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            avatar: None,
            is_verified: false,
        }
    }

    /// Copy of this record with the verification flag set.
    pub fn verified(mut self) -> Self {
        self.is_verified = true;
        self
    }
}

// ─── Fund (investable item) ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FundCategory {
    Equity,
    Debt,
    Hybrid,
    #[serde(rename = "ELSS")]
    Elss,
    Liquid,
    Index,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Fund {
    pub id: String,
    pub name: String,
    pub category: FundCategory,
    pub risk_level: RiskLevel,
    #[serde(with = "rust_decimal::serde::float")]
    pub nav: Decimal,
    #[serde(rename = "returns1Y", with = "rust_decimal::serde::float")]
    pub returns_1y: Decimal,
    #[serde(rename = "returns3Y", with = "rust_decimal::serde::float")]
    pub returns_3y: Decimal,
    #[serde(rename = "returns5Y", with = "rust_decimal::serde::float")]
    pub returns_5y: Decimal,
    /// 1-5 stars
    pub rating: u8,
    pub description: String,
    pub fund_manager: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub expense_ratio: Decimal,
}

impl Fund {
    pub fn from_json(raw: &str) -> Result<Self, GateError> {
        let fund: Fund = serde_json::from_str(raw)?;
        fund.validate()?;
        Ok(fund)
    }

    pub fn validate(&self) -> Result<(), GateError> {
        if !(1..=5).contains(&self.rating) {
            return Err(GateError::InvalidFund(format!(
                "rating {} outside 1..=5 for fund {}",
                self.rating, self.id
            )));
        }
        if self.id.is_empty() {
            return Err(GateError::InvalidFund("empty fund id".to_string()));
        }
        Ok(())
    }
}
