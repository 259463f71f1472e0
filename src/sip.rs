// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Invest Gate - SIP Projection

//! Systematic Investment Plan projection for the `sip` page.
//!
//! Contributions are made at the start of each month and compound monthly
//! (annuity due):
//!
//! ```text
//! FV = P * ((1 + i)^n - 1) / i * (1 + i)
//! ```
//!
//! where `i` is the monthly rate and `n` the number of monthly instalments.
//! A zero rate degenerates to `P * n`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::GateError;

const MAX_YEARS: u32 = 50;
const MAX_ANNUAL_RETURN_PCT: Decimal = dec!(100);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SipPlan {
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_investment: Decimal,
    /// Expected annual return, in percent (12 = 12% p.a.)
    #[serde(with = "rust_decimal::serde::float")]
    pub annual_return_pct: Decimal,
    pub years: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SipProjection {
    #[serde(with = "rust_decimal::serde::float")]
    pub invested: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub estimated_returns: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_value: Decimal,
}

impl SipPlan {
    pub fn validate(&self) -> Result<(), GateError> {
        if self.monthly_investment <= Decimal::ZERO {
            return Err(GateError::InvalidSipPlan(format!(
                "monthly investment must be positive, got {}",
                self.monthly_investment
            )));
        }
        if self.years == 0 || self.years > MAX_YEARS {
            return Err(GateError::InvalidSipPlan(format!(
                "years must be within 1..={}, got {}",
                MAX_YEARS, self.years
            )));
        }
        if self.annual_return_pct < Decimal::ZERO || self.annual_return_pct > MAX_ANNUAL_RETURN_PCT {
            return Err(GateError::InvalidSipPlan(format!(
                "annual return must be within 0..=100%, got {}",
                self.annual_return_pct
            )));
        }
        Ok(())
    }

    pub fn project(&self) -> Result<SipProjection, GateError> {
        self.validate()?;

        let months = Decimal::from(self.years * 12);
        let invested = checked(self.monthly_investment.checked_mul(months))?;
        let i = self.annual_return_pct / dec!(1200);

        let total = if i.is_zero() {
            invested
        } else {
            let step = Decimal::ONE + i;
            let growth = pow(step, self.years * 12)?;
            let factor = checked((growth - Decimal::ONE).checked_div(i))?;
            let annuity = checked(self.monthly_investment.checked_mul(factor))?;
            checked(annuity.checked_mul(step))?
        };

        let total_value = total.round_dp(2);
        let invested = invested.round_dp(2);
        Ok(SipProjection {
            invested,
            estimated_returns: checked(total_value.checked_sub(invested))?,
            total_value,
        })
    }
}

fn checked(value: Option<Decimal>) -> Result<Decimal, GateError> {
    value.ok_or_else(|| GateError::InvalidSipPlan("projection overflowed".to_string()))
}

fn pow(base: Decimal, exp: u32) -> Result<Decimal, GateError> {
    (0..exp).try_fold(Decimal::ONE, |acc, _| checked(acc.checked_mul(base)))
}
