//! Corporate tax on profit left after paying the owner.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::floor_rate_non_negative;

/// Company-side figures for one sweep point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorporateTax {
    /// Compensation plus employer social insurance, levy included.
    pub total_company_cost: i64,
    /// May be negative.
    pub profit_after_compensation: i64,
    pub corporate_tax: i64,
    /// A loss is passed through unclamped.
    pub net_profit: i64,
}

/// Flat-rate corporate tax calculator.
///
/// ```
/// use rust_decimal_macros::dec;
/// use comp_core::calculations::CorporateTaxCalculator;
///
/// let calculator = CorporateTaxCalculator::new(dec!(0.30));
/// let result = calculator.calculate(20_000_000, 12_000_000, 1_449_780).unwrap();
///
/// assert_eq!(result.profit_after_compensation, 6_550_220);
/// assert_eq!(result.corporate_tax, 1_965_066);
/// assert_eq!(result.net_profit, 4_585_154);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CorporateTaxCalculator {
    rate: Decimal,
}

impl CorporateTaxCalculator {
    pub fn new(rate: Decimal) -> Self {
        Self { rate }
    }

    /// Returns `None` when the company cost or the profit after it does not
    /// fit in an `i64`.
    pub fn calculate(
        &self,
        profit_before_compensation: i64,
        annual_compensation: i64,
        company_social_insurance: i64,
    ) -> Option<CorporateTax> {
        let total_company_cost = annual_compensation.checked_add(company_social_insurance)?;
        let profit_after_compensation = profit_before_compensation.checked_sub(total_company_cost)?;
        let corporate_tax = floor_rate_non_negative(profit_after_compensation, self.rate);

        // 0 <= corporate_tax <= max(profit_after_compensation, 0)
        Some(CorporateTax {
            total_company_cost,
            profit_after_compensation,
            corporate_tax,
            net_profit: profit_after_compensation - corporate_tax,
        })
    }
}
