use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Every intermediate and final figure for one sweep point.
///
/// Amounts are whole yen and annual unless the name says monthly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResultRow {
    // Inputs echoed
    pub monthly_compensation: i64,
    pub annual_bonus: i64,
    pub annual_compensation: i64,

    // Individual
    pub salary_income_deduction: i64,
    /// Annual compensation less the salary-income deduction.
    pub total_income: i64,
    pub basic_deduction: i64,
    pub dependent_deduction: i64,
    pub other_deductions: i64,
    pub taxable_income: i64,
    /// Marginal rate of the income-tax tier that matched.
    pub income_tax_rate: Decimal,
    /// Statutory deduction of that tier (subtracted from `taxable × rate`).
    pub income_tax_deduction: i64,
    pub income_tax: i64,
    pub residence_tax: i64,
    pub total_individual_taxes: i64,
    pub individual_social_insurance: i64,
    pub individual_take_home_pay: i64,

    // Contribution bases
    /// Monthly standard remuneration for health insurance.
    pub health_insurance_base: i64,
    /// Monthly standard remuneration for pension.
    pub pension_base: i64,
    pub bonus_pension_base: i64,

    // Company
    pub employer_levy: i64,
    /// Employer premiums including the employer-only levy.
    pub company_social_insurance: i64,
    pub total_company_cost: i64,
    pub company_profit_after_compensation: i64,
    pub corporate_tax: i64,
    pub company_net_profit: i64,

    // Combined
    pub total_cash_remaining: i64,
}

impl SimulationResultRow {
    /// Income tax, resident tax and corporate tax together.
    pub fn total_taxes(&self) -> i64 {
        self.total_individual_taxes.saturating_add(self.corporate_tax)
    }

    /// Social insurance paid by both sides, levy included.
    pub fn total_social_insurance(&self) -> i64 {
        self.individual_social_insurance.saturating_add(self.company_social_insurance)
    }
}
