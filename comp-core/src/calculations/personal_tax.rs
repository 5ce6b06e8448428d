//! Personal income tax and resident tax for one compensation level.
//!
//! # Deduction chain
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Annual compensation = monthly × 12 + bonus |
//! | 2    | Salary-income deduction from the salary table (floored) |
//! | 3    | Total income = step 1 − step 2 |
//! | 4    | Basic deduction from the basic table, keyed by total income |
//! | 5    | Dependent deduction = dependents × per-dependent amount |
//! | 6    | Taxable income = max(0, total income − social insurance − steps 4, 5 − other deductions) |
//! | 7    | Income tax = floor((taxable × rate − deduction) × (1 + surtax)) |
//! | 8    | Resident tax = floor(taxable × resident rate) |
//! | 9    | Take-home = annual compensation − social insurance − steps 7, 8 |
//!
//! Sums and differences saturate at the `i64` bounds.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::RegimeConfig;
use crate::calculations::common::{floor_rate_non_negative, floor_yen};

/// Figures the personal calculation needs from the sweep point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalTaxInput {
    pub monthly_compensation: i64,
    pub annual_bonus: i64,
    pub dependents: u32,
    pub other_deductions: i64,
    /// Annual individual share of social insurance.
    pub individual_social_insurance: i64,
}

/// Result of the personal deduction chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalTax {
    pub annual_compensation: i64,
    pub salary_income_deduction: i64,
    pub total_income: i64,
    pub basic_deduction: i64,
    pub dependent_deduction: i64,
    pub other_deductions: i64,
    pub taxable_income: i64,
    pub income_tax_rate: Decimal,
    pub income_tax_deduction: i64,
    pub income_tax: i64,
    pub residence_tax: i64,
    /// Income tax plus resident tax.
    pub total_taxes: i64,
    pub take_home_pay: i64,
}

/// Calculator for the personal side of one sweep point.
///
/// # Example
///
/// ```
/// use comp_core::calculations::{PersonalTaxCalculator, PersonalTaxInput};
/// # use comp_core::{BracketTable, BracketTier, RegimeConfig, SocialInsuranceConfig};
/// # use rust_decimal_macros::dec;
/// # let regime = RegimeConfig {
/// #     name: "doc".to_string(),
/// #     salary_income_deduction: BracketTable::new(vec![BracketTier::flat(None, 1_950_000)]).unwrap(),
/// #     income_tax: BracketTable::new(vec![
/// #         BracketTier { cap: Some(6_949_999), rate: dec!(0.20), adjustment: -427_500 },
/// #         BracketTier { cap: None, rate: dec!(0.23), adjustment: -636_000 },
/// #     ]).unwrap(),
/// #     basic_deduction: BracketTable::new(vec![BracketTier::flat(None, 480_000)]).unwrap(),
/// #     surtax_rate: dec!(0.021),
/// #     resident_tax_rate: dec!(0.10),
/// #     dependent_deduction: 380_000,
/// #     corporate_tax_rate: dec!(0.30),
/// #     social_insurance: SocialInsuranceConfig {
/// #         health_rate: dec!(0.0998), nursing_care_rate: dec!(0.0182), pension_rate: dec!(0.183),
/// #         health_monthly_cap: 1_390_000, pension_monthly_cap: 650_000,
/// #         health_bonus_annual_cap: 5_730_000, pension_bonus_payment_cap: 1_500_000,
/// #         bonus_base_unit: 1_000, employer_levy_rate: dec!(0.0036),
/// #     },
/// # };
///
/// let calculator = PersonalTaxCalculator::new(&regime);
/// let result = calculator.calculate(&PersonalTaxInput {
///     monthly_compensation: 1_000_000,
///     annual_bonus: 0,
///     dependents: 0,
///     other_deductions: 0,
///     individual_social_insurance: 1_421_700,
/// });
///
/// assert_eq!(result.taxable_income, 8_148_300);
/// assert_eq!(result.income_tax, 1_264_109);
/// assert_eq!(result.residence_tax, 814_830);
/// ```
#[derive(Debug, Clone)]
pub struct PersonalTaxCalculator<'a> {
    regime: &'a RegimeConfig,
}

impl<'a> PersonalTaxCalculator<'a> {
    pub fn new(regime: &'a RegimeConfig) -> Self {
        Self { regime }
    }

    /// Runs the full deduction chain.
    pub fn calculate(
        &self,
        input: &PersonalTaxInput,
    ) -> PersonalTax {
        // Step 1
        let annual_compensation =
            self.annual_compensation(input.monthly_compensation, input.annual_bonus);

        // Steps 2-3
        let salary_income_deduction = self.salary_income_deduction(annual_compensation);
        let total_income = annual_compensation.saturating_sub(salary_income_deduction);

        // Steps 4-5
        let basic_deduction = self.basic_deduction(total_income);
        let dependent_deduction = self.dependent_deduction(input.dependents);

        // Step 6
        let taxable_income = self.taxable_income(
            total_income,
            input
                .individual_social_insurance
                .saturating_add(basic_deduction)
                .saturating_add(dependent_deduction)
                .saturating_add(input.other_deductions),
        );

        // Step 7
        let tier = self.regime.income_tax.find(taxable_income);
        let income_tax = self.income_tax(taxable_income);

        // Step 8
        let residence_tax = self.residence_tax(taxable_income);

        // Step 9
        let total_taxes = income_tax.saturating_add(residence_tax);
        let take_home_pay = annual_compensation
            .saturating_sub(input.individual_social_insurance)
            .saturating_sub(total_taxes);

        PersonalTax {
            annual_compensation,
            salary_income_deduction,
            total_income,
            basic_deduction,
            dependent_deduction,
            other_deductions: input.other_deductions,
            taxable_income,
            income_tax_rate: tier.rate,
            income_tax_deduction: -tier.adjustment,
            income_tax,
            residence_tax,
            total_taxes,
            take_home_pay,
        }
    }

    fn annual_compensation(
        &self,
        monthly_compensation: i64,
        annual_bonus: i64,
    ) -> i64 {
        monthly_compensation
            .saturating_mul(12)
            .saturating_add(annual_bonus)
    }

    /// Salary-income deduction for the year's compensation.
    ///
    /// Flat tiers cover both the minimum and the maximum deduction.
    pub fn salary_income_deduction(
        &self,
        annual_compensation: i64,
    ) -> i64 {
        let tier = self.regime.salary_income_deduction.find(annual_compensation);
        floor_yen(tier.apply(annual_compensation))
    }

    /// Basic deduction; phases out as total income grows.
    pub fn basic_deduction(
        &self,
        total_income: i64,
    ) -> i64 {
        let tier = self.regime.basic_deduction.find(total_income);
        floor_yen(tier.apply(total_income))
    }

    fn dependent_deduction(
        &self,
        dependents: u32,
    ) -> i64 {
        i64::from(dependents).saturating_mul(self.regime.dependent_deduction)
    }

    fn taxable_income(
        &self,
        total_income: i64,
        deductions: i64,
    ) -> i64 {
        total_income.saturating_sub(deductions).max(0)
    }

    /// Progressive income tax including the surtax.
    pub fn income_tax(
        &self,
        taxable_income: i64,
    ) -> i64 {
        if taxable_income <= 0 {
            return 0;
        }

        let tier = self.regime.income_tax.find(taxable_income);
        let base_tax = tier.apply(taxable_income);
        let with_surtax = base_tax * (Decimal::ONE + self.regime.surtax_rate);

        floor_yen(with_surtax).max(0)
    }

    /// Flat resident tax on taxable income.
    pub fn residence_tax(
        &self,
        taxable_income: i64,
    ) -> i64 {
        floor_rate_non_negative(taxable_income, self.regime.resident_tax_rate)
    }
}
