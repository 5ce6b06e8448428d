//! Social-insurance contributions for an owner-director.
//!
//! Premiums are charged on a capped "standard remuneration" rather than on
//! actual pay. Health insurance (plus nursing care for ages 40 to 64) and
//! the employees' pension are split evenly between the company and the
//! individual; the employer-only levy is charged on the pension base and
//! never reaches the individual side.
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Health base = min(monthly pay, health cap) |
//! | 2    | Pension base = min(monthly pay, pension cap) |
//! | 3    | Total = health base × health rate + pension base × pension rate |
//! | 4    | Each side pays round-half-up(total / 2) |
//! | 5    | Bonus base floored to 1,000 then capped separately for health and pension |
//! | 6    | Levy = floor((12 × pension base + bonus pension base) × levy rate) |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use comp_core::{AgeCategory, SocialInsuranceConfig};
//! use comp_core::calculations::ContributionCalculator;
//!
//! let config = SocialInsuranceConfig {
//!     health_rate: dec!(0.0998),
//!     nursing_care_rate: dec!(0.0182),
//!     pension_rate: dec!(0.183),
//!     health_monthly_cap: 1_390_000,
//!     pension_monthly_cap: 650_000,
//!     health_bonus_annual_cap: 5_730_000,
//!     pension_bonus_payment_cap: 1_500_000,
//!     bonus_base_unit: 1_000,
//!     employer_levy_rate: dec!(0.0036),
//! };
//!
//! let calculator = ContributionCalculator::new(&config);
//! let annual = calculator.annual_contribution(1_000_000, 0, AgeCategory::NursingCare);
//!
//! assert_eq!(annual.monthly.individual, 118_475);
//! assert_eq!(annual.individual, 1_421_700);
//! assert_eq!(annual.employer_levy, 28_080);
//! assert_eq!(annual.company, 1_449_780);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{floor_rate, floor_to_unit, round_half_up_yen};
use crate::{AgeCategory, SocialInsuranceConfig};

/// Premium shares for one payment basis (a month's pay or the bonus).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    pub individual: i64,
    pub company: i64,
    pub health_base: i64,
    pub pension_base: i64,
}

/// A year of contributions: twelve months plus the bonus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualContribution {
    pub monthly: Contribution,
    pub bonus: Contribution,
    /// Employer-only levy, already included in `company`.
    pub employer_levy: i64,
    pub individual: i64,
    pub company: i64,
}

/// Calculator for capped premiums and their split.
#[derive(Debug, Clone)]
pub struct ContributionCalculator<'a> {
    config: &'a SocialInsuranceConfig,
}

impl<'a> ContributionCalculator<'a> {
    pub fn new(config: &'a SocialInsuranceConfig) -> Self {
        Self { config }
    }

    /// Premiums for one month of compensation.
    ///
    /// Non-positive compensation yields zero bases and zero premiums.
    pub fn monthly_contribution(
        &self,
        monthly_compensation: i64,
        age_category: AgeCategory,
    ) -> Contribution {
        let pay = monthly_compensation.max(0);
        let health_base = pay.min(self.config.health_monthly_cap);
        let pension_base = pay.min(self.config.pension_monthly_cap);

        self.split(health_base, pension_base, age_category)
    }

    /// Premiums for the annual bonus, treated as a single payment.
    pub fn bonus_contribution(
        &self,
        annual_bonus: i64,
        age_category: AgeCategory,
    ) -> Contribution {
        if annual_bonus <= 0 {
            return Contribution::default();
        }

        let bonus_base = floor_to_unit(annual_bonus, self.config.bonus_base_unit);
        let health_base = bonus_base.min(self.config.health_bonus_annual_cap);
        let pension_base = bonus_base.min(self.config.pension_bonus_payment_cap);

        self.split(health_base, pension_base, age_category)
    }

    /// Twelve months plus the bonus, with the employer-only levy on top of
    /// the company share.
    pub fn annual_contribution(
        &self,
        monthly_compensation: i64,
        annual_bonus: i64,
        age_category: AgeCategory,
    ) -> AnnualContribution {
        let monthly = self.monthly_contribution(monthly_compensation, age_category);
        let bonus = self.bonus_contribution(annual_bonus, age_category);
        let employer_levy = self.employer_levy(
            monthly
                .pension_base
                .saturating_mul(12)
                .saturating_add(bonus.pension_base),
        );

        AnnualContribution {
            monthly,
            bonus,
            employer_levy,
            individual: monthly.individual.saturating_mul(12).saturating_add(bonus.individual),
            company: monthly
                .company
                .saturating_mul(12)
                .saturating_add(bonus.company)
                .saturating_add(employer_levy),
        }
    }

    /// `floor(annual pension base × levy rate)`.
    pub fn employer_levy(
        &self,
        annual_pension_base: i64,
    ) -> i64 {
        floor_rate(annual_pension_base, self.config.employer_levy_rate)
    }

    /// Health rate including nursing care where the age band pays it.
    fn health_rate(
        &self,
        age_category: AgeCategory,
    ) -> Decimal {
        if age_category.pays_nursing_care() {
            self.config.health_rate + self.config.nursing_care_rate
        } else {
            self.config.health_rate
        }
    }

    /// Unrounded premium on the two bases.
    fn total_premium(
        &self,
        health_base: i64,
        pension_base: i64,
        age_category: AgeCategory,
    ) -> Decimal {
        Decimal::from(health_base) * self.health_rate(age_category)
            + Decimal::from(pension_base) * self.config.pension_rate
    }

    /// Each side rounds half of the total on its own; the two shares may sum
    /// to one yen more than the total.
    fn split(
        &self,
        health_base: i64,
        pension_base: i64,
        age_category: AgeCategory,
    ) -> Contribution {
        let total = self.total_premium(health_base, pension_base, age_category);
        let half = total / Decimal::TWO;

        Contribution {
            individual: round_half_up_yen(half),
            company: round_half_up_yen(half),
            health_base,
            pension_base,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::test_regime;

    fn config() -> SocialInsuranceConfig {
        test_regime().social_insurance
    }

    // =========================================================================
    // monthly_contribution tests
    // =========================================================================

    #[test]
    fn monthly_contribution_with_nursing_care() {
        let config = config();
        let calculator = ContributionCalculator::new(&config);

        let result = calculator.monthly_contribution(1_000_000, AgeCategory::NursingCare);

        // health 1,000,000 × 0.118 = 118,000; pension 650,000 × 0.183 = 118,950
        assert_eq!(
            result,
            Contribution {
                individual: 118_475,
                company: 118_475,
                health_base: 1_000_000,
                pension_base: 650_000,
            }
        );
    }

    #[test]
    fn monthly_contribution_without_nursing_care() {
        let config = config();
        let calculator = ContributionCalculator::new(&config);

        let result = calculator.monthly_contribution(300_000, AgeCategory::Under40);

        // 29,940 + 54,900 = 84,840
        assert_eq!(result.individual, 42_420);
        assert_eq!(result.company, 42_420);
    }

    #[test]
    fn monthly_contribution_seniors_skip_nursing_care() {
        let config = config();
        let calculator = ContributionCalculator::new(&config);

        let senior = calculator.monthly_contribution(300_000, AgeCategory::Senior65Plus);
        let young = calculator.monthly_contribution(300_000, AgeCategory::Under40);

        assert_eq!(senior, young);
    }

    #[test]
    fn monthly_contribution_rounds_each_half_up() {
        let config = config();
        let calculator = ContributionCalculator::new(&config);

        // 12,320.9088 + 22,592.448 = 34,913.3568; half = 17,456.6784
        let result = calculator.monthly_contribution(123_456, AgeCategory::Under40);

        assert_eq!(result.individual, 17_457);
        assert_eq!(result.company, 17_457);
    }

    #[test]
    fn monthly_contribution_caps_bases() {
        let config = config();
        let calculator = ContributionCalculator::new(&config);

        let at_cap = calculator.monthly_contribution(1_390_000, AgeCategory::NursingCare);
        let above_cap = calculator.monthly_contribution(3_000_000, AgeCategory::NursingCare);

        assert_eq!(above_cap.health_base, 1_390_000);
        assert_eq!(above_cap.pension_base, 650_000);
        assert_eq!(at_cap, above_cap);
    }

    #[test]
    fn monthly_contribution_pension_caps_before_health() {
        let config = config();
        let calculator = ContributionCalculator::new(&config);

        let result = calculator.monthly_contribution(800_000, AgeCategory::Under40);

        assert_eq!(result.health_base, 800_000);
        assert_eq!(result.pension_base, 650_000);
    }

    #[test]
    fn monthly_contribution_non_positive_pay_is_zero() {
        let config = config();
        let calculator = ContributionCalculator::new(&config);

        assert_eq!(
            calculator.monthly_contribution(-100, AgeCategory::Under40),
            Contribution::default()
        );
    }

    #[test]
    fn shares_stay_within_one_yen_of_total() {
        let config = config();
        let calculator = ContributionCalculator::new(&config);

        for pay in [98_765, 123_456, 333_333, 517_001, 777_777, 1_234_567] {
            for category in [
                AgeCategory::Under40,
                AgeCategory::NursingCare,
                AgeCategory::Senior65Plus,
            ] {
                let result = calculator.monthly_contribution(pay, category);
                let total =
                    calculator.total_premium(result.health_base, result.pension_base, category);
                let half = total / Decimal::TWO;

                assert!((Decimal::from(result.individual) - half).abs() <= Decimal::ONE);
                assert!((Decimal::from(result.company) - half).abs() <= Decimal::ONE);
                assert!(
                    (Decimal::from(result.individual + result.company) - total).abs()
                        <= Decimal::ONE
                );
                assert!((result.individual - result.company).abs() <= 1);
            }
        }
    }

    // =========================================================================
    // bonus_contribution tests
    // =========================================================================

    #[test]
    fn bonus_contribution_zero_bonus_is_zero() {
        let config = config();
        let calculator = ContributionCalculator::new(&config);

        assert_eq!(
            calculator.bonus_contribution(0, AgeCategory::NursingCare),
            Contribution::default()
        );
    }

    #[test]
    fn bonus_contribution_negative_bonus_is_zero() {
        let config = config();
        let calculator = ContributionCalculator::new(&config);

        assert_eq!(
            calculator.bonus_contribution(-1_000, AgeCategory::NursingCare),
            Contribution::default()
        );
    }

    #[test]
    fn bonus_contribution_floors_to_thousand() {
        let config = config();
        let calculator = ContributionCalculator::new(&config);

        let result = calculator.bonus_contribution(1_234_567, AgeCategory::Under40);

        assert_eq!(result.health_base, 1_234_000);
        assert_eq!(result.pension_base, 1_234_000);
    }

    #[test]
    fn bonus_contribution_caps_pension_per_payment() {
        let config = config();
        let calculator = ContributionCalculator::new(&config);

        let result = calculator.bonus_contribution(3_000_000, AgeCategory::NursingCare);

        // 3,000,000 × 0.118 + 1,500,000 × 0.183 = 628,500
        assert_eq!(
            result,
            Contribution {
                individual: 314_250,
                company: 314_250,
                health_base: 3_000_000,
                pension_base: 1_500_000,
            }
        );
    }

    #[test]
    fn bonus_contribution_caps_health_annually() {
        let config = config();
        let calculator = ContributionCalculator::new(&config);

        let result = calculator.bonus_contribution(8_000_000, AgeCategory::Under40);

        assert_eq!(result.health_base, 5_730_000);
        assert_eq!(result.pension_base, 1_500_000);
    }

    // =========================================================================
    // annual_contribution tests
    // =========================================================================

    #[test]
    fn annual_contribution_adds_levy_to_company_only() {
        let config = config();
        let calculator = ContributionCalculator::new(&config);

        let result = calculator.annual_contribution(1_000_000, 0, AgeCategory::NursingCare);

        // 12 × 650,000 × 0.0036 = 28,080
        assert_eq!(result.employer_levy, 28_080);
        assert_eq!(result.individual, 1_421_700);
        assert_eq!(result.company, 1_449_780);
    }

    #[test]
    fn annual_contribution_bonus_pension_base_independent_of_monthly() {
        let config = config();
        let calculator = ContributionCalculator::new(&config);

        let result = calculator.annual_contribution(1_000_000, 3_000_000, AgeCategory::NursingCare);

        assert_eq!(result.monthly.pension_base, 650_000);
        assert_eq!(result.bonus.pension_base, 1_500_000);
        // (7,800,000 + 1,500,000) × 0.0036 = 33,480
        assert_eq!(result.employer_levy, 33_480);
        assert_eq!(result.individual, 1_735_950);
        assert_eq!(result.company, 1_769_430);
    }

    #[test]
    fn employer_levy_floors() {
        let config = config();
        let calculator = ContributionCalculator::new(&config);

        // 1,234,567 × 0.0036 = 4,444.4412
        assert_eq!(calculator.employer_levy(1_234_567), 4_444);
    }
}
