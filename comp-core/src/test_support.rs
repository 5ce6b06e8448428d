//! Regime fixture shared by the unit tests; same values as the bundled Tokyo regime.

use rust_decimal_macros::dec;

use crate::{BracketTable, BracketTier, RegimeConfig, SocialInsuranceConfig};

fn tier(
    cap: Option<i64>,
    rate: rust_decimal::Decimal,
    adjustment: i64,
) -> BracketTier {
    BracketTier {
        cap,
        rate,
        adjustment,
    }
}

pub(crate) fn test_regime() -> RegimeConfig {
    RegimeConfig {
        name: "test".to_string(),
        salary_income_deduction: BracketTable::new(vec![
            BracketTier::flat(Some(1_625_000), 550_000),
            tier(Some(1_800_000), dec!(0.4), -100_000),
            tier(Some(3_600_000), dec!(0.3), 80_000),
            tier(Some(6_600_000), dec!(0.2), 440_000),
            tier(Some(8_500_000), dec!(0.1), 1_100_000),
            BracketTier::flat(None, 1_950_000),
        ])
        .unwrap(),
        income_tax: BracketTable::new(vec![
            tier(Some(1_949_999), dec!(0.05), 0),
            tier(Some(3_299_999), dec!(0.10), -97_500),
            tier(Some(6_949_999), dec!(0.20), -427_500),
            tier(Some(8_999_999), dec!(0.23), -636_000),
            tier(Some(17_999_999), dec!(0.33), -1_536_000),
            tier(Some(39_999_999), dec!(0.40), -2_796_000),
            tier(None, dec!(0.45), -4_796_000),
        ])
        .unwrap(),
        basic_deduction: BracketTable::new(vec![
            BracketTier::flat(Some(24_000_000), 480_000),
            BracketTier::flat(Some(24_500_000), 320_000),
            BracketTier::flat(Some(25_000_000), 160_000),
            BracketTier::flat(None, 0),
        ])
        .unwrap(),
        surtax_rate: dec!(0.021),
        resident_tax_rate: dec!(0.10),
        dependent_deduction: 380_000,
        corporate_tax_rate: dec!(0.30),
        social_insurance: SocialInsuranceConfig {
            health_rate: dec!(0.0998),
            nursing_care_rate: dec!(0.0182),
            pension_rate: dec!(0.183),
            health_monthly_cap: 1_390_000,
            pension_monthly_cap: 650_000,
            health_bonus_annual_cap: 5_730_000,
            pension_bonus_payment_cap: 1_500_000,
            bonus_base_unit: 1_000,
            employer_levy_rate: dec!(0.0036),
        },
    }
}
