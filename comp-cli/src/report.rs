//! Plain-text report for one simulation run.

use std::fmt;

use chrono::{Local, NaiveDate};
use comp_core::{SimulationInput, SimulationResultRow, base_row, max_cash_row, optimal_row};

use crate::utils::{format_rate, format_yen};

/// A finished sweep together with the input that produced it.
///
/// The [`fmt::Display`] impl renders the full report: conditions, optimal
/// and max-cash summaries, the base-row breakdown and the comparison table.
pub struct Report<'a> {
    pub input: &'a SimulationInput,
    pub rows: &'a [SimulationResultRow],
    pub generated_on: NaiveDate,
}

impl<'a> Report<'a> {
    pub fn new(
        input: &'a SimulationInput,
        rows: &'a [SimulationResultRow],
    ) -> Self {
        Self {
            input,
            rows,
            generated_on: Local::now().date_naive(),
        }
    }

    /// Replaces the generation date printed under the conditions header.
    pub fn with_date(
        mut self,
        date: NaiveDate,
    ) -> Self {
        self.generated_on = date;
        self
    }

    fn write_conditions(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let input = self.input;
        writeln!(f, "Conditions")?;
        writeln!(
            f,
            "  {:<38}{:>15}",
            "Generated",
            self.generated_on.format("%Y-%m-%d").to_string()
        )?;
        amount_line(
            f,
            "Company profit before compensation",
            input.company_profit_before_compensation,
        )?;
        amount_line(f, "Base monthly compensation", input.base_monthly_compensation)?;
        amount_line(f, "Annual bonus", input.annual_bonus)?;
        amount_line(f, "Increment", input.increment_amount)?;
        amount_line(f, "Other deductions", input.other_deductions)?;
        writeln!(
            f,
            "  {:<38}{:>15}",
            "Age",
            format!("{} ({})", input.age, input.age_category().label())
        )?;
        writeln!(f, "  {:<38}{:>15}", "Dependents", input.dependents)
    }

    fn write_summary(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let Some(optimal) = optimal_row(self.rows) else {
            return writeln!(f, "No compensation level could be evaluated.");
        };
        writeln!(
            f,
            "Optimal monthly compensation: {} (total taxes {})",
            format_yen(optimal.monthly_compensation),
            format_yen(optimal.total_taxes())
        )?;
        if let Some(best) = max_cash_row(self.rows) {
            writeln!(
                f,
                "Maximum cash remaining: {} at monthly {}",
                format_yen(best.total_cash_remaining),
                format_yen(best.monthly_compensation)
            )?;
        }
        Ok(())
    }

    fn write_breakdown(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let base = self.input.base_monthly_compensation;
        let Some(row) = base_row(self.rows, base) else {
            return writeln!(
                f,
                "Base compensation {} was not evaluated.",
                format_yen(base)
            );
        };

        writeln!(f, "Breakdown at monthly {}", format_yen(row.monthly_compensation))?;
        writeln!(f, " Individual")?;
        amount_line(f, "Annual compensation", row.annual_compensation)?;
        amount_line(f, "Salary-income deduction", row.salary_income_deduction)?;
        amount_line(f, "Total income", row.total_income)?;
        amount_line(f, "Social insurance", row.individual_social_insurance)?;
        amount_line(f, "Basic deduction", row.basic_deduction)?;
        amount_line(f, "Dependent deduction", row.dependent_deduction)?;
        amount_line(f, "Other deductions", row.other_deductions)?;
        amount_line(f, "Taxable income", row.taxable_income)?;
        writeln!(
            f,
            "  {:<38}{:>15}",
            "Income tax rate / deduction",
            format!(
                "{} / {}",
                format_rate(row.income_tax_rate),
                format_yen(row.income_tax_deduction)
            )
        )?;
        amount_line(f, "Income tax (incl. surtax)", row.income_tax)?;
        amount_line(f, "Resident tax", row.residence_tax)?;
        amount_line(f, "Take-home pay", row.individual_take_home_pay)?;
        writeln!(f, " Company")?;
        amount_line(f, "Health insurance base (monthly)", row.health_insurance_base)?;
        amount_line(f, "Pension base (monthly)", row.pension_base)?;
        amount_line(f, "Bonus pension base", row.bonus_pension_base)?;
        amount_line(f, "Employer levy", row.employer_levy)?;
        amount_line(f, "Social insurance", row.company_social_insurance)?;
        amount_line(f, "Total cost of compensation", row.total_company_cost)?;
        amount_line(f, "Profit after compensation", row.company_profit_after_compensation)?;
        amount_line(f, "Corporate tax", row.corporate_tax)?;
        amount_line(f, "Net profit", row.company_net_profit)?;
        writeln!(f, " Combined")?;
        amount_line(f, "Total taxes", row.total_taxes())?;
        amount_line(f, "Total social insurance", row.total_social_insurance())?;
        amount_line(f, "Cash remaining", row.total_cash_remaining)
    }

    fn write_table(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(
            f,
            "   {:>12} {:>14} {:>14} {:>14} {:>14} {:>14} {:>14} {:>14} {:>14}",
            "Monthly",
            "Annual",
            "Indiv. taxes",
            "Corp. tax",
            "Total taxes",
            "Take-home",
            "Co. net profit",
            "Social ins.",
            "Cash left"
        )?;
        let optimal = optimal_row(self.rows).map(|row| row.monthly_compensation);
        for row in self.rows {
            let opt = if Some(row.monthly_compensation) == optimal { '*' } else { ' ' };
            let base = if row.monthly_compensation == self.input.base_monthly_compensation {
                'B'
            } else {
                ' '
            };
            writeln!(
                f,
                "{opt}{base} {:>12} {:>14} {:>14} {:>14} {:>14} {:>14} {:>14} {:>14} {:>14}",
                format_yen(row.monthly_compensation),
                format_yen(row.annual_compensation),
                format_yen(row.total_individual_taxes),
                format_yen(row.corporate_tax),
                format_yen(row.total_taxes()),
                format_yen(row.individual_take_home_pay),
                format_yen(row.company_net_profit),
                format_yen(row.total_social_insurance()),
                format_yen(row.total_cash_remaining)
            )?;
        }
        writeln!(f, "(* optimal, B base)")
    }
}

fn amount_line(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    amount: i64,
) -> fmt::Result {
    writeln!(f, "  {:<38}{:>15}", label, format_yen(amount))
}

impl fmt::Display for Report<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        self.write_conditions(f)?;
        writeln!(f)?;
        self.write_summary(f)?;
        if self.rows.is_empty() {
            return Ok(());
        }
        writeln!(f)?;
        self.write_breakdown(f)?;
        writeln!(f)?;
        self.write_table(f)
    }
}
