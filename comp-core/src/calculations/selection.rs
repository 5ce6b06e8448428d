//! Picking rows out of a finished sweep for display.
//!
//! Every selector returns `None` for an empty sweep; callers must handle the
//! case where no optimum exists.

use crate::SimulationResultRow;

/// Row with the smallest income + resident + corporate tax.
///
/// The first minimum wins ties.
pub fn optimal_row(rows: &[SimulationResultRow]) -> Option<&SimulationResultRow> {
    rows.iter().reduce(|best, row| {
        if row.total_taxes() < best.total_taxes() {
            row
        } else {
            best
        }
    })
}

/// Row with the largest combined cash remaining; the first maximum wins ties.
pub fn max_cash_row(rows: &[SimulationResultRow]) -> Option<&SimulationResultRow> {
    rows.iter().reduce(|best, row| {
        if row.total_cash_remaining > best.total_cash_remaining {
            row
        } else {
            best
        }
    })
}

/// Row for the base compensation, absent if the sweep skipped it.
pub fn base_row(
    rows: &[SimulationResultRow],
    base_monthly_compensation: i64,
) -> Option<&SimulationResultRow> {
    rows.iter()
        .find(|row| row.monthly_compensation == base_monthly_compensation)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::test_regime;
    use crate::{SimulationInput, Simulator};

    fn scenario_rows() -> Vec<SimulationResultRow> {
        let regime = test_regime();
        Simulator::new(&regime)
            .unwrap()
            .run(&SimulationInput::default())
    }

    fn row_with_taxes(
        monthly_compensation: i64,
        income_tax: i64,
        corporate_tax: i64,
    ) -> SimulationResultRow {
        let mut row = scenario_rows().remove(0);
        row.monthly_compensation = monthly_compensation;
        row.total_individual_taxes = income_tax;
        row.corporate_tax = corporate_tax;
        row
    }

    #[test]
    fn optimal_row_minimises_total_taxes() {
        let rows = scenario_rows();

        let optimal = optimal_row(&rows).unwrap();

        assert_eq!(optimal.monthly_compensation, 1_000_000);
        assert_eq!(optimal.total_taxes(), 4_044_005);
    }

    #[test]
    fn optimal_row_first_minimum_wins_ties() {
        let rows = vec![
            row_with_taxes(100, 10, 5),
            row_with_taxes(200, 5, 10),
            row_with_taxes(300, 20, 0),
        ];

        assert_eq!(optimal_row(&rows).unwrap().monthly_compensation, 100);
    }

    #[test]
    fn optimal_row_empty_sweep_has_none() {
        assert!(optimal_row(&[]).is_none());
    }

    #[test]
    fn max_cash_row_finds_largest_cash() {
        let rows = scenario_rows();

        let best = max_cash_row(&rows).unwrap();

        assert_eq!(best.monthly_compensation, 500_000);
        assert_eq!(best.total_cash_remaining, 13_747_676);
    }

    #[test]
    fn base_row_matches_base_compensation() {
        let rows = scenario_rows();

        let base = base_row(&rows, 1_000_000).unwrap();

        assert_eq!(base.annual_compensation, 12_000_000);
    }

    #[test]
    fn base_row_absent_when_skipped() {
        let rows = scenario_rows();

        assert!(base_row(&rows, 1_050_000).is_none());
    }
}
