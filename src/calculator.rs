use tracing::debug;

use crate::entries::{Category, Entries};
use crate::error::FootprintError;
use crate::factors::EmissionFactorTable;
use crate::quantity::Quantity;

/// Emissions for one user entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionLine {
    pub category: Category,
    pub activity: String,
    pub quantity: Quantity,
    /// kg CO2.
    pub emissions: f64,
}

/// Per-entry emissions plus their total, shared read-only by every report sink.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assessment {
    lines: Vec<EmissionLine>,
    total: f64,
}

impl Assessment {
    /// Travel lines first, then energy lines, each in entry order.
    pub fn lines(&self) -> &[EmissionLine] {
        &self.lines
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Multiplies quantities against a borrowed factor table.
#[derive(Debug, Clone, Copy)]
pub struct Calculator<'a> {
    table: &'a EmissionFactorTable,
}

impl<'a> Calculator<'a> {
    pub fn new(table: &'a EmissionFactorTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a EmissionFactorTable {
        self.table
    }

    /// `factor(activity) * quantity`. Units are not converted.
    pub fn emissions(&self, activity: &str, quantity: Quantity) -> Result<f64, FootprintError> {
        let factor = self.table.lookup(activity)?;
        debug!(activity, quantity = quantity.value(), factor, "calculating emissions");
        Ok(factor * quantity.value())
    }

    /// Same as [`Calculator::emissions`] for an unvalidated number.
    pub fn emissions_raw(&self, activity: &str, quantity: f64) -> Result<f64, FootprintError> {
        self.emissions(activity, Quantity::new(quantity)?)
    }

    /// Sum over both collections. The first failure aborts the whole sum.
    pub fn total(&self, travel: &Entries, energy: &Entries) -> Result<f64, FootprintError> {
        Ok(self.assess(travel, energy)?.total())
    }

    pub fn assess(&self, travel: &Entries, energy: &Entries) -> Result<Assessment, FootprintError> {
        let mut lines = Vec::with_capacity(travel.len() + energy.len());
        let mut total = 0.0;

        let tagged = travel
            .iter()
            .map(|e| (Category::Travel, e))
            .chain(energy.iter().map(|e| (Category::Energy, e)));
        for (category, (activity, quantity)) in tagged {
            let emissions = self.emissions(activity, quantity)?;
            total += emissions;
            lines.push(EmissionLine {
                category,
                activity: activity.to_string(),
                quantity,
                emissions,
            });
        }

        Ok(Assessment { lines, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::FactorRow;

    fn table() -> EmissionFactorTable {
        EmissionFactorTable::from_rows([
            FactorRow {
                activity: "car".into(),
                emission_factor: 0.21,
            },
            FactorRow {
                activity: "bus".into(),
                emission_factor: 0.1,
            },
            FactorRow {
                activity: "electricity".into(),
                emission_factor: 0.5,
            },
        ])
        .unwrap()
    }

    fn q(v: f64) -> Quantity {
        Quantity::new(v).unwrap()
    }

    #[test]
    fn emissions_is_factor_times_quantity() {
        let table = table();
        let calc = Calculator::new(&table);
        for v in [0.0, 1.0, 2.5, 10.0, 1234.5] {
            assert_eq!(calc.emissions("car", q(v)).unwrap(), 0.21 * v);
            assert_eq!(calc.emissions("electricity", q(v)).unwrap(), 0.5 * v);
        }
    }

    #[test]
    fn unknown_activity_fails() {
        let table = table();
        let calc = Calculator::new(&table);
        assert!(matches!(
            calc.emissions("plane", q(1.0)),
            Err(FootprintError::UnknownActivity(a)) if a == "plane"
        ));
    }

    #[test]
    fn raw_quantities_are_validated() {
        let table = table();
        let calc = Calculator::new(&table);
        assert!(matches!(
            calc.emissions_raw("car", -1.0),
            Err(FootprintError::InvalidQuantity { .. })
        ));
        assert!(calc.emissions_raw("car", f64::NAN).is_err());
        assert_eq!(calc.emissions_raw("car", 10.0).unwrap(), 0.21 * 10.0);
    }

    #[test]
    fn total_matches_reference_scenario() {
        let table = table();
        let calc = Calculator::new(&table);
        let travel: Entries = [("car", q(10.0))].into_iter().collect();
        let energy: Entries = [("electricity", q(2.0))].into_iter().collect();
        let total = calc.total(&travel, &energy).unwrap();
        assert!((total - 3.1).abs() < 1e-9);
    }

    #[test]
    fn total_of_nothing_is_zero() {
        let table = table();
        let calc = Calculator::new(&table);
        assert_eq!(calc.total(&Entries::new(), &Entries::new()).unwrap(), 0.0);
    }

    #[test]
    fn total_does_not_depend_on_partition() {
        let table = table();
        let calc = Calculator::new(&table);
        let all = [("car", q(10.0)), ("bus", q(4.0)), ("electricity", q(2.0))];

        let expected: f64 = all
            .iter()
            .map(|(a, v)| calc.emissions(a, *v).unwrap())
            .sum();

        for split in 0..=all.len() {
            let travel: Entries = all[..split].iter().copied().collect();
            let energy: Entries = all[split..].iter().copied().collect();
            let total = calc.total(&travel, &energy).unwrap();
            assert!((total - expected).abs() < 1e-9, "split at {split}");
        }
    }

    #[test]
    fn one_unknown_activity_aborts_the_total() {
        let table = table();
        let calc = Calculator::new(&table);
        let travel: Entries = [("car", q(10.0)), ("rocket", q(1.0))].into_iter().collect();
        let energy: Entries = [("electricity", q(2.0))].into_iter().collect();
        assert!(calc.total(&travel, &energy).is_err());
        assert!(calc.assess(&travel, &energy).is_err());
    }

    #[test]
    fn assessment_keeps_category_and_order() {
        let table = table();
        let calc = Calculator::new(&table);
        let travel: Entries = [("bus", q(4.0)), ("car", q(1.0))].into_iter().collect();
        let energy: Entries = [("electricity", q(2.0))].into_iter().collect();
        let assessment = calc.assess(&travel, &energy).unwrap();

        let order: Vec<_> = assessment
            .lines()
            .iter()
            .map(|l| (l.category, l.activity.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                (Category::Travel, "bus"),
                (Category::Travel, "car"),
                (Category::Energy, "electricity"),
            ]
        );
        let sum: f64 = assessment.lines().iter().map(|l| l.emissions).sum();
        assert_eq!(assessment.total(), sum);
    }
}
