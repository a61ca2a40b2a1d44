//! The rate matrix: one entered value, seven derived values

use super::conversion::{ear_from_raw, format_rate, from_ear};
use super::representation::{CompoundingPeriod, RateKind, RateRepresentation};
use serde::{Deserialize, Serialize};

/// A single displayed cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateCell {
    pub representation: RateRepresentation,
    /// Percent value as displayed; `None` when empty
    pub value: Option<String>,
}

/// All eight representations of one rate
///
/// Either every cell is empty (invalid entry) or the active cell holds the
/// raw entered text and the other seven hold values derived from the same EAR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateMatrix {
    /// Representation that was last edited
    pub active: RateRepresentation,

    /// EAR the derived values were computed from (None if the entry was invalid)
    pub ear: Option<f64>,

    /// Displayed values indexed by `RateRepresentation::index`
    values: [Option<String>; 8],
}

impl RateMatrix {
    /// A matrix with every cell empty
    pub fn empty(active: RateRepresentation) -> Self {
        Self {
            active,
            ear: None,
            values: Default::default(),
        }
    }

    /// Displayed value of a representation
    pub fn get(&self, representation: RateRepresentation) -> Option<&str> {
        self.values[representation.index()].as_deref()
    }

    /// Shorthand for `get` by kind and period
    pub fn value(&self, kind: RateKind, period: CompoundingPeriod) -> Option<&str> {
        self.get(RateRepresentation::new(kind, period))
    }

    /// Cells in matrix order
    pub fn cells(&self) -> impl Iterator<Item = RateCell> + '_ {
        RateRepresentation::ALL
            .iter()
            .zip(self.values.iter())
            .map(|(&representation, value)| RateCell { representation, value: value.clone() })
    }

    /// True when the entered value was invalid
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    fn set(&mut self, representation: RateRepresentation, value: String) {
        self.values[representation.index()] = Some(value);
    }
}

/// Rebuild the whole matrix from the active representation's raw input
pub fn recompute_matrix(active: RateRepresentation, raw_value: &str) -> RateMatrix {
    let mut matrix = RateMatrix::empty(active);

    let ear = match ear_from_raw(active, raw_value) {
        Ok(ear) => ear,
        Err(e) => {
            log::debug!("clearing rate matrix: {}", e);
            return matrix;
        }
    };

    matrix.ear = Some(ear);
    for representation in RateRepresentation::ALL {
        if representation == active {
            matrix.set(representation, raw_value.to_string());
        } else {
            matrix.set(representation, format_rate(from_ear(ear, representation)));
        }
    }

    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::to_ear;
    use approx::assert_relative_eq;

    #[test]
    fn test_active_value_kept_verbatim() {
        for rep in RateRepresentation::ALL {
            for raw in ["5", "0", "3.75", "12.000"] {
                let matrix = recompute_matrix(rep, raw);
                assert_eq!(matrix.get(rep), Some(raw));
                assert_eq!(matrix.active, rep);
            }
        }
    }

    #[test]
    fn test_all_cells_populated() {
        let active = RateRepresentation::new(RateKind::Nominal, CompoundingPeriod::Monthly);
        let matrix = recompute_matrix(active, "6");
        assert!(!matrix.is_empty());
        assert!(matrix.cells().all(|c| c.value.is_some()));
        assert_eq!(matrix.cells().count(), 8);
    }

    #[test]
    fn test_cross_representation_ear_consistency() {
        for active in RateRepresentation::ALL {
            let matrix = recompute_matrix(active, "7.5");
            let ear = matrix.ear.unwrap();
            assert_relative_eq!(ear, to_ear(active, 7.5).unwrap(), max_relative = 1e-12);

            for other in RateRepresentation::ALL {
                // Feed the full-precision derived value back in
                let derived = from_ear(ear, other);
                let back = to_ear(other, derived).unwrap();
                assert_relative_eq!(back, ear, max_relative = 1e-9);
            }
        }
    }

    /// Largest EAR error from re-reading a value shown with six decimals
    fn display_tolerance(representation: RateRepresentation, ear: f64) -> f64 {
        // Half a unit in the last displayed place, as a decimal rate
        let half_ulp = 0.5e-6 / 100.0;
        let periods = match representation.kind {
            RateKind::EffectivePeriod => representation.periods_per_year() as f64,
            RateKind::Nominal => 1.0,
        };
        2.0 * periods * (1.0 + ear) * half_ulp
    }

    #[test]
    fn test_displayed_cells_reproduce_ear() {
        for raw in ["3.5", "7.5", "12", "150"] {
            for active in RateRepresentation::ALL {
                let matrix = recompute_matrix(active, raw);
                let ear = matrix.ear.unwrap();

                for cell in matrix.cells() {
                    let shown: f64 = cell.value.as_deref().unwrap().parse().unwrap();
                    let back = to_ear(cell.representation, shown).unwrap();
                    let tolerance = display_tolerance(cell.representation, ear);
                    assert!(
                        (back - ear).abs() <= tolerance,
                        "{} -> {}: {} vs {}",
                        active,
                        cell.representation,
                        back,
                        ear
                    );
                }
            }
        }
    }

    #[test]
    fn test_deserialize_requires_eight_values() {
        let short = r#"{"active":{"kind":"Nominal","period":"Annual"},"ear":0.05,"values":[]}"#;
        assert!(serde_json::from_str::<RateMatrix>(short).is_err());

        let missing = r#"{"active":{"kind":"Nominal","period":"Annual"},"ear":0.05}"#;
        assert!(serde_json::from_str::<RateMatrix>(missing).is_err());

        let empty = r#"{"active":{"kind":"Nominal","period":"Annual"},"ear":null,
            "values":[null,null,null,null,null,null,null,null]}"#;
        let matrix = serde_json::from_str::<RateMatrix>(empty).unwrap();
        assert!(matrix.is_empty());
        assert_eq!(matrix.get(matrix.active), None);
    }

    #[test]
    fn test_serialized_values_keep_their_cells() {
        let active = RateRepresentation::new(RateKind::EffectivePeriod, CompoundingPeriod::Daily);
        let matrix = recompute_matrix(active, "0.02");
        let json = serde_json::to_string(&matrix).unwrap();
        let restored: RateMatrix = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.active, active);
        for representation in RateRepresentation::ALL {
            assert_eq!(restored.get(representation), matrix.get(representation));
        }
    }

    #[test]
    fn test_displayed_values_match_ear() {
        let active = RateRepresentation::new(RateKind::Nominal, CompoundingPeriod::Annual);
        let matrix = recompute_matrix(active, "5");

        assert_eq!(matrix.value(RateKind::EffectivePeriod, CompoundingPeriod::Annual), Some("5.000000"));
        // 1.05^(1/12) - 1
        assert_eq!(matrix.value(RateKind::EffectivePeriod, CompoundingPeriod::Monthly), Some("0.407412"));
        assert_eq!(matrix.value(RateKind::Nominal, CompoundingPeriod::Monthly), Some("4.888949"));
        assert_eq!(matrix.value(RateKind::Nominal, CompoundingPeriod::Quarterly), Some("4.908894"));
    }

    #[test]
    fn test_invalid_input_clears_everything() {
        let active = RateRepresentation::new(RateKind::EffectivePeriod, CompoundingPeriod::Quarterly);
        for raw in ["", "-1", "NaN", "abc", "inf"] {
            let matrix = recompute_matrix(active, raw);
            assert!(matrix.is_empty(), "expected empty matrix for {:?}", raw);
            assert!(matrix.ear.is_none());
            assert_eq!(matrix.get(active), None);
        }
    }
}
