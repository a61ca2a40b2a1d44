//! Rate representations: the eight (kind, compounding period) pairs

use crate::error::ParseEventError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Compounding period of a rate quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CompoundingPeriod {
    /// 365 periods per year
    Daily,
    /// 12 periods per year
    Monthly,
    /// 4 periods per year
    Quarterly,
    /// 1 period per year
    Annual,
}

impl CompoundingPeriod {
    pub const ALL: [CompoundingPeriod; 4] = [
        CompoundingPeriod::Daily,
        CompoundingPeriod::Monthly,
        CompoundingPeriod::Quarterly,
        CompoundingPeriod::Annual,
    ];

    /// Compounding frequency `m`
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingPeriod::Daily => 365,
            CompoundingPeriod::Monthly => 12,
            CompoundingPeriod::Quarterly => 4,
            CompoundingPeriod::Annual => 1,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            CompoundingPeriod::Daily => "Daily",
            CompoundingPeriod::Monthly => "Monthly",
            CompoundingPeriod::Quarterly => "Quarterly",
            CompoundingPeriod::Annual => "Annual",
        }
    }
}

impl fmt::Display for CompoundingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How a quoted rate relates to its compounding period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RateKind {
    /// Stated annual rate, compounded `m` times per year
    Nominal,
    /// Rate actually earned over one compounding period
    EffectivePeriod,
}

impl RateKind {
    pub const ALL: [RateKind; 2] = [RateKind::Nominal, RateKind::EffectivePeriod];

    fn id_prefix(&self) -> &'static str {
        match self {
            RateKind::Nominal => "nominal",
            RateKind::EffectivePeriod => "effective_period",
        }
    }
}

impl fmt::Display for RateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RateKind::Nominal => "Nominal",
            RateKind::EffectivePeriod => "Effective Period",
        };
        write!(f, "{name}")
    }
}

/// One cell of the rate matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RateRepresentation {
    pub kind: RateKind,
    pub period: CompoundingPeriod,
}

impl RateRepresentation {
    /// All eight representations, in matrix order (period-major)
    pub const ALL: [RateRepresentation; 8] = [
        RateRepresentation::new(RateKind::Nominal, CompoundingPeriod::Daily),
        RateRepresentation::new(RateKind::EffectivePeriod, CompoundingPeriod::Daily),
        RateRepresentation::new(RateKind::Nominal, CompoundingPeriod::Monthly),
        RateRepresentation::new(RateKind::EffectivePeriod, CompoundingPeriod::Monthly),
        RateRepresentation::new(RateKind::Nominal, CompoundingPeriod::Quarterly),
        RateRepresentation::new(RateKind::EffectivePeriod, CompoundingPeriod::Quarterly),
        RateRepresentation::new(RateKind::Nominal, CompoundingPeriod::Annual),
        RateRepresentation::new(RateKind::EffectivePeriod, CompoundingPeriod::Annual),
    ];

    pub const fn new(kind: RateKind, period: CompoundingPeriod) -> Self {
        Self { kind, period }
    }

    /// Compounding frequency of this representation's period
    pub fn periods_per_year(&self) -> u32 {
        self.period.periods_per_year()
    }

    /// Position within [`RateRepresentation::ALL`]
    pub fn index(&self) -> usize {
        let period = match self.period {
            CompoundingPeriod::Daily => 0,
            CompoundingPeriod::Monthly => 1,
            CompoundingPeriod::Quarterly => 2,
            CompoundingPeriod::Annual => 3,
        };
        let kind = match self.kind {
            RateKind::Nominal => 0,
            RateKind::EffectivePeriod => 1,
        };
        period * 2 + kind
    }

    /// Canonical identifier, e.g. `nominal_Monthly`
    pub fn id(&self) -> String {
        format!("{}_{}", self.kind.id_prefix(), self.period.name())
    }
}

impl fmt::Display for RateRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for RateRepresentation {
    type Err = ParseEventError;

    /// Accepts `nominal_Monthly`, `effective_period_Daily`, `effective-annual`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        let unknown = || ParseEventError::UnknownRepresentation(s.to_string());

        let (kind, period) = normalized.rsplit_once('_').ok_or_else(unknown)?;

        let kind = match kind {
            "nominal" => RateKind::Nominal,
            "effective_period" | "effective" => RateKind::EffectivePeriod,
            _ => return Err(unknown()),
        };
        let period = match period {
            "daily" => CompoundingPeriod::Daily,
            "monthly" => CompoundingPeriod::Monthly,
            "quarterly" => CompoundingPeriod::Quarterly,
            "annual" => CompoundingPeriod::Annual,
            _ => return Err(unknown()),
        };

        Ok(Self::new(kind, period))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periods_per_year() {
        assert_eq!(CompoundingPeriod::Daily.periods_per_year(), 365);
        assert_eq!(CompoundingPeriod::Monthly.periods_per_year(), 12);
        assert_eq!(CompoundingPeriod::Quarterly.periods_per_year(), 4);
        assert_eq!(CompoundingPeriod::Annual.periods_per_year(), 1);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, rep) in RateRepresentation::ALL.iter().enumerate() {
            assert_eq!(rep.index(), i);
        }
    }

    #[test]
    fn test_id_roundtrip() {
        for rep in RateRepresentation::ALL {
            let parsed: RateRepresentation = rep.id().parse().unwrap();
            assert_eq!(parsed, rep);
        }
        assert_eq!(
            RateRepresentation::new(RateKind::EffectivePeriod, CompoundingPeriod::Daily).id(),
            "effective_period_Daily"
        );
    }

    #[test]
    fn test_lenient_parsing() {
        let rep: RateRepresentation = "Effective-Monthly".parse().unwrap();
        assert_eq!(rep, RateRepresentation::new(RateKind::EffectivePeriod, CompoundingPeriod::Monthly));

        let rep: RateRepresentation = " NOMINAL_annual ".parse().unwrap();
        assert_eq!(rep, RateRepresentation::new(RateKind::Nominal, CompoundingPeriod::Annual));
    }

    #[test]
    fn test_unknown_representation() {
        assert!("nominal_Weekly".parse::<RateRepresentation>().is_err());
        assert!("continuous_Annual".parse::<RateRepresentation>().is_err());
        assert!("monthly".parse::<RateRepresentation>().is_err());
    }
}
