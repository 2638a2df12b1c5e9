use std::fmt::{Display, Formatter};

use serde::Serialize;
use serde_with::SerializeDisplay;

use crate::{
    core::appliance::Appliance,
    quantity::{
        currency::Rupees,
        emission::{KilogramsCo2, Trees},
        energy::KilowattHours,
    },
};

/// Contributor to the daily consumption.
#[derive(Copy, Clone, Debug, Eq, PartialEq, SerializeDisplay)]
pub enum Category {
    /// Lights and fans, driven by the housing configuration.
    Base,

    Appliance(Appliance),
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base => write!(f, "Base Consumption"),
            Self::Appliance(appliance) => Display::fmt(appliance, f),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[must_use]
pub struct BreakdownEntry {
    pub category: Category,
    pub energy: KilowattHours,
}

impl BreakdownEntry {
    /// Share of the entry in the total, `0.0..=1.0`.
    #[must_use]
    pub fn share_of(&self, total: KilowattHours) -> f64 {
        if total > KilowattHours::ZERO { self.energy / total } else { 0.0 }
    }
}

/// Daily consumption of a residence and everything derived from it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[must_use]
pub struct EnergyEstimate {
    pub base_consumption: KilowattHours,

    /// Base consumption first, followed by the present appliances.
    pub breakdown: Vec<BreakdownEntry>,

    /// Sum of the breakdown.
    pub daily_energy: KilowattHours,

    pub monthly_energy: KilowattHours,
    pub yearly_energy: KilowattHours,
    pub monthly_cost: Rupees,
    pub yearly_cost: Rupees,
    pub daily_emission: KilogramsCo2,

    /// Trees needed to absorb the daily emission.
    pub trees_per_day: Trees,
}
