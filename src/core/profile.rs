use std::fmt::{Display, Formatter};

use bon::Builder;
use enumset::EnumSet;

use crate::core::{appliance::Appliance, housing::HousingConfiguration};

#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum ResidenceType {
    Flat,
    Tenement,
}

impl Display for ResidenceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flat => write!(f, "Flat"),
            Self::Tenement => write!(f, "Tenement"),
        }
    }
}

/// Household attributes of a single estimation request.
///
/// Only the housing configuration and the appliances drive the estimate,
/// the rest is carried through to the profile view.
#[derive(Clone, Debug, PartialEq, Eq, Builder)]
#[must_use]
pub struct ResidenceProfile {
    #[builder(into)]
    pub name: Option<String>,

    pub age: Option<u8>,

    #[builder(into)]
    pub city: Option<String>,

    #[builder(into)]
    pub area: Option<String>,

    pub residence_type: Option<ResidenceType>,

    pub housing: Option<HousingConfiguration>,

    #[builder(default)]
    pub has_air_conditioner: bool,

    #[builder(default)]
    pub has_refrigerator: bool,

    #[builder(default)]
    pub has_washing_machine: bool,
}

impl ResidenceProfile {
    #[must_use]
    pub fn appliances(&self) -> EnumSet<Appliance> {
        [
            (self.has_air_conditioner, Appliance::AirConditioner),
            (self.has_refrigerator, Appliance::Refrigerator),
            (self.has_washing_machine, Appliance::WashingMachine),
        ]
        .into_iter()
        .filter_map(|(is_present, appliance)| is_present.then_some(appliance))
        .collect()
    }

    #[must_use]
    pub fn has(&self, appliance: Appliance) -> bool {
        self.appliances().contains(appliance)
    }
}
