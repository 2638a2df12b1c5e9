use std::fmt::{Display, Formatter};

use comfy_table::Color;

use crate::quantity::energy::KilowattHours;

/// Appliance that adds to the daily consumption when present.
///
/// The declaration order is the order of the breakdown rows.
#[derive(Debug, enumset::EnumSetType)]
pub enum Appliance {
    AirConditioner,
    Refrigerator,
    WashingMachine,
}

impl Display for Appliance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AirConditioner => write!(f, "Air Conditioner"),
            Self::Refrigerator => write!(f, "Refrigerator"),
            Self::WashingMachine => write!(f, "Washing Machine"),
        }
    }
}

impl Appliance {
    pub const DAILY_SURCHARGE: KilowattHours = KilowattHours(3.0);

    pub const fn color(self) -> Color {
        match self {
            Self::AirConditioner => Color::Cyan,
            Self::Refrigerator => Color::Blue,
            Self::WashingMachine => Color::Magenta,
        }
    }
}
