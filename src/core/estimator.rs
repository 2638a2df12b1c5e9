use std::iter::once;

use itertools::Itertools;

use crate::{
    core::{
        appliance::Appliance,
        estimate::{BreakdownEntry, Category, EnergyEstimate},
        housing::InvalidConfiguration,
        profile::ResidenceProfile,
    },
    quantity::{
        currency::RupeesPerKilowattHour,
        emission::{KilogramsCo2PerKilowattHour, KilogramsCo2PerTree},
        energy::KilowattHours,
    },
};

pub const DAYS_PER_MONTH: u16 = 30;
pub const DAYS_PER_YEAR: u16 = 365;

pub const TARIFF: RupeesPerKilowattHour = RupeesPerKilowattHour(5.0);

/// Average for the Indian grid.
pub const GRID_CARBON_INTENSITY: KilogramsCo2PerKilowattHour = KilogramsCo2PerKilowattHour(0.82);

pub const TREE_DAILY_ABSORPTION: KilogramsCo2PerTree = KilogramsCo2PerTree(22.0);

/// Estimate the daily consumption of the residence and derive the projections from it.
///
/// # Errors
///
/// [`InvalidConfiguration::Missing`] when the housing configuration is not set.
pub fn compute(profile: &ResidenceProfile) -> Result<EnergyEstimate, InvalidConfiguration> {
    let housing = profile.housing.ok_or(InvalidConfiguration::Missing)?;
    let base_consumption = housing.base_consumption();

    let breakdown = once(BreakdownEntry { category: Category::Base, energy: base_consumption })
        .chain(profile.appliances().iter().map(|appliance| BreakdownEntry {
            category: Category::Appliance(appliance),
            energy: Appliance::DAILY_SURCHARGE,
        }))
        .collect_vec();

    let daily_energy: KilowattHours = breakdown.iter().map(|entry| entry.energy).sum();
    let monthly_energy = daily_energy.over_days(DAYS_PER_MONTH);
    let yearly_energy = daily_energy.over_days(DAYS_PER_YEAR);
    let daily_emission = daily_energy * GRID_CARBON_INTENSITY;

    Ok(EnergyEstimate {
        base_consumption,
        breakdown,
        daily_energy,
        monthly_energy,
        yearly_energy,
        monthly_cost: monthly_energy * TARIFF,
        yearly_cost: yearly_energy * TARIFF,
        daily_emission,
        trees_per_day: daily_emission / TREE_DAILY_ABSORPTION,
    })
}
