mod appliance;
mod estimate;
mod estimator;
mod housing;
mod profile;

pub use self::{
    appliance::Appliance,
    estimate::{Category, EnergyEstimate},
    estimator::compute,
    housing::{HousingConfiguration, InvalidConfiguration},
    profile::{ResidenceProfile, ResidenceType},
};
