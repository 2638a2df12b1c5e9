#[macro_use]
pub mod macros;

pub mod currency;
pub mod emission;
pub mod energy;
