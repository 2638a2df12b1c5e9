use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::quantity::energy::KilowattHours;

/// Housing configuration is either unset or not one of the known ones.
#[derive(Clone, Debug, Eq, PartialEq, derive_more::Display, derive_more::Error)]
pub enum InvalidConfiguration {
    #[display("housing configuration is not set")]
    Missing,

    #[display("unrecognized housing configuration `{value}`, expected 1BHK, 2BHK, or 3BHK")]
    Unrecognized { value: String },
}

/// Bedroom-hall-kitchen count of the residence.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, DeserializeFromStr, SerializeDisplay)]
pub enum HousingConfiguration {
    OneBhk,
    TwoBhk,
    ThreeBhk,
}

impl HousingConfiguration {
    pub const ALL: [Self; 3] = [Self::OneBhk, Self::TwoBhk, Self::ThreeBhk];

    /// Daily consumption of the lights and fans alone.
    pub const fn base_consumption(self) -> KilowattHours {
        match self {
            // 2 × 0.4 kWh + 2 × 0.8 kWh
            Self::OneBhk => KilowattHours(2.4),
            // 3 × 0.4 kWh + 3 × 0.8 kWh
            Self::TwoBhk => KilowattHours(3.6),
            // 4 × 0.4 kWh + 4 × 0.8 kWh
            Self::ThreeBhk => KilowattHours(4.8),
        }
    }
}

impl Display for HousingConfiguration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OneBhk => write!(f, "1BHK"),
            Self::TwoBhk => write!(f, "2BHK"),
            Self::ThreeBhk => write!(f, "3BHK"),
        }
    }
}

impl FromStr for HousingConfiguration {
    type Err = InvalidConfiguration;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|configuration| configuration.to_string().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| InvalidConfiguration::Unrecognized { value: value.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ok() {
        assert_eq!("1BHK".parse::<HousingConfiguration>(), Ok(HousingConfiguration::OneBhk));
        assert_eq!("2bhk".parse::<HousingConfiguration>(), Ok(HousingConfiguration::TwoBhk));
        assert_eq!(" 3Bhk ".parse::<HousingConfiguration>(), Ok(HousingConfiguration::ThreeBhk));
    }

    #[test]
    fn test_parse_unrecognized() {
        assert_eq!(
            "4BHK".parse::<HousingConfiguration>(),
            Err(InvalidConfiguration::Unrecognized { value: "4BHK".to_owned() }),
        );
        assert_eq!(
            "Select an option".parse::<HousingConfiguration>(),
            Err(InvalidConfiguration::Unrecognized { value: "Select an option".to_owned() }),
        );
    }

    #[test]
    fn test_display_round_trips() {
        for configuration in HousingConfiguration::ALL {
            let parsed = configuration.to_string().parse::<HousingConfiguration>();
            assert_eq!(parsed, Ok(configuration));
        }
    }

    #[test]
    fn test_base_consumption() {
        assert_eq!(HousingConfiguration::OneBhk.base_consumption(), KilowattHours(2.4));
        assert_eq!(HousingConfiguration::TwoBhk.base_consumption(), KilowattHours(3.6));
        assert_eq!(HousingConfiguration::ThreeBhk.base_consumption(), KilowattHours(4.8));
    }

    #[test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&HousingConfiguration::TwoBhk).unwrap(), r#""2BHK""#);
        assert_eq!(
            serde_json::from_str::<HousingConfiguration>(r#""3bhk""#).unwrap(),
            HousingConfiguration::ThreeBhk,
        );
        assert!(serde_json::from_str::<HousingConfiguration>(r#""studio""#).is_err());
    }
}
