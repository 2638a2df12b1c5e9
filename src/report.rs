use std::fmt::{Display, Formatter};

use crate::{
    core::{EnergyEstimate, ResidenceProfile},
    tables::{
        build_breakdown_table,
        build_impact_table,
        build_profile_table,
        build_projections_table,
    },
};

pub const ENERGY_SAVING_TIPS: [&str; 6] = [
    "Set AC temperature to 24°C or higher",
    "Use LED bulbs instead of incandescent",
    "Unplug devices when not in use",
    "Use natural light during daytime",
    "Keep refrigerator at optimal temperature",
    "Use energy-efficient appliances",
];

/// Everything shown once the profile is complete.
#[must_use]
pub struct Report<'a> {
    pub profile: &'a ResidenceProfile,
    pub estimate: &'a EnergyEstimate,
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(name) = &self.profile.name {
            writeln!(f, "Hello {name}!")?;
            writeln!(f)?;
        }
        writeln!(f, "Your daily energy consumption: {:.1}", self.estimate.daily_energy)?;
        writeln!(f, "Based on your housing and appliances")?;
        writeln!(f)?;
        writeln!(f, "Energy breakdown")?;
        writeln!(f, "{}", build_breakdown_table(self.estimate))?;
        writeln!(f)?;
        writeln!(f, "Consumption projections")?;
        writeln!(f, "{}", build_projections_table(self.estimate))?;
        writeln!(f)?;
        writeln!(f, "Environmental impact")?;
        writeln!(f, "{}", build_impact_table(self.estimate))?;
        writeln!(f)?;
        writeln!(f, "Your profile")?;
        writeln!(f, "{}", build_profile_table(self.profile))?;
        writeln!(f)?;
        write!(f, "{Tips}")
    }
}

/// Shown while the profile is not yet complete.
pub struct Welcome;

impl Display for Welcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Welcome to the Energy Consumption Calculator!")?;
        writeln!(f)?;
        writeln!(f, "Please fill in your details to calculate your energy consumption:")?;
        writeln!(f, "- Enter your personal information (`--name`, `--age`, `--city`, `--area`)")?;
        writeln!(f, "- Select your housing type (`--residence-type`, `--housing`)")?;
        writeln!(f, "- Choose your appliances (`--ac`, `--fridge`, `--washing-machine`)")?;
        writeln!(f, "- Get instant energy consumption analysis")?;
        writeln!(f)?;
        writeln!(f, "Why calculate energy consumption?")?;
        writeln!(f, "- Save money: understand your electricity bills")?;
        writeln!(f, "- Environment: reduce your carbon footprint")?;
        writeln!(f, "- Planning: better energy management")?;
        writeln!(f, "- Efficiency: identify energy-hungry appliances")
    }
}

pub struct Tips;

impl Display for Tips {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Energy saving tips")?;
        for tip in ENERGY_SAVING_TIPS {
            writeln!(f, "- {tip}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HousingConfiguration, compute};

    #[test]
    fn test_report() {
        let profile = ResidenceProfile::builder()
            .name("Asha")
            .housing(HousingConfiguration::TwoBhk)
            .has_air_conditioner(true)
            .has_refrigerator(true)
            .build();
        let estimate = compute(&profile).unwrap();
        let report = Report { profile: &profile, estimate: &estimate }.to_string();

        assert!(report.starts_with("Hello Asha!\n"));
        assert!(report.contains("Your daily energy consumption: 9.6 kWh"));
        assert!(report.contains("Energy breakdown"));
        assert!(report.contains("Consumption projections"));
        assert!(report.contains("Environmental impact"));
        assert!(report.contains("Your profile"));
        assert!(report.contains(ENERGY_SAVING_TIPS[0]));
    }

    #[test]
    fn test_tips_order() {
        let tips = Tips.to_string();
        let lines: Vec<&str> = tips.lines().skip(1).collect();
        assert_eq!(lines.len(), ENERGY_SAVING_TIPS.len());
        assert_eq!(lines[0], "- Set AC temperature to 24°C or higher");
        assert_eq!(lines[5], "- Use energy-efficient appliances");
    }

    #[test]
    fn test_welcome() {
        let welcome = Welcome.to_string();
        assert!(welcome.contains("Why calculate energy consumption?"));
        assert!(welcome.contains("Save money"));
    }
}
