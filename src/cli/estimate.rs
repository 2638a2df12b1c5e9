use clap::{Parser, ValueEnum};

use crate::{
    core::{HousingConfiguration, ResidenceProfile, ResidenceType, compute},
    prelude::*,
    report::{Report, Welcome},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report.
    Table,

    /// Bare estimate as JSON.
    Json,
}

#[derive(Parser)]
pub struct EstimateArgs {
    #[clap(flatten)]
    pub profile: ProfileArgs,

    #[clap(long, env = "OUTPUT_FORMAT", value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Parser)]
pub struct ProfileArgs {
    #[clap(long, env = "RESIDENT_NAME")]
    pub name: Option<String>,

    #[clap(
        long,
        env = "RESIDENT_AGE",
        default_value = "25",
        value_parser = clap::value_parser!(u8).range(1..=120),
    )]
    pub age: u8,

    #[clap(long, env = "RESIDENT_CITY")]
    pub city: Option<String>,

    /// Area or locality within the city.
    #[clap(long, env = "RESIDENT_AREA")]
    pub area: Option<String>,

    #[clap(long, env = "RESIDENCE_TYPE", value_enum)]
    pub residence_type: Option<ResidenceType>,

    /// Housing configuration: `1BHK`, `2BHK`, or `3BHK`.
    #[clap(long, env = "HOUSING_CONFIGURATION")]
    pub housing: Option<HousingConfiguration>,

    /// The household uses an air conditioner.
    #[clap(long = "ac", env = "HAS_AIR_CONDITIONER")]
    pub has_air_conditioner: bool,

    /// The household uses a refrigerator.
    #[clap(long = "fridge", env = "HAS_REFRIGERATOR")]
    pub has_refrigerator: bool,

    /// The household uses a washing machine.
    #[clap(long = "washing-machine", env = "HAS_WASHING_MACHINE")]
    pub has_washing_machine: bool,
}

impl ProfileArgs {
    pub fn into_profile(self) -> ResidenceProfile {
        ResidenceProfile::builder()
            .maybe_name(self.name)
            .age(self.age)
            .maybe_city(self.city)
            .maybe_area(self.area)
            .maybe_residence_type(self.residence_type)
            .maybe_housing(self.housing)
            .has_air_conditioner(self.has_air_conditioner)
            .has_refrigerator(self.has_refrigerator)
            .has_washing_machine(self.has_washing_machine)
            .build()
    }
}

impl EstimateArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let format = self.format;
        let profile = self.profile.into_profile();

        match format {
            OutputFormat::Json => {
                let estimate = compute(&profile).context("failed to estimate the consumption")?;
                info!(daily_energy = %estimate.daily_energy, "estimated");
                println!("{}", serde_json::to_string_pretty(&estimate)?);
            }
            OutputFormat::Table => {
                if !is_complete(&profile) {
                    info!("the profile is incomplete");
                    print!("{Welcome}");
                    return Ok(());
                }
                let estimate = compute(&profile)?;
                info!(
                    housing = ?profile.housing,
                    n_appliances = profile.appliances().len(),
                    daily_energy = %estimate.daily_energy,
                    "estimated",
                );
                print!("{}", Report { profile: &profile, estimate: &estimate });
            }
        }

        Ok(())
    }
}

/// The results are shown only to a named resident with a known housing configuration.
fn is_complete(profile: &ResidenceProfile) -> bool {
    profile.name.as_deref().is_some_and(|name| !name.trim().is_empty())
        && profile.housing.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cli::{Args, Command},
        core::InvalidConfiguration,
    };

    fn parse_profile(args: &[&str]) -> Result<ResidenceProfile, clap::Error> {
        let args = Args::try_parse_from(["kilowatt", "estimate"].iter().chain(args))?;
        match args.command {
            Command::Estimate(args) => Ok(args.profile.into_profile()),
            Command::Tips => unreachable!(),
        }
    }

    #[test]
    fn test_parse_profile() {
        let profile = parse_profile(&[
            "--name",
            "Asha",
            "--city",
            "Pune",
            "--residence-type",
            "flat",
            "--housing",
            "2bhk",
            "--ac",
            "--fridge",
        ])
        .unwrap();
        assert_eq!(profile.name.as_deref(), Some("Asha"));
        assert_eq!(profile.age, Some(25));
        assert_eq!(profile.city.as_deref(), Some("Pune"));
        assert_eq!(profile.area, None);
        assert_eq!(profile.residence_type, Some(ResidenceType::Flat));
        assert_eq!(profile.housing, Some(HousingConfiguration::TwoBhk));
        assert!(profile.has_air_conditioner);
        assert!(profile.has_refrigerator);
        assert!(!profile.has_washing_machine);
    }

    #[test]
    fn test_unrecognized_housing() {
        let error = parse_profile(&["--housing", "studio"]).unwrap_err();
        let expected = InvalidConfiguration::Unrecognized { value: "studio".to_owned() };
        assert!(error.to_string().contains(&expected.to_string()));
    }

    #[test]
    fn test_age_out_of_range() {
        assert!(parse_profile(&["--age", "0"]).is_err());
        assert!(parse_profile(&["--age", "121"]).is_err());
        assert_eq!(parse_profile(&["--age", "120"]).unwrap().age, Some(120));
    }

    #[test]
    fn test_is_complete() {
        let housing = HousingConfiguration::OneBhk;
        assert!(is_complete(&ResidenceProfile::builder().name("Asha").housing(housing).build()));
        assert!(!is_complete(&ResidenceProfile::builder().name("  ").housing(housing).build()));
        assert!(!is_complete(&ResidenceProfile::builder().housing(housing).build()));
        assert!(!is_complete(&ResidenceProfile::builder().name("Asha").build()));
    }
}
