use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{Appliance, Category, EnergyEstimate, ResidenceProfile},
    fmt::{FormattedFlag, FormattedOption, FormattedPercentage},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

#[must_use]
pub fn build_breakdown_table(estimate: &EnergyEstimate) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Category", "Energy", "Share"]);
    for entry in &estimate.breakdown {
        let color = match entry.category {
            Category::Base => Color::Green,
            Category::Appliance(appliance) => appliance.color(),
        };
        let share = entry.share_of(estimate.daily_energy);
        table.add_row(vec![
            Cell::new(entry.category).fg(color),
            Cell::new(entry.energy).set_alignment(CellAlignment::Right),
            Cell::new(FormattedPercentage(share))
                .set_alignment(CellAlignment::Right)
                .fg(if share >= 0.5 { Color::Red } else { Color::Reset }),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(estimate.daily_energy)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
        Cell::new(FormattedPercentage(1.0))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Dim),
    ]);
    table
}

#[must_use]
pub fn build_projections_table(estimate: &EnergyEstimate) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Period", "Consumption", "Approx. cost"]);
    for (period, energy, cost) in [
        ("Monthly", estimate.monthly_energy, estimate.monthly_cost),
        ("Yearly", estimate.yearly_energy, estimate.yearly_cost),
    ] {
        table.add_row(vec![
            Cell::new(period),
            Cell::new(format!("{energy:.0}")).set_alignment(CellAlignment::Right),
            Cell::new(format!("{cost:.0}"))
                .set_alignment(CellAlignment::Right)
                .fg(Color::DarkYellow),
        ]);
    }
    table
}

#[must_use]
pub fn build_impact_table(estimate: &EnergyEstimate) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Daily CO2 emission", "Trees needed per day"]);
    table.add_row(vec![
        Cell::new(format!("{:.2}", estimate.daily_emission))
            .set_alignment(CellAlignment::Right)
            .fg(Color::DarkYellow),
        Cell::new(format!("{:.2}", estimate.trees_per_day.0))
            .set_alignment(CellAlignment::Right)
            .fg(Color::Green),
    ]);
    table
}

#[must_use]
pub fn build_profile_table(profile: &ResidenceProfile) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Field", "Value"]);
    let rows = [
        ("Name", FormattedOption(profile.name.as_deref()).to_string()),
        ("Age", FormattedOption(profile.age).to_string()),
        ("City", FormattedOption(profile.city.as_deref()).to_string()),
        ("Area", FormattedOption(profile.area.as_deref()).to_string()),
        ("Residence Type", FormattedOption(profile.residence_type).to_string()),
        ("Housing", FormattedOption(profile.housing).to_string()),
        ("AC", FormattedFlag(profile.has(Appliance::AirConditioner)).to_string()),
        ("Fridge", FormattedFlag(profile.has(Appliance::Refrigerator)).to_string()),
        ("Washing Machine", FormattedFlag(profile.has(Appliance::WashingMachine)).to_string()),
    ];
    for (field, value) in rows {
        table.add_row(vec![Cell::new(field).add_attribute(Attribute::Dim), Cell::new(value)]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HousingConfiguration, compute};

    fn estimate() -> EnergyEstimate {
        let profile = ResidenceProfile::builder()
            .housing(HousingConfiguration::TwoBhk)
            .has_air_conditioner(true)
            .has_refrigerator(true)
            .build();
        compute(&profile).unwrap()
    }

    #[test]
    fn test_breakdown_table() {
        let table = build_breakdown_table(&estimate()).to_string();
        assert!(table.contains("Base Consumption"));
        assert!(table.contains("Air Conditioner"));
        assert!(table.contains("Refrigerator"));
        assert!(!table.contains("Washing Machine"));
        assert!(table.contains("37.5%"));
        assert!(table.contains("9.6 kWh"));
    }

    #[test]
    fn test_projections_table() {
        let table = build_projections_table(&estimate()).to_string();
        assert!(table.contains("288 kWh"));
        assert!(table.contains("3504 kWh"));
        assert!(table.contains("1440 ₹"));
        assert!(table.contains("17520 ₹"));
    }

    #[test]
    fn test_impact_table() {
        let table = build_impact_table(&estimate()).to_string();
        assert!(table.contains("7.87 kg"));
        assert!(table.contains("0.36"));
    }

    #[test]
    fn test_profile_table() {
        let profile = ResidenceProfile::builder()
            .name("Asha")
            .age(31)
            .housing(HousingConfiguration::OneBhk)
            .has_washing_machine(true)
            .build();
        let table = build_profile_table(&profile).to_string();
        assert!(table.contains("Asha"));
        assert!(table.contains("31"));
        assert!(table.contains("1BHK"));
        assert!(table.contains("Yes"));
        assert!(table.contains("No"));
    }
}
