use crate::quantity::energy::KilowattHours;

quantity!(
    /// Indian rupees.
    Rupees, suffix: "₹", precision: 0
);

quantity!(
    /// Electricity tariff.
    RupeesPerKilowattHour, suffix: "₹/kWh", precision: 2
);

implement_mul!(KilowattHours, RupeesPerKilowattHour, Rupees);
