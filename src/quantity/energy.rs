quantity!(KilowattHours, suffix: "kWh", precision: 1);

impl KilowattHours {
    /// Extrapolate a daily figure over the number of days.
    pub fn over_days(self, days: u16) -> Self {
        self * f64::from(days)
    }
}
