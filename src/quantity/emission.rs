use crate::quantity::energy::KilowattHours;

quantity!(
    /// Mass of emitted carbon dioxide.
    KilogramsCo2, suffix: "kg", precision: 2
);

quantity!(
    /// Grid carbon intensity.
    KilogramsCo2PerKilowattHour, suffix: "kg/kWh", precision: 2
);

quantity!(
    /// Carbon dioxide a single tree absorbs.
    KilogramsCo2PerTree, suffix: "kg/tree", precision: 0
);

quantity!(Trees, suffix: "trees", precision: 2);

implement_mul!(KilowattHours, KilogramsCo2PerKilowattHour, KilogramsCo2);
implement_div!(KilogramsCo2, KilogramsCo2PerTree, Trees);
