use std::fmt::{Debug, Display, Formatter};

/// Proportion `0.0..=1.0` displayed as a percentage.
pub struct FormattedPercentage(pub f64);

impl Debug for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

pub struct FormattedFlag(pub bool);

impl Display for FormattedFlag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(if self.0 { "Yes" } else { "No" })
    }
}

/// Optional value, unset ones are shown as a hyphen.
pub struct FormattedOption<T>(pub Option<T>);

impl<T: Display> Display for FormattedOption<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(value) => Display::fmt(value, f),
            None => f.write_str("-"),
        }
    }
}
