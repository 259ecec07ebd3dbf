//! Duration units for timed actions.
//!
//! Durations in an animation pack are written as a number followed by an
//! optional unit word (`300`, `300ms`, `1.5s`, `2 min`). Every duration is
//! normalized to milliseconds before it is stored in the tree, so consumers
//! never see the unit that was written.

use std::fmt;

/// A time unit recognized in duration annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
}

/// Alias table, matched case-insensitively. The empty alias means no unit
/// was written, which defaults to milliseconds.
const ALIASES: &[(&str, DurationUnit)] = &[
    ("", DurationUnit::Millisecond),
    ("ms", DurationUnit::Millisecond),
    ("msec", DurationUnit::Millisecond),
    ("msecs", DurationUnit::Millisecond),
    ("millisecond", DurationUnit::Millisecond),
    ("milliseconds", DurationUnit::Millisecond),
    ("s", DurationUnit::Second),
    ("sec", DurationUnit::Second),
    ("secs", DurationUnit::Second),
    ("second", DurationUnit::Second),
    ("seconds", DurationUnit::Second),
    ("m", DurationUnit::Minute),
    ("min", DurationUnit::Minute),
    ("mins", DurationUnit::Minute),
    ("minute", DurationUnit::Minute),
    ("minutes", DurationUnit::Minute),
    ("h", DurationUnit::Hour),
    ("hr", DurationUnit::Hour),
    ("hrs", DurationUnit::Hour),
    ("hour", DurationUnit::Hour),
    ("hours", DurationUnit::Hour),
];

impl DurationUnit {
    /// All units, smallest first.
    pub const ALL: [DurationUnit; 4] = [
        DurationUnit::Millisecond,
        DurationUnit::Second,
        DurationUnit::Minute,
        DurationUnit::Hour,
    ];

    /// Resolves a unit alias such as `"ms"`, `"Secs"` or `""`.
    ///
    /// Returns `None` when the alias is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use apack_core::duration::DurationUnit;
    ///
    /// assert_eq!(DurationUnit::from_alias("MS"), Some(DurationUnit::Millisecond));
    /// assert_eq!(DurationUnit::from_alias(""), Some(DurationUnit::Millisecond));
    /// assert_eq!(DurationUnit::from_alias("fortnight"), None);
    /// ```
    pub fn from_alias(alias: &str) -> Option<Self> {
        ALIASES
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(alias))
            .map(|(_, unit)| *unit)
    }

    /// Number of milliseconds in one of this unit.
    pub fn millis(self) -> f64 {
        match self {
            DurationUnit::Millisecond => 1.0,
            DurationUnit::Second => 1_000.0,
            DurationUnit::Minute => 60_000.0,
            DurationUnit::Hour => 3_600_000.0,
        }
    }

    /// Shortest alias of this unit, as used in diagnostics.
    pub fn symbol(self) -> &'static str {
        match self {
            DurationUnit::Millisecond => "ms",
            DurationUnit::Second => "s",
            DurationUnit::Minute => "m",
            DurationUnit::Hour => "h",
        }
    }

    /// Converts `value` expressed in this unit to milliseconds.
    pub fn to_millis(self, value: f64) -> f64 {
        value * self.millis()
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    #[test]
    fn test_every_alias_resolves() {
        for (alias, unit) in ALIASES {
            assert_eq!(DurationUnit::from_alias(alias), Some(*unit), "alias `{alias}`");
        }
    }

    #[test]
    fn test_aliases_are_case_insensitive() {
        assert_eq!(DurationUnit::from_alias("Seconds"), Some(DurationUnit::Second));
        assert_eq!(DurationUnit::from_alias("MIN"), Some(DurationUnit::Minute));
        assert_eq!(DurationUnit::from_alias("Hr"), Some(DurationUnit::Hour));
    }

    #[test]
    fn test_unknown_alias() {
        assert_eq!(DurationUnit::from_alias("days"), None);
        assert_eq!(DurationUnit::from_alias("µs"), None);
        assert_eq!(DurationUnit::from_alias(" ms"), None);
    }

    #[test]
    fn test_to_millis() {
        assert!(approx_eq!(f64, DurationUnit::Millisecond.to_millis(300.0), 300.0));
        assert!(approx_eq!(f64, DurationUnit::Second.to_millis(1.5), 1_500.0));
        assert!(approx_eq!(f64, DurationUnit::Minute.to_millis(0.25), 15_000.0));
        assert!(approx_eq!(f64, DurationUnit::Hour.to_millis(0.1), 360_000.0, ulps = 4));
    }

    #[test]
    fn test_units_are_ordered_by_size() {
        let millis: Vec<f64> = DurationUnit::ALL.iter().map(|u| u.millis()).collect();
        assert!(millis.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_display_uses_symbol() {
        assert_eq!(DurationUnit::Second.to_string(), "s");
        assert_eq!(DurationUnit::Hour.to_string(), "h");
    }
}
