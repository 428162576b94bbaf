use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    /// CSS pixels.
    #[default]
    Px,
    /// Root font-size multiples.
    Rem,
    /// Parent font-size multiples.
    Em,
    /// Percentage of the containing block.
    Percent,
    /// Grid fraction (fr).
    Fraction,
    /// Automatic sizing based on content.
    Auto,
}

/// A CSS length such as `8px`, `1.5rem`, `50%` or `auto`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub const AUTO: Self = Self {
        value: 0.0,
        unit: Unit::Auto,
    };
    pub const ZERO: Self = Self {
        value: 0.0,
        unit: Unit::Px,
    };

    pub fn px(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Px,
        }
    }

    pub fn rem(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Rem,
        }
    }

    pub fn fr(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Fraction,
        }
    }

    pub fn is_auto(&self) -> bool {
        self.unit == Unit::Auto
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.unit {
            Unit::Auto => return f.write_str("auto"),
            Unit::Px => "px",
            Unit::Rem => "rem",
            Unit::Em => "em",
            Unit::Percent => "%",
            Unit::Fraction => "fr",
        };
        write!(f, "{}{}", self.value, suffix)
    }
}
