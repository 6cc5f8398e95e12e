//! Age-bracket classification.
//!
//! Three brackets, mutually exclusive and collectively exhaustive over all
//! signed ages: minor below 18, adult from 18 up to (not including) 65,
//! senior citizen from 65 on.

use std::fmt;

/// Adults start at this age.
pub const ADULT_MIN_AGE: i64 = 18;

/// Senior citizens start at this age.
pub const SENIOR_MIN_AGE: i64 = 65;

/// The bracket a given age falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBracket {
    Minor,
    Adult,
    Senior,
}

impl AgeBracket {
    /// Classify an age in years.
    ///
    /// Thresholds are evaluated in order, so negative values fall through
    /// to `Minor` like any other age below 18.
    pub fn classify(age: i64) -> Self {
        if age < ADULT_MIN_AGE {
            AgeBracket::Minor
        } else if age < SENIOR_MIN_AGE {
            AgeBracket::Adult
        } else {
            AgeBracket::Senior
        }
    }

    /// The classification line printed at the end of a session.
    pub fn message(&self) -> &'static str {
        match self {
            AgeBracket::Minor => "You are a minor.",
            AgeBracket::Adult => "You are an adult.",
            AgeBracket::Senior => "You are a senior citizen.",
        }
    }

    /// Short lowercase label for log output.
    pub fn label(&self) -> &'static str {
        match self {
            AgeBracket::Minor => "minor",
            AgeBracket::Adult => "adult",
            AgeBracket::Senior => "senior",
        }
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
