//! Aggregation variants
//!
//! A variant is the monoid a structure aggregates with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::value::Value;

/// Which aggregate a structure computes over a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Sum,
    Min,
    Max,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Sum, Variant::Min, Variant::Max];

    /// Neutral element of `combine`.
    pub fn identity(&self) -> Value {
        match self {
            Variant::Sum => Value::ZERO,
            Variant::Min => Value::PosInfinity,
            Variant::Max => Value::NegInfinity,
        }
    }

    pub fn combine(&self, a: Value, b: Value) -> Value {
        match self {
            Variant::Sum => a.add(b),
            Variant::Min => a.min(b),
            Variant::Max => a.max(b),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Sum => "sum",
            Variant::Min => "min",
            Variant::Max => "max",
        }
    }

    /// Menu label, e.g. "Sum Segment Tree".
    pub fn title(&self) -> &'static str {
        match self {
            Variant::Sum => "Sum Segment Tree",
            Variant::Min => "Min Segment Tree",
            Variant::Max => "Max Segment Tree",
        }
    }

    /// What a query returns, e.g. "minimum".
    pub fn aggregate_noun(&self) -> &'static str {
        match self {
            Variant::Sum => "sum",
            Variant::Min => "minimum",
            Variant::Max => "maximum",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sum" => Ok(Variant::Sum),
            "min" => Ok(Variant::Min),
            "max" => Ok(Variant::Max),
            other => Err(format!(
                "unknown variant '{}' (expected sum, min or max)",
                other
            )),
        }
    }
}
