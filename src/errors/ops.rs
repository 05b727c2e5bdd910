use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// 比较运算符，用于描述“某个取值须满足的条件”
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOperator {
    GreaterOrEqual,
    LessOrEqual,
    GreaterThan,
    LessThan,
}

impl ComparisonOperator {
    /// `value`是否满足`value <op> threshold`
    pub fn holds(&self, value: f64, threshold: f64) -> bool {
        match self {
            Self::GreaterOrEqual => value >= threshold,
            Self::LessOrEqual => value <= threshold,
            Self::GreaterThan => value > threshold,
            Self::LessThan => value < threshold,
        }
    }
}

impl Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator_name = match self {
            Self::GreaterOrEqual => "≥",
            Self::LessOrEqual => "≤",
            Self::GreaterThan => ">",
            Self::LessThan => "<",
        };
        write!(f, "{operator_name}")
    }
}
