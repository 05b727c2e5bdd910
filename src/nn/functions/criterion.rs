/*
 * @Description  : 误差函数注册表（E(y, t)及其对输出y的导数）
 */

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 误差函数
///
/// - `output`：节点输出y
/// - `target`：训练数据的真实值t
#[enum_dispatch]
pub trait ErrorFunction {
    fn f(&self, output: f64, target: f64) -> f64;
    /// ∂E/∂y
    fn der(&self, output: f64, target: f64) -> f64;
    fn name(&self) -> &'static str;
}

/// E = 0.5 * (y - t)^2
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SumSquares;

impl ErrorFunction for SumSquares {
    fn f(&self, output: f64, target: f64) -> f64 {
        0.5 * (output - target).powi(2)
    }

    fn der(&self, output: f64, target: f64) -> f64 {
        output - target
    }

    fn name(&self) -> &'static str {
        "Sum of Squares"
    }
}

/// E = -y * t，导数沿用 y - t（与softmax输出搭配时的简化形式）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrossEntropy;

impl ErrorFunction for CrossEntropy {
    fn f(&self, output: f64, target: f64) -> f64 {
        -output * target
    }

    fn der(&self, output: f64, target: f64) -> f64 {
        output - target
    }

    fn name(&self) -> &'static str {
        "Cross Entropy"
    }
}

#[enum_dispatch(ErrorFunction)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Criterion {
    SumSquares(SumSquares),
    CrossEntropy(CrossEntropy),
}

impl Criterion {
    pub const SUM_SQUARES: Self = Self::SumSquares(SumSquares);
    pub const CROSS_ENTROPY: Self = Self::CrossEntropy(CrossEntropy);

    pub const fn list() -> [Self; 2] {
        [Self::SUM_SQUARES, Self::CROSS_ENTROPY]
    }

    /// 未知名称回退为`Sum of Squares`
    pub fn from_name(name: &str) -> Self {
        Self::list()
            .into_iter()
            .find(|criterion| criterion.name() == name)
            .unwrap_or_default()
    }
}

impl Default for Criterion {
    fn default() -> Self {
        Self::SUM_SQUARES
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<Criterion> for String {
    fn from(criterion: Criterion) -> Self {
        criterion.name().to_string()
    }
}

impl From<String> for Criterion {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}
