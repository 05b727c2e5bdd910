/*
 * @Description  : 正则化函数注册表：为给定权重计算惩罚项及其导数
 */

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 正则化函数，`rate`即惩罚系数α
#[enum_dispatch]
pub trait RegularizationFunction {
    fn f(&self, weight: f64, rate: f64) -> f64;
    fn der(&self, weight: f64, rate: f64) -> f64;
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoRegularization;

impl RegularizationFunction for NoRegularization {
    fn f(&self, _weight: f64, _rate: f64) -> f64 {
        0.0
    }

    fn der(&self, _weight: f64, _rate: f64) -> f64 {
        0.0
    }

    fn name(&self) -> &'static str {
        "None"
    }
}

/// f = α|w|，f' = sign(w)·α（w = 0时为0）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct L1Norm;

impl RegularizationFunction for L1Norm {
    fn f(&self, weight: f64, rate: f64) -> f64 {
        weight.abs() * rate
    }

    fn der(&self, weight: f64, rate: f64) -> f64 {
        if weight > 0.0 {
            rate
        } else if weight < 0.0 {
            -rate
        } else {
            0.0
        }
    }

    fn name(&self) -> &'static str {
        "L1"
    }
}

/// f = 0.5·α·w²，f' = α·w
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct L2Norm;

impl RegularizationFunction for L2Norm {
    fn f(&self, weight: f64, rate: f64) -> f64 {
        0.5 * weight * weight * rate
    }

    fn der(&self, weight: f64, rate: f64) -> f64 {
        weight * rate
    }

    fn name(&self) -> &'static str {
        "L2"
    }
}

#[enum_dispatch(RegularizationFunction)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Regularization {
    None(NoRegularization),
    L1(L1Norm),
    L2(L2Norm),
}

impl Regularization {
    pub const NONE: Self = Self::None(NoRegularization);

    pub const fn list() -> [Self; 3] {
        [Self::NONE, Self::L1(L1Norm), Self::L2(L2Norm)]
    }

    /// 未知名称回退为`None`
    pub fn from_name(name: &str) -> Self {
        Self::list()
            .into_iter()
            .find(|regularization| regularization.name() == name)
            .unwrap_or_default()
    }

    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None(_))
    }

    pub const fn is_l1(&self) -> bool {
        matches!(self, Self::L1(_))
    }
}

impl Default for Regularization {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for Regularization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<Regularization> for String {
    fn from(regularization: Regularization) -> Self {
        regularization.name().to_string()
    }
}

impl From<String> for Regularization {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}
