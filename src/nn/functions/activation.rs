/*
 * @Description  : 激活函数注册表
 *                 每个激活函数都是无状态的“函数+导数”对，按显示名称查找；
 *                 未知名称回退为`Identity`。
 */

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 激活函数：把节点的加权输入和映射为输出信号
#[enum_dispatch]
pub trait ActivationFunction {
    /// f(x)
    fn f(&self, x: f64) -> f64;
    /// f'(x)
    fn der(&self, x: f64) -> f64;
    /// 显示名称（也是注册表的键）
    fn name(&self) -> &'static str;
}

/// f(x) = x
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl ActivationFunction for Identity {
    fn f(&self, x: f64) -> f64 {
        x
    }

    fn der(&self, _x: f64) -> f64 {
        1.0
    }

    fn name(&self) -> &'static str {
        "Identity"
    }
}

/// f(x) = 1 / (1 + e^-x)
/// f'(x) = f(x) * (1 - f(x))
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sigmoid;

impl ActivationFunction for Sigmoid {
    fn f(&self, x: f64) -> f64 {
        1.0 / (1.0 + (-x).exp())
    }

    fn der(&self, x: f64) -> f64 {
        let sig = self.f(x);
        sig * (1.0 - sig)
    }

    fn name(&self) -> &'static str {
        "Sigmoid"
    }
}

/// f(x) = (1 - e^-2x) / (1 + e^-2x)
/// f'(x) = 1 - f(x)^2
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tanh;

impl ActivationFunction for Tanh {
    fn f(&self, x: f64) -> f64 {
        if x == f64::INFINITY {
            return 1.0;
        }
        if x == f64::NEG_INFINITY {
            return -1.0;
        }
        let a = (-2.0 * x).exp();
        // x很小时a溢出为inf，此时(1-a)/(1+a)为NaN，实际极限是-1
        if a.is_infinite() {
            return -1.0;
        }
        (1.0 - a) / (1.0 + a)
    }

    fn der(&self, x: f64) -> f64 {
        let tanh = self.f(x);
        1.0 - tanh * tanh
    }

    fn name(&self) -> &'static str {
        "Tanh"
    }
}

/// f(x) = max(0, x)
/// f'(x) = 0（x ≤ 0），否则为1
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Relu;

impl ActivationFunction for Relu {
    fn f(&self, x: f64) -> f64 {
        x.max(0.0)
    }

    fn der(&self, x: f64) -> f64 {
        if x <= 0.0 { 0.0 } else { 1.0 }
    }

    fn name(&self) -> &'static str {
        "Relu"
    }
}

/// 激活函数注册表的取值
#[enum_dispatch(ActivationFunction)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Activation {
    Identity(Identity),
    Sigmoid(Sigmoid),
    Tanh(Tanh),
    Relu(Relu),
}

impl Activation {
    pub const IDENTITY: Self = Self::Identity(Identity);
    pub const SIGMOID: Self = Self::Sigmoid(Sigmoid);
    pub const TANH: Self = Self::Tanh(Tanh);
    pub const RELU: Self = Self::Relu(Relu);

    /// 按界面上的显示顺序列出所有激活函数
    pub const fn list() -> [Self; 4] {
        [Self::IDENTITY, Self::SIGMOID, Self::TANH, Self::RELU]
    }

    /// 按名称查找，永不失败：未知名称返回`Identity`
    pub fn from_name(name: &str) -> Self {
        Self::list()
            .into_iter()
            .find(|activation| activation.name() == name)
            .unwrap_or_default()
    }
}

impl Default for Activation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<Activation> for String {
    fn from(activation: Activation) -> Self {
        activation.name().to_string()
    }
}

impl From<String> for Activation {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}
