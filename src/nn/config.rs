/*
 * @Description  : 网络配置。配置是不可变的值：`with_*`返回新的配置，
 *                 只有`rebuild`时才会把正则化、初始化方式等作用到连接上。
 */

use super::NetworkError;
use super::functions::{Activation, GradientDescent, Regularization};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub gradient_descent: GradientDescent,
    pub activation: Activation,
    pub learning_rate: f64,
    pub regularization: Regularization,
    pub regularization_rate: f64,
    /// 为`true`时所有权重与偏置初始化为0
    pub init_zero: bool,
    /// 权重初始化所用随机数种子；`None`时每次`rebuild`取系统熵
    pub seed: Option<u64>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            gradient_descent: GradientDescent::None,
            activation: Activation::IDENTITY,
            learning_rate: 0.01,
            regularization: Regularization::NONE,
            regularization_rate: 0.0,
            init_zero: false,
            seed: None,
        }
    }
}

impl NetworkConfig {
    pub fn with_gradient_descent(self, gradient_descent: GradientDescent) -> Self {
        Self {
            gradient_descent,
            ..self
        }
    }

    pub fn with_activation(self, activation: Activation) -> Self {
        Self { activation, ..self }
    }

    pub fn with_learning_rate(self, learning_rate: f64) -> Self {
        Self {
            learning_rate,
            ..self
        }
    }

    pub fn with_regularization(self, regularization: Regularization, rate: f64) -> Self {
        Self {
            regularization,
            regularization_rate: rate,
            ..self
        }
    }

    pub fn with_init_zero(self, init_zero: bool) -> Self {
        Self { init_zero, ..self }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// 从JSON读取配置，缺失的字段取默认值，未知的函数名回退到各注册表的默认值
    pub fn from_json(json: &str) -> Result<Self, NetworkError> {
        serde_json::from_str(json)
            .map_err(|e| NetworkError::Serialization(format!("解析网络配置失败: {e}")))
    }

    pub fn to_json(&self) -> Result<String, NetworkError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| NetworkError::Serialization(format!("序列化网络配置失败: {e}")))
    }
}
