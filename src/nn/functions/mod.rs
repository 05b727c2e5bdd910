//! 无状态函数注册表
//!
//! 激活函数、误差函数、正则化函数与梯度下降标签。每张表都是进程内只读的
//! “名称 → 函数对”映射，通过`from_name`查找，未知名称回退到各自的默认值。

mod activation;
mod criterion;
mod gradient_descent;
mod regularization;

pub use activation::{Activation, ActivationFunction, Identity, Relu, Sigmoid, Tanh};
pub use criterion::{Criterion, CrossEntropy, ErrorFunction, SumSquares};
pub use gradient_descent::GradientDescent;
pub use regularization::{L1Norm, L2Norm, NoRegularization, Regularization, RegularizationFunction};
