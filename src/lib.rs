//! # Neural Playground
//!
//! `neural_playground`用纯rust实现一个可交互的小型神经网络“游乐场”的计算核心：
//!
//! - [`nn`]：以下标互连的全连接前馈网络，支持逐样本反向传播、小批量权重更新、
//!   L1/L2正则化（L1会剪掉权重过零的连接）以及随时增删隐藏层与节点后重建；
//! - [`data`]：高斯、螺旋、圆环等二维点云数据集的生成与划分；
//! - [`vision`]：RGBA图像与任意形状卷积核的二维卷积。
//!

pub mod data;
pub mod errors;
pub mod nn;
pub mod utils;
pub mod vision;
