//! 二维数据集模块
//!
//! 为神经网络训练提供带标签的二维点云。
//!
//! # 主要组件
//!
//! - [`Dataset`]: 高斯、螺旋、圆环与自定义数据集
//! - [`DataGenerator`]: 调色板、噪声上限、数据域等常量以及随机采样工具
//! - [`split_train_test`]: 打乱并按折数划分训练集与测试集
//! - [`DataError`]: 数据集错误类型
//!
//! # 使用示例
//!
//! ```ignore
//! use neural_playground::data::{Dataset, DatasetConfig, split_train_test};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let samples = Dataset::Spiral.generate(&DatasetConfig::new(150, 4.0), &mut rng)?;
//! let (train, test) = split_train_test(&samples, 5, 150, 2, &mut rng)?;
//! ```

pub mod error;
mod generator;
mod sample;
mod split;

#[cfg(test)]
mod tests;

// Re-exports
pub use error::DataError;
pub use generator::{CustomDataset, DataGenerator, Dataset, DatasetConfig};
pub use sample::Sample2D;
pub use split::split_train_test;
