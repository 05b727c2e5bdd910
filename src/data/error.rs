//! 数据集生成错误类型定义

use crate::errors::ComparisonOperator;
use thiserror::Error;

/// 数据集生成、解析与划分相关错误
#[derive(Debug, Error, PartialEq)]
pub enum DataError {
    /// 取值不满足约束，如噪声须在[0, 50]内
    #[error("{value_name}须{operator}{threshold}")]
    ValueMustSatisfyComparison {
        value_name: String,
        operator: ComparisonOperator,
        threshold: f64,
    },

    /// 数据集JSON格式错误
    #[error("数据集JSON格式错误: {0}")]
    InvalidDatasetJson(String),

    /// 样本标签不在数据集调色板中
    #[error("未知的样本标签: {0}")]
    UnknownLabel(String),

    /// 数据集没有任何样本
    #[error("数据集为空")]
    EmptyDataset,
}

impl DataError {
    pub(crate) fn must_satisfy(
        value_name: &str,
        operator: ComparisonOperator,
        threshold: f64,
    ) -> Self {
        Self::ValueMustSatisfyComparison {
            value_name: value_name.to_string(),
            operator,
            threshold,
        }
    }
}
