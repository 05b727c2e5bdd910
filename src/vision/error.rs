//! 图像与卷积核错误类型定义

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VisionError {
    /// 卷积核没有任何行或列
    #[error("卷积核不能为空")]
    EmptyKernel,

    /// 卷积核各行长度不一
    #[error("卷积核第{row}行长度不一致: 期望 {expected}, 实际 {got}")]
    RaggedKernel {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("卷积核JSON格式错误: {0}")]
    InvalidKernelJson(String),

    /// 像素缓冲区长度不是 width * height * 4
    #[error("像素缓冲区长度不匹配: 期望 {expected}, 实际 {got}")]
    BufferSizeMismatch { expected: usize, got: usize },

    /// 行列下标越界
    #[error("下标({row}, {col})越界: 尺寸为 {rows}x{cols}")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// 图像读写失败
    #[error(transparent)]
    Image(#[from] image::ImageError),
}
