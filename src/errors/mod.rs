/*
 * @Description  : 跨模块共享的错误类型。
 *                 各子模块（nn、vision、data）各自定义错误枚举，
 *                 这里只提供比较运算符词汇以及汇总用的`PlaygroundError`。
 */

use thiserror::Error;

mod ops;
pub use self::ops::ComparisonOperator;

use crate::data::DataError;
use crate::nn::NetworkError;
use crate::vision::VisionError;

/// 汇总错误：训练会话等需要同时调用多个子模块的场合使用
#[derive(Error, Debug)]
pub enum PlaygroundError {
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error(transparent)]
    Vision(#[from] VisionError),
    #[error(transparent)]
    Data(#[from] DataError),
}
