//! 神经网络引擎的错误类型

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkError {
    /// 输入向量长度与输入层节点数不一致
    #[error("输入向量长度不匹配: 期望 {expected}, 实际 {got}")]
    InputSizeMismatch { expected: usize, got: usize },

    /// 目标向量长度与输出层节点数不一致
    #[error("目标向量长度不匹配: 期望 {expected}, 实际 {got}")]
    TargetSizeMismatch { expected: usize, got: usize },

    /// 上次`rebuild`之后层或节点数量被修改过，连接尚未重建
    #[error("网络拓扑已改变（当前形状 {current:?}，已连接形状 {wired:?}），请先调用 rebuild")]
    NotRebuilt {
        current: Vec<usize>,
        wired: Vec<usize>,
    },

    #[error("找不到层: {0}")]
    LayerNotFound(String),

    #[error("找不到节点: {0}")]
    NodeNotFound(String),

    /// 某层节点数为0
    #[error("层{0}没有任何节点")]
    EmptyLayer(String),

    /// 描述符与网络结构对不上，或JSON/二进制解码失败
    #[error("序列化错误: {0}")]
    Serialization(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

impl PartialEq for NetworkError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::InputSizeMismatch { expected: a, got: b },
                Self::InputSizeMismatch { expected: c, got: d },
            )
            | (
                Self::TargetSizeMismatch { expected: a, got: b },
                Self::TargetSizeMismatch { expected: c, got: d },
            ) => a == c && b == d,
            (
                Self::NotRebuilt { current: a, wired: b },
                Self::NotRebuilt { current: c, wired: d },
            ) => a == c && b == d,
            (Self::LayerNotFound(a), Self::LayerNotFound(b))
            | (Self::NodeNotFound(a), Self::NodeNotFound(b))
            | (Self::EmptyLayer(a), Self::EmptyLayer(b))
            | (Self::Serialization(a), Self::Serialization(b)) => a == b,
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            _ => false,
        }
    }
}
