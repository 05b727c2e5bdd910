use serde::{Deserialize, Serialize};
use std::fmt;

/// 梯度下降算法标签
///
/// 参见 <http://sebastianruder.com/optimizing-gradient-descent/index.html>。
/// 目前仅作为配置项携带，引擎实际执行的始终是（小批量）SGD。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum GradientDescent {
    #[default]
    None,
    Momentum,
    Nesterov,
    Adagrad,
    Adadelta,
    RmsProp,
    Adam,
}

impl GradientDescent {
    pub const fn list() -> [Self; 7] {
        [
            Self::None,
            Self::Momentum,
            Self::Nesterov,
            Self::Adagrad,
            Self::Adadelta,
            Self::RmsProp,
            Self::Adam,
        ]
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Momentum => "Momentum",
            Self::Nesterov => "Nesterov",
            Self::Adagrad => "Adagrad",
            Self::Adadelta => "Adadelta",
            Self::RmsProp => "RMSprop",
            Self::Adam => "Adam",
        }
    }

    /// 未知名称回退为`None`
    pub fn from_name(name: &str) -> Self {
        Self::list()
            .into_iter()
            .find(|gd| gd.name() == name)
            .unwrap_or_default()
    }
}

impl fmt::Display for GradientDescent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<GradientDescent> for String {
    fn from(gd: GradientDescent) -> Self {
        gd.name().to_string()
    }
}

impl From<String> for GradientDescent {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}
