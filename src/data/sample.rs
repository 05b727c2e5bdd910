use serde::{Deserialize, Serialize};

/// 二维样本：坐标与类别标签，标签是数据集调色板中的颜色
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample2D {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

impl Sample2D {
    pub fn new(x: f64, y: f64, label: &str) -> Self {
        Self {
            x,
            y,
            label: label.to_string(),
        }
    }

    /// 样本到原点的距离
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }
}
