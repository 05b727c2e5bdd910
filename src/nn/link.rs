/*
 * @Description  : 连接（Link）：相邻两层节点之间的有向边
 *                 边由网络统一持有（`Vec<Link>`），节点只记录边的下标，
 *                 边本身以(层下标, 节点下标)引用两端节点。
 */

use super::functions::{Regularization, RegularizationFunction};
use serde::{Deserialize, Serialize};

/// 边在网络`links`中的下标
pub type LinkId = usize;

/// 节点在网络中的位置：`layer`为层下标（0为输入层，最后为输出层），`index`为层内下标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodePosition {
    pub layer: usize,
    pub index: usize,
}

impl NodePosition {
    pub const fn new(layer: usize, index: usize) -> Self {
        Self { layer, index }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    id: LinkId,
    source: NodePosition,
    dest: NodePosition,
    pub(crate) weight: f64,

    // ∂E/∂w
    pub(crate) ew_der: f64,
    // 上次更新以来累积的∂E/∂w及其个数
    pub(crate) acc_ew_der: f64,
    pub(crate) num_ew_der: usize,

    regularization: Regularization,
    regularization_rate: f64,
    dead: bool,
}

impl Link {
    pub(crate) const fn new(
        id: LinkId,
        source: NodePosition,
        dest: NodePosition,
        weight: f64,
        regularization: Regularization,
        regularization_rate: f64,
    ) -> Self {
        Self {
            id,
            source,
            dest,
            weight,
            ew_der: 0.0,
            acc_ew_der: 0.0,
            num_ew_der: 0,
            regularization,
            regularization_rate,
            dead: false,
        }
    }

    pub const fn id(&self) -> LinkId {
        self.id
    }

    pub const fn source(&self) -> NodePosition {
        self.source
    }

    pub const fn dest(&self) -> NodePosition {
        self.dest
    }

    pub const fn weight(&self) -> f64 {
        self.weight
    }

    pub const fn ew_der(&self) -> f64 {
        self.ew_der
    }

    pub const fn acc_ew_der(&self) -> f64 {
        self.acc_ew_der
    }

    pub const fn num_ew_der(&self) -> usize {
        self.num_ew_der
    }

    pub const fn regularization(&self) -> Regularization {
        self.regularization
    }

    pub const fn regularization_rate(&self) -> f64 {
        self.regularization_rate
    }

    /// 被L1正则化剪枝后永久为`true`
    pub const fn is_dead(&self) -> bool {
        self.dead
    }

    /// 当前权重对应的正则化惩罚
    pub fn penalty(&self) -> f64 {
        self.regularization
            .f(self.weight, self.regularization_rate)
    }

    /// 从快照恢复参数（不触碰梯度累积）
    pub(crate) fn restore(&mut self, weight: f64, dead: bool) {
        self.weight = weight;
        self.dead = dead;
    }

    /// 用累积梯度的均值做一步梯度下降：w -= η * ∂E/∂w，随后再做一步正则化：
    /// w -= η * R'(w)，其中R'取梯度步之前的权重。
    ///
    /// L1下若正则化步使权重变号，则权重置0且该边永久失效。
    /// 返回本次调用是否剪枝了该边。
    pub(crate) fn update_weight(&mut self, learning_rate: f64) -> bool {
        if self.dead || self.num_ew_der == 0 {
            return false;
        }

        let regularization_der = self
            .regularization
            .der(self.weight, self.regularization_rate);

        self.weight -= learning_rate * self.acc_ew_der / self.num_ew_der as f64;
        self.acc_ew_der = 0.0;
        self.num_ew_der = 0;

        if self.regularization.is_none() {
            return false;
        }

        let new_weight = self.weight - learning_rate * regularization_der;
        if self.regularization.is_l1() && self.weight * new_weight < 0.0 {
            self.weight = 0.0;
            self.dead = true;
            return true;
        }
        self.weight = new_weight;
        false
    }
}
