/*
 * @Description  : 神经元节点：用激活函数把加权输入和变换为输出
 *                 输入层的节点同样是Node，只是其输出由外部直接写入。
 */

use super::functions::{Activation, ActivationFunction};
use super::link::{Link, LinkId};

/// 非零初始化时的偏置
const DEFAULT_BIAS: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: String,
    activation_fn: Activation,
    pub(crate) bias: f64,

    /// a = Σ(wi * zi) + bias
    pub(crate) activation: f64,
    /// z = h(a)，h为激活函数
    pub(crate) output: f64,

    /// ∂E/∂z
    pub(crate) ez_der: f64,
    /// ∂E/∂a
    pub(crate) ea_der: f64,

    // 上次更新以来累积的∂E/∂a及其个数
    pub(crate) acc_ea_der: f64,
    pub(crate) num_acc_ea_der: usize,

    pub(crate) input_links: Vec<LinkId>,
    pub(crate) output_links: Vec<LinkId>,
}

impl Node {
    pub(crate) fn new(id: String, activation_fn: Activation, init_zero: bool) -> Self {
        Self {
            id,
            activation_fn,
            bias: if init_zero { 0.0 } else { DEFAULT_BIAS },
            activation: 0.0,
            output: 0.0,
            ez_der: 0.0,
            ea_der: 0.0,
            acc_ea_der: 0.0,
            num_acc_ea_der: 0,
            input_links: Vec::new(),
            output_links: Vec::new(),
        }
    }

    /// 由层id与层内下标生成节点id：`node-<idx>-<layerId>`
    pub fn make_id(layer_id: &str, node_idx: usize) -> String {
        format!("node-{node_idx}-{layer_id}")
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub const fn activation_fn(&self) -> Activation {
        self.activation_fn
    }

    pub const fn bias(&self) -> f64 {
        self.bias
    }

    pub const fn activation(&self) -> f64 {
        self.activation
    }

    pub const fn output(&self) -> f64 {
        self.output
    }

    pub const fn ez_der(&self) -> f64 {
        self.ez_der
    }

    pub const fn ea_der(&self) -> f64 {
        self.ea_der
    }

    pub const fn acc_ea_der(&self) -> f64 {
        self.acc_ea_der
    }

    pub const fn num_acc_ea_der(&self) -> usize {
        self.num_acc_ea_der
    }

    pub fn input_links(&self) -> &[LinkId] {
        &self.input_links
    }

    pub fn output_links(&self) -> &[LinkId] {
        &self.output_links
    }

    /// 更新节点输出：a = bias + Σ(w * src.output)，z = h(a)
    ///
    /// `prev_outputs`为上一层各节点的输出，按层内下标排列。
    pub(crate) fn update_output(&mut self, links: &[Link], prev_outputs: &[f64]) -> f64 {
        self.activation = self.bias
            + self
                .input_links
                .iter()
                .map(|&link_id| &links[link_id])
                .filter(|link| !link.is_dead())
                .map(|link| link.weight * prev_outputs[link.source().index])
                .sum::<f64>();
        self.output = self.activation_fn.f(self.activation);
        self.output
    }

    /// ∂E/∂a = h'(a) * ∂E/∂z，并累积
    pub(crate) fn update_ea_der(&mut self) {
        self.ea_der = self.activation_fn.der(self.activation) * self.ez_der;
        self.acc_ea_der += self.ea_der;
        self.num_acc_ea_der += 1;
    }

    /// 每条输入边的∂E/∂w = src.output * ∂E/∂a，并累积到边上
    pub(crate) fn update_ew_der(&self, links: &mut [Link], prev_outputs: &[f64]) {
        for &link_id in &self.input_links {
            let link = &mut links[link_id];
            if link.is_dead() {
                continue;
            }
            link.ew_der = prev_outputs[link.source().index] * self.ea_der;
            link.acc_ew_der += link.ew_der;
            link.num_ew_der += 1;
        }
    }

    /// ∂E/∂z = Σ(w * dest.∂E/∂a)，`next_ea_ders`为下一层各节点的∂E/∂a
    pub(crate) fn update_ez_der(&mut self, links: &[Link], next_ea_ders: &[f64]) {
        self.ez_der = self
            .output_links
            .iter()
            .map(|&link_id| &links[link_id])
            .filter(|link| !link.is_dead())
            .map(|link| link.weight * next_ea_ders[link.dest().index])
            .sum();
    }

    /// bias -= η * mean(∂E/∂a)，随后清空累积
    pub(crate) fn update_bias(&mut self, learning_rate: f64) {
        if self.num_acc_ea_der > 0 {
            self.bias -= learning_rate * self.acc_ea_der / self.num_acc_ea_der as f64;
            self.acc_ea_der = 0.0;
            self.num_acc_ea_der = 0;
        }
    }

    pub(crate) fn restore_bias(&mut self, bias: f64) {
        self.bias = bias;
    }
}
