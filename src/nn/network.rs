/*
 * @Description  : 前馈神经网络引擎
 *
 * 网络持有全部层（下标0为输入层，最后一层为输出层，中间为隐藏层）与全部连接；
 * 节点与连接之间仅以下标互相引用。状态迁移：
 *   未连线 → rebuild → forward_prop → back_prop → update_weights → forward_prop → …
 * 只有`rebuild`会重置状态：相邻两层全连接，旧权重一律丢弃。
 */

use super::config::NetworkConfig;
use super::functions::{Criterion, ErrorFunction};
use super::layer::Layer;
use super::link::{Link, LinkId, NodePosition};
use super::node::Node;
use super::NetworkError;
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone)]
pub struct NeuralNetwork {
    input_dim: usize,
    hidden_shape: Vec<usize>,
    num_classes: usize,
    config: NetworkConfig,
    layers: Vec<Layer>,
    links: Vec<Link>,
    /// 上次`rebuild`时各层的节点数
    wired_shape: Vec<usize>,
    /// 上次`rebuild`之后是否增删过层或取得过隐藏层的可变引用
    topology_edited: bool,
}

impl NeuralNetwork {
    /// 创建并立即构建网络
    ///
    /// - `input_dim`：输入特征数，即输入层节点数
    /// - `hidden_shape`：各隐藏层节点数，如`[6, 2, 3]`表示3个隐藏层
    /// - `num_classes`：类别数，即输出层节点数
    pub fn new(
        input_dim: usize,
        hidden_shape: &[usize],
        num_classes: usize,
        config: NetworkConfig,
    ) -> Self {
        let mut network = Self {
            input_dim,
            hidden_shape: hidden_shape.to_vec(),
            num_classes,
            config,
            layers: Vec::new(),
            links: Vec::new(),
            wired_shape: Vec::new(),
            topology_edited: false,
        };
        network.rebuild();
        network
    }

    // ========== 配置 ==========

    pub const fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// 替换配置。学习率立即生效；激活函数、正则化与初始化方式要到下次`rebuild`才作用到网络上
    pub fn set_config(&mut self, config: NetworkConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// 修改输入维数与类别数，下次`rebuild`生效
    pub fn set_in_out_dimension(&mut self, input_dim: usize, num_classes: usize) -> &mut Self {
        self.input_dim = input_dim;
        self.num_classes = num_classes;
        self
    }

    // ========== 构建 ==========

    /// 重新构建网络
    ///
    /// 隐藏层形状取自现有隐藏层（若已构建过），否则取构造时给定的形状；
    /// 之后重新生成所有层并全连接相邻层。原有权重全部丢弃。
    pub fn rebuild(&mut self) -> &mut Self {
        if !self.layers.is_empty() {
            self.hidden_shape = self.hidden_layers().iter().map(Layer::len).collect();
        }

        let activation = self.config.activation;
        let init_zero = self.config.init_zero;

        let mut layers = Vec::with_capacity(self.hidden_shape.len() + 2);
        layers.push(Layer::new(Layer::INPUT_ID, self.input_dim, activation, init_zero));
        for (i, &node_number) in self.hidden_shape.iter().enumerate() {
            layers.push(Layer::new(&Layer::make_id(i), node_number, activation, init_zero));
        }
        layers.push(Layer::new(Layer::OUTPUT_ID, self.num_classes, activation, init_zero));
        self.layers = layers;
        self.links.clear();

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        for layer_idx in 1..self.layers.len() {
            self.wire(layer_idx - 1, layer_idx, &mut rng);
        }

        self.wired_shape = self.shape();
        self.topology_edited = false;
        debug!(
            "网络已重建：形状 {:?}，连接数 {}",
            self.wired_shape,
            self.links.len()
        );
        self
    }

    /// 全连接`from`层与`to`层
    fn wire(&mut self, from: usize, to: usize, rng: &mut StdRng) {
        for i in 0..self.layers[from].len() {
            for j in 0..self.layers[to].len() {
                let id = self.links.len();
                let weight = if self.config.init_zero {
                    0.0
                } else {
                    rng.gen_range(-0.5..0.5)
                };
                self.links.push(Link::new(
                    id,
                    NodePosition::new(from, i),
                    NodePosition::new(to, j),
                    weight,
                    self.config.regularization,
                    self.config.regularization_rate,
                ));
                self.layers[from].nodes_mut()[i].output_links.push(id);
                self.layers[to].nodes_mut()[j].input_links.push(id);
            }
        }
    }

    /// 在末尾追加一个隐藏层，之后须`rebuild`
    pub fn push_layer(&mut self, node_number: usize) -> &mut Self {
        let idx = self.hidden_layers().len();
        let layer = Layer::new(
            &Layer::make_id(idx),
            node_number,
            self.config.activation,
            self.config.init_zero,
        );
        let output_pos = self.layers.len() - 1;
        self.layers.insert(output_pos, layer);
        self.topology_edited = true;
        self
    }

    /// 移除最后一个隐藏层，之后须`rebuild`。没有隐藏层时不做任何事
    pub fn pop_layer(&mut self) -> &mut Self {
        if !self.hidden_layers().is_empty() {
            let last_hidden = self.layers.len() - 2;
            self.layers.remove(last_hidden);
            self.topology_edited = true;
        }
        self
    }

    // ========== 查询 ==========

    pub fn input(&self) -> &Layer {
        &self.layers[0]
    }

    pub fn hidden_layers(&self) -> &[Layer] {
        &self.layers[1..self.layers.len() - 1]
    }

    pub fn output(&self) -> &Layer {
        &self.layers[self.layers.len() - 1]
    }

    /// 所有层：输入层、各隐藏层、输出层
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.get(id)
    }

    /// 各层节点数：[输入, 隐藏..., 输出]
    pub fn shape(&self) -> Vec<usize> {
        self.layers.iter().map(Layer::len).collect()
    }

    pub fn hidden_layer_by_id(&self, id: &str) -> Option<&Layer> {
        self.hidden_layers().iter().find(|layer| layer.id() == id)
    }

    /// 用于增删隐藏层节点，之后须`rebuild`
    pub fn hidden_layer_by_id_mut(&mut self, id: &str) -> Option<&mut Layer> {
        let last = self.layers.len() - 1;
        let layer = self.layers[1..last].iter_mut().find(|layer| layer.id() == id)?;
        self.topology_edited = true;
        Some(layer)
    }

    /// 同`hidden_layer_by_id_mut`，按隐藏层下标查找
    pub fn hidden_layer_mut(&mut self, idx: usize) -> Option<&mut Layer> {
        let last = self.layers.len() - 1;
        let layer = self.layers[1..last].get_mut(idx)?;
        self.topology_edited = true;
        Some(layer)
    }

    /// 隐藏层的前一个隐藏层（第一个隐藏层没有）
    pub fn pre_layer(&self, hidden_id: &str) -> Option<&Layer> {
        let hidden = self.hidden_layers();
        let idx = hidden.iter().position(|layer| layer.id() == hidden_id)?;
        idx.checked_sub(1).map(|pre| &hidden[pre])
    }

    /// 隐藏层的后一个隐藏层（最后一个隐藏层没有）
    pub fn next_layer(&self, hidden_id: &str) -> Option<&Layer> {
        let hidden = self.hidden_layers();
        let idx = hidden.iter().position(|layer| layer.id() == hidden_id)?;
        hidden.get(idx + 1)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.layers
            .iter()
            .flat_map(|layer| layer.nodes())
            .find(|node| node.id() == id)
    }

    pub fn node_at(&self, position: NodePosition) -> Option<&Node> {
        self.layers.get(position.layer)?.node(position.index)
    }

    /// 输出层各节点的输出
    pub fn outputs(&self) -> Vec<f64> {
        self.output().outputs()
    }

    /// 上次`rebuild`之后拓扑没有被修改过。
    /// 形状相同也不够：先删后加的节点或层没有任何连接
    pub fn is_wired(&self) -> bool {
        !self.topology_edited && self.shape() == self.wired_shape
    }

    fn ensure_wired(&self) -> Result<(), NetworkError> {
        let current = self.shape();
        if !self.is_wired() {
            return Err(NetworkError::NotRebuilt {
                current,
                wired: self.wired_shape.clone(),
            });
        }
        if let Some(layer) = self.layers.iter().find(|layer| layer.is_empty()) {
            return Err(NetworkError::EmptyLayer(layer.id().to_string()));
        }
        Ok(())
    }

    // ========== 训练 ==========

    /// 前向传播：输入写入输入层节点的输出，然后逐层更新隐藏层与输出层
    pub fn forward_prop(&mut self, inputs: &[f64]) -> Result<&mut Self, NetworkError> {
        self.ensure_wired()?;
        let expected = self.input().len();
        if inputs.len() != expected {
            return Err(NetworkError::InputSizeMismatch {
                expected,
                got: inputs.len(),
            });
        }

        for (node, &value) in self.layers[0].nodes_mut().iter_mut().zip(inputs) {
            node.output = value;
        }

        for layer_idx in 1..self.layers.len() {
            let prev_outputs = self.layers[layer_idx - 1].outputs();
            let links = &self.links;
            for node in self.layers[layer_idx].nodes_mut() {
                node.update_output(links, &prev_outputs);
            }
        }
        Ok(self)
    }

    /// 反向传播
    ///
    /// 输出层：∂E/∂z = E'(y, t)；其余层：∂E/∂z = Σ(w * 下一层∂E/∂a)。
    /// 每层再算∂E/∂a = h'(a) * ∂E/∂z 与每条输入边的∂E/∂w = z_src * ∂E/∂a。
    /// 梯度会一直累积，直到`update_weights`；调用方借此实现小批量平均。
    pub fn back_prop(
        &mut self,
        target: &[f64],
        error_fn: Criterion,
    ) -> Result<&mut Self, NetworkError> {
        self.ensure_wired()?;
        let expected = self.output().len();
        if target.len() != expected {
            return Err(NetworkError::TargetSizeMismatch {
                expected,
                got: target.len(),
            });
        }

        let output_idx = self.layers.len() - 1;
        for layer_idx in (1..=output_idx).rev() {
            if layer_idx == output_idx {
                for (node, &t) in self.layers[layer_idx].nodes_mut().iter_mut().zip(target) {
                    node.ez_der = error_fn.der(node.output, t);
                }
            } else {
                let next_ea_ders = self.layers[layer_idx + 1].ea_ders();
                let links = &self.links;
                for node in self.layers[layer_idx].nodes_mut() {
                    node.update_ez_der(links, &next_ea_ders);
                }
            }

            for node in self.layers[layer_idx].nodes_mut() {
                node.update_ea_der();
            }

            let prev_outputs = self.layers[layer_idx - 1].outputs();
            for node in self.layers[layer_idx].nodes() {
                node.update_ew_der(&mut self.links, &prev_outputs);
            }
        }
        Ok(self)
    }

    /// 用累积的梯度更新所有偏置与未失效连接的权重，并清空累积
    pub fn update_weights(&mut self) -> Result<&mut Self, NetworkError> {
        self.ensure_wired()?;
        let learning_rate = self.config.learning_rate;
        trace!("更新权重：学习率 {learning_rate}");

        for layer_idx in 1..self.layers.len() {
            let links = &mut self.links;
            for node in self.layers[layer_idx].nodes_mut() {
                node.update_bias(learning_rate);
                for &link_id in &node.input_links {
                    let link = &mut links[link_id];
                    if link.update_weight(learning_rate) {
                        info!(
                            "连接{}（{:?} → {:?}）被L1正则化剪枝",
                            link_id,
                            link.source(),
                            link.dest()
                        );
                    }
                }
            }
        }
        Ok(self)
    }

    /// 输入被分到的类别下标
    ///
    /// 从0开始比较，用`>=`取最大输出，故并列时取靠后的下标；
    /// 所有输出都为负时返回0。未重建或有空层（包括输出层为空）时返回错误。
    pub fn get_decision(&self) -> Result<usize, NetworkError> {
        self.ensure_wired()?;
        let mut max = 0.0;
        let mut idx = 0;
        for (i, node) in self.output().nodes().iter().enumerate() {
            if node.output >= max {
                max = node.output;
                idx = i;
            }
        }
        Ok(idx)
    }

    /// 所有连接的正则化惩罚之和
    pub fn regularization_penalty(&self) -> f64 {
        self.links
            .iter()
            .filter(|link| !link.is_dead())
            .map(Link::penalty)
            .sum()
    }

    pub(crate) fn layers_mut(&mut self) -> &mut [Layer] {
        &mut self.layers
    }

    pub(crate) fn links_mut(&mut self) -> &mut [Link] {
        &mut self.links
    }
}
