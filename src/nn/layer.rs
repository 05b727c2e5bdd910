use super::functions::Activation;
use super::node::Node;

/// 一层节点，层内节点共享同一个激活函数
///
/// 层id为`input`、`output`或`layer-<idx>`（隐藏层）。
/// `push_node`/`pop_node`只增删节点，不会重新连线；之后须调用
/// [`NeuralNetwork::rebuild`](super::NeuralNetwork::rebuild)。
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    id: String,
    nodes: Vec<Node>,
    activation_fn: Activation,
    init_zero: bool,
}

impl Layer {
    pub const INPUT_ID: &'static str = "input";
    pub const OUTPUT_ID: &'static str = "output";

    pub fn new(id: &str, node_number: usize, activation_fn: Activation, init_zero: bool) -> Self {
        let nodes = (0..node_number)
            .map(|i| Node::new(Node::make_id(id, i), activation_fn, init_zero))
            .collect();
        Self {
            id: id.to_string(),
            nodes,
            activation_fn,
            init_zero,
        }
    }

    /// 隐藏层id：`layer-<idx>`
    pub fn make_id(idx: usize) -> String {
        format!("layer-{idx}")
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub const fn activation_fn(&self) -> Activation {
        self.activation_fn
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, idx: usize) -> Option<&Node> {
        self.nodes.get(idx)
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// 在末尾追加一个节点
    pub fn push_node(&mut self) -> &mut Self {
        let idx = self.nodes.len();
        self.nodes.push(Node::new(
            Node::make_id(&self.id, idx),
            self.activation_fn,
            self.init_zero,
        ));
        self
    }

    /// 移除末尾的节点
    pub fn pop_node(&mut self) -> &mut Self {
        self.nodes.pop();
        self
    }

    pub(crate) fn outputs(&self) -> Vec<f64> {
        self.nodes.iter().map(Node::output).collect()
    }

    pub(crate) fn ea_ders(&self) -> Vec<f64> {
        self.nodes.iter().map(Node::ea_der).collect()
    }
}
