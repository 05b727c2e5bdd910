/*
 * @Description  : 负责前馈神经网络（neural network）的构建与训练
 *
 * 结构：
 * - functions：激活/误差/正则化函数与梯度下降标签的注册表
 * - node/link/layer：以下标互相引用的网络图
 * - network：前向传播、反向传播、权重更新与拓扑修改
 * - descriptor：网络的JSON描述与二进制参数快照
 * - trainer：在二维数据集上逐epoch训练
 */

mod config;
mod descriptor;
mod error;
pub mod functions;
mod layer;
mod link;
mod network;
mod node;
pub mod trainer;


pub use config::NetworkConfig;
pub use descriptor::{DESCRIPTOR_VERSION, LinkParams, NetworkDescriptor, NetworkParams};
pub use error::NetworkError;
pub use functions::{
    Activation, ActivationFunction, Criterion, ErrorFunction, GradientDescent, Regularization,
    RegularizationFunction,
};
pub use layer::Layer;
pub use link::{Link, LinkId, NodePosition};
pub use network::NeuralNetwork;
pub use node::Node;
pub use trainer::{EpochReport, TrainerOptions, TrainingSession};
