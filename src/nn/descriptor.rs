/*
 * @Description  : 网络描述符（Network Descriptor）
 *                 可序列化的中间表示：配置 + 形状 + 全部参数，
 *                 用于JSON导入导出；`save_params`/`load_params`只读写参数（bincode）
 */

use super::config::NetworkConfig;
use super::network::NeuralNetwork;
use super::NetworkError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// 描述符格式版本
pub const DESCRIPTOR_VERSION: &str = "1.0";

/// 网络的可序列化描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkDescriptor {
    /// 格式版本（用于向后兼容）
    pub version: String,
    pub config: NetworkConfig,
    /// 各层节点数：[输入, 隐藏..., 输出]
    pub shape: Vec<usize>,
    pub params: NetworkParams,
}

/// 网络的全部可训练参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkParams {
    /// 按层排列的各节点偏置（含输入层，其偏置不参与计算）
    pub biases: Vec<Vec<f64>>,
    /// 按连接下标排列
    pub links: Vec<LinkParams>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkParams {
    pub weight: f64,
    pub dead: bool,
}

impl NeuralNetwork {
    /// 参数文件魔数
    const PARAMS_MAGIC: &'static [u8; 4] = b"NPPR";

    pub fn describe(&self) -> NetworkDescriptor {
        NetworkDescriptor {
            version: DESCRIPTOR_VERSION.to_string(),
            config: self.config().clone(),
            shape: self.shape(),
            params: self.params(),
        }
    }

    pub fn params(&self) -> NetworkParams {
        NetworkParams {
            biases: self
                .layers()
                .iter()
                .map(|layer| layer.nodes().iter().map(|node| node.bias()).collect())
                .collect(),
            links: self
                .links()
                .iter()
                .map(|link| LinkParams {
                    weight: link.weight(),
                    dead: link.is_dead(),
                })
                .collect(),
        }
    }

    /// 按描述符重建网络并恢复所有参数，得到与导出时行为一致的网络
    pub fn from_descriptor(descriptor: &NetworkDescriptor) -> Result<Self, NetworkError> {
        let shape = &descriptor.shape;
        if shape.len() < 2 {
            return Err(NetworkError::Serialization(format!(
                "形状至少需要输入层与输出层，实际为 {shape:?}"
            )));
        }
        let input_dim = shape[0];
        let num_classes = shape[shape.len() - 1];
        let hidden_shape = &shape[1..shape.len() - 1];

        let mut network = Self::new(
            input_dim,
            hidden_shape,
            num_classes,
            descriptor.config.clone(),
        );
        network.restore_params(&descriptor.params)?;
        Ok(network)
    }

    /// 把参数写回当前网络；参数个数须与当前已连接的结构一致
    pub fn restore_params(&mut self, params: &NetworkParams) -> Result<(), NetworkError> {
        let shape = self.shape();
        let bias_shape: Vec<usize> = params.biases.iter().map(Vec::len).collect();
        if bias_shape != shape {
            return Err(NetworkError::Serialization(format!(
                "偏置形状 {bias_shape:?} 与网络形状 {shape:?} 不一致"
            )));
        }
        if params.links.len() != self.links().len() {
            return Err(NetworkError::Serialization(format!(
                "连接数不一致: 期望 {}, 实际 {}",
                self.links().len(),
                params.links.len()
            )));
        }

        for (layer, biases) in self.layers_mut().iter_mut().zip(&params.biases) {
            for (node, &bias) in layer.nodes_mut().iter_mut().zip(biases) {
                node.restore_bias(bias);
            }
        }
        for (link, saved) in self.links_mut().iter_mut().zip(&params.links) {
            link.restore(saved.weight, saved.dead);
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, NetworkError> {
        serde_json::to_string_pretty(&self.describe())
            .map_err(|e| NetworkError::Serialization(format!("序列化网络失败: {e}")))
    }

    pub fn from_json(json: &str) -> Result<Self, NetworkError> {
        let descriptor: NetworkDescriptor = serde_json::from_str(json)
            .map_err(|e| NetworkError::Serialization(format!("解析网络描述失败: {e}")))?;
        Self::from_descriptor(&descriptor)
    }

    /// 保存所有参数到二进制文件（魔数 + bincode）
    pub fn save_params<P: AsRef<Path>>(&self, path: P) -> Result<(), NetworkError> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        writer.write_all(Self::PARAMS_MAGIC)?;
        bincode::serialize_into(&mut writer, &self.params())
            .map_err(|e| NetworkError::Serialization(format!("写入参数失败: {e}")))?;
        writer.flush()?;
        Ok(())
    }

    /// 从二进制文件加载参数，文件须由结构相同的网络的`save_params`写出
    pub fn load_params<P: AsRef<Path>>(&mut self, path: P) -> Result<(), NetworkError> {
        let mut reader = BufReader::new(File::open(path.as_ref())?);
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if &magic != Self::PARAMS_MAGIC {
            return Err(NetworkError::Serialization(
                "无效的参数文件：请使用 save_params() 保存的文件".to_string(),
            ));
        }
        let params: NetworkParams = bincode::deserialize_from(&mut reader)
            .map_err(|e| NetworkError::Serialization(format!("读取参数失败: {e}")))?;
        self.restore_params(&params)
    }
}
