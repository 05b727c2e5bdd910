/*
 * @Description  : 监督训练：把二维样本喂给网络
 *                 一个“tick”即一个epoch：逐样本前向 + 反向传播，每`batch_size`个样本更新一次权重，
 *                 然后计算训练集与测试集上的损失。
 */

use super::functions::{Criterion, ErrorFunction};
use super::network::NeuralNetwork;
use super::NetworkError;
use crate::data::{
    DataError, DataGenerator, Dataset, DatasetConfig, Sample2D, split_train_test,
};
use crate::errors::{ComparisonOperator, PlaygroundError};
use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// 训练选项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerOptions {
    /// 每多少个样本更新一次权重
    pub batch_size: usize,
    /// 测试集占`1/kfold`
    pub kfold: usize,
    pub error_function: Criterion,
    /// 每类样本数
    pub samples_per_class: usize,
    /// 数据噪声，须在[0, 50]内
    pub noise: f64,
}

impl Default for TrainerOptions {
    fn default() -> Self {
        Self {
            batch_size: 10,
            kfold: 5,
            error_function: Criterion::SUM_SQUARES,
            samples_per_class: 150,
            noise: 4.0,
        }
    }
}

impl TrainerOptions {
    pub fn validate(&self) -> Result<(), DataError> {
        if self.batch_size < 1 {
            return Err(DataError::must_satisfy(
                "批大小",
                ComparisonOperator::GreaterOrEqual,
                1.0,
            ));
        }
        if self.kfold < 2 {
            return Err(DataError::must_satisfy(
                "折数",
                ComparisonOperator::GreaterOrEqual,
                2.0,
            ));
        }
        if self.kfold > 10 {
            return Err(DataError::must_satisfy(
                "折数",
                ComparisonOperator::LessOrEqual,
                10.0,
            ));
        }
        self.dataset_config().validate()
    }

    pub const fn dataset_config(&self) -> DatasetConfig {
        DatasetConfig::new(self.samples_per_class, self.noise)
    }
}

/// 网络输入：样本坐标`[x, y]`
pub fn construct_input(sample: &Sample2D) -> [f64; 2] {
    [sample.x, sample.y]
}

/// 1-of-K目标向量：标签等于调色板第i种颜色时第i位为1
pub fn construct_target(sample: &Sample2D, colors: &[String]) -> Vec<f64> {
    if !colors.contains(&sample.label) {
        warn!("样本标签{}不在调色板{:?}中，目标向量全为0", sample.label, colors);
    }
    colors
        .iter()
        .map(|color| if *color == sample.label { 1.0 } else { 0.0 })
        .collect()
}

/// 训练一个epoch，返回本轮调用`update_weights`的次数
pub fn train_epoch(
    network: &mut NeuralNetwork,
    samples: &[Sample2D],
    colors: &[String],
    options: &TrainerOptions,
) -> Result<usize, NetworkError> {
    let batch_size = options.batch_size.max(1);
    let mut updates = 0;
    for (i, sample) in samples.iter().enumerate() {
        network
            .forward_prop(&construct_input(sample))?
            .back_prop(&construct_target(sample, colors), options.error_function)?;
        if (i + 1) % batch_size == 0 {
            network.update_weights()?;
            updates += 1;
        }
    }
    Ok(updates)
}

/// 平均损失：对每个样本求输出层误差之和再除以输出节点数，然后对样本取平均。
/// 样本为空时返回0。
pub fn compute_loss(
    network: &mut NeuralNetwork,
    samples: &[Sample2D],
    colors: &[String],
    error_fn: Criterion,
) -> Result<f64, NetworkError> {
    if samples.is_empty() {
        return Ok(0.0);
    }
    let mut total = 0.0;
    for sample in samples {
        let target = construct_target(sample, colors);
        network.forward_prop(&construct_input(sample))?;
        let outputs = network.outputs();
        let loss: f64 = outputs
            .iter()
            .zip(&target)
            .map(|(&output, &t)| error_fn.f(output, t))
            .sum();
        total += loss / outputs.len() as f64;
    }
    Ok(total / samples.len() as f64)
}

/// 在`domain × domain`上取`resolution × resolution`个均匀网格点逐一分类
///
/// 返回按行排列的类别下标：第r行对应y从大到小，第c列对应x从小到大。
pub fn decision_grid(
    network: &mut NeuralNetwork,
    domain: [f64; 2],
    resolution: usize,
) -> Result<Vec<Vec<usize>>, NetworkError> {
    let [low, high] = domain;
    let step = if resolution > 1 {
        (high - low) / (resolution - 1) as f64
    } else {
        0.0
    };
    let mut grid = Vec::with_capacity(resolution);
    for r in 0..resolution {
        let y = high - r as f64 * step;
        let mut row = Vec::with_capacity(resolution);
        for c in 0..resolution {
            let x = low + c as f64 * step;
            network.forward_prop(&[x, y])?;
            row.push(network.get_decision()?);
        }
        grid.push(row);
    }
    Ok(grid)
}

/// 一个epoch的结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochReport {
    pub epoch: usize,
    pub train_loss: f64,
    pub test_loss: f64,
    pub updates: usize,
}

/// 训练会话：网络 + 数据集 + 训练/测试数据 + 进度
#[derive(Debug, Clone)]
pub struct TrainingSession {
    network: NeuralNetwork,
    dataset: Dataset,
    options: TrainerOptions,
    train_data: Vec<Sample2D>,
    test_data: Vec<Sample2D>,
    epoch: usize,
    train_loss: f64,
    test_loss: f64,
}

impl TrainingSession {
    /// 生成数据并划分训练集与测试集。网络的输出层节点数须等于数据集的类别数
    pub fn new<R: Rng + ?Sized>(
        network: NeuralNetwork,
        dataset: Dataset,
        options: TrainerOptions,
        rng: &mut R,
    ) -> Result<Self, PlaygroundError> {
        let mut session = Self {
            network,
            dataset,
            options,
            train_data: Vec::new(),
            test_data: Vec::new(),
            epoch: 0,
            train_loss: 0.0,
            test_loss: 0.0,
        };
        session.regenerate(rng)?;
        Ok(session)
    }

    /// 训练一个epoch并更新损失
    pub fn step(&mut self) -> Result<EpochReport, PlaygroundError> {
        let colors = self.dataset.colors();
        self.epoch += 1;
        let updates = train_epoch(&mut self.network, &self.train_data, &colors, &self.options)?;
        let error_fn = self.options.error_function;
        self.train_loss = compute_loss(&mut self.network, &self.train_data, &colors, error_fn)?;
        self.test_loss = compute_loss(&mut self.network, &self.test_data, &colors, error_fn)?;
        debug!(
            "epoch {}: 训练损失 {:.6}，测试损失 {:.6}",
            self.epoch, self.train_loss, self.test_loss
        );
        Ok(self.report(updates))
    }

    /// 重新生成训练与测试数据，并清零进度
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), PlaygroundError> {
        self.options.validate()?;
        let num_classes = self.dataset.num_classes();
        let output_len = self.network.output().len();
        if output_len != num_classes {
            return Err(NetworkError::TargetSizeMismatch {
                expected: output_len,
                got: num_classes,
            }
            .into());
        }

        let samples = self
            .dataset
            .generate(&self.options.dataset_config(), rng)?;
        if samples.is_empty() {
            return Err(DataError::EmptyDataset.into());
        }
        let (train, test) = split_train_test(
            &samples,
            self.options.kfold,
            self.options.samples_per_class,
            num_classes,
            rng,
        )?;
        self.train_data = train;
        self.test_data = test;
        self.reset();
        Ok(())
    }

    /// 清零epoch计数与损失（不触碰网络权重）
    pub fn reset(&mut self) {
        self.epoch = 0;
        self.train_loss = 0.0;
        self.test_loss = 0.0;
    }

    /// 换用另一个数据集并重新生成数据
    pub fn set_dataset<R: Rng + ?Sized>(
        &mut self,
        dataset: Dataset,
        rng: &mut R,
    ) -> Result<(), PlaygroundError> {
        self.dataset = dataset;
        self.regenerate(rng)
    }

    /// 对数据域做网格分类（热力图）
    pub fn decision_grid(&mut self, resolution: usize) -> Result<Vec<Vec<usize>>, NetworkError> {
        decision_grid(&mut self.network, DataGenerator::DATA_DOMAIN, resolution)
    }

    fn report(&self, updates: usize) -> EpochReport {
        EpochReport {
            epoch: self.epoch,
            train_loss: self.train_loss,
            test_loss: self.test_loss,
            updates,
        }
    }

    pub const fn network(&self) -> &NeuralNetwork {
        &self.network
    }

    /// 修改网络结构或配置后须自行`rebuild`
    pub fn network_mut(&mut self) -> &mut NeuralNetwork {
        &mut self.network
    }

    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub const fn options(&self) -> &TrainerOptions {
        &self.options
    }

    pub fn train_data(&self) -> &[Sample2D] {
        &self.train_data
    }

    pub fn test_data(&self) -> &[Sample2D] {
        &self.test_data
    }

    pub const fn epoch(&self) -> usize {
        self.epoch
    }

    pub const fn train_loss(&self) -> f64 {
        self.train_loss
    }

    pub const fn test_loss(&self) -> f64 {
        self.test_loss
    }
}
