/*
 * @Description  : 二维点云数据集生成器
 *                 内置高斯、螺旋、圆环三种二分类数据集，以及由样本字面量构成的自定义数据集。
 *                 内置数据集每类生成`size`个样本，两类交替排列，只用调色板的前两种颜色。
 */

use super::error::DataError;
use super::sample::Sample2D;
use crate::errors::ComparisonOperator;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt::{self, Display};

/// 数据生成相关的常量与随机数工具
pub struct DataGenerator;

impl DataGenerator {
    pub const MAX_NOISE: f64 = 50.0;
    pub const DATA_DOMAIN: [f64; 2] = [-6.0, 6.0];
    pub const SUPPORTED_COLORS: [&'static str; 7] = [
        "#0877BD", "#FFA500", "#800080", "#ff7373", "#008000", "#5152a7", "#00ff00",
    ];

    /// 螺旋与圆环数据集的半径：(6 - (-6) - 2) / 2 = 5
    pub fn radius() -> f64 {
        (Self::DATA_DOMAIN[1] - Self::DATA_DOMAIN[0] - 2.0) / 2.0
    }

    /// 用Box–Muller变换（极坐标形式）采样N(mean, variance)
    pub fn normal_random<R: Rng + ?Sized>(rng: &mut R, mean: f64, variance: f64) -> f64 {
        let (v1, s) = loop {
            let v1 = 2.0 * rng.gen_range(0.0..1.0) - 1.0;
            let v2 = 2.0 * rng.gen_range(0.0..1.0) - 1.0;
            let s: f64 = v1 * v1 + v2 * v2;
            // s为0时ln(s)/s无定义
            if s < 1.0 && s != 0.0 {
                break (v1, s);
            }
        };
        let result = (-2.0 * s.ln() / s).sqrt() * v1;
        mean + variance.sqrt() * result
    }

    /// 从均匀分布U(a, b)采样
    pub fn rand_uniform<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> f64 {
        rng.gen_range(0.0..1.0) * (b - a) + a
    }

    /// 噪声[0, MAX_NOISE]线性映射到高斯方差[0.5, 4]
    fn gaussian_variance(noise: f64) -> f64 {
        0.5 + noise / Self::MAX_NOISE * (4.0 - 0.5)
    }
}

/// 内置数据集的生成参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// 每类样本数
    pub size: usize,
    /// 噪声，须在[0, 50]内
    pub noise: f64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            size: 50,
            noise: 0.0,
        }
    }
}

impl DatasetConfig {
    pub const fn new(size: usize, noise: f64) -> Self {
        Self { size, noise }
    }

    pub fn validate(&self) -> Result<(), DataError> {
        if !ComparisonOperator::GreaterOrEqual.holds(self.noise, 0.0) {
            return Err(DataError::must_satisfy(
                "噪声",
                ComparisonOperator::GreaterOrEqual,
                0.0,
            ));
        }
        if !ComparisonOperator::LessOrEqual.holds(self.noise, DataGenerator::MAX_NOISE) {
            return Err(DataError::must_satisfy(
                "噪声",
                ComparisonOperator::LessOrEqual,
                DataGenerator::MAX_NOISE,
            ));
        }
        Ok(())
    }
}

/// 自定义数据集，同时也是数据集的JSON形式：`{colors, name, samples}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomDataset {
    pub colors: Vec<String>,
    pub name: String,
    pub samples: Vec<Sample2D>,
}

impl CustomDataset {
    /// 创建并校验：调色板不可为空，且每个样本的标签都须在调色板中
    pub fn new(name: &str, colors: Vec<String>, samples: Vec<Sample2D>) -> Result<Self, DataError> {
        let dataset = Self {
            colors,
            name: name.to_string(),
            samples,
        };
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn validate(&self) -> Result<(), DataError> {
        if self.colors.is_empty() {
            return Err(DataError::InvalidDatasetJson("调色板为空".to_string()));
        }
        if let Some(sample) = self
            .samples
            .iter()
            .find(|sample| !self.colors.contains(&sample.label))
        {
            return Err(DataError::UnknownLabel(sample.label.clone()));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, DataError> {
        serde_json::to_string(self).map_err(|e| DataError::InvalidDatasetJson(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let dataset: Self =
            serde_json::from_str(json).map_err(|e| DataError::InvalidDatasetJson(e.to_string()))?;
        dataset.validate()?;
        Ok(dataset)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Dataset {
    /// 中心分别在(2, 2)与(-2, -2)的两团高斯点
    #[default]
    Gaussian,
    /// 两条交错的螺旋臂
    Spiral,
    /// 内圆盘与外圆环
    Circle,
    Custom(CustomDataset),
}

impl Dataset {
    /// 内置数据集，按界面上的显示顺序
    pub fn list() -> Vec<Self> {
        vec![Self::Gaussian, Self::Spiral, Self::Circle]
    }

    /// 按名称查找内置数据集，找不到时回退到高斯
    pub fn from_name(name: &str) -> Self {
        Self::list()
            .into_iter()
            .find(|dataset| dataset.name() == name)
            .unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Gaussian => "Gaussian",
            Self::Spiral => "Spiral",
            Self::Circle => "Circle",
            Self::Custom(custom) => &custom.name,
        }
    }

    pub fn is_default(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// 数据集的调色板，类别下标即颜色在其中的下标
    pub fn colors(&self) -> Vec<String> {
        match self {
            Self::Custom(custom) => custom.colors.clone(),
            _ => DataGenerator::SUPPORTED_COLORS[..2]
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    pub fn num_classes(&self) -> usize {
        match self {
            Self::Custom(custom) => custom.colors.len(),
            _ => 2,
        }
    }

    /// 生成样本；自定义数据集忽略`config`，直接返回其样本
    pub fn generate<R: Rng + ?Sized>(
        &self,
        config: &DatasetConfig,
        rng: &mut R,
    ) -> Result<Vec<Sample2D>, DataError> {
        match self {
            Self::Gaussian => config.validate().map(|()| Self::gaussian(config, rng)),
            Self::Spiral => config.validate().map(|()| Self::spiral(config, rng)),
            Self::Circle => config.validate().map(|()| Self::circle(config, rng)),
            Self::Custom(custom) => Ok(custom.samples.clone()),
        }
    }

    fn gaussian<R: Rng + ?Sized>(config: &DatasetConfig, rng: &mut R) -> Vec<Sample2D> {
        let [positive, negative] = [
            DataGenerator::SUPPORTED_COLORS[0],
            DataGenerator::SUPPORTED_COLORS[1],
        ];
        let variance = DataGenerator::gaussian_variance(config.noise);
        let mut samples = Vec::with_capacity(config.size * 2);
        for _ in 0..config.size {
            let x = DataGenerator::normal_random(rng, 2.0, variance);
            let y = DataGenerator::normal_random(rng, 2.0, variance);
            samples.push(Sample2D::new(x, y, positive));

            let x = DataGenerator::normal_random(rng, -2.0, variance);
            let y = DataGenerator::normal_random(rng, -2.0, variance);
            samples.push(Sample2D::new(x, y, negative));
        }
        samples
    }

    fn spiral<R: Rng + ?Sized>(config: &DatasetConfig, rng: &mut R) -> Vec<Sample2D> {
        let n = config.size as f64;
        let radius = DataGenerator::radius();
        let noise = config.noise;
        let mut arm_point = |i: usize, delta: f64| {
            let r = i as f64 / n * radius;
            let t = 1.75 * i as f64 / n * 2.0 * PI + delta;
            let x = r * t.sin() + DataGenerator::rand_uniform(rng, -1.0, 1.0) * noise / 100.0;
            let y = r * t.cos() + DataGenerator::rand_uniform(rng, -1.0, 1.0) * noise / 100.0;
            (x, y)
        };

        let mut samples = Vec::with_capacity(config.size * 2);
        for i in 0..config.size {
            let (x, y) = arm_point(i, 0.0);
            samples.push(Sample2D::new(x, y, DataGenerator::SUPPORTED_COLORS[0]));
            let (x, y) = arm_point(i, PI);
            samples.push(Sample2D::new(x, y, DataGenerator::SUPPORTED_COLORS[1]));
        }
        samples
    }

    fn circle<R: Rng + ?Sized>(config: &DatasetConfig, rng: &mut R) -> Vec<Sample2D> {
        let radius = DataGenerator::radius();
        let noise = config.noise;
        let mut ring_point = |low: f64, high: f64| {
            let r = DataGenerator::rand_uniform(rng, low, high);
            let angle = DataGenerator::rand_uniform(rng, 0.0, 2.0 * PI);
            let noise_x = DataGenerator::rand_uniform(rng, -radius, radius) * noise / 100.0;
            let noise_y = DataGenerator::rand_uniform(rng, -radius, radius) * noise / 100.0;
            (r * angle.sin() + noise_x, r * angle.cos() + noise_y)
        };
        // 加噪后按到原点的距离重新标注
        let label = |x: f64, y: f64| {
            if x.hypot(y) < radius * 0.5 {
                DataGenerator::SUPPORTED_COLORS[0]
            } else {
                DataGenerator::SUPPORTED_COLORS[1]
            }
        };

        let mut samples = Vec::with_capacity(config.size * 2);
        for _ in 0..config.size {
            let (x, y) = ring_point(0.0, radius * 0.5);
            samples.push(Sample2D::new(x, y, label(x, y)));
            let (x, y) = ring_point(radius * 0.7, radius);
            samples.push(Sample2D::new(x, y, label(x, y)));
        }
        samples
    }

    /// 生成一份样本并固化为自定义数据集（即导出用的JSON形式）
    pub fn to_custom<R: Rng + ?Sized>(
        &self,
        config: &DatasetConfig,
        rng: &mut R,
    ) -> Result<CustomDataset, DataError> {
        Ok(CustomDataset {
            colors: self.colors(),
            name: self.name().to_string(),
            samples: self.generate(config, rng)?,
        })
    }

    pub fn to_json<R: Rng + ?Sized>(
        &self,
        config: &DatasetConfig,
        rng: &mut R,
    ) -> Result<String, DataError> {
        self.to_custom(config, rng)?.to_json()
    }

    pub fn from_json(json: &str) -> Result<Self, DataError> {
        CustomDataset::from_json(json).map(Self::Custom)
    }
}

impl Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
