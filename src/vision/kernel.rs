/*
 * @Description  : 卷积核：由实数系数构成的二维矩阵，带名称与任意附加属性
 *
 * JSON形式：`{"name": ..., "data": {"0": [..], "1": [..]}, ...附加属性}`，
 * `data`的键是行号，按数值升序读取。
 */

use super::VisionError;
use ndarray::{Array2, Axis, s};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "KernelJson", into = "KernelJson")]
pub struct Kernel {
    name: String,
    data: Array2<f64>,
    extra: Map<String, Value>,
}

impl Kernel {
    pub const DEFAULT_NAME: &'static str = "kernel";

    /// 按行创建卷积核，如`[[2, 0], [-1, 3], [5, 6]]`为3x2的矩阵
    pub fn new(rows: &[Vec<f64>], name: Option<&str>) -> Result<Self, VisionError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(VisionError::EmptyKernel);
        }
        if let Some((row, values)) = rows
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != cols)
        {
            return Err(VisionError::RaggedKernel {
                row,
                expected: cols,
                got: values.len(),
            });
        }
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        let data = Array2::from_shape_vec((rows.len(), cols), flat)
            .map_err(|e| VisionError::InvalidKernelJson(e.to_string()))?;
        Self::from_array(data, name)
    }

    pub fn from_array(data: Array2<f64>, name: Option<&str>) -> Result<Self, VisionError> {
        if data.is_empty() {
            return Err(VisionError::EmptyKernel);
        }
        Ok(Self {
            name: name.unwrap_or(Self::DEFAULT_NAME).to_string(),
            data,
            extra: Map::new(),
        })
    }

    /// 预设核，`data`须非空
    pub(crate) fn preset(name: &str, data: Array2<f64>) -> Self {
        Self {
            name: name.to_string(),
            data,
            extra: Map::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) -> &mut Self {
        self.name = name.to_string();
        self
    }

    pub const fn data(&self) -> &Array2<f64> {
        &self.data
    }

    /// `[行数, 列数]`
    pub fn size(&self) -> [usize; 2] {
        [self.data.nrows(), self.data.ncols()]
    }

    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.data.outer_iter().map(|row| row.to_vec()).collect()
    }

    pub fn row(&self, i: usize) -> Option<Vec<f64>> {
        (i < self.data.nrows()).then(|| self.data.row(i).to_vec())
    }

    pub fn cols(&self) -> Vec<Vec<f64>> {
        self.data.axis_iter(Axis(1)).map(|col| col.to_vec()).collect()
    }

    pub fn col(&self, j: usize) -> Option<Vec<f64>> {
        (j < self.data.ncols()).then(|| self.data.column(j).to_vec())
    }

    pub fn cell(&self, i: usize, j: usize) -> Option<f64> {
        self.data.get((i, j)).copied()
    }

    pub fn set_value(&mut self, i: usize, j: usize, value: f64) -> Result<&mut Self, VisionError> {
        let err = self.out_of_bounds(i, j);
        *self.data.get_mut((i, j)).ok_or(err)? = value;
        Ok(self)
    }

    pub fn is_squared(&self) -> bool {
        self.data.nrows() == self.data.ncols()
    }

    /// 方阵且边长为奇数（3x3、5x5……）
    pub fn is_odd_squared(&self) -> bool {
        self.is_squared() && self.data.nrows() % 2 == 1
    }

    pub fn swap_row(&mut self, i: usize, j: usize) -> Result<&mut Self, VisionError> {
        let rows = self.data.nrows();
        if i >= rows || j >= rows {
            return Err(self.out_of_bounds(i.max(j), 0));
        }
        for c in 0..self.data.ncols() {
            self.data.swap((i, c), (j, c));
        }
        Ok(self)
    }

    pub fn swap_col(&mut self, i: usize, j: usize) -> Result<&mut Self, VisionError> {
        let cols = self.data.ncols();
        if i >= cols || j >= cols {
            return Err(self.out_of_bounds(0, i.max(j)));
        }
        for r in 0..self.data.nrows() {
            self.data.swap((r, i), (r, j));
        }
        Ok(self)
    }

    /// 左右翻转：列序反转
    pub fn horizontal_flip(&mut self) -> &mut Self {
        self.data = self.data.slice(s![.., ..;-1]).to_owned();
        self
    }

    /// 上下翻转：行序反转
    pub fn vertical_flip(&mut self) -> &mut Self {
        self.data = self.data.slice(s![..;-1, ..]).to_owned();
        self
    }

    /// 旋转180°，把相关核变为卷积核
    pub fn flip(&mut self) -> &mut Self {
        self.horizontal_flip().vertical_flip()
    }

    pub fn flipped(&self) -> Self {
        let mut kernel = self.clone();
        kernel.flip();
        kernel
    }

    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    pub fn set_extra(&mut self, key: &str, value: Value) -> &mut Self {
        self.extra.insert(key.to_string(), value);
        self
    }

    pub const fn extras(&self) -> &Map<String, Value> {
        &self.extra
    }

    pub fn to_json(&self) -> Result<String, VisionError> {
        serde_json::to_string(self).map_err(|e| VisionError::InvalidKernelJson(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, VisionError> {
        serde_json::from_str(json).map_err(|e| VisionError::InvalidKernelJson(e.to_string()))
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> VisionError {
        VisionError::IndexOutOfBounds {
            row,
            col,
            rows: self.data.nrows(),
            cols: self.data.ncols(),
        }
    }
}

impl Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// 卷积核的JSON形式
#[derive(Serialize, Deserialize)]
struct KernelJson {
    #[serde(default = "default_kernel_name")]
    name: String,
    data: Map<String, Value>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

fn default_kernel_name() -> String {
    Kernel::DEFAULT_NAME.to_string()
}

impl TryFrom<KernelJson> for Kernel {
    type Error = VisionError;

    fn try_from(json: KernelJson) -> Result<Self, Self::Error> {
        let mut indexed_rows = json
            .data
            .into_iter()
            .map(|(key, value)| -> Result<(usize, Vec<f64>), VisionError> {
                let idx: usize = key
                    .parse()
                    .map_err(|_| VisionError::InvalidKernelJson(format!("行号`{key}`不是整数")))?;
                let row: Vec<f64> = serde_json::from_value(value)
                    .map_err(|e| VisionError::InvalidKernelJson(format!("第{idx}行: {e}")))?;
                Ok((idx, row))
            })
            .collect::<Result<Vec<_>, _>>()?;
        indexed_rows.sort_by_key(|(idx, _)| *idx);
        let rows: Vec<Vec<f64>> = indexed_rows.into_iter().map(|(_, row)| row).collect();

        let mut kernel = Self::new(&rows, Some(&json.name))?;
        kernel.extra = json.extra;
        Ok(kernel)
    }
}

impl From<Kernel> for KernelJson {
    fn from(kernel: Kernel) -> Self {
        let data = kernel
            .rows()
            .into_iter()
            .enumerate()
            .map(|(i, row)| (i.to_string(), Value::from(row)))
            .collect();
        Self {
            name: kernel.name,
            data,
            extra: kernel.extra,
        }
    }
}
