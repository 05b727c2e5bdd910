/*
 * @Description  : RGBA图像：原始像素缓冲区及构造时预先算好的派生缓冲区
 *
 * 所有缓冲区都是 width * height * 4 字节的RGBA排列，派生缓冲区的alpha取自原图：
 * - gray：三个通道都是亮度 0.2126R + 0.7152G + 0.0722B
 * - red/green/blue：只保留对应通道，其余两个通道为0
 * - alpha：RGB全为0
 */

use super::VisionError;
use image::{DynamicImage, RgbaImage};

/// 把实数写入0~255的通道：四舍五入（.5取偶）后截断到范围内，NaN记为0
pub(crate) fn to_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round_ties_even().clamp(0.0, 255.0) as u8
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    data: Vec<u8>,
    gray: Vec<u8>,
    red: Vec<u8>,
    green: Vec<u8>,
    blue: Vec<u8>,
    alpha: Vec<u8>,
}

impl Image {
    /// 由RGBA像素数据创建图像，`data`长度须为`width * height * 4`。
    /// 该乘积溢出时，错误中的`expected`记为`usize::MAX`
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> Result<Self, VisionError> {
        let expected = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(4))
            .unwrap_or(usize::MAX);
        if data.len() != expected {
            return Err(VisionError::BufferSizeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self::from_valid(data, width, height))
    }

    fn from_valid(data: Vec<u8>, width: usize, height: usize) -> Self {
        let length = data.len();
        let mut gray = vec![0; length];
        let mut red = vec![0; length];
        let mut green = vec![0; length];
        let mut blue = vec![0; length];
        let mut alpha = vec![0; length];

        for (i, pixel) in data.chunks_exact(4).enumerate() {
            let [r, g, b, a] = [pixel[0], pixel[1], pixel[2], pixel[3]];
            // ITU-R BT.709
            let luma = to_channel(0.2126 * r as f64 + 0.7152 * g as f64 + 0.0722 * b as f64);
            let at = 4 * i;
            gray[at..at + 4].copy_from_slice(&[luma, luma, luma, a]);
            red[at..at + 4].copy_from_slice(&[r, 0, 0, a]);
            green[at..at + 4].copy_from_slice(&[0, g, 0, a]);
            blue[at..at + 4].copy_from_slice(&[0, 0, b, a]);
            alpha[at + 3] = a;
        }

        Self {
            width,
            height,
            data,
            gray,
            red,
            green,
            blue,
            alpha,
        }
    }

    pub fn from_rgba_image(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self::from_valid(image.as_raw().clone(), width as usize, height as usize)
    }

    pub fn from_dynamic_image(image: &DynamicImage) -> Self {
        Self::from_rgba_image(&image.to_rgba8())
    }

    pub fn to_rgba_image(&self) -> Result<RgbaImage, VisionError> {
        let expected = self.data.len();
        RgbaImage::from_raw(self.width as u32, self.height as u32, self.data.clone()).ok_or(
            VisionError::BufferSizeMismatch {
                expected,
                got: self.width * self.height * 4,
            },
        )
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn gray(&self) -> &[u8] {
        &self.gray
    }

    pub fn red(&self) -> &[u8] {
        &self.red
    }

    pub fn green(&self) -> &[u8] {
        &self.green
    }

    pub fn blue(&self) -> &[u8] {
        &self.blue
    }

    pub fn alpha(&self) -> &[u8] {
        &self.alpha
    }

    /// 第`i`行第`j`列像素在缓冲区中的起始下标
    pub const fn index(&self, i: usize, j: usize) -> usize {
        i * self.width * 4 + j * 4
    }

    /// 第`i`行第`j`列像素的`[R, G, B, A]`
    pub fn pixel(&self, i: usize, j: usize) -> Option<[u8; 4]> {
        if i >= self.height || j >= self.width {
            return None;
        }
        let at = self.index(i, j);
        Some([
            self.data[at],
            self.data[at + 1],
            self.data[at + 2],
            self.data[at + 3],
        ])
    }

    /// 用卷积结果构建新图像
    pub fn convolve(&self, kernel: &super::Kernel, gray: bool) -> Self {
        Self::from_valid(super::convolve(self, kernel, gray), self.width, self.height)
    }
}
