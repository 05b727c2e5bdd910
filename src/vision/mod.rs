/*
 * @Description  : 本模块提供二维图像卷积相关的功能。
 *                 在本模块中，不严谨地说：
 *                 1. 所谓的image/图像是指RGBA格式、按行排列的像素缓冲区；
 *                 2. “灰度”（图）等同于英文中luma、luminance、grey、gray的概念。
 */

mod error;
mod image;
mod kernel;
mod process;
mod samples;

#[cfg(test)]
mod tests;

pub use self::error::VisionError;
pub use self::image::Image;
pub use self::kernel::Kernel;
pub use self::process::{convolve, convolve_non_odd_square, convolve_odd_square};
pub use self::samples::KernelSamples;

use std::path::Path;

pub struct Vision {
    // ...
}

impl Vision {
    /// 将本地图像加载为RGBA图像
    pub fn load_image<P: AsRef<Path>>(path: P) -> Result<Image, VisionError> {
        let image = ::image::open(path)?;
        Ok(Image::from_dynamic_image(&image))
    }

    /// 保存图像到本地，格式由扩展名决定
    pub fn save_image<P: AsRef<Path>>(image: &Image, path: P) -> Result<(), VisionError> {
        image.to_rgba_image()?.save(path)?;
        Ok(())
    }
}
