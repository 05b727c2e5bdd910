/*
 * @Description  : 二维卷积
 *
 * 按卷积核形状分派：
 * 1. 3x3：展开的9项求和，核先旋转180°；越界的邻居取最近的边缘像素，alpha取中心像素
 * 2. 其他奇数方阵：以核中心对齐，核先旋转180°；越界的项直接不参与求和
 * 3. 非奇数方阵：以核左上角对齐，不旋转（相关）；越界的项同样不参与求和
 * 除3x3外，输出的alpha都取自该像素本身。gray为真时读取灰度缓冲区，否则读取原始RGBA。
 * 输出逐行并行计算。
 */

use super::image::to_channel;
use super::{Image, Kernel};
use rayon::prelude::*;

/// 计算图像与卷积核的卷积，返回RGBA缓冲区
pub fn convolve(image: &Image, kernel: &Kernel, gray: bool) -> Vec<u8> {
    if kernel.size() == [3, 3] {
        return convolve_3x3(image, kernel, gray);
    }
    if kernel.is_odd_squared() {
        return convolve_odd_square(image, kernel, gray);
    }
    convolve_non_odd_square(image, kernel, gray)
}

fn source(image: &Image, gray: bool) -> &[u8] {
    if gray { image.gray() } else { image.data() }
}

/// 逐行并行地填充输出；`pixel(i, j)`返回该像素的`[R, G, B, A]`
fn render<F>(image: &Image, pixel: F) -> Vec<u8>
where
    F: Fn(usize, usize) -> [u8; 4] + Sync,
{
    let (width, height) = (image.width(), image.height());
    let mut out = vec![0u8; width * height * 4];
    if width == 0 || height == 0 {
        return out;
    }
    out.par_chunks_mut(width * 4)
        .enumerate()
        .for_each(|(i, row)| {
            for (j, target) in row.chunks_exact_mut(4).enumerate() {
                target.copy_from_slice(&pixel(i, j));
            }
        });
    out
}

/// 3x3卷积核的快速路径
///
/// 彩色时各通道的和先向0取整再截断到0~255；灰度时四舍五入。
fn convolve_3x3(image: &Image, kernel: &Kernel, gray: bool) -> Vec<u8> {
    let flipped = kernel.flipped();
    let cells = flipped.data();
    let [c00, c01, c02] = [cells[[0, 0]], cells[[0, 1]], cells[[0, 2]]];
    let [c10, c11, c12] = [cells[[1, 0]], cells[[1, 1]], cells[[1, 2]]];
    let [c20, c21, c22] = [cells[[2, 0]], cells[[2, 1]], cells[[2, 2]]];

    let src = source(image, gray);
    let last_row = image.height().saturating_sub(1);
    let last_col = image.width().saturating_sub(1);
    let at = |i: usize, j: usize| image.index(i, j);

    render(image, |i, j| {
        let (up, down) = (i.saturating_sub(1), (i + 1).min(last_row));
        let (left, right) = (j.saturating_sub(1), (j + 1).min(last_col));
        let p00 = at(up, left);
        let p01 = at(up, j);
        let p02 = at(up, right);
        let p10 = at(i, left);
        let p11 = at(i, j);
        let p12 = at(i, right);
        let p20 = at(down, left);
        let p21 = at(down, j);
        let p22 = at(down, right);

        let channel = |c: usize| {
            src[p00 + c] as f64 * c00
                + src[p01 + c] as f64 * c01
                + src[p02 + c] as f64 * c02
                + src[p10 + c] as f64 * c10
                + src[p11 + c] as f64 * c11
                + src[p12 + c] as f64 * c12
                + src[p20 + c] as f64 * c20
                + src[p21 + c] as f64 * c21
                + src[p22 + c] as f64 * c22
        };

        let alpha = src[p11 + 3];
        if gray {
            let value = to_channel(channel(0));
            [value, value, value, alpha]
        } else {
            [
                to_channel(channel(0).trunc()),
                to_channel(channel(1).trunc()),
                to_channel(channel(2).trunc()),
                alpha,
            ]
        }
    })
}

/// 对窗口内每个落在图像里的像素累加`[R, G, B]`，`cell(k, h)`给出对应系数
fn accumulate(
    image: &Image,
    src: &[u8],
    kernel_size: [usize; 2],
    origin: (isize, isize),
    cell: impl Fn(usize, usize) -> f64,
) -> [f64; 3] {
    let (height, width) = (image.height() as isize, image.width() as isize);
    let mut rgb = [0.0; 3];
    for k in 0..kernel_size[0] {
        let x = origin.0 + k as isize;
        if x < 0 || x >= height {
            continue;
        }
        for h in 0..kernel_size[1] {
            let y = origin.1 + h as isize;
            if y < 0 || y >= width {
                continue;
            }
            let at = image.index(x as usize, y as usize);
            let weight = cell(k, h);
            for (c, sum) in rgb.iter_mut().enumerate() {
                *sum += src[at + c] as f64 * weight;
            }
        }
    }
    rgb
}

/// 奇数方阵卷积核：以核中心对齐，核旋转180°（真正的卷积）
pub fn convolve_odd_square(image: &Image, kernel: &Kernel, gray: bool) -> Vec<u8> {
    let flipped = kernel.flipped();
    let cells = flipped.data();
    let size = flipped.size();
    let half = (size[0] / 2) as isize;
    let src = source(image, gray);

    render(image, |i, j| {
        let origin = (i as isize - half, j as isize - half);
        let [r, g, b] = accumulate(image, src, size, origin, |k, h| cells[[k, h]]);
        let alpha = src[image.index(i, j) + 3];
        [to_channel(r), to_channel(g), to_channel(b), alpha]
    })
}

/// 非奇数方阵卷积核：以核左上角对齐，核不旋转（相关）
pub fn convolve_non_odd_square(image: &Image, kernel: &Kernel, gray: bool) -> Vec<u8> {
    let cells = kernel.data();
    let size = kernel.size();
    let src = source(image, gray);

    render(image, |i, j| {
        let origin = (i as isize, j as isize);
        let [r, g, b] = accumulate(image, src, size, origin, |k, h| cells[[k, h]]);
        let alpha = src[image.index(i, j) + 3];
        [to_channel(r), to_channel(g), to_channel(b), alpha]
    })
}
