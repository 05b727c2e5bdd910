/*
 * @Description  : 卷积单元测试
 *
 * 测试策略：
 * 1. 3x3快速路径（恒等核、Sobel、截断与四舍五入、边缘像素）
 * 2. 奇数方阵（中心对齐、旋转180°、越界项不参与求和）
 * 3. 非奇数方阵（左上角对齐、不旋转）
 * 4. 灰度模式与按形状分派
 */

use super::{image_from_fn, patterned_image};
use crate::vision::{
    Image, Kernel, KernelSamples, convolve, convolve_non_odd_square, convolve_odd_square,
};
use ndarray::Array2;

fn kernel(rows: &[&[f64]]) -> Kernel {
    let rows: Vec<Vec<f64>> = rows.iter().map(|row| row.to_vec()).collect();
    Kernel::new(&rows, None).unwrap()
}

/// 某一通道按行排列的取值
fn channel(buffer: &[u8], c: usize) -> Vec<u8> {
    buffer.chunks_exact(4).map(|pixel| pixel[c]).collect()
}

// ==================== 3x3 ====================

#[test]
fn test_identity_3x3_keeps_image() {
    let image = patterned_image(6, 5);
    let identity = KernelSamples::from_name(KernelSamples::IDENTITY);
    assert_eq!(convolve(&image, &identity, false), image.data());
    assert_eq!(convolve(&image, &identity, true), image.gray());
}

#[test]
fn test_sobel_on_uniform_image_is_zero() {
    let image = image_from_fn(5, 5, |_, _| [90, 120, 30, 200]);
    for name in [
        KernelSamples::LEFT_SOBEL,
        KernelSamples::RIGHT_SOBEL,
        KernelSamples::TOP_SOBEL,
        KernelSamples::BOTTOM_SOBEL,
        KernelSamples::OUTLINE,
    ] {
        let out = convolve(&image, &KernelSamples::from_name(name), false);
        for pixel in out.chunks_exact(4) {
            assert_eq!(pixel, &[0, 0, 0, 200], "{name}");
        }
    }
}

#[test]
fn test_blur_on_uniform_image_keeps_value() {
    let image = image_from_fn(4, 4, |_, _| [10, 20, 30, 255]);
    let out = convolve(&image, &KernelSamples::from_name(KernelSamples::GAUSSIAN), false);
    assert_eq!(out, image.data());
}

#[test]
fn test_sobel_on_ramp() {
    // 红色通道从左到右为 0, 10, 20
    let image = image_from_fn(3, 2, |_, j| [(j * 10) as u8, 0, 0, 255]);

    // Left Sobel旋转后为Right Sobel：每行 (右 - 左) * (1 + 2 + 1)，边缘取最近像素
    let out = convolve(&image, &KernelSamples::from_name(KernelSamples::LEFT_SOBEL), false);
    assert_eq!(channel(&out, 0), vec![40, 80, 40, 40, 80, 40]);

    // 方向相反时结果为负，截断为0
    let out = convolve(&image, &KernelSamples::from_name(KernelSamples::RIGHT_SOBEL), false);
    assert_eq!(channel(&out, 0), vec![0; 6]);
}

#[test]
fn test_3x3_is_true_convolution() {
    // 核只有左上角为1，旋转后只取右下邻居
    let image = patterned_image(4, 4);
    let k = kernel(&[&[1., 0., 0.], &[0., 0., 0.], &[0., 0., 0.]]);
    let out = convolve(&image, &k, false);
    let expected = image.pixel(2, 3).unwrap();
    assert_eq!(&out[image.index(1, 2)..image.index(1, 2) + 3], &expected[..3]);
    // alpha取中心像素
    assert_eq!(out[image.index(1, 2) + 3], image.pixel(1, 2).unwrap()[3]);
}

#[test]
fn test_3x3_truncates_color_and_rounds_gray() {
    let image = image_from_fn(3, 3, |_, _| [5, 5, 5, 255]);
    let k = kernel(&[&[0., 0., 0.], &[0., 0.75, 0.], &[0., 0., 0.]]);

    // 5 * 0.75 = 3.75
    let out = convolve(&image, &k, false);
    assert_eq!(&out[..4], &[3, 3, 3, 255]);
    let out = convolve(&image, &k, true);
    assert_eq!(&out[..4], &[4, 4, 4, 255]);
}

#[test]
fn test_3x3_clamps_to_channel_range() {
    let image = image_from_fn(3, 3, |i, j| if (i, j) == (1, 1) { [200, 10, 0, 255] } else { [0, 0, 0, 255] });
    let out = convolve(&image, &KernelSamples::from_name(KernelSamples::SHARPEN), false);
    // 中心：200 * 5 = 1000 → 255；10 * 5 = 50
    assert_eq!(&out[image.index(1, 1)..image.index(1, 1) + 4], &[255, 50, 0, 255]);
    // 邻居：-200 → 0
    assert_eq!(&out[image.index(0, 1)..image.index(0, 1) + 4], &[0, 0, 0, 255]);
}

// ==================== 奇数方阵 ====================

#[test]
fn test_odd_square_identity() {
    let image = patterned_image(6, 5);
    let mut data = Array2::zeros((5, 5));
    data[[2, 2]] = 1.0;
    let identity = Kernel::from_array(data, Some("identity 5x5")).unwrap();
    assert_eq!(convolve(&image, &identity, false), image.data());
    assert_eq!(convolve_odd_square(&image, &identity, true), image.gray());
}

#[test]
fn test_odd_square_skips_pixels_outside_image() {
    let image = image_from_fn(5, 5, |_, _| [1, 2, 0, 255]);
    let ones = Kernel::from_array(Array2::ones((5, 5)), None).unwrap();
    let out = convolve_odd_square(&image, &ones, false);

    let red = channel(&out, 0);
    assert_eq!(red[0], 9); // 角：3x3个像素在图内
    assert_eq!(red[2], 15); // 上边中点：3x5
    assert_eq!(red[12], 25); // 中心
    let green = channel(&out, 1);
    assert_eq!(green[12], 50);
    assert!(channel(&out, 3).iter().all(|&a| a == 255));
}

#[test]
fn test_odd_square_is_true_convolution() {
    let image = patterned_image(6, 5);
    let mut data = Array2::zeros((5, 5));
    data[[0, 0]] = 1.0;
    let k = Kernel::from_array(data, None).unwrap();
    let out = convolve(&image, &k, false);

    // 旋转后取 (i + 2, j + 2)
    let expected = image.pixel(2, 3).unwrap();
    let at = image.index(0, 1);
    assert_eq!(&out[at..at + 3], &expected[..3]);
    // alpha取像素本身
    assert_eq!(out[at + 3], image.pixel(0, 1).unwrap()[3]);
    // 右下角没有 (i + 2, j + 2)
    let at = image.index(4, 5);
    assert_eq!(&out[at..at + 3], &[0, 0, 0]);
}

// ==================== 非奇数方阵 ====================

#[test]
fn test_non_odd_square_anchors_top_left() {
    let image = patterned_image(5, 4);
    let k = kernel(&[&[0., 0.], &[0., 1.]]);
    let out = convolve(&image, &k, false);
    assert_eq!(out, convolve_non_odd_square(&image, &k, false));

    // 不旋转：取 (i + 1, j + 1)
    let at = image.index(1, 2);
    assert_eq!(&out[at..at + 3], &image.pixel(2, 3).unwrap()[..3]);
    assert_eq!(out[at + 3], image.pixel(1, 2).unwrap()[3]);
    // 最后一行没有下一行
    let at = image.index(3, 0);
    assert_eq!(&out[at..at + 3], &[0, 0, 0]);
}

#[test]
fn test_non_square_kernel_uses_rows_and_cols() {
    let image = image_from_fn(3, 3, |i, j| [(i * 3 + j) as u8, 0, 0, 255]);

    // 1行2列：本像素 + 右边像素
    let row_kernel = kernel(&[&[1., 1.]]);
    let red = channel(&convolve(&image, &row_kernel, false), 0);
    assert_eq!(red, vec![1, 3, 2, 7, 9, 5, 13, 15, 8]);

    // 2行1列：本像素 + 2 * 下边像素
    let col_kernel = kernel(&[&[1.], &[2.]]);
    let red = channel(&convolve(&image, &col_kernel, false), 0);
    assert_eq!(red, vec![6, 9, 12, 15, 18, 21, 6, 7, 8]);
}

#[test]
fn test_gray_mode_on_general_paths() {
    let image = patterned_image(5, 4);
    let k = kernel(&[&[0.5, 0.5]]);
    let out = convolve(&image, &k, true);
    for pixel in out.chunks_exact(4) {
        assert_eq!(pixel[0], pixel[1]);
        assert_eq!(pixel[1], pixel[2]);
    }
    assert_eq!(channel(&out, 3), channel(image.data(), 3));
}

#[test]
fn test_image_convolve_builds_new_image() {
    let image = patterned_image(4, 3);
    let out = image.convolve(&KernelSamples::from_name(KernelSamples::IDENTITY), false);
    assert_eq!(out, image);

    let empty = Image::new(vec![], 0, 0).unwrap();
    assert!(convolve(&empty, &KernelSamples::from_name(KernelSamples::SHARPEN), false).is_empty());
}
