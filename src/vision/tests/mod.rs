mod convolve;
mod image;

use crate::vision::Image;

/// 按`pixel(i, j)`生成`width x height`的图像
fn image_from_fn(width: usize, height: usize, pixel: impl Fn(usize, usize) -> [u8; 4]) -> Image {
    let mut data = Vec::with_capacity(width * height * 4);
    for i in 0..height {
        for j in 0..width {
            data.extend_from_slice(&pixel(i, j));
        }
    }
    Image::new(data, width, height).unwrap()
}

/// 每个像素取值各不相同的彩色图像
fn patterned_image(width: usize, height: usize) -> Image {
    image_from_fn(width, height, |i, j| {
        [
            (i * 40 + j * 7) as u8,
            (200 - i * 13 - j * 5) as u8,
            (i * j * 9 + 3) as u8,
            (255 - i - j) as u8,
        ]
    })
}
