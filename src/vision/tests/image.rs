use super::{image_from_fn, patterned_image};
use crate::assert_err;
use crate::vision::{Image, Vision, VisionError};

#[test]
fn test_buffer_size_mismatch() {
    assert_err!(Image::new(vec![0; 15], 2, 2), VisionError::BufferSizeMismatch(16, 15));
    assert!(Image::new(vec![], 0, 0).is_ok());
}

#[test]
fn test_oversized_dimensions() {
    for (width, height) in [(usize::MAX, 2), (usize::MAX / 2, 3), (1 << 40, 1 << 40)] {
        assert_err!(
            Image::new(vec![0; 4], width, height),
            VisionError::BufferSizeMismatch { expected, got } if *expected == usize::MAX && *got == 4
        );
    }
}

#[test]
fn test_derived_buffers() {
    let image = Image::new(vec![100, 150, 200, 77, 0, 0, 0, 255], 2, 1).unwrap();
    // 0.2126 * 100 + 0.7152 * 150 + 0.0722 * 200 = 142.98
    assert_eq!(&image.gray()[..4], &[143, 143, 143, 77]);
    assert_eq!(&image.red()[..4], &[100, 0, 0, 77]);
    assert_eq!(&image.green()[..4], &[0, 150, 0, 77]);
    assert_eq!(&image.blue()[..4], &[0, 0, 200, 77]);
    assert_eq!(&image.alpha()[..4], &[0, 0, 0, 77]);
    assert_eq!(&image.gray()[4..], &[0, 0, 0, 255]);

    for buffer in [image.gray(), image.red(), image.green(), image.blue(), image.alpha()] {
        assert_eq!(buffer.len(), image.data().len());
    }
}

#[test]
fn test_gray_of_white_is_white() {
    let image = image_from_fn(3, 2, |_, _| [255, 255, 255, 255]);
    assert!(image.gray().iter().all(|&v| v == 255));
}

#[test]
fn test_pixel_and_index() {
    let image = patterned_image(4, 3);
    assert_eq!(image.width(), 4);
    assert_eq!(image.height(), 3);
    assert_eq!(image.index(2, 1), 2 * 4 * 4 + 4);
    assert_eq!(image.pixel(2, 1), Some([87, 169, 21, 252]));
    assert_eq!(image.pixel(3, 0), None);
    assert_eq!(image.pixel(0, 4), None);
}

#[test]
fn test_rgba_image_conversion() {
    let image = patterned_image(5, 4);
    let rgba = image.to_rgba_image().unwrap();
    assert_eq!(rgba.dimensions(), (5, 4));
    assert_eq!(rgba.get_pixel(1, 2).0, image.pixel(2, 1).unwrap());
    assert_eq!(Image::from_rgba_image(&rgba), image);

    let dynamic = ::image::DynamicImage::ImageRgba8(rgba);
    assert_eq!(Image::from_dynamic_image(&dynamic), image);
}

#[test]
fn test_save_and_load_image() {
    let image = patterned_image(6, 5);
    let path = std::env::temp_dir().join("neural_playground_test_save_and_load_image.png");
    Vision::save_image(&image, &path).unwrap();
    let loaded = Vision::load_image(&path).unwrap();
    assert_eq!(loaded, image);
    std::fs::remove_file(&path).unwrap();

    assert_err!(
        Vision::load_image(std::env::temp_dir().join("neural_playground_missing.png")),
        VisionError::Image(_)
    );
}
