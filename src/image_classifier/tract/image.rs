use crate::image_classifier::models::model_config::Normalization;
use image::{imageops, DynamicImage, RgbImage};
use tract_onnx::prelude::*;

/// Fits the image inside `width` x `height` keeping its aspect ratio, centered
/// on a black canvas. Images that already have the target aspect are resized
/// directly.
pub fn resize_image(image: &DynamicImage, width: u32, height: u32) -> RgbImage {
    let (w, h) = (image.width().max(1), image.height().max(1));

    if u64::from(w) * u64::from(height) == u64::from(h) * u64::from(width) {
        return image
            .resize_exact(width, height, imageops::FilterType::Triangle)
            .to_rgb8();
    }

    let scale = (width as f32 / w as f32).min(height as f32 / h as f32);
    let new_w = ((w as f32 * scale) as u32).clamp(1, width);
    let new_h = ((h as f32 * scale) as u32).clamp(1, height);

    let scaled = image
        .resize_exact(new_w, new_h, imageops::FilterType::Triangle)
        .to_rgb8();

    let mut padded = RgbImage::new(width, height);
    let x_offset = (width - new_w) / 2;
    let y_offset = (height - new_h) / 2;
    imageops::overlay(&mut padded, &scaled, i64::from(x_offset), i64::from(y_offset));

    padded
}

/// NCHW `[1, 3, h, w]` tensor with `(pixel / 255 - mean) / std` per channel.
pub fn image_to_tensor(rgb: &RgbImage, normalization: &Normalization) -> Tensor {
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);

    tract_ndarray::Array4::from_shape_fn((1, 3, height, width), |(_, c, y, x)| {
        let pixel = rgb.get_pixel(x as u32, y as u32);
        (pixel[c] as f32 / 255.0 - normalization.mean[c]) / normalization.std[c]
    })
    .into_tensor()
}

pub fn resize_image_to_tensor(
    image: &DynamicImage,
    width: u32,
    height: u32,
    normalization: &Normalization,
) -> Tensor {
    let resized = resize_image(image, width, height);
    image_to_tensor(&resized, normalization)
}
