use std::path::Path;

use image::{ImageError, ImageReader, RgbImage};

use crate::error::Image2cError;

/// Open any image the `image` crate can decode and convert it to 8 bit RGB.
///
/// Alpha is dropped, grayscale and palette images are expanded.
pub fn load_rgb_image(path: &Path) -> Result<RgbImage, Image2cError> {
    let decode_err = |source: ImageError| Image2cError::Decode {
        path: path.to_path_buf(),
        source,
    };
    // 按内容识别格式,不只看扩展名
    let img = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|err| decode_err(ImageError::IoError(err)))?
        .decode()
        .map_err(decode_err)?;
    Ok(img.into_rgb8())
}
