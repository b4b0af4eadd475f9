use image::RgbImage;

/// A 16bit pixel that has 5 red bits, 6 green bits and  5 blue bits
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Rgb565Pixel(pub u16);

#[cfg(test)]
impl Rgb565Pixel {
    const R_MASK: u16 = 0b1111_1000_0000_0000;
    const G_MASK: u16 = 0b0000_0111_1110_0000;
    const B_MASK: u16 = 0b0000_0000_0001_1111;

    /// Return the red component as a u8.
    ///
    /// The bits are shifted so that the result is between 0 and 255
    fn red(self) -> u8 {
        ((self.0 & Self::R_MASK) >> 8) as u8
    }
    /// Return the green component as a u8.
    ///
    /// The bits are shifted so that the result is between 0 and 255
    fn green(self) -> u8 {
        ((self.0 & Self::G_MASK) >> 3) as u8
    }
    /// Return the blue component as a u8.
    ///
    /// The bits are shifted so that the result is between 0 and 255
    fn blue(self) -> u8 {
        ((self.0 & Self::B_MASK) << 3) as u8
    }
}

impl Rgb565Pixel {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u16 & 0b11111000) << 8) | ((g as u16 & 0b11111100) << 3) | (b as u16 >> 3))
    }

    /// Exchange the high and low byte.
    ///
    /// The display controller reads the array as bytes, high byte first,
    /// while the MCU stores `uint16_t` little endian.
    pub fn swap_bytes(self) -> Self {
        Self(((self.0 & 0xFF) << 8) | ((self.0 >> 8) & 0xFF))
    }
}

/// Pack every pixel of `img` in row-major order and swap its bytes.
pub fn rgb888_to_rgb565_swapped(img: &RgbImage) -> Vec<u16> {
    let mut rgb565 = Vec::with_capacity(img.width() as usize * img.height() as usize);
    for p in img.pixels() {
        let rgb565_pixel = Rgb565Pixel::from_rgb(p[0], p[1], p[2]);
        rgb565.push(rgb565_pixel.swap_bytes().0);
    }
    rgb565
}

/// Inverse of [`rgb888_to_rgb565_swapped`], the dropped low bits come back as zero.
#[cfg(test)]
pub fn rgb565_swapped_to_rgb(rgb565: &[u16], width: u32, height: u32) -> RgbImage {
    let mut rgb = RgbImage::new(width, height);
    for (p, v) in rgb.pixels_mut().zip(rgb565) {
        let rgb565_pixel = Rgb565Pixel(*v).swap_bytes();
        p[0] = rgb565_pixel.red();
        p[1] = rgb565_pixel.green();
        p[2] = rgb565_pixel.blue();
    }
    rgb
}
