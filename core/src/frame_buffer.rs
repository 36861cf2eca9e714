use crate::constants::{DISPLAY_HEIGHT, DISPLAY_SIZE, DISPLAY_WIDTH, PIXEL_OFF, PIXEL_ON};

/// # Frame Buffer
/// The Chip-8 display is composed of 64x32 black/white pixels.
///
/// Pixels are stored row-major, one byte each, so the buffer can be handed straight to an image:
/// - a lit pixel is always `PIXEL_ON` (0xFF)
/// - a dark pixel is always `PIXEL_OFF` (0x00)
///
/// Every write goes through `clear` or `toggle`, so no other value can appear.
/// Coordinates wrap around the edges of the display.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: [u8; DISPLAY_SIZE],
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer {
            pixels: [PIXEL_OFF; DISPLAY_SIZE],
        }
    }

    pub fn clear(&mut self) {
        self.pixels = [PIXEL_OFF; DISPLAY_SIZE];
    }

    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.pixels[Self::index(x, y)] != PIXEL_OFF
    }

    /// Flips a pixel and reports whether it was lit beforehand (i.e. a collision)
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        let index = Self::index(x, y);
        let was_set = self.pixels[index] != PIXEL_OFF;
        self.pixels[index] = if was_set { PIXEL_OFF } else { PIXEL_ON };
        was_set
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// The 32 rows of the display, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.pixels.chunks(DISPLAY_WIDTH)
    }

    fn index(x: usize, y: usize) -> usize {
        (y % DISPLAY_HEIGHT) * DISPLAY_WIDTH + (x % DISPLAY_WIDTH)
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
