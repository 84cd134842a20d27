use crate::error::ConvertError;

/// Target resolution of the framebuffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSpec {
    pub width: u32,
    pub height: u32,
}

impl FrameSpec {
    /// Standard VGA: 640x480
    pub const VGA: Self = Self {
        width: 640,
        height: 480,
    };

    /// Custom frame size; both dimensions must be non-zero
    pub fn new(width: u32, height: u32) -> Result<Self, ConvertError> {
        if width == 0 || height == 0 {
            return Err(ConvertError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check that a grid has exactly this frame's dimensions
    pub fn validate_grid(&self, width: usize, height: usize) -> Result<(), ConvertError> {
        if width == self.width as usize && height == self.height as usize {
            Ok(())
        } else {
            Err(ConvertError::DimensionMismatch {
                expected_width: self.width as usize,
                expected_height: self.height as usize,
                actual_width: width,
                actual_height: height,
            })
        }
    }
}

impl Default for FrameSpec {
    fn default() -> Self {
        Self::VGA
    }
}
