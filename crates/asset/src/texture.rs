//! Procedural checkerboard texture used for textured OBJ meshes.

/// Texture data in CPU-friendly format before GPU upload.
#[derive(Clone, Debug, PartialEq)]
pub struct TextureData {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
}

/// Supported texture formats.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TextureFormat {
    Rgba8,
}

/// Largest checkerboard side, in pixels.
pub const MAX_CHECKER_SIZE: u32 = 4096;

const LIGHT: [u8; 4] = [255, 255, 255, 255];
const DARK: [u8; 4] = [40, 40, 40, 255];

impl TextureData {
    /// Square RGBA8 checkerboard, `cell` pixels per square. Top-left is light.
    /// `size` is clamped to `1..=MAX_CHECKER_SIZE`.
    pub fn checkerboard(size: u32, cell: u32) -> Self {
        let size = size.clamp(1, MAX_CHECKER_SIZE);
        let cell = cell.max(1);
        let side = size as usize;
        let mut data = Vec::with_capacity(side * side * LIGHT.len());

        for y in 0..size {
            for x in 0..size {
                let texel = if ((x / cell) + (y / cell)) % 2 == 0 {
                    LIGHT
                } else {
                    DARK
                };
                data.extend_from_slice(&texel);
            }
        }

        Self {
            data,
            width: size,
            height: size,
            format: TextureFormat::Rgba8,
        }
    }

    /// Get the number of bytes per pixel for the format.
    pub fn bytes_per_pixel(&self) -> u32 {
        match self.format {
            TextureFormat::Rgba8 => 4,
        }
    }

    /// Check if the texture data is valid.
    pub fn is_valid(&self) -> bool {
        let expected_size = (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|n| n.checked_mul(self.bytes_per_pixel() as usize));
        expected_size == Some(self.data.len()) && self.width > 0 && self.height > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texel(tex: &TextureData, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= tex.width || y >= tex.height {
            return None;
        }
        let offset = (y as usize * tex.width as usize + x as usize) * 4;
        let bytes = tex.data.get(offset..offset + 4)?;
        Some([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    #[test]
    fn checkerboard_alternates_cells() {
        let tex = TextureData::checkerboard(64, 8);
        assert!(tex.is_valid());
        assert_eq!(texel(&tex, 0, 0), Some(LIGHT));
        assert_eq!(texel(&tex, 7, 7), Some(LIGHT));
        assert_eq!(texel(&tex, 8, 0), Some(DARK));
        assert_eq!(texel(&tex, 8, 8), Some(LIGHT));
        assert_eq!(texel(&tex, 64, 0), None);
    }

    #[test]
    fn zero_sizes_are_clamped() {
        let tex = TextureData::checkerboard(0, 0);
        assert_eq!((tex.width, tex.height), (1, 1));
        assert!(tex.is_valid());
    }

    #[test]
    fn oversized_request_is_capped() {
        let tex = TextureData::checkerboard(40_000, 8);
        assert_eq!((tex.width, tex.height), (MAX_CHECKER_SIZE, MAX_CHECKER_SIZE));
        assert!(tex.is_valid());
    }

    #[test]
    fn validity_does_not_overflow() {
        let tex = TextureData {
            data: Vec::new(),
            width: u32::MAX,
            height: u32::MAX,
            format: TextureFormat::Rgba8,
        };
        assert!(!tex.is_valid());
    }
}
