//! Procedural textures, generated at compile time.

/// Checkerboard edge length in texels.
pub const CHECKER_SIZE: usize = 32;
/// Stripe texture length in texels.
pub const STRIPE_WIDTH: usize = 32;

const WHITE: [u8; 4] = [255, 255, 255, 255];
const GREEN: [u8; 4] = [0, 150, 0, 255];
const RED: [u8; 4] = [255, 0, 0, 255];
const YELLOW: [u8; 4] = [255, 255, 0, 255];

/// 2D texture metadata plus RGBA8 texels (row-major).
pub struct Texture {
    pub width: u16,
    pub height: u16,
    pub data: &'static [[u8; 4]],
}

impl Texture {
    /// Texel at `(s, t)` with repeat wrapping.
    pub fn texel(&self, s: i32, t: i32) -> [u8; 4] {
        let x = s.rem_euclid(self.width as i32) as usize;
        let y = t.rem_euclid(self.height as i32) as usize;
        self.data[y * self.width as usize + x]
    }
}

/// 32x32 checkerboard of 8x8 blocks, white and green.
pub const CHECKERBOARD: Texture = Texture {
    width: CHECKER_SIZE as u16,
    height: CHECKER_SIZE as u16,
    data: &CHECKERBOARD_DATA,
};

/// 1D stripe: a short red band, yellow elsewhere.
pub const STRIPE: Texture = Texture {
    width: STRIPE_WIDTH as u16,
    height: 1,
    data: &STRIPE_DATA,
};

/// Identifies a texture for hosts that upload by id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureId {
    Checkerboard,
    Stripe,
}

impl TextureId {
    pub fn texture(self) -> &'static Texture {
        match self {
            TextureId::Checkerboard => &CHECKERBOARD,
            TextureId::Stripe => &STRIPE,
        }
    }
}

const CHECKERBOARD_DATA: [[u8; 4]; CHECKER_SIZE * CHECKER_SIZE] = {
    let mut data = [[0u8; 4]; CHECKER_SIZE * CHECKER_SIZE];
    let mut i = 0usize;
    while i < CHECKER_SIZE {
        let mut j = 0usize;
        while j < CHECKER_SIZE {
            let white = ((i & 0x8) == 0) ^ ((j & 0x8) == 0);
            data[i * CHECKER_SIZE + j] = if white { WHITE } else { GREEN };
            j += 1;
        }
        i += 1;
    }
    data
};

const STRIPE_DATA: [[u8; 4]; STRIPE_WIDTH] = {
    let mut data = [[0u8; 4]; STRIPE_WIDTH];
    let mut j = 0usize;
    while j < STRIPE_WIDTH {
        data[j] = if j > 4 { YELLOW } else { RED };
        j += 1;
    }
    data
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkerboard_blocks_alternate() {
        assert_eq!(CHECKERBOARD.texel(0, 0), GREEN);
        assert_eq!(CHECKERBOARD.texel(8, 0), WHITE);
        assert_eq!(CHECKERBOARD.texel(8, 8), GREEN);
        assert_eq!(CHECKERBOARD.texel(0, 8), WHITE);
    }

    #[test]
    fn checkerboard_wraps() {
        assert_eq!(CHECKERBOARD.texel(-1, 0), CHECKERBOARD.texel(31, 0));
        assert_eq!(CHECKERBOARD.texel(40, 3), CHECKERBOARD.texel(8, 3));
    }

    #[test]
    fn stripe_band_is_red() {
        for j in 0..=4 {
            assert_eq!(STRIPE.texel(j, 0), RED);
        }
        assert_eq!(STRIPE.texel(5, 0), YELLOW);
        assert_eq!(STRIPE.texel(31, 0), YELLOW);
    }
}
