// Simple color struct, created from an unsigned 32 representing RRGGBBAA

use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // Random opaque color, the alpha channel is always 0xff
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Color {
        Color {
            r: rng.gen::<u8>(),
            g: rng.gen::<u8>(),
            b: rng.gen::<u8>(),
            a: 0xff,
        }
    }

    // Canvas style string, alpha is ignored since every circle is opaque
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
