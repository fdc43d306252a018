use std::fmt;

use rand::distributions::Uniform;
use rand::prelude::Distribution;
use rand::Rng;

// the wheel is a 3-bit rgb mask with off (0) and white (7) left out
pub const WHEEL_MIN: u8 = 1;
pub const WHEEL_MAX: u8 = 6;

/// A single-byte color value as exchanged with the server.
///
/// Every byte off the wire is a valid `Color`; only the wheel subset
/// [`WHEEL_MIN`, `WHEEL_MAX`] is ever written by update mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(u8);

impl Color {
    pub const RED: Color = Color(1);
    pub const GREEN: Color = Color(2);
    pub const YELLOW: Color = Color(3);
    pub const BLUE: Color = Color(4);
    pub const PURPLE: Color = Color(5);
    pub const TURQUOISE: Color = Color(6);

    pub fn from_byte(byte: u8) -> Self {
        Color(byte)
    }

    pub fn as_byte(self) -> u8 {
        self.0
    }

    pub fn is_wheel_color(self) -> bool {
        (WHEEL_MIN..=WHEEL_MAX).contains(&self.0)
    }

    /// Picks a wheel color uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Color(Uniform::new_inclusive(WHEEL_MIN, WHEEL_MAX).sample(rng))
    }

    pub fn name(self) -> Option<&'static str> {
        match self.0 {
            1 => Some("red"),
            2 => Some("green"),
            3 => Some("yellow"),
            4 => Some("blue"),
            5 => Some("purple"),
            6 => Some("turquoise"),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn wheel_colors_are_named() {
        assert_eq!(Color::RED.name(), Some("red"));
        assert_eq!(Color::TURQUOISE.name(), Some("turquoise"));
        assert_eq!(Color::from_byte(0).name(), None);
        assert_eq!(Color::from_byte(7).name(), None);
        assert_eq!(Color::from_byte(255).name(), None);
    }

    #[test]
    fn display_is_the_raw_byte() {
        assert_eq!(Color::YELLOW.to_string(), "3");
        assert_eq!(Color::from_byte(200).to_string(), "200");
    }

    #[test]
    fn random_covers_the_whole_wheel() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut counts = [0usize; 7];
        for _ in 0..6000 {
            let color = Color::random(&mut rng);
            assert!(color.is_wheel_color());
            counts[color.as_byte() as usize] += 1;
        }
        // every wheel color shows up; a uniform draw over 6 values
        // essentially never misses one in 6000 samples
        for byte in WHEEL_MIN..=WHEEL_MAX {
            assert!(counts[byte as usize] > 0, "never drew {}", byte);
        }
    }
}
