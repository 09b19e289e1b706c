use rand::Rng;

use crate::color::Color;

/// Number of colors in a palette, and of display slots.
pub const PALETTE_SIZE: usize = 5;

/// An ordered set of colors; index `i` is shown in slot `i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette([Color; PALETTE_SIZE]);

impl Palette {
    pub fn from_colors(colors: [Color; PALETTE_SIZE]) -> Self {
        Self(colors)
    }

    pub fn colors(&self) -> &[Color; PALETTE_SIZE] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.0.iter()
    }
}

/// Source of fresh palettes.
pub trait PaletteGenerator {
    fn generate(&mut self) -> Palette;
}

/// Uniform random palettes from the thread-local RNG.
#[derive(Default)]
pub struct RandomGenerator;

impl PaletteGenerator for RandomGenerator {
    fn generate(&mut self) -> Palette {
        generate()
    }
}

pub fn generate() -> Palette {
    generate_with(&mut rand::rng())
}

/// Duplicates within a palette are allowed and left as drawn.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Palette {
    Palette::from_colors(std::array::from_fn(|_| Color::random(rng)))
}
