//! Seeded construction of randomly colored tiles

use crate::io::configuration::MAX_SLOTS;
use crate::io::error::Result;
use crate::spatial::shapes::{ColorName, PALETTE, Shape};
use crate::spatial::tile::Tile;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Tile factory with a deterministic color source
///
/// Colors for a new tile are drawn without replacement from the palette, so the
/// slots a shape requires to differ can never collide.
pub struct TileFactory {
    rng: StdRng,
}

impl TileFactory {
    /// Create a factory seeded for reproducible tiles
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Build a randomly colored tile of the given shape
    ///
    /// `c1` and `c2` are always distinct. `c3` is a fresh color for the
    /// three- and four-slot shapes and repeats `c1` otherwise; `c4` is fresh
    /// only for `Square2x2` and repeats `c3` otherwise.
    pub fn create_tile(&mut self, shape: Shape) -> Tile {
        let mut used = Vec::with_capacity(MAX_SLOTS);

        let color1 = self.draw_color(&used);
        used.push(color1);
        let color2 = self.draw_color(&used);
        used.push(color2);

        let color3 = if shape.required_distinct_colors() >= 3 {
            let color = self.draw_color(&used);
            used.push(color);
            color
        } else {
            color1
        };

        let color4 = if shape.required_distinct_colors() >= MAX_SLOTS {
            self.draw_color(&used)
        } else {
            color3
        };

        Tile::new(shape, [color1, color2, color3, color4])
    }

    /// Build a randomly colored tile from a shape name
    ///
    /// # Errors
    ///
    /// Returns `InvalidShape` if the name is not in the shape vocabulary
    pub fn create_named(&mut self, name: &str) -> Result<Tile> {
        let shape = name.parse::<Shape>()?;
        Ok(self.create_tile(shape))
    }

    /// Build a tile whose shape is drawn uniformly from all eight shapes
    pub fn random_tile(&mut self) -> Tile {
        let index = self.rng.random_range(0..Shape::ALL.len());
        let shape = Shape::ALL.get(index).copied().unwrap_or(Shape::Single);
        self.create_tile(shape)
    }

    fn draw_color(&mut self, exclude: &[ColorName]) -> ColorName {
        let available: Vec<ColorName> = PALETTE
            .iter()
            .copied()
            .filter(|color| !exclude.contains(color))
            .collect();
        let index = self.rng.random_range(0..available.len().max(1));
        available.get(index).copied().unwrap_or(ColorName::Red)
    }
}
