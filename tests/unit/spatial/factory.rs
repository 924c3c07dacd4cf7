//! Tests for seeded tile construction

#[cfg(test)]
mod tests {
    use quadmatch::GameError;
    use quadmatch::spatial::factory::TileFactory;
    use quadmatch::spatial::shapes::{ColorName, Shape};
    use quadmatch::spatial::tile::Tile;
    use std::collections::HashSet;

    fn distinct_colors(tile: &Tile) -> usize {
        tile.cells()
            .iter()
            .flatten()
            .copied()
            .collect::<HashSet<ColorName>>()
            .len()
    }

    // Tests Square2x2 always carries four different colors
    // Verified by drawing c4 with replacement
    #[test]
    fn test_square_has_four_distinct_colors() {
        let mut factory = TileFactory::new(7);
        for _ in 0..200 {
            let tile = factory.create_tile(Shape::Square2x2);
            assert_eq!(distinct_colors(&tile), 4);
        }
    }

    // Tests each shape gets exactly as many colors as it has slots
    // Verified by reusing c1 for c3 in three-slot shapes
    #[test]
    fn test_distinct_colors_per_shape() {
        let mut factory = TileFactory::new(11);
        for shape in Shape::ALL {
            for _ in 0..25 {
                let tile = factory.create_tile(shape);
                assert_eq!(distinct_colors(&tile), shape.slot_count(), "{shape}");
            }
        }
    }

    // Tests factory output always follows the canonical layout
    // Verified by writing c2 into the LShape bar
    #[test]
    fn test_tiles_follow_layout() {
        let mut factory = TileFactory::new(3);
        for shape in Shape::ALL {
            let tile = factory.create_tile(shape);
            assert!(shape.check_layout(tile.cells()).is_ok(), "{shape}");
        }
    }

    // Tests the same seed yields the same tiles
    // Verified by seeding from entropy
    #[test]
    fn test_deterministic() {
        let mut first = TileFactory::new(99);
        let mut second = TileFactory::new(99);
        for _ in 0..20 {
            assert_eq!(first.random_tile(), second.random_tile());
        }
    }

    // Tests random tiles cover every shape
    // Verified by sampling shapes from the first half of the list
    #[test]
    fn test_random_tile_covers_all_shapes() {
        let mut factory = TileFactory::new(5);
        let shapes: HashSet<String> = (0..400)
            .map(|_| factory.random_tile().shape().to_string())
            .collect();
        assert_eq!(shapes.len(), Shape::ALL.len());
    }

    // Tests shape names are parsed before building
    // Verified by defaulting unknown names to Single
    #[test]
    fn test_create_named() {
        let mut factory = TileFactory::new(1);
        let tile = factory
            .create_named("mixedshapemirrored")
            .expect("known shape name");
        assert_eq!(tile.shape(), Shape::MixedShapeMirrored);

        assert!(matches!(
            factory.create_named("Hexagon"),
            Err(GameError::InvalidShape { .. })
        ));
    }
}
