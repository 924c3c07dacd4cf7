//! Tests for level bootstrap structures

#[cfg(test)]
mod tests {
    use quadmatch::GameError;
    use quadmatch::game::level::{LevelData, NextTileSpec, TileSpec};
    use quadmatch::spatial::factory::TileFactory;
    use quadmatch::spatial::shapes::{ColorName, Shape};

    // Tests textual tile specs are parsed into shape and colors
    // Verified by parsing shape names case-sensitively
    #[test]
    fn test_tile_spec_parse() {
        let spec = TileSpec::parse(2, 3, "lshape", ["red", "red", "Blue", "GREEN"])
            .expect("valid names");
        assert_eq!((spec.x, spec.y), (2, 3));
        assert_eq!(spec.shape, Shape::LShape);

        let tile = spec.to_tile().expect("colors follow the layout");
        assert_eq!(
            tile.cells(),
            &[
                [ColorName::Red, ColorName::Red],
                [ColorName::Blue, ColorName::Green]
            ]
        );
    }

    // Tests unknown names are reported with the offending text
    // Verified by substituting a default color for unknown names
    #[test]
    fn test_tile_spec_parse_errors() {
        assert!(matches!(
            TileSpec::parse(0, 0, "Single", ["red", "red", "pink", "red"]),
            Err(GameError::InvalidColor { ref name }) if name == "pink"
        ));
        assert!(matches!(
            NextTileSpec::parse("Circle", ["red", "red", "red", "red"]),
            Err(GameError::InvalidShape { .. })
        ));
    }

    // Tests colors that break the shape are rejected when materialized
    // Verified by building tiles without validating the layout
    #[test]
    fn test_to_tile_layout_mismatch() {
        let spec = NextTileSpec::parse("TwoHorizontal", ["red", "blue", "red", "blue"])
            .expect("valid names");
        assert!(matches!(
            spec.to_tile(),
            Err(GameError::LayoutMismatch {
                shape: Shape::TwoHorizontal,
                ..
            })
        ));
    }

    // Tests a next-tile spec describes an existing tile faithfully
    // Verified by reading cells column-major
    #[test]
    fn test_next_tile_from_tile() {
        let mut factory = TileFactory::new(4);
        let tile = factory.create_tile(Shape::MixedShapeMirrored);
        let spec = NextTileSpec::from_tile(&tile);
        assert_eq!(spec.shape, Shape::MixedShapeMirrored);
        assert_eq!(spec.to_tile().ok(), Some(tile));
    }

    // Tests generated levels fill the bottom rows only
    // Verified by filling rows from the top of the board
    #[test]
    fn test_generated_prefill() {
        let mut factory = TileFactory::new(8);
        let level = LevelData::generated(4, 5, 12, 2, &mut factory);
        assert_eq!((level.width, level.height, level.goal_count), (4, 5, 12));
        assert_eq!(level.starting_tiles.len(), 8);
        assert!(level.starting_tiles.iter().all(|spec| spec.y >= 3));
        assert!(level.starting_tiles.iter().all(|spec| spec.to_tile().is_ok()));
        assert!(level.next_tile.to_tile().is_ok());
    }

    // Tests generation is reproducible and clamps oversized prefills
    // Verified by drawing the next tile before the prefill
    #[test]
    fn test_generated_deterministic() {
        let first = LevelData::generated(3, 2, 5, 9, &mut TileFactory::new(21));
        let second = LevelData::generated(3, 2, 5, 9, &mut TileFactory::new(21));
        assert_eq!(first, second);
        assert_eq!(first.starting_tiles.len(), 6);

        let empty = LevelData::generated(3, 2, 5, 0, &mut TileFactory::new(21));
        assert!(empty.starting_tiles.is_empty());
    }
}
