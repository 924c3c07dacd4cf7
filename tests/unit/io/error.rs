//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use quadmatch::GameError;
    use quadmatch::algorithm::turn::Phase;
    use quadmatch::io::error::{invalid_parameter, invariant_violation};
    use quadmatch::spatial::shapes::Shape;
    use std::error::Error;

    // Tests I/O failures keep their source
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let error = GameError::from(io_error);

        assert!(matches!(error, GameError::Output { .. }));
        assert!(error.source().is_some());
        assert!(error.to_string().contains("closed"));
    }

    // Tests errors without an underlying cause report no source
    // Verified by returning self as the source
    #[test]
    fn test_no_source() {
        let error = GameError::OccupiedCell { x: 1, y: 2 };
        assert!(error.source().is_none());
    }

    // Tests OccupiedCell formatting includes the coordinates
    // Verified by omitting the row from the message
    #[test]
    fn test_occupied_cell_message() {
        let message = GameError::OccupiedCell { x: 3, y: 7 }.to_string();
        assert!(message.contains("(3, 7)"));
    }

    // Tests vocabulary errors name the rejected text
    // Verified by dropping the name from the message
    #[test]
    fn test_vocabulary_messages() {
        let shape = GameError::InvalidShape {
            name: "Blob".into(),
        };
        assert!(shape.to_string().contains("Blob"));

        let color = GameError::InvalidColor {
            name: "teal".into(),
        };
        assert!(color.to_string().contains("teal"));

        let layout = GameError::LayoutMismatch {
            shape: Shape::MixedShape,
            reason: "slot c1 is both red and blue".into(),
        };
        let message = layout.to_string();
        assert!(message.contains("MixedShape"));
        assert!(message.contains("slot c1"));
    }

    // Tests helper constructors fill every field
    // Verified by swapping value and reason
    #[test]
    fn test_helpers() {
        let error = invalid_parameter("width", &0, &"must be positive");
        match &error {
            GameError::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                assert_eq!(*parameter, "width");
                assert_eq!(value, "0");
                assert_eq!(reason, "must be positive");
            }
            _ => unreachable!("helper builds InvalidParameter"),
        }
        assert!(error.to_string().contains("'width' = '0'"));

        let error = invariant_violation("collapse", &"no survivors");
        assert!(error.to_string().contains("collapse"));
        assert!(error.to_string().contains("no survivors"));
    }

    // Tests TurnInProgress names the blocking phase
    // Verified by printing the phase in debug form
    #[test]
    fn test_turn_in_progress_message() {
        let error = GameError::TurnInProgress {
            phase: Phase::Dropping,
        };
        assert!(error.to_string().contains("dropping"));
    }
}
