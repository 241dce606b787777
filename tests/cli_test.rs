#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::{self, Cursor, Write};

    use sea_battle::{
        parse_coordinate, BoardError, CliMoveSource, Coordinate, InputError, MoveSource,
        ShotOutcome,
    };

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("1 1"), Ok(Coordinate::new(0, 0)));
        assert_eq!(parse_coordinate("  3\t6 \n"), Ok(Coordinate::new(2, 5)));
        assert_eq!(parse_coordinate("7 7"), Ok(Coordinate::new(6, 6)));
    }

    #[test]
    fn test_parse_coordinate_errors() {
        assert_eq!(parse_coordinate(""), Err(InputError::WrongCount));
        assert_eq!(parse_coordinate("1"), Err(InputError::WrongCount));
        assert_eq!(parse_coordinate("1 2 3"), Err(InputError::WrongCount));
        assert_eq!(parse_coordinate("a 2"), Err(InputError::NotNumbers));
        assert_eq!(parse_coordinate("-1 2"), Err(InputError::NotNumbers));
        assert_eq!(parse_coordinate("0 2"), Err(InputError::Zero));
    }

    #[test]
    fn test_prompts_until_valid_input() {
        let input = Cursor::new("hello\nx y\n2 3\n");
        let mut source = CliMoveSource::new(input, Vec::new());
        assert_eq!(source.request_coordinate().unwrap(), Coordinate::new(1, 2));
        let printed = String::from_utf8(source.into_output()).unwrap();
        assert_eq!(printed.matches("Your move: ").count(), 3);
        assert!(printed.contains("Enter 2 coordinates!"));
        assert!(printed.contains("Enter numbers!"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut source = CliMoveSource::new(Cursor::new(""), Vec::new());
        assert!(source.request_coordinate().is_err());
    }

    #[test]
    fn test_feedback_is_printed() {
        let mut source = CliMoveSource::new(Cursor::new(""), Vec::new());
        source.shot_rejected(Coordinate::new(0, 0), &BoardError::AlreadyTargeted);
        source.shot_resolved(Coordinate::new(0, 1), ShotOutcome::Sunk);
        source.shot_resolved(Coordinate::new(0, 2), ShotOutcome::Miss);
        let printed = String::from_utf8(source.into_output()).unwrap();
        assert_eq!(
            printed,
            "Already shot at this position!\nShip destroyed!\nMiss!\n"
        );
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_feedback_survives_broken_output() {
        let mut source = CliMoveSource::new(Cursor::new("1 1\n"), BrokenPipe);
        source.shot_rejected(Coordinate::new(0, 0), &BoardError::OutOfBounds);
        source.shot_resolved(Coordinate::new(0, 0), ShotOutcome::Hit);
        assert!(source.request_coordinate().is_err());
    }
}
