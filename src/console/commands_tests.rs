/*
 * Unit tests for console command parsing
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 *  - test_commands_parse_floor_commands
 *  - test_commands_parse_plain_commands
 *  - test_commands_parse_errors
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod commands_tests {
    use crate::console::{Command, CommandError};

    #[test]
    fn test_commands_parse_floor_commands() {
        // Purpose: Verify that floor commands and their short forms carry the floor through

        // Act & Assert
        assert_eq!("call 3".parse::<Command>(), Ok(Command::Call(3)));
        assert_eq!("  GO   7 ".parse::<Command>(), Ok(Command::Go(7)));
        assert_eq!("x 2".parse::<Command>(), Ok(Command::Cancel(2)));
        assert_eq!("go -256".parse::<Command>(), Ok(Command::Go(-256)));
    }

    #[test]
    fn test_commands_parse_plain_commands() {
        // Purpose: Verify that commands without arguments are recognised

        // Act & Assert
        assert_eq!("status".parse::<Command>(), Ok(Command::Status));
        assert_eq!("?".parse::<Command>(), Ok(Command::Help));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_commands_parse_errors() {
        // Purpose: Verify that malformed lines are rejected with a specific error

        // Act & Assert
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "jump 3".parse::<Command>(),
            Err(CommandError::Unknown("jump".to_string()))
        );
        assert_eq!(
            "call".parse::<Command>(),
            Err(CommandError::MissingFloor("call".to_string()))
        );
        assert_eq!(
            "go five".parse::<Command>(),
            Err(CommandError::InvalidNumber("five".to_string()))
        );
        assert_eq!(
            "status now".parse::<Command>(),
            Err(CommandError::TrailingArgument("now".to_string()))
        );
    }
}
