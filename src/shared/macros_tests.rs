/*
 * Unit tests for the bootstrap macros
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 *  - test_unwrap_or_exit_passes_value_through
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod macros_tests {
    use crate::config::{parse_config, ConfigError};

    #[test]
    fn test_unwrap_or_exit_passes_value_through() {
        // Purpose: Verify that successful results are unwrapped with and without a context

        // Arrange
        let loaded: Result<i32, ConfigError> = Ok(7);

        // Act
        let floor = crate::unwrap_or_exit!(loaded);
        let config = crate::unwrap_or_exit!(
            parse_config("[elevator]\ninitial_floor = 4\n"),
            "Parsing configuration"
        );

        // Assert
        assert_eq!(floor, 7);
        assert_eq!(config.elevator.initial_floor, 4);
    }
}
