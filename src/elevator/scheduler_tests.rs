/*
 * Unit tests for the scan scheduler
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 *  - test_scheduler_keeps_direction
 *  - test_scheduler_reverses_direction
 *  - test_scheduler_idle_never_flips
 *  - test_scheduler_nearest_tie_breaks
 *  - test_scheduler_scan_sequence
 *  - test_scheduler_extreme_floors
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod scheduler_tests {
    use crate::elevator::registry::PendingFloor;
    use crate::elevator::scheduler::{choose_direction, decide, select_target, Decision};
    use crate::shared::Direction;
    use crate::shared::Direction::{Down, Idle, Up};

    // Arrival order follows the order of `floors`
    fn pending(floors: &[i32]) -> Vec<PendingFloor> {
        let mut pending: Vec<PendingFloor> = floors
            .iter()
            .enumerate()
            .map(|(arrival, &floor)| PendingFloor { floor, arrival: arrival as u64 })
            .collect();
        pending.sort_by_key(|p| p.floor);
        pending
    }

    #[test]
    fn test_scheduler_keeps_direction() {
        // Purpose: Verify that the closest floor ahead is chosen while work remains in that direction

        // Arrange
        let requests = pending(&[9, 2, 6]);

        // Act
        let going_up = decide(4, Up, &requests);
        let going_down = decide(7, Down, &requests);

        // Assert
        assert_eq!(going_up, Decision { direction: Up, target: Some(6) });
        assert_eq!(going_down, Decision { direction: Down, target: Some(6) });
    }

    #[test]
    fn test_scheduler_reverses_direction() {
        // Purpose: Verify that the direction flips when nothing is left ahead

        // Arrange
        let requests = pending(&[1, 3]);

        // Act
        let direction = choose_direction(5, Up, &requests);
        let target = select_target(5, direction, &requests);

        // Assert
        assert_eq!(direction, Down);
        assert_eq!(target, Some(3));
        assert_eq!(choose_direction(0, Down, &requests), Up);
    }

    #[test]
    fn test_scheduler_idle_never_flips() {
        // Purpose: Verify that an idle car goes to the nearest pending floor without picking a direction

        // Arrange
        let requests = pending(&[10, 4]);

        // Act
        let decision = decide(6, Idle, &requests);

        // Assert
        assert_eq!(decision, Decision { direction: Idle, target: Some(4) });
    }

    #[test]
    fn test_scheduler_nearest_tie_breaks() {
        // Purpose: Verify that equal distances go to the earliest request, then to the lower floor

        // Arrange
        let up_first = pending(&[8, 2]);
        let down_first = pending(&[2, 8]);
        let same_arrival = vec![
            PendingFloor { floor: 3, arrival: 0 },
            PendingFloor { floor: 7, arrival: 0 },
        ];

        // Act & Assert
        assert_eq!(select_target(5, Idle, &up_first), Some(8));
        assert_eq!(select_target(5, Idle, &down_first), Some(2));
        assert_eq!(select_target(5, Idle, &same_arrival), Some(3));
    }

    #[test]
    fn test_scheduler_scan_sequence() {
        // Purpose: Verify that a full scan serves floors ahead before reversing

        // Arrange
        let mut requests = pending(&[8, 2, 6, 9, 3]);
        let mut floor = 5;
        let mut direction = Idle;
        let mut visited = Vec::new();

        // Act
        while !requests.is_empty() {
            let decision = decide(floor, direction, &requests);
            let target = decision.target.unwrap();
            direction = if target == floor {
                decision.direction
            } else {
                Direction::between(floor, target)
            };
            floor = target;
            requests.retain(|p| p.floor != target);
            visited.push(target);
        }

        // Assert
        assert_eq!(visited, vec![6, 8, 9, 3, 2]);
    }

    #[test]
    fn test_scheduler_extreme_floors() {
        // Purpose: Verify that distances between floors at opposite ends of i32 do not overflow

        // Arrange
        let requests = pending(&[i32::MAX, i32::MIN + 1]);

        // Act
        let target = select_target(i32::MIN, Idle, &requests);

        // Assert
        assert_eq!(target, Some(i32::MIN + 1));
    }
}
