/*
 * Unit tests for the car motion model
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 *  - test_car_init
 *  - test_car_move_to_current_floor
 *  - test_car_move_to_invalid_floor
 *  - test_car_move_to_valid_floor
 *  - test_car_shutdown_during_travel
 *  - test_car_shutdown_during_dwell
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod car_tests {
    use crate::config::TimingConfig;
    use crate::elevator::car::{Car, CarState, MoveOutcome};
    use crate::shared::Behaviour::Idle;
    use crate::shared::Direction::{self, Down, Up};
    use crate::shared::{shutdown_channel, ChannelSink, ElevatorEvent, FloorBounds, FloorOrigin, ShutdownSignal};
    use crossbeam_channel::Receiver;
    use std::sync::Arc;
    use std::thread::{sleep, spawn};
    use std::time::{Duration, Instant};

    fn setup_car(initial_floor: i32, floor_travel_ms: u64, door_dwell_ms: u64) -> (Car, Receiver<ElevatorEvent>) {
        let (sink, event_rx) = ChannelSink::unbounded();
        let timing = TimingConfig {
            floor_travel_ms,
            door_dwell_ms,
            idle_poll_ms: 10,
        };
        (Car::new(initial_floor, FloorBounds::DEFAULT, &timing, Arc::new(sink)), event_rx)
    }

    #[test]
    fn test_car_init() {
        // Purpose: Verify that a new car is idle at its initial floor

        // Arrange & Act
        let (car, _event_rx) = setup_car(3, 5, 5);

        // Assert
        assert_eq!(
            car.state(),
            CarState { floor: 3, direction: Direction::Idle, behaviour: Idle }
        );
    }

    #[test]
    fn test_car_move_to_current_floor() {
        // Purpose: Verify that moving to the current floor changes nothing and takes no time

        // Arrange
        let (car, event_rx) = setup_car(4, 10_000, 10_000);
        let before = car.state();

        // Act
        let started = Instant::now();
        let outcome = car.move_to(4, &ShutdownSignal::never());

        // Assert
        assert_eq!(outcome, MoveOutcome::AlreadyThere);
        assert!(started.elapsed() < Duration::from_secs(1));
        assert_eq!(car.state(), before);
        assert!(event_rx.try_recv().is_err());
    }

    #[test]
    fn test_car_move_to_invalid_floor() {
        // Purpose: Verify that out-of-bounds targets are reported and ignored

        // Arrange
        let (car, event_rx) = setup_car(1, 5, 5);

        // Act
        let below = car.move_to(-1, &ShutdownSignal::never());
        let above = car.move_to(1337, &ShutdownSignal::never());

        // Assert
        assert_eq!(below, MoveOutcome::InvalidFloor);
        assert_eq!(above, MoveOutcome::InvalidFloor);
        assert_eq!(car.floor(), 1);
        assert_eq!(car.direction(), Direction::Idle);
        assert_eq!(
            event_rx.try_recv().unwrap(),
            ElevatorEvent::InvalidFloor { floor: -1, origin: FloorOrigin::Move }
        );
    }

    #[test]
    fn test_car_move_to_valid_floor() {
        // Purpose: Verify that a move updates floor and direction and reports each stage

        // Arrange
        let (car, event_rx) = setup_car(1, 5, 5);

        // Act
        let up = car.move_to(4, &ShutdownSignal::never());
        let up_state = car.state();
        let down = car.move_to(2, &ShutdownSignal::never());

        // Assert
        assert_eq!(up, MoveOutcome::Arrived);
        assert_eq!(up_state, CarState { floor: 4, direction: Up, behaviour: Idle });
        assert_eq!(down, MoveOutcome::Arrived);
        assert_eq!(car.state(), CarState { floor: 2, direction: Down, behaviour: Idle });

        let events: Vec<ElevatorEvent> = event_rx.try_iter().collect();
        assert_eq!(
            events[..3],
            [
                ElevatorEvent::Departed { from: 1, to: 4, direction: Up },
                ElevatorEvent::Arrived(4),
                ElevatorEvent::DoorsClosed(4),
            ]
        );
    }

    #[test]
    fn test_car_shutdown_during_travel() {
        // Purpose: Verify that shutdown aborts travel promptly without changing the floor

        // Arrange
        let (car, event_rx) = setup_car(1, 10_000, 10_000);
        let (trigger, signal) = shutdown_channel();
        let trigger_thread = spawn(move || {
            sleep(Duration::from_millis(50));
            trigger.trigger();
        });

        // Act
        let started = Instant::now();
        let outcome = car.move_to(10, &signal);

        // Assert
        assert_eq!(outcome, MoveOutcome::Aborted);
        assert!(started.elapsed() < Duration::from_secs(5));
        assert_eq!(car.floor(), 1);
        assert!(event_rx
            .try_iter()
            .any(|e| e == ElevatorEvent::MoveAborted { floor: 1, target: 10 }));

        // Cleanup
        trigger_thread.join().unwrap();
    }

    #[test]
    fn test_car_shutdown_during_dwell() {
        // Purpose: Verify that shutdown during the door dwell keeps the completed move

        // Arrange
        let (car, _event_rx) = setup_car(1, 5, 10_000);
        let (trigger, signal) = shutdown_channel();
        let trigger_thread = spawn(move || {
            sleep(Duration::from_millis(200));
            trigger.trigger();
        });

        // Act
        let started = Instant::now();
        let outcome = car.move_to(3, &signal);

        // Assert
        assert_eq!(outcome, MoveOutcome::Arrived);
        assert!(started.elapsed() < Duration::from_secs(5));
        assert_eq!(car.floor(), 3);

        // Cleanup
        trigger_thread.join().unwrap();
    }
}
