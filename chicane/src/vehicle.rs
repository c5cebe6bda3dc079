use crate::input::InputState;
use crate::track::Track;
use glam::Vec2;

#[derive(Copy, Clone, Debug)]
pub struct VehicleTuning {
    pub max_speed: f32,
    pub reverse_max_speed: f32,
    pub acceleration: f32,
    pub friction: f32,
    pub turn_rate: f32,
    pub min_turn_speed: f32,
}

impl VehicleTuning {
    // Reverse gear is capped at a third of the forward top speed
    pub fn new(max_speed: f32, acceleration: f32, friction: f32, turn_rate: f32, min_turn_speed: f32) -> Self {
        Self { max_speed, reverse_max_speed: max_speed / 3.0, acceleration, friction, turn_rate, min_turn_speed }
    }
}

impl Default for VehicleTuning {
    fn default() -> Self {
        Self::new(7.0, 0.10, 0.05, 0.035, 0.3)
    }
}

#[derive(Clone, Debug)]
pub struct Vehicle {
    pub position: Vec2,
    pub heading: f32,
    pub speed: f32,
    pub tuning: VehicleTuning,
}

impl Vehicle {
    pub fn new(position: Vec2, heading: f32, tuning: VehicleTuning) -> Self {
        Self { position, heading, speed: 0.0, tuning }
    }

    pub fn step(&mut self, input: &InputState, track: &Track) {
        let tuning = self.tuning;

        if input.accelerate {
            self.speed += tuning.acceleration;
        }
        if input.brake {
            self.speed -= tuning.acceleration;
        }

        if self.speed > 0.0 {
            self.speed -= tuning.friction;
        } else if self.speed < 0.0 {
            self.speed += tuning.friction;
        }
        if self.speed.abs() < tuning.friction {
            self.speed = 0.0;
        }

        self.speed = self.speed.clamp(-tuning.reverse_max_speed, tuning.max_speed);

        // Steering authority requires motion, and the wheel sense flips in reverse
        if self.speed.abs() > tuning.min_turn_speed {
            let flip = if self.speed > 0.0 { 1.0 } else { -1.0 };
            if input.steer_left {
                self.heading -= tuning.turn_rate * flip;
            }
            if input.steer_right {
                self.heading += tuning.turn_rate * flip;
            }
        }

        let next = self.position + Vec2::new(self.heading.cos(), self.heading.sin()) * self.speed;

        if track.is_on_track(next) {
            self.position = next;
        } else {
            // Damped bounce, the boundary normal is never computed
            self.speed = -self.speed * 0.5;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::path::Segment;
    use crate::track::FinishLine;
    use crate::track::TRACK_WIDTH;
    use std::f32::consts::FRAC_PI_2;

    fn long_straight() -> Track {
        let segments = [
            Segment::Line { from: Vec2::new(0.0, 0.0), to: Vec2::new(2000.0, 0.0) },
            Segment::Line { from: Vec2::new(2000.0, 0.0), to: Vec2::new(2000.0, 2000.0) },
            Segment::Line { from: Vec2::new(2000.0, 2000.0), to: Vec2::new(0.0, 2000.0) },
            Segment::Line { from: Vec2::new(0.0, 2000.0), to: Vec2::new(0.0, 0.0) },
        ];

        Track::new(&segments, TRACK_WIDTH, FinishLine { x: 0.0, y_start: 0.0, y_end: 0.0 }).unwrap()
    }

    fn vehicle_on_straight() -> Vehicle {
        Vehicle::new(Vec2::new(100.0, 0.0), 0.0, VehicleTuning::default())
    }

    #[test]
    fn held_accelerator_grows_speed_monotonically_until_clamp() {
        let track = long_straight();
        let mut vehicle = vehicle_on_straight();
        let input = InputState { accelerate: true, ..Default::default() };

        let mut previous = vehicle.speed;
        for _ in 0..200 {
            vehicle.step(&input, &track);
            assert!(vehicle.speed >= previous);
            assert!(vehicle.speed <= vehicle.tuning.max_speed);
            previous = vehicle.speed;
        }

        assert_eq!(vehicle.speed, vehicle.tuning.max_speed);
    }

    #[test]
    fn speed_stays_within_limits_in_reverse() {
        let track = long_straight();
        let mut vehicle = vehicle_on_straight();
        vehicle.position = Vec2::new(1000.0, 0.0);
        let input = InputState { brake: true, ..Default::default() };

        for _ in 0..200 {
            vehicle.step(&input, &track);
            assert!(vehicle.speed >= -vehicle.tuning.reverse_max_speed);
        }

        assert_eq!(vehicle.speed, -vehicle.tuning.reverse_max_speed);
    }

    #[test]
    fn friction_snaps_small_speeds_to_zero() {
        let track = long_straight();
        let mut vehicle = vehicle_on_straight();
        vehicle.speed = 0.03;

        vehicle.step(&InputState::default(), &track);

        assert_eq!(vehicle.speed, 0.0);
    }

    #[test]
    fn no_steering_authority_below_the_speed_threshold() {
        let track = long_straight();
        let mut vehicle = vehicle_on_straight();
        vehicle.speed = 0.3;
        let input = InputState { steer_left: true, ..Default::default() };

        vehicle.step(&input, &track);

        assert_eq!(vehicle.heading, 0.0);
    }

    #[test]
    fn steering_sense_flips_in_reverse() {
        let track = long_straight();

        let mut forward = vehicle_on_straight();
        forward.position = Vec2::new(1000.0, 0.0);
        forward.speed = 2.0;

        let mut reversing = forward.clone();
        reversing.speed = -2.0;

        let input = InputState { steer_left: true, ..Default::default() };
        forward.step(&input, &track);
        reversing.step(&input, &track);

        assert!(forward.heading < 0.0);
        assert!(reversing.heading > 0.0);
    }

    #[test]
    fn off_track_move_is_rejected_with_a_damped_bounce() {
        let track = long_straight();
        let mut vehicle = vehicle_on_straight();
        vehicle.position = Vec2::new(100.0, 40.0);
        vehicle.heading = FRAC_PI_2;
        vehicle.speed = 5.0;

        vehicle.step(&InputState::default(), &track);

        assert_eq!(vehicle.position, Vec2::new(100.0, 40.0));
        assert_eq!(vehicle.speed, -(5.0 - vehicle.tuning.friction) * 0.5);
    }

    #[test]
    fn accelerate_and_brake_together_are_additive() {
        let track = long_straight();

        let mut both = vehicle_on_straight();
        both.position = Vec2::new(1000.0, 0.0);
        both.speed = 2.0;

        let mut brake_only = both.clone();

        both.step(&InputState { accelerate: true, brake: true, ..Default::default() }, &track);
        brake_only.step(&InputState { brake: true, ..Default::default() }, &track);

        // Both pedals cancel out, leaving friction as the only deceleration
        assert!(both.speed > brake_only.speed);
        assert_eq!(both.speed, 2.0 - both.tuning.friction);
    }
}
