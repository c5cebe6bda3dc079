pub mod path;

use self::path::CircuitPath;
use self::path::Segment;
use anyhow::Result;
use glam::Vec2;

pub const TRACK_WIDTH: f32 = 85.0;
pub const FINISH_LINE_TOLERANCE: f32 = 15.0;

#[derive(Copy, Clone, Debug)]
pub struct FinishLine {
    pub x: f32,
    pub y_start: f32,
    pub y_end: f32,
}

#[derive(Debug)]
pub struct Track {
    path: CircuitPath,
    width: f32,
    finish_line: FinishLine,
    crossing: bool,
}

impl Track {
    pub fn new(segments: &[Segment], width: f32, finish_line: FinishLine) -> Result<Self> {
        Ok(Self { path: CircuitPath::new(segments)?, width, finish_line, crossing: false })
    }

    // Counter-clockwise circuit laid out on a 800x600 world, finish line on the top straight
    pub fn circuit() -> Result<Self> {
        let segments = [
            Segment::Line { from: Vec2::new(680.0, 90.0), to: Vec2::new(200.0, 90.0) },
            Segment::Cubic {
                from: Vec2::new(200.0, 90.0),
                control1: Vec2::new(50.0, 90.0),
                control2: Vec2::new(50.0, 250.0),
                to: Vec2::new(160.0, 250.0),
            },
            Segment::Line { from: Vec2::new(160.0, 250.0), to: Vec2::new(240.0, 250.0) },
            Segment::Cubic {
                from: Vec2::new(240.0, 250.0),
                control1: Vec2::new(340.0, 250.0),
                control2: Vec2::new(340.0, 380.0),
                to: Vec2::new(240.0, 380.0),
            },
            Segment::Cubic {
                from: Vec2::new(240.0, 380.0),
                control1: Vec2::new(80.0, 380.0),
                control2: Vec2::new(80.0, 520.0),
                to: Vec2::new(300.0, 520.0),
            },
            Segment::Line { from: Vec2::new(300.0, 520.0), to: Vec2::new(520.0, 520.0) },
            Segment::Cubic {
                from: Vec2::new(520.0, 520.0),
                control1: Vec2::new(780.0, 520.0),
                control2: Vec2::new(780.0, 90.0),
                to: Vec2::new(680.0, 90.0),
            },
        ];

        Self::new(&segments, TRACK_WIDTH, FinishLine { x: 480.0, y_start: 40.0, y_end: 140.0 })
    }

    pub fn is_on_track(&self, point: Vec2) -> bool {
        let half_width = self.width / 2.0;
        self.path.distance_squared_to(point) <= half_width * half_width
    }

    pub fn check_lap_crossing(&mut self, position: Vec2, heading: f32) -> bool {
        let hit_x = (position.x - self.finish_line.x).abs() < FINISH_LINE_TOLERANCE;
        let hit_y = position.y > self.finish_line.y_start && position.y < self.finish_line.y_end;
        let correct_direction = heading.cos() < 0.0;

        if hit_x && hit_y && correct_direction {
            // One-shot edge trigger, re-armed once the finish box is left
            if !self.crossing {
                self.crossing = true;
                return true;
            }
        } else {
            self.crossing = false;
        }

        false
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn points(&self) -> &[Vec2] {
        self.path.points()
    }

    pub fn finish_line(&self) -> FinishLine {
        self.finish_line
    }
}
