use anyhow::bail;
use anyhow::Result;
use glam::Vec2;

pub const CURVE_SUBDIVISIONS: usize = 24;
const CONTINUITY_EPSILON: f32 = 0.001;

#[derive(Copy, Clone, Debug)]
pub enum Segment {
    Line { from: Vec2, to: Vec2 },
    Cubic { from: Vec2, control1: Vec2, control2: Vec2, to: Vec2 },
}

impl Segment {
    pub fn start(&self) -> Vec2 {
        match *self {
            Segment::Line { from, .. } => from,
            Segment::Cubic { from, .. } => from,
        }
    }

    pub fn end(&self) -> Vec2 {
        match *self {
            Segment::Line { to, .. } => to,
            Segment::Cubic { to, .. } => to,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CircuitPath {
    points: Vec<Vec2>,
}

impl CircuitPath {
    pub fn new(segments: &[Segment]) -> Result<Self> {
        if segments.is_empty() {
            bail!("Circuit path requires at least one segment");
        }

        for window in segments.windows(2) {
            if window[0].end().distance(window[1].start()) > CONTINUITY_EPSILON {
                bail!("Circuit path is discontinuous at {}", window[1].start());
            }
        }

        let first = segments[0].start();
        let last = segments[segments.len() - 1].end();

        if first.distance(last) > CONTINUITY_EPSILON {
            bail!("Circuit path is not closed ({} != {})", first, last);
        }

        let mut points = vec![first];
        for segment in segments {
            match *segment {
                Segment::Line { to, .. } => points.push(to),
                Segment::Cubic { from, control1, control2, to } => {
                    for step in 1..=CURVE_SUBDIVISIONS {
                        let t = step as f32 / CURVE_SUBDIVISIONS as f32;
                        points.push(cubic_point(from, control1, control2, to, t));
                    }
                }
            }
        }

        Ok(Self { points })
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn distance_squared_to(&self, point: Vec2) -> f32 {
        let mut nearest = f32::MAX;
        for edge in self.points.windows(2) {
            nearest = nearest.min(point_to_edge_squared(point, edge[0], edge[1]));
        }

        nearest
    }
}

fn cubic_point(from: Vec2, control1: Vec2, control2: Vec2, to: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    from * (u * u * u) + control1 * (3.0 * u * u * t) + control2 * (3.0 * u * t * t) + to * (t * t * t)
}

fn point_to_edge_squared(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let edge = b - a;
    let length_squared = edge.length_squared();

    if length_squared == 0.0 {
        return point.distance_squared(a);
    }

    let t = ((point - a).dot(edge) / length_squared).clamp(0.0, 1.0);
    point.distance_squared(a + edge * t)
}
