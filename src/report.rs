//! Point path report
//!
//! Converts configured homogeneous points to Cartesian form and walks the
//! path they describe: segment lengths, interpolated samples, and the turn
//! angle at each interior point.

use vec4kit_math::Vector4;

use crate::config::ReportConfig;

/// One leg of the path between two consecutive Cartesian points
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub start: Vector4,
    pub end: Vector4,
    /// Euclidean length of the leg
    pub length: f32,
    /// `lerp_steps + 1` points from `start` to `end` inclusive
    pub samples: Vec<Vector4>,
    /// Whether every sample lies on the leg within the configured epsilon
    pub samples_on_segment: bool,
}

/// Summary of a configured point path
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    /// Homogenized points (w = 1)
    pub points: Vec<Vector4>,
    /// Number of configured points dropped because their w was zero
    pub skipped: usize,
    pub segments: Vec<Segment>,
    /// `(point index, radians)` between incoming and outgoing legs at each
    /// interior point. Points joined to a neighbour by a zero-length leg are left out.
    pub turn_angles: Vec<(usize, f32)>,
    /// Mean of the homogenized points
    pub centroid: Option<Vector4>,
}

impl Report {
    /// Sum of all segment lengths
    pub fn total_length(&self) -> f32 {
        self.segments.iter().map(|s| s.length).sum()
    }
}

/// Build a report from configured points
///
/// Points at infinity (w = 0) have no Cartesian position and are skipped.
pub fn build_report(config: &ReportConfig, epsilon: f32) -> Report {
    let mut report = Report::default();

    for (i, point) in config.points.iter().enumerate() {
        if point.w == 0.0 {
            log::warn!("Skipping point {} {}: w is zero", i, point);
            report.skipped += 1;
            continue;
        }
        let mut p = *point;
        p.homogenize();
        log::debug!("Point {}: {} -> {}", i, point, p);
        report.points.push(p);
    }

    report.segments = report
        .points
        .windows(2)
        .map(|pair| build_segment(pair[0], pair[1], config.lerp_steps, epsilon))
        .collect();

    report.turn_angles = report
        .points
        .windows(3)
        .enumerate()
        .filter_map(|(i, tri)| {
            let incoming = tri[1] - tri[0];
            let outgoing = tri[2] - tri[1];
            if incoming.length_squared() == 0.0 || outgoing.length_squared() == 0.0 {
                log::warn!("No turn angle at point {}: adjacent leg has zero length", i + 1);
                return None;
            }
            Some((i + 1, incoming.angle(outgoing)))
        })
        .collect();

    if !report.points.is_empty() {
        let mut sum = Vector4::ZERO;
        for p in &report.points {
            sum.add(p);
        }
        sum.div(report.points.len() as f32);
        report.centroid = Some(sum);
    }

    report
}

fn build_segment(start: Vector4, end: Vector4, steps: u32, epsilon: f32) -> Segment {
    let length = start.distance(end);

    let samples: Vec<Vector4> = if steps == 0 {
        vec![start, end]
    } else {
        (0..=steps)
            .map(|i| start.lerped(end, i as f32 / steps as f32))
            .collect()
    };

    // A point on the leg splits it into two parts summing to its length
    let tolerance = epsilon * length.max(1.0);
    let samples_on_segment = samples
        .iter()
        .all(|s| (start.distance(*s) + s.distance(end) - length).abs() < tolerance);

    Segment {
        start,
        end,
        length,
        samples,
        samples_on_segment,
    }
}
