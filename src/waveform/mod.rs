// Waveform emitter: levels -> step-function sample points
//
// NRZ mode:        one level per bit interval dt
// Manchester mode: one level pair per dt, each level holds for dt/2
// Equal timestamps on consecutive points form a vertical edge.

pub mod render;

pub use render::RenderConfig;

use serde::Serialize;
use tracing::debug;

use crate::phy::line_coding::Level;
use crate::utils::consts::BIT_DURATION;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExpansionMode {
    Nrz,
    Manchester,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplePoint {
    pub time: f64,
    pub voltage: f64,
}

impl SamplePoint {
    pub fn new(time: f64, voltage: f64) -> Self {
        Self { time, voltage }
    }
}

/// Expand levels into plottable step points
pub fn expand(levels: &[Level], mode: ExpansionMode) -> Vec<SamplePoint> {
    let points = match mode {
        ExpansionMode::Nrz => expand_nrz(levels, BIT_DURATION),
        ExpansionMode::Manchester => expand_manchester(levels, BIT_DURATION),
    };

    debug!(
        "Expanded {} levels ({:?}) into {} points",
        levels.len(),
        mode,
        points.len()
    );
    points
}

fn expand_nrz(levels: &[Level], dt: f64) -> Vec<SamplePoint> {
    let mut points = Vec::with_capacity(levels.len() * 3);
    let mut t = 0.0;

    for (i, &level) in levels.iter().enumerate() {
        points.push(SamplePoint::new(t, level));
        points.push(SamplePoint::new(t + dt, level));
        if let Some(&next) = levels.get(i + 1) {
            points.push(SamplePoint::new(t + dt, next));
        }
        t += dt;
    }

    points
}

fn expand_manchester(levels: &[Level], dt: f64) -> Vec<SamplePoint> {
    let mut points = Vec::with_capacity(levels.len() * 2);
    let mut t = 0.0;

    for pair in levels.chunks(2) {
        match *pair {
            [first, second] => {
                points.push(SamplePoint::new(t, first));
                points.push(SamplePoint::new(t + dt / 2.0, first));
                points.push(SamplePoint::new(t + dt / 2.0, second));
                points.push(SamplePoint::new(t + dt, second));
            }
            // Odd trailing level: the encoder never produces one
            [only] => {
                points.push(SamplePoint::new(t, only));
                points.push(SamplePoint::new(t + dt, only));
            }
            _ => unreachable!("chunks(2) yields one or two levels"),
        }
        t += dt;
    }

    points
}

/// Hold each level for its share of `samples_per_bit` audio samples.
/// Every bit interval gets exactly `samples_per_bit` samples; a Manchester
/// bit is split as `spb / 2` then `spb - spb / 2`. Zero yields no samples.
pub fn render_samples(
    levels: &[Level],
    mode: ExpansionMode,
    samples_per_bit: usize,
) -> Vec<f32> {
    let mut samples = Vec::with_capacity(levels.len() * samples_per_bit);

    match mode {
        ExpansionMode::Nrz => {
            for &level in levels {
                samples.extend(std::iter::repeat_n(level as f32, samples_per_bit));
            }
        }
        ExpansionMode::Manchester => {
            let first_half = samples_per_bit / 2;
            let second_half = samples_per_bit - first_half;
            for pair in levels.chunks(2) {
                match *pair {
                    [first, second] => {
                        samples.extend(std::iter::repeat_n(first as f32, first_half));
                        samples.extend(std::iter::repeat_n(second as f32, second_half));
                    }
                    [only] => {
                        samples.extend(std::iter::repeat_n(only as f32, samples_per_bit));
                    }
                    _ => unreachable!("chunks(2) yields one or two levels"),
                }
            }
        }
    }

    samples
}
