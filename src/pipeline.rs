// One line coding run: [bits] -> encode -> [levels] -> expand -> [points] -> sink

use tracing::{debug, error, info};

use crate::error::LineCodeResult;
use crate::io::WaveformSink;
use crate::phy::bits::Bit;
use crate::phy::line_coding::{Level, LineCode, LineCodingKind};
use crate::waveform::{self, RenderConfig, SamplePoint};

/// Result of encoding and expanding one bit sequence
#[derive(Debug, Clone)]
pub struct Waveform {
    pub kind: LineCodingKind,
    pub levels: Vec<Level>,
    pub points: Vec<SamplePoint>,
}

impl Waveform {
    pub fn duration(&self) -> f64 {
        self.points.last().map_or(0.0, |point| point.time)
    }
}

pub struct SignalPipeline {
    kind: LineCodingKind,
    line_code: Box<dyn LineCode>,
}

impl SignalPipeline {
    pub fn new(kind: LineCodingKind) -> Self {
        let line_code = kind.create();

        info!("SignalPipeline initialized:");
        info!("  - line coding: {}", kind.name());
        info!("  - levels per bit: {}", line_code.levels_per_bit());
        info!("  - expansion mode: {:?}", kind.expansion_mode());

        Self { kind, line_code }
    }

    /// Parse a menu selector ("1"-"4" or a scheme name) before any encoding
    pub fn from_selector(selector: &str) -> LineCodeResult<Self> {
        let kind = selector.parse::<LineCodingKind>()?;
        Ok(Self::new(kind))
    }

    pub fn kind(&self) -> LineCodingKind {
        self.kind
    }

    /// Encode and expand; never fails
    pub fn encode(&self, bits: &[Bit]) -> Waveform {
        let levels = self.line_code.encode(bits);
        let points = waveform::expand(&levels, self.kind.expansion_mode());

        debug!(
            "Encoding bits: bits={}, levels={}, points={}",
            bits.len(),
            levels.len(),
            points.len()
        );

        Waveform {
            kind: self.kind,
            levels,
            points,
        }
    }

    /// Hand the points to the sink
    pub fn emit(
        &self,
        waveform: &Waveform,
        sink: &mut dyn WaveformSink,
    ) -> LineCodeResult<()> {
        sink.write_points(&waveform.points)
    }

    /// Encode, expand and emit in one pass
    pub fn run(
        &self,
        bits: &[Bit],
        sink: &mut dyn WaveformSink,
    ) -> LineCodeResult<Waveform> {
        let waveform = self.encode(bits);
        self.emit(&waveform, sink)?;

        info!(
            "Emitted {} points for {} bits ({:.1} time units)",
            waveform.points.len(),
            bits.len(),
            waveform.duration()
        );
        Ok(waveform)
    }

    /// Like `run`, but a sink failure is only reported: the encoded waveform
    /// is still returned so the caller can go on to print the script.
    pub fn run_or_report(
        &self,
        bits: &[Bit],
        sink: &mut dyn WaveformSink,
    ) -> Waveform {
        let waveform = self.encode(bits);
        match self.emit(&waveform, sink) {
            Ok(()) => info!(
                "Emitted {} points for {} bits ({:.1} time units)",
                waveform.points.len(),
                bits.len(),
                waveform.duration()
            ),
            Err(err) => error!("{}", err),
        }
        waveform
    }

    pub fn render_config(
        &self,
        data_file: impl Into<String>,
        image_file: impl Into<String>,
    ) -> RenderConfig {
        RenderConfig::for_scheme(self.kind, data_file, image_file)
    }
}
