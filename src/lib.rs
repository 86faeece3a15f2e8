//! Digital baseband line coding: bit strings to plottable step waveforms.

pub mod error;
pub mod io;
pub mod phy;
pub mod pipeline;
pub mod ui;
pub mod utils;
pub mod waveform;

pub use error::{LineCodeError, LineCodeResult};
pub use pipeline::{SignalPipeline, Waveform};
