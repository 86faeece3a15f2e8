// Output artifacts: gnuplot data file and WAV export

pub mod sink;
pub mod wav;

pub use sink::{DatFileSink, WaveformSink, WriterSink};
pub use wav::write_to_wav;
