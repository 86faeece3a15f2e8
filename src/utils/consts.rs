/// Log level (overridable with RUST_LOG)
pub const LOG_LEVEL: &str = "info";

// ============================================================================
// Waveform Parameters
// ============================================================================

/// Duration of one bit interval on the time axis
pub const BIT_DURATION: f64 = 1.0;

/// Default data file consumed by gnuplot
pub const DEFAULT_DATA_FILE: &str = "signal.dat";

/// Default image written by the gnuplot script
pub const DEFAULT_IMAGE_FILE: &str = "signal.png";

// Plot Parameters
/// PNG terminal size (width, height)
pub const PLOT_SIZE: (u32, u32) = (800, 300);

pub const X_LABEL: &str = "Time";
pub const Y_LABEL: &str = "Voltage";
pub const SERIES_TITLE: &str = "Signal";
pub const PLOT_STYLE: &str = "lines";

/// Y axis range for unipolar signals ({0, 1})
pub const UNIPOLAR_Y_RANGE: (f64, f64) = (-0.5, 1.5);
/// Y axis range for signals swinging around zero
pub const BIPOLAR_Y_RANGE: (f64, f64) = (-1.5, 1.5);

// ============================================================================
// Audio Export Parameters
// ============================================================================

/// Sample rate (Hz)
pub const SAMPLE_RATE: u32 = 48000;

/// Samples per bit interval (Manchester levels get half each)
pub const SAMPLES_PER_BIT: usize = 48;
