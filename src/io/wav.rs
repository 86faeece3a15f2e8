use std::path::Path;

use crate::error::{LineCodeError, LineCodeResult};

pub fn write_to_wav(
    signal: &[f32],
    sample_rate: u32,
    filename: &Path,
) -> LineCodeResult<()> {
    let to_error = |err: hound::Error| LineCodeError::export(filename, err);

    if let Some(parent) = filename.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|err| LineCodeError::export(filename, err))?;
        }
    }
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(filename, spec).map_err(to_error)?;
    let amplitude = i16::MAX as f32;
    for &sample in signal {
        writer
            .write_sample((sample.clamp(-1.0, 1.0) * amplitude) as i16)
            .map_err(to_error)?;
    }
    writer.finalize().map_err(to_error)?;
    Ok(())
}
