use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{LineCodeError, LineCodeResult};
use crate::waveform::SamplePoint;

/// Consumer of (time, voltage) points
pub trait WaveformSink {
    fn write_points(&mut self, points: &[SamplePoint]) -> LineCodeResult<()>;
}

/// Write one `"<time> <voltage>"` record per line
pub fn write_records<W: Write>(out: &mut W, points: &[SamplePoint]) -> io::Result<()> {
    for point in points {
        writeln!(out, "{} {}", point.time, point.voltage)?;
    }
    out.flush()
}

/// Sink over any writer (stdout, in-memory buffers, ...)
pub struct WriterSink<W: Write> {
    writer: W,
    label: PathBuf,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, label: impl Into<PathBuf>) -> Self {
        Self {
            writer,
            label: label.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> WaveformSink for WriterSink<W> {
    fn write_points(&mut self, points: &[SamplePoint]) -> LineCodeResult<()> {
        write_records(&mut self.writer, points).map_err(|source| {
            LineCodeError::SinkUnavailable {
                path: self.label.clone(),
                source,
            }
        })
    }
}

/// Data file for gnuplot; the file is opened only while writing.
/// Records go to `<path>.part` and are renamed into place once complete,
/// so a failed write leaves no data file behind.
pub struct DatFileSink {
    path: PathBuf,
}

impl DatFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".part");
        PathBuf::from(name)
    }

    fn commit<F>(&self, write: F) -> io::Result<()>
    where
        F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
    {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let staging = self.staging_path();
        let result = File::create(&staging).and_then(|file| {
            let mut writer = BufWriter::new(file);
            write(&mut writer)?;
            writer.flush()
        });

        match result.and_then(|()| std::fs::rename(&staging, &self.path)) {
            Ok(()) => Ok(()),
            Err(err) => {
                let _ = std::fs::remove_file(&staging);
                Err(err)
            }
        }
    }
}

impl WaveformSink for DatFileSink {
    fn write_points(&mut self, points: &[SamplePoint]) -> LineCodeResult<()> {
        self.commit(|writer| write_records(writer, points))
            .map_err(|source| LineCodeError::SinkUnavailable {
                path: self.path.clone(),
                source,
            })?;

        debug!("Wrote {} points to {}", points.len(), self.path().display());
        Ok(())
    }
}
