use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::{LineCodeError, LineCodeResult};
use crate::phy::line_coding::{Level, LineCodingKind};
use crate::waveform::{RenderConfig, SamplePoint};

#[derive(Serialize)]
pub struct RunDump<'a> {
    pub scheme: LineCodingKind,
    pub bits: String,
    pub levels: &'a [Level],
    pub points: &'a [SamplePoint],
    pub render: &'a RenderConfig,
}

pub fn write_json(dump: &RunDump<'_>, path: &Path) -> LineCodeResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|err| LineCodeError::export(path, err))?;
        }
    }
    let file = File::create(path).map_err(|err| LineCodeError::export(path, err))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, dump)
        .map_err(|err| LineCodeError::export(path, err))?;
    writer.flush().map_err(|err| LineCodeError::export(path, err))
}
