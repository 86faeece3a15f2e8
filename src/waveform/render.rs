use std::fmt::Write;

use serde::Serialize;

use crate::phy::line_coding::LineCodingKind;
use crate::utils::consts::{
    BIPOLAR_Y_RANGE, PLOT_SIZE, PLOT_STYLE, SERIES_TITLE, UNIPOLAR_Y_RANGE,
    X_LABEL, Y_LABEL,
};

/// Plot directives for the external gnuplot run.
/// Fixed per scheme, never derived from the data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderConfig {
    pub y_min: f64,
    pub y_max: f64,
    pub data_file: String,
    pub image_file: String,
    pub x_label: String,
    pub y_label: String,
    pub series_title: String,
    pub style: String,
    pub size: (u32, u32),
    pub grid: bool,
}

impl RenderConfig {
    pub fn for_scheme(
        kind: LineCodingKind,
        data_file: impl Into<String>,
        image_file: impl Into<String>,
    ) -> Self {
        let (y_min, y_max) = match kind {
            LineCodingKind::UnipolarNrz => UNIPOLAR_Y_RANGE,
            _ => BIPOLAR_Y_RANGE,
        };

        Self {
            y_min,
            y_max,
            data_file: data_file.into(),
            image_file: image_file.into(),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            series_title: SERIES_TITLE.to_string(),
            style: PLOT_STYLE.to_string(),
            size: PLOT_SIZE,
            grid: true,
        }
    }

    pub fn y_range(&self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }

    pub fn to_gnuplot_script(&self) -> String {
        let mut script = String::new();
        // Writing into a String cannot fail
        let _ = writeln!(script, "set terminal png size {},{}", self.size.0, self.size.1);
        let _ = writeln!(script, "set output '{}'", self.image_file);
        let _ = writeln!(script, "set xlabel '{}'", self.x_label);
        let _ = writeln!(script, "set ylabel '{}'", self.y_label);
        let _ = writeln!(script, "set yrange [{}:{}]", self.y_min, self.y_max);
        if self.grid {
            let _ = writeln!(script, "set grid");
        }
        let _ = writeln!(
            script,
            "plot '{}' with {} title '{}'",
            self.data_file, self.style, self.series_title
        );
        script
    }
}
