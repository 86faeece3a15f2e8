use linecode_rs::io::{DatFileSink, WriterSink};
use linecode_rs::phy::{LineCodingKind, parse_bits};
use linecode_rs::{LineCodeError, SignalPipeline};

fn data_file_text(kind: LineCodingKind, data: &str) -> String {
    let pipeline = SignalPipeline::new(kind);
    let mut sink = WriterSink::new(Vec::new(), "memory");
    pipeline
        .run(&parse_bits(data), &mut sink)
        .expect("in-memory sink should not fail");
    String::from_utf8(sink.into_inner()).expect("records are ascii")
}

#[test]
fn unipolar_data_file_matches_reference_layout() {
    let text = data_file_text(LineCodingKind::UnipolarNrz, "10");
    assert_eq!(text, "0 1\n1 1\n1 0\n1 0\n2 0\n");
}

#[test]
fn ami_data_file_alternates_marks() {
    let text = data_file_text(LineCodingKind::BipolarAmi, "101");
    assert_eq!(
        text,
        "0 1\n1 1\n1 0\n1 0\n2 0\n2 -1\n2 -1\n3 -1\n"
    );
}

#[test]
fn manchester_data_file_has_mid_bit_edges() {
    let text = data_file_text(LineCodingKind::Manchester, "01");
    assert_eq!(
        text,
        "0 -1\n0.5 -1\n0.5 1\n1 1\n1 1\n1.5 1\n1.5 -1\n2 -1\n"
    );
}

#[test]
fn malformed_characters_encode_as_zero() {
    assert_eq!(
        data_file_text(LineCodingKind::PolarNrzL, "1a"),
        data_file_text(LineCodingKind::PolarNrzL, "10")
    );
}

#[test]
fn script_and_file_for_full_run() {
    let dir = std::env::temp_dir().join(format!("linecode-it-{}", std::process::id()));
    let data_path = dir.join("signal.dat");

    let pipeline = SignalPipeline::from_selector("3").expect("3 is Bipolar AMI");
    let mut sink = DatFileSink::new(&data_path);
    let waveform = pipeline
        .run(&parse_bits("11011"), &mut sink)
        .expect("temp dir should be writable");
    assert_eq!(waveform.levels, vec![1.0, -1.0, 0.0, 1.0, -1.0]);

    let written = std::fs::read_to_string(&data_path).expect("data file exists");
    assert_eq!(written.lines().count(), waveform.points.len());

    let script = pipeline
        .render_config("signal.dat", "signal.png")
        .to_gnuplot_script();
    assert!(script.contains("set yrange [-1.5:1.5]\n"));
    assert!(script.ends_with("plot 'signal.dat' with lines title 'Signal'\n"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn invalid_selector_is_rejected_before_writing() {
    let dir = std::env::temp_dir().join(format!("linecode-invalid-{}", std::process::id()));
    let data_path = dir.join("signal.dat");
    let mut sink = DatFileSink::new(&data_path);

    let result = SignalPipeline::from_selector("5")
        .and_then(|pipeline| pipeline.run(&parse_bits("101"), &mut sink));

    assert!(matches!(result, Err(LineCodeError::InvalidScheme(_))));
    assert!(!data_path.exists());
    assert!(!dir.exists());
}

#[test]
fn unwritable_data_file_is_reported_and_run_continues() {
    // A regular file where the data directory should be
    let blocker = std::env::temp_dir().join(format!("linecode-unwritable-{}", std::process::id()));
    std::fs::write(&blocker, b"").expect("temp dir should be writable");
    let data_path = blocker.join("signal.dat");
    let pipeline = SignalPipeline::new(LineCodingKind::PolarNrzL);

    let mut sink = DatFileSink::new(&data_path);
    let strict = pipeline.run(&parse_bits("101"), &mut sink);
    assert!(matches!(strict, Err(LineCodeError::SinkUnavailable { .. })));

    let waveform = pipeline.run_or_report(&parse_bits("101"), &mut sink);
    assert_eq!(waveform.levels, vec![1.0, -1.0, 1.0]);
    assert_eq!(waveform.duration(), 3.0);
    assert!(!data_path.exists());

    let script = pipeline
        .render_config(data_path.display().to_string(), "signal.png")
        .to_gnuplot_script();
    assert!(script.starts_with("set terminal png size 800,300\n"));

    let _ = std::fs::remove_file(&blocker);
}
