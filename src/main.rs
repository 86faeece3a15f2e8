use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use linecode_rs::io::{DatFileSink, write_to_wav};
use linecode_rs::phy::bits::{bits_to_string, parse_bits, random_bits};
use linecode_rs::ui::{print_banner, prompt_bits, prompt_scheme};
use linecode_rs::utils::consts::*;
use linecode_rs::utils::dump::{RunDump, write_json};
use linecode_rs::utils::logging::init_logging;
use linecode_rs::waveform::render_samples;
use linecode_rs::{LineCodeError, LineCodeResult, SignalPipeline};

#[derive(Parser)]
#[command(author, version, about = "Line-code a bit string and emit a gnuplot-ready waveform", long_about = None)]
struct Cli {
    /// Bit string; any character other than '1' is a zero bit
    #[arg(short, long, conflicts_with = "random")]
    bits: Option<String>,
    /// Generate N random bits instead of reading a bit string
    #[arg(long, value_name = "N")]
    random: Option<usize>,
    /// Seed for --random
    #[arg(long, requires = "random")]
    seed: Option<u64>,
    /// 1 = Unipolar NRZ, 2 = Polar NRZ-L, 3 = Bipolar AMI, 4 = Manchester
    #[arg(short, long)]
    scheme: Option<String>,
    /// Data file for the waveform points
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    data: PathBuf,
    /// Image name referenced by the gnuplot script
    #[arg(short, long, default_value = DEFAULT_IMAGE_FILE)]
    image: String,
    /// Also write the gnuplot script to this file
    #[arg(long)]
    script: Option<PathBuf>,
    /// Also render the levels as a 16-bit WAV file
    #[arg(long)]
    wav: Option<PathBuf>,
    /// Audio samples per bit interval for --wav (at least 2)
    #[arg(long, default_value_t = SAMPLES_PER_BIT as u64, value_parser = clap::value_parser!(u64).range(2..))]
    samples_per_bit: u64,
    #[arg(long, default_value_t = SAMPLE_RATE)]
    sample_rate: u32,
    /// Dump bits, levels, points and plot settings as JSON
    #[arg(long)]
    json: Option<PathBuf>,
    /// Only warnings and errors; do not print the script
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> LineCodeResult<()> {
    if !cli.quiet {
        print_banner();
    }

    let bits = match (cli.random, cli.bits.as_deref()) {
        (Some(len), _) => {
            let seed = cli.seed.unwrap_or_else(rand::random);
            tracing::info!("Generating {} random bits (seed {})", len, seed);
            random_bits(len, seed)
        }
        (None, Some(data)) => parse_bits(data.trim()),
        (None, None) => parse_bits(&prompt_bits()?),
    };

    let selector = match cli.scheme {
        Some(selector) => selector,
        None => prompt_scheme()?,
    };
    // Rejects unknown schemes before anything is encoded or written
    let pipeline = SignalPipeline::from_selector(&selector)?;

    // A data file that can't be written is reported; the script still follows
    let mut sink = DatFileSink::new(&cli.data);
    let waveform = pipeline.run_or_report(&bits, &mut sink);

    let render = pipeline.render_config(cli.data.display().to_string(), cli.image.clone());
    let script = render.to_gnuplot_script();
    if !cli.quiet {
        println!("\nGnuplot Script:");
        print!("{}", script);
    }

    if let Some(path) = &cli.script {
        std::fs::write(path, &script).map_err(|err| LineCodeError::export(path, err))?;
        tracing::info!("Gnuplot script written to {}", path.display());
    }

    if let Some(path) = &cli.wav {
        let samples = render_samples(
            &waveform.levels,
            pipeline.kind().expansion_mode(),
            cli.samples_per_bit as usize,
        );
        write_to_wav(&samples, cli.sample_rate, path)?;
        tracing::info!(
            "WAV written to {} ({} samples @ {} Hz)",
            path.display(),
            samples.len(),
            cli.sample_rate
        );
    }

    if let Some(path) = &cli.json {
        let dump = RunDump {
            scheme: pipeline.kind(),
            bits: bits_to_string(&bits),
            levels: &waveform.levels,
            points: &waveform.points,
            render: &render,
        };
        write_json(&dump, path)?;
        tracing::info!("Run dump written to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_per_bit_lower_bound() {
        for value in ["0", "1"] {
            let parsed = Cli::try_parse_from(["linecode-rs", "--samples-per-bit", value]);
            assert!(parsed.is_err(), "accepted {}", value);
        }

        let cli = Cli::try_parse_from(["linecode-rs", "--samples-per-bit", "3"]).unwrap();
        assert_eq!(cli.samples_per_bit, 3);
        let cli = Cli::try_parse_from(["linecode-rs"]).unwrap();
        assert_eq!(cli.samples_per_bit, SAMPLES_PER_BIT as u64);
    }
}
