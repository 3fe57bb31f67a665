use clap::{Parser, Subcommand};
use fftlite::input::parse_sequence;
use fftlite::series::{
    fourier_coefficients, rectangle_wave, sample_waveform, QUADRATURE_STEPS,
};
use fftlite::{fft_real, pad_to_power_of_two, round_complex, Complex64, DEFAULT_DIGITS};
use std::error::Error;
use std::path::{Path, PathBuf};
use svg::node::element::{Polyline, Rectangle};
use svg::Document;

/// Spectra of integer sequences and Fourier-series pulse charts.
#[derive(Parser)]
#[command(name = "fftlite")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// FFT of a comma-separated integer sequence, zero-padded to a power of two
    Transform {
        /// Input samples, e.g. "1,2,3,4"
        samples: String,

        /// Decimal places kept in the printed spectrum
        #[arg(long, default_value_t = DEFAULT_DIGITS)]
        digits: u32,
    },
    /// Fourier-series magnitudes of a rectangular pulse train
    Series {
        /// Pulse amplitude
        #[arg(long, default_value_t = 1.0)]
        amplitude: f64,

        /// Waveform period in seconds
        #[arg(long, default_value_t = 90e-6)]
        period: f64,

        /// Pulse width in seconds; defaults to a third of the period
        #[arg(long)]
        pulse_width: Option<f64>,

        /// Number of harmonics to compute
        #[arg(long, default_value_t = 7)]
        harmonics: usize,

        /// Quadrature intervals per integral
        #[arg(long, default_value_t = QUADRATURE_STEPS)]
        steps: usize,

        /// Periods drawn in the waveform chart
        #[arg(long, default_value_t = 3)]
        cycles: usize,

        /// Optional path to save an SVG chart (waveform + coefficient bars)
        #[arg(long)]
        svg_output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    match Cli::parse().command {
        Command::Transform { samples, digits } => run_transform(&samples, digits),
        Command::Series {
            amplitude,
            period,
            pulse_width,
            harmonics,
            steps,
            cycles,
            svg_output,
        } => run_series(
            amplitude,
            period,
            pulse_width.unwrap_or(period / 3.0),
            harmonics,
            steps,
            cycles,
            svg_output.as_deref(),
        ),
    }
}

fn run_transform(samples: &str, digits: u32) -> Result<(), Box<dyn Error>> {
    let values = parse_sequence(samples)?;
    let reals: Vec<f64> = values.iter().map(|&v| v as f64).collect();
    let padded = pad_to_power_of_two(&reals);
    log::debug!("padded {} samples to {}", reals.len(), padded.len());

    let spectrum = round_complex(&fft_real(&padded)?, digits);
    for (bin, value) in spectrum.iter().enumerate() {
        println!("{bin}: {}", format_complex(value, digits));
    }
    Ok(())
}

fn run_series(
    amplitude: f64,
    period: f64,
    pulse_width: f64,
    harmonics: usize,
    steps: usize,
    cycles: usize,
    svg_output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let wave = |t: f64| rectangle_wave(t, period, pulse_width, amplitude);
    let coefficients = fourier_coefficients(&wave, period, harmonics, steps)?;

    println!("Fourier coefficients:");
    for (n, c) in coefficients.iter().enumerate() {
        println!("C{n}: {c:.3}");
    }

    if let Some(path) = svg_output {
        let samples = sample_waveform(&wave, period, cycles, 1000)?;
        save_chart(&samples, &coefficients, path)?;
        log::info!("chart written to {}", path.display());
    }
    Ok(())
}

fn format_complex(value: &Complex64, digits: u32) -> String {
    let precision = digits as usize;
    format!(
        "{re:.precision$}{im:+.precision$}i",
        re = value.re,
        im = value.im
    )
}

// Chart geometry: waveform polyline in the top panel, one bar per harmonic in
// the bottom panel.
const CHART_WIDTH: f64 = 800.0;
const CHART_HEIGHT: f64 = 500.0;
const MARGIN: f64 = 20.0;
const PANEL_HEIGHT: f64 = 200.0;

fn save_chart(
    samples: &[(f64, f64)],
    coefficients: &[f64],
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let mut document = Document::new().set(
        "viewBox",
        (0, 0, CHART_WIDTH as i32, CHART_HEIGHT as i32),
    );

    let span = samples.last().map(|&(t, _)| t).unwrap_or(1.0).max(f64::EPSILON);
    let peak = samples
        .iter()
        .map(|&(_, y)| y.abs())
        .fold(f64::EPSILON, f64::max);
    let inner_width = CHART_WIDTH - 2.0 * MARGIN;
    let points: String = samples
        .iter()
        .map(|&(t, y)| {
            let x = MARGIN + t / span * inner_width;
            let v = MARGIN + PANEL_HEIGHT - y / peak * PANEL_HEIGHT;
            format!("{x:.1},{v:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ");
    let waveform = Polyline::new()
        .set("points", points)
        .set("fill", "none")
        .set("stroke", "black")
        .set("stroke-width", 1);
    document = document.add(waveform);

    let max_coefficient = coefficients
        .iter()
        .fold(f64::EPSILON, |acc, &c| acc.max(c.abs()));
    let slot = inner_width / coefficients.len() as f64;
    let base = CHART_HEIGHT - MARGIN;
    for (n, &c) in coefficients.iter().enumerate() {
        let height = c.abs() / max_coefficient * PANEL_HEIGHT;
        let bar = Rectangle::new()
            .set("x", MARGIN + n as f64 * slot + 0.3 * slot)
            .set("y", base - height)
            .set("width", 0.4 * slot)
            .set("height", height)
            .set("fill", "steelblue");
        document = document.add(bar);
    }

    svg::save(path, &document)?;
    Ok(())
}
