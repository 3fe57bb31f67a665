use fftlite::series::{
    fourier_coefficients, rectangle_wave, sample_waveform, trapezoid, SeriesError,
};

const PI: f64 = std::f64::consts::PI;

#[test]
fn trapezoid_known_integrals() {
    // ∫₀^π sin = 2; the rule is O(dx²) on smooth integrands.
    let area = trapezoid(|t: f64| t.sin(), 0.0, PI, 10_000).unwrap();
    assert!((area - 2.0).abs() < 1e-6);

    let area = trapezoid(|_| 1.0f64, 0.0, 2.0, 100).unwrap();
    assert!((area - 2.0).abs() < 1e-12);
}

#[test]
fn trapezoid_rejects_zero_steps() {
    assert_eq!(
        trapezoid(|t: f64| t, 0.0, 1.0, 0).unwrap_err(),
        SeriesError::InvalidStepCount
    );
}

#[test]
fn coefficients_reject_bad_period() {
    assert_eq!(
        fourier_coefficients(|t: f64| t, 0.0, 3, 100).unwrap_err(),
        SeriesError::InvalidPeriod
    );
    assert_eq!(
        fourier_coefficients(|t: f64| t, -1.0, 3, 100).unwrap_err(),
        SeriesError::InvalidPeriod
    );
}

// A pure cosine has exactly one harmonic; everything else quantizes to zero
// through the coefficient floor.
#[test]
fn pure_cosine_has_single_harmonic() {
    let period = 1.0f64;
    let coefficients =
        fourier_coefficients(|t| (2.0 * PI * t / period).cos(), period, 3, 10_000)
            .unwrap();
    assert_eq!(coefficients.len(), 4);
    assert!(coefficients[0].abs() < 1e-9, "mean = {}", coefficients[0]);
    assert!((coefficients[1] - 1.0).abs() < 1e-6);
    assert_eq!(coefficients[2], 0.0);
    assert_eq!(coefficients[3], 0.0);
}

// Rectangular pulse train against the closed form cn = (2A/πn)·|sin(πn·tu/T)|,
// at a microsecond-scale period.
#[test]
fn rectangle_pulse_matches_closed_form() {
    let amplitude = 1.0f64;
    let period = 90e-6f64;
    let pulse_width = period / 3.0;
    let coefficients = fourier_coefficients(
        |t| rectangle_wave(t, period, pulse_width, amplitude),
        period,
        3,
        30_000,
    )
    .unwrap();

    let closed_form = |n: f64| (2.0 * amplitude / (PI * n)) * (PI * n / 3.0).sin().abs();
    assert!((coefficients[0] - amplitude / 3.0).abs() < 1e-3);
    assert!((coefficients[1] - closed_form(1.0)).abs() < 1e-3);
    assert!((coefficients[2] - closed_form(2.0)).abs() < 1e-3);
    // The third harmonic vanishes for a one-third duty cycle; quadrature leaves
    // only sub-millesimal residue.
    assert!(coefficients[3] < 1e-3);
}

#[test]
fn rectangle_wave_shape() {
    let (period, width, amp) = (1.0f64, 0.25, 2.0);
    assert_eq!(rectangle_wave(0.0, period, width, amp), amp);
    assert_eq!(rectangle_wave(0.24, period, width, amp), amp);
    assert_eq!(rectangle_wave(0.25, period, width, amp), 0.0);
    assert_eq!(rectangle_wave(0.9, period, width, amp), 0.0);
    // Whole periods later the waveform repeats.
    assert_eq!(rectangle_wave(5.1, period, width, amp), amp);
    // Negative time wraps instead of going dark.
    assert_eq!(rectangle_wave(-0.9, period, width, amp), amp);
}

#[test]
fn waveform_sampling_covers_span() {
    let samples = sample_waveform(|t: f64| t * 2.0, 1.0, 3, 7).unwrap();
    assert_eq!(samples.len(), 7);
    assert_eq!(samples[0], (0.0, 0.0));
    let (t_last, y_last) = samples[6];
    assert!((t_last - 3.0).abs() < 1e-12);
    assert!((y_last - 6.0).abs() < 1e-12);
}

#[test]
fn waveform_sampling_validates_arguments() {
    assert_eq!(
        sample_waveform(|t: f64| t, 0.0, 1, 10).unwrap_err(),
        SeriesError::InvalidPeriod
    );
    assert_eq!(
        sample_waveform(|t: f64| t, 1.0, 1, 1).unwrap_err(),
        SeriesError::InvalidPointCount
    );
}
