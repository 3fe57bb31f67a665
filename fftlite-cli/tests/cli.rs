use assert_cmd::Command;

#[test]
fn transform_prints_rounded_bins() {
    let output = Command::cargo_bin("fftlite-cli")
        .unwrap()
        .args(["transform", "1,1,1,1"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("0: 4.0000+0.0000i"), "stdout: {stdout}");
    assert_eq!(stdout.lines().count(), 4);
}

#[test]
fn transform_pads_to_power_of_two() {
    let output = Command::cargo_bin("fftlite-cli")
        .unwrap()
        .args(["transform", "1,2,3"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    // Three samples pad to four bins; DC sums the originals.
    assert_eq!(stdout.lines().count(), 4);
    assert!(stdout.contains("0: 6.0000+0.0000i"), "stdout: {stdout}");
}

#[test]
fn transform_rejects_malformed_input() {
    Command::cargo_bin("fftlite-cli")
        .unwrap()
        .args(["transform", "1,two,3"])
        .assert()
        .failure();
}

#[test]
fn series_prints_coefficients() {
    let output = Command::cargo_bin("fftlite-cli")
        .unwrap()
        .args([
            "series",
            "--period",
            "1.0",
            "--harmonics",
            "3",
            "--steps",
            "3000",
        ])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("Fourier coefficients:"), "stdout: {stdout}");
    // Header plus C0..C3, one line each. A one-third duty cycle averages to a
    // third of the amplitude.
    assert_eq!(stdout.lines().count(), 5);
    assert!(stdout.contains("C0: 0.33"), "stdout: {stdout}");
}

#[test]
fn series_writes_svg_chart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pulse.svg");
    Command::cargo_bin("fftlite-cli")
        .unwrap()
        .args([
            "series",
            "--period",
            "1.0",
            "--harmonics",
            "2",
            "--steps",
            "3000",
            "--svg-output",
        ])
        .arg(&path)
        .assert()
        .success();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("<svg"));
}
