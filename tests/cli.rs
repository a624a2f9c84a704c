use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pen_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pen").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

const SCRIPT: &str = r#"
[[step]]
action = "tool"
tool = "rectangle"

[[step]]
action = "drag"
points = [[10, 10], [30, 20], [60, 40]]

[[step]]
action = "tool"
tool = "pen"

[[step]]
action = "color"
color = "red"

[[step]]
action = "drag"
points = [[0, 70], [40, 70], [79, 70]]
"#;

#[test]
fn pen_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    pen_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Simple raster drawing canvas with scripted export",
        ));
}

#[test]
fn no_script_prints_overview() {
    let temp = TempDir::new().unwrap();
    pen_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("pen --script drawing.toml"));
}

#[test]
fn script_renders_png_to_output() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("drawing.toml");
    std::fs::write(&script, SCRIPT).unwrap();
    let output = temp.path().join("drawing");

    pen_cmd(&temp)
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .args(["--width", "80", "--height", "80", "--grid"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved:"));

    let written = temp.path().join("drawing.png");
    let bytes = std::fs::read(&written).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let mut reader = std::io::BufReader::new(std::fs::File::open(&written).unwrap());
    let surface = cairo::ImageSurface::create_from_png(&mut reader).unwrap();
    assert_eq!((surface.width(), surface.height()), (80, 80));
}

#[test]
fn script_without_output_uses_config_export_dir() {
    let temp = TempDir::new().unwrap();
    let export_dir = temp.path().join("exports");
    let config_dir = temp.path().join("pen");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        format!(
            "[export]\nsave_directory = {:?}\nfilename_template = \"scripted\"\n",
            export_dir.to_string_lossy()
        ),
    )
    .unwrap();

    let script = temp.path().join("drawing.toml");
    std::fs::write(&script, SCRIPT).unwrap();

    pen_cmd(&temp)
        .arg("--script")
        .arg(&script)
        .assert()
        .success();

    assert!(export_dir.join("scripted.png").exists());
}

#[test]
fn missing_script_fails() {
    let temp = TempDir::new().unwrap();
    pen_cmd(&temp)
        .args(["--script", "/nonexistent/drawing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read script"));
}

#[test]
fn invalid_background_color_is_rejected() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("drawing.toml");
    std::fs::write(&script, SCRIPT).unwrap();

    pen_cmd(&temp)
        .arg("--script")
        .arg(&script)
        .args(["--background", "#12zz34"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid hex color"));
}
