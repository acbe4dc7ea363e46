use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn fixture(name: &str) -> PathBuf {
    let path = repo_root().join("fixtures").join("line").join(name);
    assert!(path.exists(), "fixture missing: {}", path.display());
    path
}

#[test]
fn cli_renders_svg_to_stdout() {
    let exe = assert_cmd::cargo_bin!("chartlet-cli");
    let output = Command::new(exe)
        .args(["render", fixture("basic.json").to_string_lossy().as_ref()])
        .output()
        .expect("run");
    assert!(output.status.success());

    let svg = String::from_utf8(output.stdout).expect("utf8");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"class="basic-line""#));
    assert!(svg.contains(r#"d="M 0 100 L 50 0 L 100 60""#));
    assert_eq!(svg.matches("<path").count(), 2);
    assert!(svg.contains(r#"style="opacity: 0.9; stroke-dasharray: 6 3""#));
}

#[test]
fn cli_layout_uses_auto_size() {
    let exe = assert_cmd::cargo_bin!("chartlet-cli");
    let output = Command::new(exe)
        .args([
            "layout",
            "--auto-width",
            "200",
            "--auto-height",
            "100",
            fixture("categories.json").to_string_lossy().as_ref(),
        ])
        .output()
        .expect("run");
    assert!(output.status.success());

    let scene: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(scene["width"], serde_json::json!(200.0));
    let paths = scene["paths"].as_array().expect("paths");
    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0]["strokeWidth"], serde_json::json!(3.0));
    assert_eq!(paths[1]["d"], "M 0 10 L 100 100 L 200 60");
}

#[test]
fn cli_renders_png_with_default_out_path_for_file_input() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let tmp_fixture = tmp.path().join("basic.json");
    fs::copy(fixture("basic.json"), &tmp_fixture).expect("copy fixture");
    let expected_out = tmp_fixture.with_extension("png");

    let exe = assert_cmd::cargo_bin!("chartlet-cli");
    Command::new(exe)
        .args([
            "render",
            "--format",
            "png",
            "--scale",
            "2",
            tmp_fixture.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let file = fs::File::open(&expected_out).expect("open png");
    let decoder = png::Decoder::new(file);
    let reader = decoder.read_info().expect("png header");
    let info = reader.info();
    assert_eq!((info.width, info.height), (200, 200));
}

#[test]
fn cli_rejects_missing_series() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("empty.json");
    fs::write(&input, r#"{ "width": 10, "height": 10 }"#).expect("write input");

    let exe = assert_cmd::cargo_bin!("chartlet-cli");
    let output = Command::new(exe)
        .args(["render", input.to_string_lossy().as_ref()])
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Bad data argument: expected series"));
}

#[test]
fn cli_generate_is_reproducible_with_seed() {
    let run = || {
        let exe = assert_cmd::cargo_bin!("chartlet-cli");
        let output = Command::new(exe)
            .args(["generate", "groups", "--length", "4", "--values", "3", "--seed", "9"])
            .output()
            .expect("run");
        assert!(output.status.success());
        output.stdout
    };
    let first = run();
    assert_eq!(first, run());

    let data: serde_json::Value = serde_json::from_slice(&first).expect("json");
    let obj = data.as_object().expect("object");
    assert_eq!(obj.keys().collect::<Vec<_>>(), ["A", "B", "C", "D"]);
    assert!(obj.values().all(|v| v.as_array().is_some_and(|a| a.len() == 3)));
}

#[test]
fn cli_generated_categories_lay_out_as_a_series() {
    let exe = assert_cmd::cargo_bin!("chartlet-cli");
    let output = Command::new(&exe)
        .args(["generate", "categories", "--length", "5", "--seed", "3"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let record: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");

    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("generated.json");
    let props = serde_json::json!({ "series": [record], "width": 100, "height": 50 });
    fs::write(&input, props.to_string()).expect("write props");

    let output = Command::new(&exe)
        .arg("layout")
        .arg(&input)
        .output()
        .expect("run");
    assert!(output.status.success());
    let scene: serde_json::Value = serde_json::from_slice(&output.stdout).expect("scene json");
    let d = scene["paths"][0]["d"].as_str().expect("path d");
    assert_eq!(d.matches('L').count(), 4);
}

#[test]
fn cli_usage_errors_exit_with_two() {
    let exe = assert_cmd::cargo_bin!("chartlet-cli");
    let output = Command::new(exe)
        .args(["render", "--format", "gif"])
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(2));
}
