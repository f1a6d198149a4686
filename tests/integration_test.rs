use std::process::Command;
use tempfile::TempDir;

/// Runs `appicon-gen -o <tempdir>` and checks that every icon PNG and the
/// Contents.json descriptor come out with the expected shape.
#[test]
fn test_full_generation_run() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("AppIcon.appiconset");

    let output = Command::new(env!("CARGO_BIN_EXE_appicon-gen"))
        .arg("-o")
        .arg(&output_dir)
        .output()
        .expect("Failed to run appicon-gen");

    if !output.status.success() {
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("appicon-gen run failed");
    }

    // One PNG per required size, each decoding to its square pixel size.
    let expected_sizes = [
        ("appicon-1024.png", 1024),
        ("appicon-180.png", 180),
        ("appicon-120.png", 120),
        ("appicon-167.png", 167),
        ("appicon-152.png", 152),
        ("appicon-76.png", 76),
        ("appicon-40.png", 40),
        ("appicon-29.png", 29),
        ("appicon-20.png", 20),
    ];

    for (filename, size) in expected_sizes {
        let path = output_dir.join(filename);
        assert!(path.exists(), "{filename} should exist");
        let img = image::open(&path).unwrap_or_else(|e| panic!("decode {filename}: {e}"));
        assert_eq!(img.width(), size, "{filename} width");
        assert_eq!(img.height(), size, "{filename} height");
    }

    // Contents.json is valid JSON with one entry per file, in order.
    let contents_path = output_dir.join("Contents.json");
    assert!(contents_path.exists(), "Contents.json should exist");

    let content = std::fs::read_to_string(&contents_path).expect("Failed to read Contents.json");
    let parsed: serde_json::Value =
        serde_json::from_str(&content).expect("Contents.json should be valid JSON");

    let images = parsed["images"]
        .as_array()
        .expect("Contents.json should have an images array");
    assert_eq!(images.len(), expected_sizes.len());

    for (entry, (filename, _)) in images.iter().zip(expected_sizes) {
        assert_eq!(entry["filename"], filename);
        assert!(entry["idiom"].is_string());
        assert_eq!(entry["platform"], "ios");
        assert!(entry["size"].is_string());
    }

    // Only the marketing entry omits its scale.
    assert_eq!(images[0]["idiom"], "ios-marketing");
    assert_eq!(images[0]["size"], "1024x1024");
    assert!(images[0].get("scale").is_none());
    for entry in &images[1..] {
        assert!(entry["scale"].is_string());
    }

    // The smallest phone entry halves pixels into points.
    let appicon_20 = images.last().unwrap();
    assert_eq!(appicon_20["idiom"], "iphone");
    assert_eq!(appicon_20["size"], "10x10");
    assert_eq!(appicon_20["scale"], "1x");

    assert_eq!(parsed["info"]["author"], "xcode");
    assert_eq!(parsed["info"]["version"], 1);
}

/// `--skip-manifest` still writes every PNG but no descriptor.
#[test]
fn test_skip_manifest_flag() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("icons");

    let output = Command::new(env!("CARGO_BIN_EXE_appicon-gen"))
        .arg("-o")
        .arg(&output_dir)
        .arg("--skip-manifest")
        .output()
        .expect("Failed to run appicon-gen");

    assert!(output.status.success());
    assert!(output_dir.join("appicon-1024.png").exists());
    assert!(output_dir.join("appicon-20.png").exists());
    assert!(!output_dir.join("Contents.json").exists());
}

/// Two runs into fresh directories produce byte-identical manifests.
#[test]
fn test_manifest_is_deterministic() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let first = temp_dir.path().join("first");
    let second = temp_dir.path().join("second");

    for dir in [&first, &second] {
        let output = Command::new(env!("CARGO_BIN_EXE_appicon-gen"))
            .arg("-o")
            .arg(dir)
            .output()
            .expect("Failed to run appicon-gen");
        assert!(output.status.success());
    }

    let a = std::fs::read(first.join("Contents.json")).unwrap();
    let b = std::fs::read(second.join("Contents.json")).unwrap();
    assert_eq!(a, b);
}
