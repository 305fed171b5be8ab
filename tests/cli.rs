// SPDX-License-Identifier: MPL-2.0
use icon_forge::domain::icon::IconSet;
use icon_forge::export::verify_iconset;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn icon_forge(workdir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_icon_forge"))
        .args(args)
        .current_dir(workdir)
        .env_remove("ICON_FORGE_CONFIG")
        .env_remove("ICON_FORGE_OUTPUT_DIR")
        .env_remove("ICON_FORGE_LOG")
        .env("XDG_CONFIG_HOME", workdir.join("xdg"))
        .output()
        .expect("Failed to run icon_forge")
}

#[test]
fn test_missing_source_exits_non_zero_without_output() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let output = icon_forge(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("AppIcon.appiconset").exists());
    assert!(!dir.path().join("icon_preview.png").exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("icon_source.png"), "{stderr}");
}

#[test]
fn test_undecodable_source_exits_non_zero_without_output() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("bad.png"), b"this is not a png").expect("Failed to write source");

    let output = icon_forge(dir.path(), &["bad.png"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("AppIcon.appiconset").exists());
    assert!(!dir.path().join("icon_preview.png").exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bad.png"), "{stderr}");
}

#[test]
fn test_xcode_project_layout_is_created() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let out = "MacCoolClean/Assets.xcassets/AppIcon.appiconset";

    let output = icon_forge(dir.path(), &["--render", "-q", "--output-dir", out]);

    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(dir.path().join(out).join("Contents.json").is_file());
}

#[test]
fn test_bad_arguments_exit_with_two() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let output = icon_forge(dir.path(), &["--no-such-flag"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_help_succeeds() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let output = icon_forge(dir.path(), &["--help"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("--render"));
}

#[test]
fn test_render_then_check() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let output = icon_forge(dir.path(), &["--render", "-q"]);
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let out = dir.path().join("AppIcon.appiconset");
    assert!(verify_iconset(&out, &IconSet::macos())
        .expect("Failed to verify iconset")
        .is_consistent());
    let preview = image_rs::open(dir.path().join("icon_preview.png")).expect("Failed to open preview");
    assert_eq!((preview.width(), preview.height()), (512, 512));

    assert!(icon_forge(dir.path(), &["--check"]).status.success());

    fs::remove_file(out.join("icon_32x32.png")).expect("Failed to remove icon");
    assert_eq!(icon_forge(dir.path(), &["--check"]).status.code(), Some(1));
}

#[test]
fn test_source_image_with_output_dir() {
    let dir = tempdir().expect("Failed to create temporary directory");
    image_rs::RgbaImage::from_pixel(64, 48, image_rs::Rgba([200, 40, 40, 255]))
        .save(dir.path().join("logo.png"))
        .expect("Failed to write source image");

    let output = icon_forge(
        dir.path(),
        &["--output-dir", "build/Logo.appiconset", "--preview", "build/preview.png", "logo.png"],
    );
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(dir.path().join("build/Logo.appiconset/icon_512x512@2x.png").is_file());
    assert!(dir.path().join("build/preview.png").is_file());
}

#[test]
fn test_unparsable_settings_file_fails() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("icon_forge.toml"), "style = ").expect("Failed to write settings");

    let output = icon_forge(dir.path(), &["--render"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("AppIcon.appiconset").exists());
}

#[test]
fn test_write_config_round_trips() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let output = icon_forge(dir.path(), &["--write-config", "icon_forge.toml"]);
    assert!(output.status.success());

    let loaded = icon_forge::config::load_from_path(&dir.path().join("icon_forge.toml"))
        .expect("Failed to load written settings");
    assert_eq!(loaded.icon_set().expect("Invalid icon set"), IconSet::macos());
}
