use std::fs;
use std::process::{Command, Output};

use retro_bitmaps::{Console, Logo, HEADER_SIZE};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_retro-bitmaps"))
        .args(args)
        .output()
        .expect("could not run tool")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn list_shows_every_symbol() {
    let out = run(&["list"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.starts_with("asset table 1.0.0"));
    for logo in Logo::ALL {
        assert!(text.contains(logo.symbol()), "{}", logo.symbol());
    }
    for console in Console::ALL {
        assert!(text.contains(console.header_symbol()));
        assert!(text.contains(console.logo_symbol()));
    }
    assert_eq!(text.lines().count(), 20);
    let gb = text.lines().find(|l| l.starts_with("header_gb ")).unwrap();
    assert!(gb.trim_end().ends_with("Game Boy"), "{}", gb);
}

#[test]
fn check_passes() {
    let out = run(&["check"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim(), "ok");
}

#[test]
fn exported_logo_matches_compiled_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rgo.img");
    let out = run(&["export", "logo_rgo", "-o", path.to_str().unwrap()]);
    assert!(out.status.success());
    assert_eq!(fs::read(&path).unwrap(), Logo::Rgo.flat_bytes());

    let out = run(&["inspect", path.to_str().unwrap()]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("97x19"));
    assert!(text.contains("matches logo_rgo"));
}

#[test]
fn export_split_image() {
    let dir = tempfile::tempdir().unwrap();
    let flat = dir.path().join("gb.img");
    let raw = dir.path().join("gb.dat");
    assert!(run(&["export", "logo_gb", "-o", flat.to_str().unwrap()]).status.success());
    assert!(run(&["export", "header_gb", "--raw", "-o", raw.to_str().unwrap()]).status.success());

    let bitmap = Console::GameBoy.bitmap();
    let flat = fs::read(&flat).unwrap();
    assert_eq!(&flat[..HEADER_SIZE], bitmap.header.as_bytes());
    assert_eq!(&flat[HEADER_SIZE..], bitmap.pixels);
    assert_eq!(fs::read(&raw).unwrap(), bitmap.pixels);
}

#[test]
fn inspect_split_export_names_console() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gb.img");
    assert!(run(&["export", "logo_gb", "-o", path.to_str().unwrap()]).status.success());
    let out = run(&["inspect", path.to_str().unwrap()]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("16x12, 24 payload bytes"));
    assert!(text.contains("matches Game Boy (header_gb/logo_gb)"), "{}", text);
}

#[test]
fn unknown_symbol_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("x.img");
    let out = run(&["export", "logo_snes", "-o", path.to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown symbol"));
    assert!(!path.exists());
}

#[test]
fn inspect_rejects_truncated_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.img");
    fs::write(&path, [16, 0, 0, 0, 12]).unwrap();
    let out = run(&["inspect", path.to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("not an image record"));
}
