use std::path::PathBuf;

use super::*;

fn render(use_colors: bool, err: &RelocSimError) -> String {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(use_colors).write(&mut buf, err);
    String::from_utf8(buf).unwrap()
}

#[test]
fn config_error_has_help_line() {
    let out = render(false, &RelocSimError::Config("bracket 2 overlaps".to_string()));
    assert_eq!(
        out,
        "✖ Config: bracket 2 overlaps\n  help: Check the config file format or run `reloc-sim config validate`\n"
    );
}

#[test]
fn unknown_preset_lists_available() {
    let err = RelocSimError::UnknownPreset {
        name: "jp-1999".to_string(),
        available: vec!["jp-2024".to_string(), "jp-2025".to_string()],
    };
    let out = render(false, &err);
    assert!(out.starts_with("✖ Config: unknown preset 'jp-1999'\n"));
    assert!(out.contains("  × available: jp-2024, jp-2025\n"));
    assert!(out.contains("  help: Run `reloc-sim presets`"));
}

#[test]
fn file_read_shows_path_and_cause() {
    let err = RelocSimError::FileRead {
        path: PathBuf::from("missing.toml"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    };
    let out = render(false, &err);
    assert!(out.contains("✖ FileRead: missing.toml\n"));
    assert!(out.contains("  × no such file\n"));
    assert!(out.contains("  help: Check that the file path exists\n"));
}

#[test]
fn error_without_suggestion_is_one_line() {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(false).write_error(&mut buf, "IO", "broken pipe", None, None);
    assert_eq!(String::from_utf8(buf).unwrap(), "✖ IO: broken pipe\n");
}

#[test]
fn colored_error_wraps_heading() {
    let out = render(true, &RelocSimError::Config("bad".to_string()));
    assert!(out.starts_with("\x1b[1m\x1b[31m✖ Config:\x1b[0m bad\n"));
    assert!(out.contains("\x1b[36mhelp:\x1b[0m"));
}

#[test]
fn warning_format() {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(false).write_warning(
        &mut buf,
        "series length mismatch",
        Some("expected 8 values"),
        None,
    );
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(out, "⚠ Warning: series length mismatch\n  × expected 8 values\n");
}

#[test]
fn never_mode_disables_colors() {
    let mut buf = Vec::new();
    ErrorOutput::new(ColorMode::Never).write_error(&mut buf, "X", "y", None, None);
    assert!(!String::from_utf8(buf).unwrap().contains('\x1b'));
}
