use std::io::Write;

use notation_translator::translators::OptionsError;
use notation_translator::{build_lpsr_from_msr, ScoreOutputKind, TranslationOptions};

fn options_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write options");
    file
}

#[test]
fn test_yaml_options_file() {
    let file = options_file(
        ".yaml",
        "include_clefs: false\nno_tempos: true\nscore_output_kind: parts-one-file\n",
    );
    let options = TranslationOptions::from_file(file.path()).expect("options load");

    assert!(!options.include_clefs);
    assert!(options.no_tempos);
    assert_eq!(options.score_output_kind, ScoreOutputKind::PartsOneFile);
    assert!(options.insert_bar_checks, "unset fields keep their defaults");
}

#[test]
fn test_json_options_file() {
    let file = options_file(
        ".json",
        r#"{ "compress_full_measure_rests": true, "braille": { "lines_per_page": 20 } }"#,
    );
    let options = TranslationOptions::from_file(file.path()).expect("options load");

    assert!(options.compress_full_measure_rests);
    assert_eq!(options.braille.lines_per_page, 20);
    assert_eq!(options.braille.cells_per_line, 40);
}

#[test]
fn test_empty_document_gives_defaults() {
    let options = TranslationOptions::from_json_str("{}").expect("options load");
    assert_eq!(options, TranslationOptions::default());
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = TranslationOptions::from_file(&dir.path().join("absent.yaml"));
    assert!(matches!(result, Err(OptionsError::Io(_))));
}

#[test]
fn test_malformed_yaml_is_reported() {
    let file = options_file(".yml", "include_clefs: [not, a, bool]\n");
    assert!(matches!(
        TranslationOptions::from_file(file.path()),
        Err(OptionsError::Yaml(_))
    ));
}

#[test]
fn test_missing_score_is_a_precondition_error() {
    let result = build_lpsr_from_msr(None, &TranslationOptions::default());
    assert!(matches!(result, Err(notation_translator::TranslationError::MissingScore)));
}
