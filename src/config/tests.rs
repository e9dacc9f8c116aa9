use std::{io::Write, path::PathBuf};

use super::*;

#[test]
fn defaults_are_valid() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");

    assert_eq!(settings.logging.level, LevelFilter::WARN);
    assert_eq!(settings.logging.format, LogFormat::Compact);
    assert_eq!(settings.render.markdown_engine, MarkdownEngine::Comrak);
    assert_eq!(settings.render.footer_credit, DEFAULT_FOOTER_CREDIT);
}

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = RawSettings::default();
    raw.logging.level = Some("info".to_string());
    raw.render.markdown_engine = Some("comrak".to_string());

    let overrides = RenderOverrides {
        markdown_engine: Some("plain".to_string()),
        logging: LoggingOverrides {
            log_level: Some("debug".to_string()),
            log_json: None,
        },
        ..Default::default()
    };

    raw.apply_render_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
    assert_eq!(settings.render.markdown_engine, MarkdownEngine::Plain);
}

#[test]
fn cli_json_logging_enforces_format() {
    let mut raw = RawSettings::default();
    let overrides = LoggingOverrides {
        log_json: Some(true),
        ..Default::default()
    };

    raw.apply_logging_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.logging.format, LogFormat::Json);
}

#[test]
fn invalid_log_level_is_rejected() {
    let mut raw = RawSettings::default();
    raw.logging.level = Some("loud".to_string());

    let err = Settings::from_raw(raw).expect_err("level must be rejected");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "logging.level",
            ..
        }
    ));
}

#[test]
fn unknown_markdown_engine_is_rejected() {
    let mut raw = RawSettings::default();
    raw.render.markdown_engine = Some("pandoc".to_string());

    let err = Settings::from_raw(raw).expect_err("engine must be rejected");
    assert!(err.to_string().contains("render.markdown_engine"));
}

#[test]
fn blank_footer_credit_is_rejected() {
    let mut raw = RawSettings::default();
    raw.render.footer_credit = Some("   ".to_string());

    assert!(Settings::from_raw(raw).is_err());
}

#[test]
fn render_settings_produce_options() {
    let mut raw = RawSettings::default();
    raw.render.footer_credit = Some(" Made by the docs team. ".to_string());
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(
        settings.render.options().footer_credit,
        "Made by the docs team."
    );
}

#[test]
fn config_file_layer_is_applied() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp config file");
    writeln!(
        file,
        "[render]\nmarkdown_engine = \"plain\"\nfooter_credit = \"From file.\"\n\n[logging]\njson = true"
    )
    .expect("write config");

    let args = CliArgs::parse_from([
        "quaderno".into(),
        "--config-file".into(),
        file.path().as_os_str().to_owned(),
        "inspect".into(),
        "--book".into(),
        "book.json".into(),
    ]);
    let settings = load(&args).expect("settings load");

    assert_eq!(settings.render.markdown_engine, MarkdownEngine::Plain);
    assert_eq!(settings.render.footer_credit, "From file.");
    assert_eq!(settings.logging.format, LogFormat::Json);
}

#[test]
fn parse_render_arguments() {
    let args = CliArgs::parse_from([
        "quaderno",
        "render",
        "--topic",
        "rust",
        "--book",
        "book.json",
        "--resources",
        "resources.md",
        "--output",
        "book.html",
        "--markdown-engine",
        "plain",
        "--log-json",
        "yes",
    ]);

    match args.command {
        Command::Render(render) => {
            assert_eq!(render.topic, "rust");
            assert_eq!(render.book, PathBuf::from("book.json"));
            assert_eq!(render.resources, Some(PathBuf::from("resources.md")));
            assert_eq!(render.assessments, None);
            assert_eq!(render.output, Some(PathBuf::from("book.html")));
            assert_eq!(render.overrides.markdown_engine.as_deref(), Some("plain"));
            assert_eq!(render.overrides.logging.log_json, Some(true));
        }
        other => panic!("expected render command, got {other:?}"),
    }
}

#[test]
fn parse_inspect_arguments() {
    let args = CliArgs::parse_from(["quaderno", "inspect", "--book", "book.md"]);

    match args.command {
        Command::Inspect(inspect) => assert_eq!(inspect.book, PathBuf::from("book.md")),
        other => panic!("expected inspect command, got {other:?}"),
    }
}

#[test]
fn render_requires_topic_and_book() {
    assert!(CliArgs::try_parse_from(["quaderno", "render", "--book", "b.json"]).is_err());
    assert!(CliArgs::try_parse_from(["quaderno", "render", "--topic", "rust"]).is_err());
}
