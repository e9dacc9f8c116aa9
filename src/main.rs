use std::process;

use quaderno::{
    application::{
        error::AppError,
        ingest::parse_book,
        render::{BookRenderer, RenderRequest},
    },
    config::{self, Command, InspectArgs, RenderArgs, Settings},
    infra::{files, telemetry},
};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

fn main() {
    if let Err(error) = run() {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_max_level(Level::ERROR)
        .with_writer(std::io::stderr)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()?;

    telemetry::init(&settings.logging)?;

    match cli_args.command {
        Command::Render(args) => run_render(&settings, args),
        Command::Inspect(args) => run_inspect(args),
    }
}

fn run_render(settings: &Settings, args: RenderArgs) -> Result<(), AppError> {
    let request = RenderRequest::new(args.topic, files::read_text(&args.book)?)
        .with_curated_resources(files::read_optional(args.resources.as_deref())?)
        .with_assessments(files::read_optional(args.assessments.as_deref())?);

    let renderer =
        BookRenderer::with_engine(settings.render.markdown_engine, settings.render.options());
    let document = renderer.render(&request);

    files::write_document(args.output.as_deref(), &document)?;

    info!(
        target = "application::cli",
        book = %args.book.display(),
        engine = %settings.render.markdown_engine,
        bytes = document.len(),
        "book rendered"
    );
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<(), AppError> {
    let text = files::read_text(&args.book)?;
    let parsed = parse_book(&text);

    let mut json = serde_json::to_string_pretty(&parsed)?;
    json.push('\n');
    files::write_document(None, &json)?;
    Ok(())
}
