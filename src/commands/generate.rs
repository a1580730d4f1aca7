use std::sync::Arc;

use anyhow::{Context, Result};

use pwa_gen::domain::ports::{GenerateEvent, GenerateEventSink, NoopEventSink};
use pwa_gen::infrastructure::{JsonEventSink, TracingEventSink};
use pwa_gen::presentation::{
    create_generate_use_case, create_renderer, supports_unicode, EmbeddingArg, OutputFormat,
    ProjectArgs,
};

pub fn cmd_generate(
    project: &ProjectArgs,
    embedding: Option<EmbeddingArg>,
    dry_run: bool,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let (mut options, config_warnings) = super::load_options(project)?;
    if let Some(embedding) = embedding {
        options.config.output.embedding = embedding.into();
    }
    options = options.with_dry_run(dry_run);

    // -v with --json streams NDJSON events instead of the summary object
    let stream_events = json && verbose > 0;
    let sink: Arc<dyn GenerateEventSink> = if stream_events {
        Arc::new(JsonEventSink::stdout())
    } else if verbose > 0 {
        Arc::new(TracingEventSink)
    } else {
        Arc::new(NoopEventSink)
    };

    if stream_events {
        for message in &config_warnings {
            sink.on_event(GenerateEvent::Warning {
                message: message.clone(),
            });
        }
    }

    let mut result = create_generate_use_case()
        .execute_with_events(&options, sink)
        .with_context(|| format!("generation failed for {}", project.project.display()))?;

    if stream_events {
        return Ok(());
    }

    let mut warnings = config_warnings;
    warnings.append(&mut result.warnings);
    result.warnings = warnings;

    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let renderer = create_renderer(format, supports_unicode(), verbose);
    println!("{}", renderer.render(&result));
    Ok(())
}
