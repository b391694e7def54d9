use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use madam::cli::{CliArgs, InputSource, RunConfig};
use madam::controller::{BufferMirror, BufferSurface, HighlightController};
use madam::document::render_document;
use madam::{HighlightMarker, MirrorConfig};

fn main() -> Result<()> {
    madam::tracing::init();

    let config = CliArgs::parse()
        .into_config()
        .map_err(|e| anyhow::anyhow!(e))?;

    let raw = read_input(&config.source)?;
    let output = run(&config, &raw);
    print!("{}", output);

    Ok(())
}

/// Read the raw text from the configured source.
fn read_input(source: &InputSource) -> Result<String> {
    match source {
        InputSource::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        InputSource::Clipboard => {
            let mut clipboard =
                arboard::Clipboard::new().context("Failed to access the clipboard")?;
            clipboard
                .get_text()
                .context("Clipboard has no text content")
        }
        InputSource::Stdin => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

/// Feed the raw text through the controller as one paste event and return
/// the mirror's output.
fn run(config: &RunConfig, raw: &str) -> String {
    let marker = match &config.class {
        Some(class) => HighlightMarker::new(class),
        None => MirrorConfig::load().marker(),
    };
    let class = marker.class().to_string();

    let mut controller =
        HighlightController::new(BufferSurface::new(), BufferMirror::new(), marker);
    controller.on_paste(raw);

    let lines = controller.mirror().lines();
    if config.document {
        render_document(lines, &class)
    } else {
        let mut out = String::new();
        for line in lines {
            out.push_str(line.as_str());
            out.push('\n');
        }
        out
    }
}
