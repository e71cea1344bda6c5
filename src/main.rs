//! Eidophone - glyph-to-frequency decoder
//!
//! Turns the glyphs of a folio into a layered sine chord and a Chladni-style
//! interference image.

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use eidophone::cli::Args;
use eidophone::params::EngineConfig;
use eidophone::viewer::TerminalViewer;
use eidophone::Engine;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install log subscriber")?;

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load config '{}'", path.display()))?,
        None => EngineConfig::default(),
    };

    let engine = Engine::from_config(config).context("Failed to initialize engine")?;
    let mut viewer = TerminalViewer::new(io::stdout(), engine.config().output.preview_columns);

    let run = engine
        .render_folio(&args.folio, args.run_options(), &mut viewer)
        .with_context(|| format!("Failed to render folio '{}'", args.folio))?;

    info!(
        "Done: {} glyphs, {} samples, {}x{} field",
        run.rendering.glyph_count(),
        run.rendering.waveform.len(),
        run.rendering.field.size(),
        run.rendering.field.size()
    );
    Ok(())
}
