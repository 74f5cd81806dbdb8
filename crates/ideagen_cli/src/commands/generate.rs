//! `ideagen generate` — one-shot generation.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use ideagen_core::{write_export, ExportFormat, IdeaSession};

use super::build_generator;
use crate::cli::IdeaArgs;
use crate::output;

pub async fn handle(
    topic: String,
    args: IdeaArgs,
    format: Option<ExportFormat>,
    out: Option<PathBuf>,
) -> Result<()> {
    let generator = build_generator(&args)?;
    let options = args.options();
    let mut session = IdeaSession::new();

    let spinner = output::spinner("Generating ideas…");
    let started = Instant::now();
    let result = session.generate(&generator, &topic, &options).await;
    output::spinner_clear(&spinner);
    let ideas = result?.to_vec();
    let took = started.elapsed().as_secs_f64();

    match (format, out) {
        (Some(format), None) => output::block(format.extension(), &format.render(&ideas)),
        (format, Some(path)) => {
            let format = format.unwrap_or_else(|| ExportFormat::from_path(&path));
            write_export(&path, format, &ideas)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            output::success(&format!("Generated {} ideas (took {took:.1}s)", ideas.len()));
            output::success(&format!(
                "Saved {} as {} to {}",
                ideas.len(),
                format.extension(),
                path.display()
            ));
        }
        (None, None) => {
            output::ideas(&ideas);
            output::success(&format!("Generated {} ideas (took {took:.1}s)", ideas.len()));
        }
    }
    Ok(())
}
