use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::{debug, info, warn};

use crate::cli::RewriteArgs;
use crate::document::{self, OutputStyle};
use crate::mapping::ColorMapping;
use crate::pipeline::rewrite::rewrite_colors_with;

/// What a rewrite pass did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub changes: usize,
    /// Where the document was written, if it was.
    pub written: Option<PathBuf>,
}

impl RewriteOutcome {
    pub fn summary(&self) -> String {
        match (&self.written, self.changes) {
            (_, 0) => "no matching colors found, nothing written".to_string(),
            (Some(path), n) => format!("{n} colors changed, saved to {}", path.display()),
            (None, n) => format!("{n} colors would change (dry run)"),
        }
    }
}

/// Merge the mapping sources in precedence order: preset, then mapping
/// file, then `--set` pairs.
///
/// # Errors
///
/// Fails if the mapping file is unusable or no source was given.
pub fn build_mapping(args: &RewriteArgs) -> Result<ColorMapping> {
    let mut mapping = ColorMapping::default();
    if let Some(preset) = args.preset {
        mapping.merge(preset.mapping());
    }
    if let Some(path) = &args.map {
        mapping.merge(ColorMapping::from_json_file(path)?);
    }
    for (source, target) in &args.set {
        mapping.insert(*source, *target);
    }
    if mapping.is_empty() {
        bail!("no colors to map: pass --preset, --map or --set");
    }
    Ok(mapping)
}

/// Load the document, apply the mapping and persist the result unless
/// nothing changed or this is a dry run.
///
/// # Errors
///
/// Fails if the mapping or document cannot be loaded or the result cannot be
/// written.
pub fn run(args: &RewriteArgs) -> Result<RewriteOutcome> {
    let mapping = build_mapping(args)?;
    for (old, new) in mapping.iter() {
        debug!(%old, %new, "mapping");
    }

    let mut doc = document::load(&args.file)?;
    let changes = rewrite_colors_with(&mut doc, &mapping, |old, new| {
        info!(%old, %new, "recolored");
    })
    .with_context(|| format!("failed to recolor {}", args.file.display()))?;

    if changes == 0 {
        warn!(file = %args.file.display(), "no colors matched the mapping");
        return Ok(RewriteOutcome {
            changes,
            written: None,
        });
    }
    if args.dry_run {
        return Ok(RewriteOutcome {
            changes,
            written: None,
        });
    }

    let target = args.output.as_deref().unwrap_or(&args.file);
    document::save(target, &doc, output_style(args.pretty))?;
    info!(changes, path = %target.display(), "saved");
    Ok(RewriteOutcome {
        changes,
        written: Some(target.to_path_buf()),
    })
}

fn output_style(pretty: bool) -> OutputStyle {
    if pretty {
        OutputStyle::Pretty
    } else {
        OutputStyle::Compact
    }
}
