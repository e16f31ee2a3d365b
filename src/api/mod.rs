//! High-level library API: resize one emblem or a configured batch of emblems.
//! Prefer these entrypoints over the low-level `core` and `io` modules.
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::core::params::ResizeConfig;
use crate::core::processing::resize::resize_to_height;
use crate::error::Result;
use crate::io::{read_image, write_png};
use crate::types::{Dimensions, EmblemName};

/// What happened to a single emblem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmblemOutcome {
    /// The resized image was written to `output`.
    Created {
        name: EmblemName,
        output: PathBuf,
        dimensions: Dimensions,
    },
    /// The full-resolution source did not exist; nothing was written.
    Missing { name: EmblemName, input: PathBuf },
}

impl EmblemOutcome {
    pub fn name(&self) -> &EmblemName {
        match self {
            EmblemOutcome::Created { name, .. } | EmblemOutcome::Missing { name, .. } => name,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, EmblemOutcome::Created { .. })
    }
}

/// The console progress line for this outcome.
impl fmt::Display for EmblemOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmblemOutcome::Created {
                name, dimensions, ..
            } => write!(f, "Created {} ({})", name.output_file_name(), dimensions),
            EmblemOutcome::Missing { input, .. } => {
                write!(f, "Warning: {} not found", input.display())
            }
        }
    }
}

/// Ordered outcomes of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub outcomes: Vec<EmblemOutcome>,
}

impl BatchReport {
    pub fn created(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_created()).count()
    }

    pub fn missing(&self) -> usize {
        self.outcomes.len() - self.created()
    }
}

/// Resize `{base_dir}/{name}_fullres.png` to `target_height` and write `{base_dir}/{name}.png`.
///
/// A missing source is reported as [`EmblemOutcome::Missing`]; every other failure
/// is returned as an error.
pub fn process_emblem(
    base_dir: &Path,
    name: &EmblemName,
    target_height: u32,
) -> Result<EmblemOutcome> {
    let input = name.input_path(base_dir);
    if !input.exists() {
        warn!("Source not found: {:?}", input);
        return Ok(EmblemOutcome::Missing {
            name: name.clone(),
            input,
        });
    }

    let output = name.output_path(base_dir);
    info!("Processing: {:?} -> {:?}", input, output);

    let src = read_image(&input)?;
    let (resized, dimensions) = resize_to_height(name.as_str(), &src, target_height)?;
    drop(src);
    write_png(&output, &resized)?;

    debug!("Wrote {:?} ({})", output, dimensions);
    Ok(EmblemOutcome::Created {
        name: name.clone(),
        output,
        dimensions,
    })
}

/// Process every configured emblem in order.
///
/// `on_outcome` sees each outcome as soon as it is known, so progress already
/// made stays visible when a later emblem fails. The first error stops the run;
/// outputs written before it are kept.
pub fn process_emblems<F>(config: &ResizeConfig, mut on_outcome: F) -> Result<BatchReport>
where
    F: FnMut(&EmblemOutcome),
{
    config.validate()?;
    info!(
        "Resizing {} emblem(s) in {:?} to height {}",
        config.names.len(),
        config.base_dir,
        config.target_height
    );

    let mut report = BatchReport::default();
    for name in &config.names {
        let outcome = process_emblem(&config.base_dir, name, config.target_height)?;
        on_outcome(&outcome);
        report.outcomes.push(outcome);
    }

    info!(
        "Batch complete: created={} missing={}",
        report.created(),
        report.missing()
    );
    Ok(report)
}
