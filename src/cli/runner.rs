use std::io::Write;

use tracing::info;
use tracing_subscriber::EnvFilter;

use emblem_resize::{EmblemName, ResizeConfig, process_emblems};

use super::args::CliArgs;
use super::errors::AppError;

pub const DONE_MESSAGE: &str = "Done resizing emblem images!";

/// Defaults, then the optional JSON file, then explicit flags.
pub fn resolve_config(args: &CliArgs) -> Result<ResizeConfig, AppError> {
    let mut config = match &args.config {
        Some(path) => {
            ResizeConfig::from_json_file(path).map_err(|source| AppError::ConfigFile {
                path: path.clone(),
                source,
            })?
        }
        None => ResizeConfig::default(),
    };

    if let Some(dir) = &args.base_dir {
        config.base_dir = dir.clone();
    }
    if let Some(names) = &args.names {
        config.names = names
            .iter()
            .map(|name| EmblemName::new(name.trim()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| AppError::InvalidNames { source })?;
    }
    if let Some(height) = args.target_height {
        config.target_height = height;
    }

    config.validate()?;
    Ok(config)
}

/// Run the batch, writing progress lines and the final message to `out`.
pub fn run<W: Write>(args: CliArgs, out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let config = resolve_config(&args)?;
    info!("Resolved config: {:?}", config);

    let mut write_error = None;
    process_emblems(&config, |outcome| {
        if write_error.is_none() {
            write_error = writeln!(out, "{outcome}").err();
        }
    })
    .map_err(AppError::from)?;
    if let Some(e) = write_error {
        return Err(e.into());
    }

    writeln!(out, "{DONE_MESSAGE}")?;
    out.flush()?;
    Ok(())
}
