use std::path::{Path, PathBuf};

use crate::output::args::OutputArgs;
use crate::output::errors::OutputError;

pub fn output_path(args: &OutputArgs, dataset: &str) -> PathBuf {
    let mut name_parts: Vec<String> = Vec::new();
    if !args.prefix.is_empty() {
        name_parts.push(args.prefix.clone());
    }
    name_parts.push(dataset.to_string());
    if !args.suffix.is_empty() {
        name_parts.push(args.suffix.clone());
    }
    let out_filename = format!("{}.json", name_parts.join("_"));
    Path::new(&args.out).join(out_filename)
}

pub fn write_output(args: &OutputArgs, dataset: &str, contents: &str) -> Result<PathBuf, OutputError> {
    std::fs::create_dir_all(&args.out).map_err(|e| {
        OutputError::FileError(format!("failed to create {}: {}", args.out, e))
    })?;
    let out_path = output_path(args, dataset);
    std::fs::write(&out_path, contents).map_err(|e| {
        OutputError::FileError(format!("failed to write report {}: {}", dataset, e))
    })?;
    tracing::info!(path = %out_path.display(), "wrote report");
    Ok(out_path)
}
