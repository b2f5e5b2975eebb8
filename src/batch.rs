//! Generate press kits for many films at once.
//!
//! Every direct subdirectory of the batch root that contains a
//! `film_config.json` is one project. Projects are independent: each has
//! its own record, settings, images, and artifact, and a failure in one is
//! recorded in its [`BatchResult`] without touching the others.
//!
//! ## Parallelism
//!
//! Projects are processed in parallel using [rayon](https://docs.rs/rayon).
//! The thread count comes from `[processing] max_processes` in the batch
//! root's `epk.toml`, capped at the number of CPU cores (see
//! [`crate::config::effective_threads`]). Results keep the sorted project
//! order regardless of completion order.
//!
//! ## Report
//!
//! [`write_results`] saves every result to `batch_results.json` in the root.

use crate::generate::{self, GenerateError};
use crate::project::Project;
use crate::template::FILM_CONFIG_FILE;
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

pub const RESULTS_FILE: &str = "batch_results.json";

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Outcome for one project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResult {
    /// Project directory name.
    pub film: String,
    pub success: bool,
    pub html_path: Option<PathBuf>,
    /// SHA-256 of the artifact.
    pub digest: Option<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl BatchResult {
    fn new(film: String) -> Self {
        Self {
            film,
            success: false,
            html_path: None,
            digest: None,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

/// Project directories under `root`, sorted by name.
pub fn find_projects(root: &Path) -> Result<Vec<PathBuf>, BatchError> {
    let mut projects = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_dir() && entry.path().join(FILM_CONFIG_FILE).is_file() {
            projects.push(entry.into_path());
        }
    }
    Ok(projects)
}

/// Load, validate, and generate one project. Never fails: problems are
/// recorded in the result.
pub fn process_project(dir: &Path) -> BatchResult {
    let film = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string());
    let mut result = BatchResult::new(film);

    let project = match Project::load(dir, Path::new(FILM_CONFIG_FILE)) {
        Ok(project) => project,
        Err(e) => {
            tracing::error!(film = %result.film, error = %e, "failed to load project");
            result.errors.push(e.to_string());
            return result;
        }
    };

    let validation = project.validate();
    result.errors = validation.error_messages();
    result.warnings = validation.warning_messages();
    if !validation.is_valid() {
        tracing::warn!(
            film = %result.film,
            errors = result.errors.len(),
            "validation failed, skipping"
        );
        return result;
    }

    match write(&project) {
        Ok((path, digest)) => {
            result.html_path = Some(path);
            result.digest = Some(digest);
            result.success = true;
        }
        Err(e) => {
            tracing::error!(film = %result.film, error = %e, "failed to write press kit");
            result.errors.push(e.to_string());
        }
    }
    result
}

fn write(project: &Project) -> Result<(PathBuf, String), GenerateError> {
    let html = project.generate();
    let path = generate::write_artifact(&project.output_dir(), project.title(), &html)?;
    Ok((path, generate::artifact_digest(&html)))
}

/// Process every project under `root` in parallel.
#[tracing::instrument(skip_all, fields(root = %root.display()))]
pub fn process_all(root: &Path) -> Result<Vec<BatchResult>, BatchError> {
    let projects = find_projects(root)?;
    if projects.is_empty() {
        tracing::warn!("no film projects found");
        return Ok(Vec::new());
    }
    tracing::info!(projects = projects.len(), "processing films");

    Ok(projects
        .par_iter()
        .map(|dir| process_project(dir))
        .collect())
}

/// Save `results` as `batch_results.json` in `root`.
pub fn write_results(root: &Path, results: &[BatchResult]) -> Result<PathBuf, BatchError> {
    let path = root.join(RESULTS_FILE);
    std::fs::write(&path, serde_json::to_string_pretty(results)?)?;
    Ok(path)
}
