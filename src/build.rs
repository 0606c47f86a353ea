//! Renders every route to the output directory and copies static assets.
use std::fs;
use std::path::PathBuf;
use std::process::Termination;
use std::time::Instant;

use colored::{ColoredString, Colorize};
use log::info;

use crate::errors::BuildError;
use crate::logging::{format_elapsed_time, print_title, FormatElapsedTimeOptions};
use crate::route::Route;

/// Build options. Should be passed to [`build_site()`].
///
/// ## Example
/// ```rust,ignore
/// build_site(
///     routes![Index],
///     &BuildOptions {
///         output_dir: "public".into(),
///         ..Default::default()
///     },
/// )
/// ```
pub struct BuildOptions {
    pub output_dir: PathBuf,

    /// Directory of static files copied as-is into `output_dir/assets`.
    pub assets_dir: PathBuf,

    /// Whether to clean the output directory before building.
    pub clean_output_dir: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            output_dir: "dist".into(),
            assets_dir: "assets".into(),
            clean_output_dir: true,
        }
    }
}

/// Metadata returned by [`build_site()`] for a single page after a successful build.
#[derive(Debug)]
pub struct PageOutput {
    pub route: String,
    pub file_path: String,
}

/// Metadata returned by [`build_site()`] for a single static asset after a successful build.
///
/// A static asset is a file that is copied to the output directory without any processing.
#[derive(Debug)]
pub struct StaticAssetOutput {
    pub file_path: String,
    pub original_path: String,
}

/// Metadata returned by [`build_site()`] after a successful build.
#[derive(Debug)]
pub struct BuildOutput {
    pub start_time: Instant,
    pub pages: Vec<PageOutput>,
    pub static_files: Vec<StaticAssetOutput>,
}

impl BuildOutput {
    pub fn new(start_time: Instant) -> Self {
        Self {
            start_time,
            pages: Vec::new(),
            static_files: Vec::new(),
        }
    }

    fn add_page(&mut self, route: String, file_path: String) {
        self.pages.push(PageOutput { route, file_path });
    }

    fn add_static_file(&mut self, file_path: String, original_path: String) {
        self.static_files.push(StaticAssetOutput {
            file_path,
            original_path,
        });
    }
}

impl Termination for BuildOutput {
    fn report(self) -> std::process::ExitCode {
        0.into()
    }
}

pub fn build_site(
    routes: &[&dyn Route],
    options: &BuildOptions,
) -> Result<BuildOutput, BuildError> {
    let build_start = Instant::now();
    let mut build_metadata = BuildOutput::new(build_start);

    if options.clean_output_dir && options.output_dir.exists() {
        fs::remove_dir_all(&options.output_dir).map_err(|source| BuildError::CleanFailed {
            path: options.output_dir.clone(),
            source,
        })?;
    }

    fs::create_dir_all(&options.output_dir).map_err(|source| BuildError::CreateDirFailed {
        path: options.output_dir.clone(),
        source,
    })?;

    info!(target: "build", "Output directory: {}", options.output_dir.display());

    print_title("generating pages");

    let route_format_options = FormatElapsedTimeOptions {
        additional_fn: Some(&|msg: ColoredString| {
            let formatted_msg = format!("(+{})", msg);
            if msg.fgcolor.is_none() {
                formatted_msg.dimmed()
            } else {
                formatted_msg.into()
            }
        }),
        ..Default::default()
    };

    for route in routes {
        let route_start = Instant::now();

        let markup = route.render();
        let file_path = route.file_path(&options.output_dir);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).map_err(|source| BuildError::CreateDirFailed {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&file_path, markup.into_string()).map_err(|source| BuildError::WriteFailed {
            path: file_path.clone(),
            source,
        })?;

        info!(target: "pages", "{} -> {} {}", route.path(), file_path.to_string_lossy().dimmed(), format_elapsed_time(route_start.elapsed(), &route_format_options));

        build_metadata.add_page(
            route.path().to_string(),
            file_path.to_string_lossy().to_string(),
        );
    }

    copy_static_assets(options, &mut build_metadata)?;

    info!(target: "build", "{}", format!("Build completed in {}", format_elapsed_time(build_start.elapsed(), &FormatElapsedTimeOptions::default())).bold());

    Ok(build_metadata)
}

fn copy_static_assets(
    options: &BuildOptions,
    build_metadata: &mut BuildOutput,
) -> Result<(), BuildError> {
    if !options.assets_dir.is_dir() {
        return Ok(());
    }

    print_title("copying assets");

    let out_assets_dir = options.output_dir.join("assets");
    fs::create_dir_all(&out_assets_dir).map_err(|source| BuildError::CreateDirFailed {
        path: out_assets_dir.clone(),
        source,
    })?;

    let entries = fs::read_dir(&options.assets_dir).map_err(|source| BuildError::AssetCopyFailed {
        path: options.assets_dir.clone(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| BuildError::AssetCopyFailed {
            path: options.assets_dir.clone(),
            source,
        })?;

        let original_path = entry.path();
        if !original_path.is_file() {
            continue;
        }

        let file_path = out_assets_dir.join(entry.file_name());
        fs::copy(&original_path, &file_path).map_err(|source| BuildError::AssetCopyFailed {
            path: original_path.clone(),
            source,
        })?;

        info!(target: "assets", "{} -> {}", original_path.display(), file_path.to_string_lossy().dimmed());

        build_metadata.add_static_file(
            file_path.to_string_lossy().to_string(),
            original_path.to_string_lossy().to_string(),
        );
    }

    Ok(())
}
