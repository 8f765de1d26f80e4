//! Loading sources and configuration for the lint commands.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use recstyle_lib::config::CONFIG_FILE_NAME;
use recstyle_lib::{Config, Style};
use thiserror::Error;
use walkdir::WalkDir;

const EXTENSIONS: [&str; 4] = ["ts", "tsx", "mts", "cts"];
const SKIPPED_DIRS: [&str; 3] = ["node_modules", "bower_components", "jspm_packages"];

/// Label used for `-s/--source` input in diagnostics.
pub const INLINE_SOURCE_NAME: &str = "<source>";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("no input: pass files or directories, or -s/--source")]
    Missing,

    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to walk '{}': {source}", path.display())]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("no TypeScript files found in '{}'", .0.display())]
    NoFiles(PathBuf),

    #[error("'{}': {source}", path.display())]
    Config {
        path: PathBuf,
        source: recstyle_lib::Error,
    },
}

#[derive(Debug, Clone)]
pub struct Input {
    /// `None` for inline text.
    pub path: Option<PathBuf>,
    pub text: String,
}

impl Input {
    pub fn name(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => INLINE_SOURCE_NAME.to_string(),
        }
    }
}

/// Inline text wins over paths; directories are searched recursively.
pub fn load_inputs(paths: &[PathBuf], text: Option<&str>) -> Result<Vec<Input>, InputError> {
    if let Some(text) = text {
        return Ok(vec![Input {
            path: None,
            text: text.to_string(),
        }]);
    }
    if paths.is_empty() {
        return Err(InputError::Missing);
    }

    let mut inputs = Vec::new();
    for path in paths {
        if path.is_dir() {
            let files = collect_dir(path)?;
            if files.is_empty() {
                return Err(InputError::NoFiles(path.clone()));
            }
            for file in files {
                inputs.push(load_file(&file)?);
            }
        } else {
            inputs.push(load_file(path)?);
        }
    }
    Ok(inputs)
}

pub fn load_file(path: &Path) -> Result<Input, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Input {
        path: Some(path.to_path_buf()),
        text,
    })
}

fn collect_dir(dir: &Path) -> Result<Vec<PathBuf>, InputError> {
    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry));

    for entry in walker {
        let entry = entry.map_err(|source| InputError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() && is_typescript(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_skipped_dir(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.') || SKIPPED_DIRS.contains(&name))
}

/// `.d.ts` files are included: they are plain declarations.
pub fn is_typescript(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| EXTENSIONS.contains(&ext))
}

/// `--config` if given, else `recstyle.json` in `cwd` when present, else defaults.
/// `--style` overrides whatever was loaded.
pub fn resolve_config(
    config_path: Option<&Path>,
    style: Option<Style>,
    cwd: &Path,
) -> Result<Config, InputError> {
    let discovered = cwd.join(CONFIG_FILE_NAME);
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None if discovered.is_file() => Some(discovered),
        None => None,
    };

    let mut config = match path {
        Some(path) => {
            Config::load(&path).map_err(|source| InputError::Config { path, source })?
        }
        None => Config::default(),
    };
    if let Some(style) = style {
        config.style = style;
    }
    Ok(config)
}
