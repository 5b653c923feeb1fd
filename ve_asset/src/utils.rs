use anyhow::{anyhow, Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub fn file_name(path: &Path) -> Result<&str> {
    path.file_stem()
        .ok_or_else(|| anyhow!("No file stem found"))?
        .to_str()
        .ok_or_else(|| anyhow!("Can't convert file stem to string"))
}

pub fn combine_path(directory: &Path, file_name: &str, extension: &str) -> Result<PathBuf> {
    Ok(directory.join(format!("{}.{}", file_name, extension)))
}

/// Output folder of `path`, mirroring its location below `input_root`. Created if missing.
pub fn mirror_dir(input_root: &Path, output_root: &Path, path: &Path) -> Result<PathBuf> {
    let relative = path
        .parent()
        .and_then(|dir| dir.strip_prefix(input_root).ok())
        .unwrap_or_else(|| Path::new(""));

    let dir = output_root.join(relative);
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Could not create output folder: {}", dir.display()))?;
    }
    Ok(dir)
}

pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Could not read file: {}", path.display()))
}

pub fn write_file(target: &Path, data: &[u8]) -> Result<()> {
    fs::write(target, data)
        .with_context(|| format!("Could not write data to file: {}", target.display()))
}
