use std::path::Path;

use anyhow::Context;
use comscript::Config;
use config::{File, FileFormat};

/// Engine settings from an optional TOML file; missing keys keep their
/// defaults.
pub(crate) fn load(path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match path {
        Some(path) => path,
        None => return Ok(Config::default()),
    };
    let res: Config = config::Config::builder()
        .add_source(File::from(path).format(FileFormat::Toml))
        .build()
        .with_context(|| format!("Failed to load {path:?}"))?
        .try_deserialize()
        .with_context(|| format!("Invalid settings in {path:?}"))?;

    Ok(res)
}
