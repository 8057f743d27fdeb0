//! Reading and writing the world snapshot the host hands over each morning.
//!
//! Files ending in `.json` are JSON, everything else is YAML.

use crate::error::{Result, SprinklerError};
use crate::models::World;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Yaml,
    Json,
}

impl SnapshotFormat {
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SnapshotFormat::Json,
            _ => SnapshotFormat::Yaml,
        }
    }
}

pub fn parse(content: &str, format: SnapshotFormat) -> Result<World> {
    let world: World = match format {
        SnapshotFormat::Json => serde_json::from_str(content)?,
        SnapshotFormat::Yaml => serde_yaml::from_str(content)?,
    };
    world.validate()?;
    Ok(world)
}

pub fn render(world: &World, format: SnapshotFormat) -> Result<String> {
    Ok(match format {
        SnapshotFormat::Json => serde_json::to_string_pretty(world)?,
        SnapshotFormat::Yaml => serde_yaml::to_string(world)?,
    })
}

pub fn load(path: &Path) -> Result<World> {
    if !path.exists() {
        return Err(SprinklerError::InvalidData(format!(
            "World snapshot not found at {:?}",
            path
        )));
    }

    let content = std::fs::read_to_string(path)?;
    let world = parse(&content, SnapshotFormat::for_path(path))?;
    tracing::debug!(
        "Loaded {} locations from {:?}",
        world.locations.len(),
        path
    );
    Ok(world)
}

pub fn save(world: &World, path: &Path) -> Result<()> {
    let content = render(world, SnapshotFormat::for_path(path))?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    tracing::debug!("Wrote world snapshot to {:?}", path);
    Ok(())
}
