use crate::error::{Result, SprinklerError};
use dialoguer::Confirm;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The three switches read once at the start of each day.
///
/// Keys are PascalCase in the file (`EnableMod`, `WaterIndoors`,
/// `WaterPetBowl`); any missing key falls back to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Config {
    #[serde(default = "default_enabled")]
    pub enable_mod: bool,
    #[serde(default = "default_enabled")]
    pub water_indoors: bool,
    #[serde(default = "default_enabled")]
    pub water_pet_bowl: bool,
}

fn default_enabled() -> bool {
    true
}

/// Label and tooltip for each option, in file order.
pub const OPTIONS: [(&str, &str); 3] = [
    (
        "Enable Mod",
        "Enable or disable sprinkler watering for garden pots.",
    ),
    ("Water Indoors", "Water garden pots in indoor locations."),
    ("Water Pet Bowl", "Water Pet bowls."),
];

impl Config {
    /// Load from the override path or the standard locations.
    ///
    /// A missing file yields the defaults, the same as a first launch.
    pub fn load(config_override: Option<&PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p.clone(),
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            if config_override.is_some() {
                return Err(SprinklerError::Config(format!(
                    "Config file not found at {:?}",
                    config_path
                )));
            }
            tracing::warn!(
                "No config found at {:?} - using defaults. Run `sprinkler-plus init` to create one.",
                config_path
            );
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .map_err(|e| SprinklerError::Config(format!("Failed to read config: {}", e)))?;

        Self::parse(&config_str)
    }

    pub fn parse(content: &str) -> Result<Self> {
        // Substitute environment variables
        let content = Self::substitute_env_vars(content)?;

        // An empty or comment-only file is all defaults.
        if content.lines().all(|l| {
            let l = l.trim();
            l.is_empty() || l.starts_with('#')
        }) {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| SprinklerError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        Self::default_config_path()
    }

    /// Default path for writing new config files (~/.config/sprinkler-plus/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SprinklerError::Config("Cannot determine config directory".into()))?
            .join("sprinkler-plus");
        Ok(config_dir.join("config.yaml"))
    }

    /// Ask for each option and write the result to disk.
    /// Returns the new Config and the path it was written to.
    pub fn setup_interactive(config_override: Option<&PathBuf>) -> Result<(Self, PathBuf)> {
        let current = Self::load(config_override).unwrap_or_default();

        println!();
        println!("Sprinkler Plus settings");
        println!();

        let mut answers = [
            current.enable_mod,
            current.water_indoors,
            current.water_pet_bowl,
        ];
        for ((label, tooltip), answer) in OPTIONS.iter().zip(answers.iter_mut()) {
            println!("  {}", tooltip);
            *answer = Confirm::new()
                .with_prompt(format!("  {}", label))
                .default(*answer)
                .interact()
                .map_err(|e| SprinklerError::Config(format!("Input error: {}", e)))?;
        }
        let [enable_mod, water_indoors, water_pet_bowl] = answers;

        let config = Config {
            enable_mod,
            water_indoors,
            water_pet_bowl,
        };
        let path = config.save(config_override)?;

        println!();
        println!("Configuration saved to {}", path.display());
        println!();

        Ok((config, path))
    }

    /// Write to the override path, or the default path when none is given.
    pub fn save(&self, config_override: Option<&PathBuf>) -> Result<PathBuf> {
        let config_path = match config_override {
            Some(p) => p.clone(),
            None => Self::default_config_path()?,
        };
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| SprinklerError::Config(format!("Failed to serialize config: {}", e)))?;

        // Write with a header comment
        let content = format!(
            "# Sprinkler Plus Configuration\n# Generated by `sprinkler-plus`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        tracing::debug!("Wrote config to {:?}", config_path);
        Ok(config_path)
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| SprinklerError::Config(format!("Bad substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_mod: true,
            water_indoors: true,
            water_pet_bowl: true,
        }
    }
}
