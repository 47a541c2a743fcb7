use crate::{constants::*, shapes::ShapeKind};
use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything that shapes the scene. Missing fields in a JSON file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    pub count: usize,
    pub palette_size: usize,
    pub shapes: Vec<ShapeKind>,
    /// Fixed seed for a reproducible scene; `None` draws one from entropy.
    pub seed: Option<u64>,
    pub clockwise_step: f32,
    pub counterclockwise_step: f32,
    pub spin_step: f32,
    /// Camera travel along -z per frame.
    pub dolly: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            count: OBJECT_COUNT,
            palette_size: PALETTE_SIZE,
            shapes: ShapeKind::DEFAULT_SET.to_vec(),
            seed: None,
            clockwise_step: CLOCKWISE_PIVOT_STEP,
            counterclockwise_step: COUNTERCLOCKWISE_PIVOT_STEP,
            spin_step: OBJECT_SPIN_STEP,
            dolly: 0.0,
        }
    }
}

impl SceneConfig {
    pub fn from_json_str(content: &str) -> anyhow::Result<Self> {
        let config: SceneConfig =
            serde_json::from_str(content).context("Failed to parse scene config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_json_str(&content).with_context(|| format!("in {}", path.display()))
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.shapes.is_empty() {
            bail!("shape set must not be empty");
        }
        if self.palette_size == 0 {
            bail!("palette size must be at least 1");
        }
        Ok(())
    }
}
