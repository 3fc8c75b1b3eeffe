use crate::colors::WhitenessOptions;
use crate::diagnostics::RenderOptions;
use crate::types::Point2i;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct SideProfileConfig {
    pub input: PathBuf,
    pub sides: Vec<SideConfig>,
    #[serde(default)]
    pub whiteness: WhitenessOptions,
    #[serde(default)]
    pub render: RenderOptions,
    pub output: SideOutputConfig,
}

/// A side is sampled from `start` to `end`, both inclusive, as `[x, y]`.
#[derive(Debug, Deserialize)]
pub struct SideConfig {
    pub name: String,
    pub start: Point2i,
    pub end: Point2i,
}

#[derive(Debug, Deserialize)]
pub struct SideOutputConfig {
    /// Directory receiving `side_NNN.png` overlays and `sheet.png`.
    pub dir: PathBuf,
    pub report_json: Option<PathBuf>,
    /// Minimum digit count of the overlay index.
    #[serde(default = "default_index_width")]
    pub index_width: usize,
}

fn default_index_width() -> usize {
    3
}

pub fn load_config(path: &Path) -> Result<SideProfileConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: SideProfileConfig = serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    config
        .render
        .validate()
        .map_err(|e| format!("Invalid config {}: {e}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_config_with_defaults() {
        let json = r#"{
            "input": "data/photo.jpg",
            "sides": [{ "name": "top", "start": [0, 0], "end": [9, 0] }],
            "output": { "dir": "out" }
        }"#;
        let config: SideProfileConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.sides.len(), 1);
        assert_eq!(config.sides[0].end, Point2i::new(9, 0));
        assert_eq!(config.whiteness, WhitenessOptions::default());
        assert_eq!(config.render, RenderOptions::default());
        assert_eq!(config.output.index_width, 3);
        assert!(config.output.report_json.is_none());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let json = r#"{
            "input": "a.png",
            "sides": [],
            "whiteness": { "min_intensity": 200 },
            "render": { "graph_height": 32 },
            "output": { "dir": "out", "index_width": 5 }
        }"#;
        let config: SideProfileConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.whiteness.percentile, 5.0);
        assert_eq!(config.whiteness.min_intensity, 200);
        assert_eq!(config.render.graph_height, 32);
        assert_eq!(config.render.strip_width, 256);
        assert_eq!(config.output.index_width, 5);
    }

    #[test]
    fn oversized_render_section_is_rejected() {
        let dir = std::env::temp_dir().join("sides_diagnostics_config_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("huge_render.json");
        fs::write(
            &path,
            r#"{
                "input": "a.png",
                "sides": [],
                "render": { "strip_width": 18446744073709551615 },
                "output": { "dir": "out" }
            }"#,
        )
        .unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(err.contains("strip_width"), "{err}");
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_config(Path::new("does/not/exist.json")).unwrap_err();
        assert!(err.contains("does/not/exist.json"), "{err}");
    }
}
