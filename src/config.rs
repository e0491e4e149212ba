use crate::layout::{Point, Size};
use crate::theme::Theme;
use crate::words::{WordOptions, WordOrder};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudConfig {
    /// Font size of a weight-1 word is `base_unit.width()`.
    pub base_unit: Size,
    /// Defaults to the middle of the canvas.
    pub center: Option<Point>,
    /// Reject placements that leave the canvas instead of growing past it.
    pub clip_to_canvas: bool,
    /// Skip font lookup and use per-character width estimates.
    pub fast_text_metrics: bool,
    pub line_height: f32,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            base_unit: Size::raw(10.0, 10.0),
            center: None,
            clip_to_canvas: false,
            fast_text_metrics: false,
            line_height: 1.2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: f32,
    pub height: f32,
    pub background: String,
    /// Space kept around the label bounds when they outgrow the canvas.
    pub padding: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            background: "#FFFFFF".to_string(),
            padding: 16.0,
        }
    }
}

impl RenderConfig {
    pub fn canvas_center(&self) -> Point {
        Point::new((self.width / 2.0).floor(), (self.height / 2.0).floor())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub cloud: CloudConfig,
    pub words: WordOptions,
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        let theme = Theme::classic();
        let render = RenderConfig {
            background: theme.background.clone(),
            ..Default::default()
        };
        Self {
            theme,
            cloud: CloudConfig::default(),
            words: WordOptions::default(),
            render,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    background: Option<String>,
    text_colors: Option<Vec<String>>,
    font_weight: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CloudConfigFile {
    base_unit: Option<f32>,
    base_unit_height: Option<f32>,
    center_x: Option<f32>,
    center_y: Option<f32>,
    clip_to_canvas: Option<bool>,
    fast_text_metrics: Option<bool>,
    line_height: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WordsConfigFile {
    validate: Option<bool>,
    random: Option<bool>,
    seed: Option<u64>,
    min_length: Option<usize>,
    stop_words: Option<Vec<String>>,
    max_words: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    cloud: Option<CloudConfigFile>,
    words: Option<WordsConfigFile>,
    width: Option<f32>,
    height: Option<f32>,
    padding: Option<f32>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Applies a JSON (or JSON5) override document on top of the defaults.
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let parsed: ConfigFile = match serde_json::from_str(contents) {
        Ok(parsed) => parsed,
        Err(json_err) => json5::from_str(contents)
            .map_err(|_| anyhow::anyhow!("Invalid config file: {json_err}"))?,
    };
    let mut config = Config::default();

    if let Some(theme_name) = parsed.theme.as_deref() {
        config.theme = Theme::by_name(theme_name)
            .ok_or_else(|| anyhow::anyhow!("Unknown theme '{theme_name}'"))?;
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
        if let Some(v) = vars.text_colors {
            config.theme.text_colors = v;
        }
        if let Some(v) = vars.font_weight {
            config.theme.font_weight = v;
        }
    }

    if let Some(cloud) = parsed.cloud {
        if cloud.base_unit.is_some() || cloud.base_unit_height.is_some() {
            let width = cloud.base_unit.unwrap_or(config.cloud.base_unit.width());
            let height = cloud.base_unit_height.or(cloud.base_unit).unwrap_or(width);
            config.cloud.base_unit = Size::new(width, height).map_err(|_| {
                anyhow::anyhow!("Invalid cloud.baseUnit {width}x{height}: sides must be non-negative")
            })?;
        }
        match (cloud.center_x, cloud.center_y) {
            (Some(x), Some(y)) => config.cloud.center = Some(Point::new(x, y)),
            (None, None) => {}
            _ => return Err(anyhow::anyhow!("cloud.centerX and cloud.centerY must be set together")),
        }
        if let Some(v) = cloud.clip_to_canvas {
            config.cloud.clip_to_canvas = v;
        }
        if let Some(v) = cloud.fast_text_metrics {
            config.cloud.fast_text_metrics = v;
        }
        if let Some(v) = cloud.line_height {
            config.cloud.line_height = v;
        }
    }

    if let Some(words) = parsed.words {
        if let Some(v) = words.validate {
            config.words.validate = v;
        }
        if let Some(random) = words.random {
            config.words.order = if random {
                WordOrder::Random
            } else {
                WordOrder::Frequency
            };
        }
        if let Some(v) = words.seed {
            config.words.seed = v;
        }
        if let Some(v) = words.min_length {
            config.words.min_length = v;
        }
        if let Some(v) = words.stop_words {
            config.words.stop_words = v;
        }
        if words.max_words.is_some() {
            config.words.max_words = words.max_words;
        }
    }

    if let Some(v) = parsed.width {
        config.render.width = v;
    }
    if let Some(v) = parsed.height {
        config.render.height = v;
    }
    if let Some(v) = parsed.padding {
        config.render.padding = v;
    }
    config.render.background = config.theme.background.clone();

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config.cloud.base_unit.width(), 10.0);
        assert!(config.cloud.center.is_none());
        assert_eq!(config.words.order, WordOrder::Frequency);
        assert_eq!(config.render.width, 1200.0);
    }

    #[test]
    fn overrides_are_applied() {
        let config = parse_config(
            r##"{
                "theme": "modern",
                "themeVariables": { "background": "#101010", "textColors": ["#fff"] },
                "cloud": { "baseUnit": 6, "centerX": 300, "centerY": 200, "clipToCanvas": true },
                "words": { "random": true, "seed": 9, "maxWords": 50 },
                "width": 640
            }"##,
        )
        .unwrap();
        assert_eq!(config.render.background, "#101010");
        assert_eq!(config.theme.text_colors, vec!["#fff".to_string()]);
        assert_eq!(config.cloud.base_unit, Size::raw(6.0, 6.0));
        assert_eq!(config.cloud.center, Some(Point::new(300.0, 200.0)));
        assert!(config.cloud.clip_to_canvas);
        assert_eq!(config.words.order, WordOrder::Random);
        assert_eq!(config.words.seed, 9);
        assert_eq!(config.words.max_words, Some(50));
        assert_eq!(config.render.width, 640.0);
    }

    #[test]
    fn accepts_json5() {
        let config = parse_config("{ cloud: { fastTextMetrics: true, }, // trailing comma\n }").unwrap();
        assert!(config.cloud.fast_text_metrics);
    }

    #[test]
    fn rejects_half_a_center_and_unknown_themes() {
        assert!(parse_config(r#"{ "cloud": { "centerX": 10 } }"#).is_err());
        assert!(parse_config(r#"{ "theme": "neon" }"#).is_err());
    }

    #[test]
    fn negative_base_unit_fails_on_load() {
        assert!(parse_config(r#"{"cloud":{"baseUnit":-5}}"#).is_err());
        assert!(parse_config(r#"{"cloud":{"baseUnitHeight":-1}}"#).is_err());
        let config = parse_config(r#"{"cloud":{"baseUnitHeight":4}}"#).unwrap();
        assert_eq!(config.cloud.base_unit, Size::raw(10.0, 4.0));
    }
}
