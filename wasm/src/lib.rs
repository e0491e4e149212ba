use serde::Deserialize;
use tagcloud_renderer::layout::Size;
use tagcloud_renderer::words::WordOrder;
use tagcloud_renderer::{Config, Theme, render_text};
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TagCloudRenderOptions {
    theme: Option<String>,
    font_family: Option<String>,
    base_unit: Option<f32>,
    width: Option<f32>,
    height: Option<f32>,
    random: Option<bool>,
    seed: Option<u64>,
    validate: Option<bool>,
    max_words: Option<usize>,
}

fn build_config(options: TagCloudRenderOptions) -> Result<Config, String> {
    let mut config = Config::default();
    if let Some(theme) = options.theme.as_deref().and_then(Theme::by_name) {
        config.render.background = theme.background.clone();
        config.theme = theme;
    }
    if let Some(font_family) = options.font_family {
        config.theme.font_family = font_family;
    }
    if let Some(unit) = options.base_unit {
        config.cloud.base_unit = Size::new(unit, unit).map_err(|error| error.to_string())?;
    }
    if let Some(width) = options.width {
        config.render.width = width;
    }
    if let Some(height) = options.height {
        config.render.height = height;
    }
    if options.random == Some(true) {
        config.words.order = WordOrder::Random;
    }
    if let Some(seed) = options.seed {
        config.words.seed = seed;
    }
    if let Some(validate) = options.validate {
        config.words.validate = validate;
    }
    config.words.max_words = options.max_words;
    // No system fonts in the browser.
    config.cloud.fast_text_metrics = true;
    Ok(config)
}

#[wasm_bindgen]
pub fn render_tag_cloud_svg(text: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let options = if let Some(raw_options) = options_json {
        serde_json::from_str::<TagCloudRenderOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string()))?
    } else {
        TagCloudRenderOptions::default()
    };

    let config = build_config(options).map_err(|error| JsValue::from_str(&error))?;
    render_text(text, &config).map_err(|error| JsValue::from_str(&error.to_string()))
}
