#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod render;
pub mod text_metrics;
pub mod theme;
pub mod words;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{CloudConfig, Config, RenderConfig, load_config};
pub use ir::Word;
pub use layout::{CloudLayout, Label, LayoutError, Orientation, compute_layout};
pub use render::render_svg;
pub use theme::Theme;
pub use words::{WordOptions, WordOrder, collect_words};

/// Collects, packs, and renders `text` in one call.
pub fn render_text(text: &str, config: &Config) -> anyhow::Result<String> {
    let words = collect_words(text, &config.words);
    let layout = compute_layout(&words, &config.theme, &config.cloud, &config.render)?;
    Ok(render_svg(&layout, &config.theme, &config.render))
}
