mod error;
mod frontier;
mod geometry;
mod occupancy;
mod packer;
mod text;
mod types;

pub use error::LayoutError;
pub use frontier::Frontier;
pub use geometry::{Point, Rect, Size};
pub use occupancy::Occupancy;
pub use packer::{Packer, PackerConfig, pack_words};
pub use text::{FontMetrics, HeuristicMetrics, TextMeasure};
pub use types::*;

use crate::config::{CloudConfig, RenderConfig};
use crate::ir::Word;
use crate::theme::Theme;

/// Packer settings derived from the user-facing configuration.
pub fn packer_config(
    theme: &Theme,
    cloud: &CloudConfig,
    render: &RenderConfig,
) -> Result<PackerConfig, LayoutError> {
    let center = cloud.center.unwrap_or_else(|| render.canvas_center());
    let config = PackerConfig::new(center, cloud.base_unit, theme.font_family.clone());
    if !cloud.clip_to_canvas {
        return Ok(config);
    }
    let canvas = Size::new(render.width, render.height).map_err(|_| {
        LayoutError::config(format!(
            "canvas {}x{} can't have a negative side",
            render.width, render.height
        ))
    })?;
    Ok(config.with_bounds(canvas))
}

/// Lays out `words` in order, measuring with system fonts unless fast
/// metrics are requested.
pub fn compute_layout(
    words: &[Word],
    theme: &Theme,
    cloud: &CloudConfig,
    render: &RenderConfig,
) -> Result<CloudLayout, LayoutError> {
    let config = packer_config(theme, cloud, render)?;
    if cloud.fast_text_metrics {
        pack_words(words, config, HeuristicMetrics::new(cloud.line_height))
    } else {
        pack_words(words, config, FontMetrics::new(cloud.line_height))
    }
}
