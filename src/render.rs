use crate::config::RenderConfig;
use crate::layout::{CloudLayout, Orientation, Point, Rect, Size};
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

/// Canvas area plus, when labels spill over it, their padded bounds.
pub fn view_box(layout: &CloudLayout, config: &RenderConfig) -> Rect {
    let canvas = Rect::new(
        Point::new(0.0, 0.0),
        Size::raw(config.width.max(1.0), config.height.max(1.0)),
    );
    match layout.bounds {
        Some(bounds) => {
            let pad = config.padding.max(0.0);
            let padded = Rect::new(
                bounds.origin.offset(-pad, -pad),
                Size::raw(
                    bounds.size.width() + pad * 2.0,
                    bounds.size.height() + pad * 2.0,
                ),
            );
            canvas.union(&padded)
        }
        None => canvas,
    }
}

pub fn render_svg(layout: &CloudLayout, theme: &Theme, config: &RenderConfig) -> String {
    let view = view_box(layout, config);
    let (vx, vy) = (view.origin.x, view.origin.y);
    let (width, height) = (view.size.width(), view.size.height());
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"{vx} {vy} {width} {height}\">",
    ));
    svg.push_str(&format!(
        "<rect x=\"{vx}\" y=\"{vy}\" width=\"{width}\" height=\"{height}\" fill=\"{}\"/>",
        config.background
    ));

    svg.push_str(&format!(
        "<g font-family=\"{}\" font-weight=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\">",
        escape_xml(&theme.font_family),
        escape_xml(&theme.font_weight)
    ));
    for (idx, label) in layout.labels.iter().enumerate() {
        let rect = label.rect();
        let cx = rect.left() + rect.size.width() / 2.0;
        let cy = rect.top() + rect.size.height() / 2.0;
        let (orientation, transform) = match label.orientation {
            Orientation::Horizontal => ("horizontal", String::new()),
            Orientation::Vertical => (
                "vertical",
                format!(
                    " transform=\"rotate({} {cx:.2} {cy:.2})\"",
                    label.orientation.rotation_degrees()
                ),
            ),
        };
        svg.push_str(&format!(
            "<text x=\"{cx:.2}\" y=\"{cy:.2}\"{transform} font-size=\"{:.2}\" fill=\"{}\" data-weight=\"{}\" data-orientation=\"{orientation}\">{}</text>",
            label.font_size,
            theme.color_for(idx),
            label.weight,
            escape_xml(&label.text)
        ));
    }
    svg.push_str("</g>");

    svg.push_str("</svg>");
    svg
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    opt.default_size = usvg::Size::from_wh(render_cfg.width, render_cfg.height)
        .ok_or_else(|| anyhow::anyhow!("Invalid canvas size"))?;

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

#[cfg(not(feature = "png"))]
pub fn write_output_png(_svg: &str, _output: &Path, _render_cfg: &RenderConfig) -> Result<()> {
    Err(anyhow::anyhow!("PNG output requires the `png` feature"))
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
