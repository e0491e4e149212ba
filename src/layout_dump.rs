use crate::layout::{CloudLayout, Orientation};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub center: [f32; 2],
    pub font_family: String,
    pub width: f32,
    pub height: f32,
    pub labels: Vec<LabelDump>,
}

#[derive(Debug, Serialize)]
pub struct LabelDump {
    pub text: String,
    pub weight: u32,
    pub font_size: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub orientation: Orientation,
    pub rotation: f32,
}

impl LayoutDump {
    pub fn from_layout(layout: &CloudLayout) -> Self {
        let labels = layout
            .labels
            .iter()
            .map(|label| LabelDump {
                text: label.text.clone(),
                weight: label.weight,
                font_size: label.font_size,
                x: label.position.x,
                y: label.position.y,
                width: label.size.width(),
                height: label.size.height(),
                orientation: label.orientation,
                rotation: label.orientation.rotation_degrees(),
            })
            .collect();
        let (width, height) = layout
            .bounds
            .map(|b| (b.size.width(), b.size.height()))
            .unwrap_or((0.0, 0.0));
        LayoutDump {
            center: [layout.center.x, layout.center.y],
            font_family: layout.font_family.clone(),
            width,
            height,
            labels,
        }
    }
}

pub fn write_layout_dump(path: &Path, layout: &CloudLayout) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_layout(layout);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
