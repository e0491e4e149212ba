use crate::ir::Word;

use super::frontier::Frontier;
use super::geometry::{Point, Rect, Size};
use super::occupancy::Occupancy;
use super::text::TextMeasure;
use super::{CloudLayout, Label, LayoutError, Orientation};

/// Settings fixed for the lifetime of one packing run.
#[derive(Debug, Clone, PartialEq)]
pub struct PackerConfig {
    pub center: Point,
    /// `width` is the font size of a weight-1 word.
    pub base_unit: Size,
    pub font_family: String,
    /// Drawing field the rectangles must stay inside. `None` packs on an
    /// unbounded plane.
    pub bounds: Option<Size>,
}

impl PackerConfig {
    pub fn new(center: Point, base_unit: Size, font_family: impl Into<String>) -> Self {
        Self {
            center,
            base_unit,
            font_family: font_family.into(),
            bounds: None,
        }
    }

    pub fn with_bounds(mut self, bounds: Size) -> Self {
        self.bounds = Some(bounds);
        self
    }

    fn validate(&self) -> Result<(), LayoutError> {
        let Point { x, y } = self.center;
        if !x.is_finite() || !y.is_finite() {
            return Err(LayoutError::config("center must be a finite point"));
        }
        if self.center.is_empty() {
            return Err(LayoutError::config("center can't be empty"));
        }
        if x < 0.0 || y < 0.0 {
            return Err(LayoutError::config(
                "center can't be located outside of the drawing field",
            ));
        }
        if self.base_unit.width() == 0.0 && self.base_unit.height() == 0.0 {
            return Err(LayoutError::config("base unit can't be empty"));
        }
        if self.base_unit.width() == 0.0 {
            return Err(LayoutError::config("base unit width must be positive"));
        }
        if let Some(bounds) = self.bounds {
            if bounds.is_empty() {
                return Err(LayoutError::config("bounds must have a positive area"));
            }
            if x > bounds.width() || y > bounds.height() {
                return Err(LayoutError::config(
                    "center can't be located outside of the drawing field",
                ));
            }
        }
        Ok(())
    }
}

/// Anchor adjustments tried at every candidate point, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Offset {
    None,
    Left,
    Up,
}

const OFFSETS: [Offset; 3] = [Offset::None, Offset::Left, Offset::Up];

impl Offset {
    fn apply(self, point: Point, size: Size) -> Point {
        match self {
            Offset::None => point,
            Offset::Left => point.offset(-size.width(), 0.0),
            Offset::Up => point.offset(0.0, -size.height()),
        }
    }
}

/// Online rectangle packer. Each word is placed once, as close to the center
/// as the frontier allows, and never moved afterwards.
pub struct Packer<M> {
    config: PackerConfig,
    measure: M,
    frontier: Frontier,
    occupancy: Occupancy,
    labels: Vec<Label>,
}

impl<M: TextMeasure> Packer<M> {
    pub fn new(config: PackerConfig, measure: M) -> Result<Self, LayoutError> {
        config.validate()?;
        let mut frontier = Frontier::new(config.center);
        frontier.insert(config.center);
        Ok(Self {
            config,
            measure,
            frontier,
            occupancy: Occupancy::new(),
            labels: Vec::new(),
        })
    }

    pub fn font_size_for(&self, weight: u32) -> f32 {
        weight as f32 * self.config.base_unit.width()
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// Measures, positions, and commits one word.
    pub fn place(&mut self, text: &str, weight: u32) -> Result<Label, LayoutError> {
        if weight == 0 {
            return Err(LayoutError::InvalidMeasurement {
                text: text.to_string(),
                width: 0.0,
                height: 0.0,
            });
        }
        let font_size = self.font_size_for(weight);
        let size = self
            .measure
            .measure(text, &self.config.font_family, font_size)
            .map_err(|err| match err {
                LayoutError::InvalidMeasurement { width, height, .. } => {
                    LayoutError::InvalidMeasurement {
                        text: text.to_string(),
                        width,
                        height,
                    }
                }
                other => other,
            })?;
        if size.is_empty() {
            return Err(LayoutError::InvalidMeasurement {
                text: text.to_string(),
                width: size.width(),
                height: size.height(),
            });
        }

        let Some(position) = self.find_anchor(size) else {
            return Err(LayoutError::PlacementExhausted {
                text: text.to_string(),
                width: size.width(),
                height: size.height(),
                candidates: self.frontier.len(),
            });
        };

        let rect = Rect::new(position, size);
        self.occupancy.commit(rect);
        for corner in rect.corners() {
            self.frontier.insert(corner);
        }

        let label = Label {
            text: text.to_string(),
            weight,
            font_size,
            size,
            position,
            orientation: Orientation::for_size(size),
        };
        tracing::debug!(
            text,
            weight,
            x = position.x,
            y = position.y,
            width = size.width(),
            height = size.height(),
            orientation = ?label.orientation,
            "placed label"
        );
        self.labels.push(label.clone());
        Ok(label)
    }

    /// First collision-free anchor in (distance, offset) order.
    fn find_anchor(&self, size: Size) -> Option<Point> {
        self.frontier
            .iter()
            .flat_map(|point| OFFSETS.iter().map(move |offset| offset.apply(point, size)))
            .find(|anchor| self.fits(&Rect::new(*anchor, size)))
    }

    fn fits(&self, rect: &Rect) -> bool {
        if let Some(bounds) = self.config.bounds
            && !rect.contained_in(bounds)
        {
            return false;
        }
        !self.occupancy.intersects(rect)
    }

    pub fn finish(self) -> CloudLayout {
        CloudLayout {
            center: self.config.center,
            font_family: self.config.font_family,
            bounds: self.occupancy.bounds(),
            labels: self.labels,
        }
    }
}

/// Places `words` in the given order. The first failure aborts the run and
/// no partial layout is returned.
pub fn pack_words<M: TextMeasure>(
    words: &[Word],
    config: PackerConfig,
    measure: M,
) -> Result<CloudLayout, LayoutError> {
    let mut packer = Packer::new(config, measure)?;
    for word in words {
        packer.place(&word.text, word.weight)?;
    }
    let layout = packer.finish();
    tracing::info!(
        labels = layout.labels.len(),
        width = layout.bounds.map(|b| b.size.width()).unwrap_or(0.0),
        height = layout.bounds.map(|b| b.size.height()).unwrap_or(0.0),
        "packed tag cloud"
    );
    Ok(layout)
}
