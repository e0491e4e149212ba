use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;
use std::sync::Mutex;
use ttf_parser::{Face, GlyphId};

static TEXT_MEASURER: Lazy<Mutex<TextMeasurer>> = Lazy::new(|| Mutex::new(TextMeasurer::new()));

/// Advance width and line box height of a single line of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
}

/// Measures `text` with the first face in `font_family` that resolves on this
/// system. `None` when no face could be loaded.
pub fn measure_text(text: &str, font_size: f32, font_family: &str) -> Option<TextExtent> {
    if text.is_empty() || font_size <= 0.0 {
        return Some(TextExtent {
            width: 0.0,
            height: 0.0,
        });
    }
    let mut guard = TEXT_MEASURER.lock().ok()?;
    guard.measure(text, font_size, font_family)
}

struct TextMeasurer {
    db: Database,
    loaded_system_fonts: bool,
    cache: HashMap<String, Option<FontFace>>,
}

impl TextMeasurer {
    fn new() -> Self {
        Self {
            db: Database::new(),
            loaded_system_fonts: false,
            cache: HashMap::new(),
        }
    }

    fn measure(&mut self, text: &str, font_size: f32, font_family: &str) -> Option<TextExtent> {
        let family_key = normalize_family_key(font_family);
        if !self.cache.contains_key(&family_key) {
            let face = self.load_face(font_family);
            if face.is_none() {
                tracing::warn!(family = %family_key, "no font face resolved");
            }
            self.cache.insert(family_key.clone(), face);
        }
        let face = self.cache.get_mut(&family_key)?.as_mut()?;
        let width = face.measure_width(text, font_size)?;
        Some(TextExtent {
            width,
            height: face.line_height(font_size),
        })
    }

    fn load_face(&mut self, font_family: &str) -> Option<FontFace> {
        let family_key = normalize_family_key(font_family);
        if let Some(face) = load_cached_face(&family_key) {
            return Some(face);
        }
        #[derive(Clone, Copy)]
        enum FamilyToken {
            Generic(fontdb::Family<'static>),
            Name(usize),
        }

        let mut names: Vec<String> = Vec::new();
        let mut order: Vec<FamilyToken> = Vec::new();
        for part in font_family.split(',') {
            let raw = part.trim().trim_matches('"').trim_matches('\'');
            if raw.is_empty() {
                continue;
            }
            match raw.to_ascii_lowercase().as_str() {
                "serif" => order.push(FamilyToken::Generic(Family::Serif)),
                "sans-serif" | "system-ui" => order.push(FamilyToken::Generic(Family::SansSerif)),
                "monospace" => order.push(FamilyToken::Generic(Family::Monospace)),
                "cursive" => order.push(FamilyToken::Generic(Family::Cursive)),
                "fantasy" => order.push(FamilyToken::Generic(Family::Fantasy)),
                _ => {
                    order.push(FamilyToken::Name(names.len()));
                    names.push(raw.to_string());
                }
            }
        }
        if order.is_empty() {
            order.push(FamilyToken::Generic(Family::SansSerif));
        }

        let families: Vec<Family<'_>> = order
            .iter()
            .map(|token| match *token {
                FamilyToken::Generic(family) => family,
                FamilyToken::Name(idx) => Family::Name(names[idx].as_str()),
            })
            .collect();

        if !self.loaded_system_fonts {
            self.db.load_system_fonts();
            self.loaded_system_fonts = true;
            tracing::debug!(faces = self.db.len(), "loaded system fonts");
        }

        let query = Query {
            families: &families,
            weight: Weight::NORMAL,
            stretch: Stretch::Normal,
            style: Style::Normal,
        };
        let id = self.db.query(&query)?;
        let mut loaded: Option<FontFace> = None;
        self.db.with_face_data(id, |data, index| {
            let bytes = data.to_vec();
            if Face::parse(&bytes, index).is_ok() {
                if let Some((font_path, meta_path)) = cache_paths(&family_key)
                    && !font_path.exists()
                {
                    if let Some(parent) = font_path.parent() {
                        let _ = fs::create_dir_all(parent);
                    }
                    let _ = fs::write(&font_path, &bytes);
                    let _ = fs::write(&meta_path, index.to_string());
                }
                loaded = FontFace::new(bytes, index);
            }
        });
        loaded
    }
}

/// Vertical metrics are copied out at load time so only the advance lookups
/// need the parsed face.
struct FontFace {
    data: Vec<u8>,
    index: u32,
    units_per_em: u16,
    ascender: i16,
    descender: i16,
    line_gap: i16,
    advance_cache: HashMap<char, Option<u16>>,
}

impl FontFace {
    fn new(data: Vec<u8>, index: u32) -> Option<Self> {
        let face = Face::parse(&data, index).ok()?;
        let units_per_em = face.units_per_em().max(1);
        let ascender = face.ascender();
        let descender = face.descender();
        let line_gap = face.line_gap();
        Some(Self {
            data,
            index,
            units_per_em,
            ascender,
            descender,
            line_gap,
            advance_cache: HashMap::new(),
        })
    }

    fn line_height(&self, font_size: f32) -> f32 {
        let units = self.ascender as f32 - self.descender as f32 + self.line_gap as f32;
        (units * font_size / self.units_per_em as f32).max(0.0)
    }

    fn measure_width(&mut self, text: &str, font_size: f32) -> Option<f32> {
        let scale = font_size / self.units_per_em as f32;
        let fallback = font_size * 0.56;
        let mut missing: Vec<char> = Vec::new();
        for ch in text.chars() {
            if !self.advance_cache.contains_key(&ch) && !missing.contains(&ch) {
                missing.push(ch);
            }
        }
        if !missing.is_empty() {
            let face = Face::parse(&self.data, self.index).ok()?;
            for ch in missing {
                let advance = face
                    .glyph_index(ch)
                    .and_then(|glyph: GlyphId| face.glyph_hor_advance(glyph));
                self.advance_cache.insert(ch, advance);
            }
        }

        let width = text
            .chars()
            .filter(|ch| *ch != '\n')
            .map(|ch| match self.advance_cache.get(&ch).copied().flatten() {
                Some(advance) if advance > 0 => advance as f32 * scale,
                _ => fallback,
            })
            .sum::<f32>();
        Some(width.max(0.0))
    }
}

fn normalize_family_key(font_family: &str) -> String {
    let trimmed = font_family.trim();
    if trimmed.is_empty() {
        "sans-serif".to_string()
    } else {
        trimmed.to_string()
    }
}

fn cache_paths(family_key: &str) -> Option<(PathBuf, PathBuf)> {
    let base = std::env::var_os("XDG_CACHE_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".cache")))?;
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    family_key.hash(&mut hasher);
    let hash = hasher.finish();
    let dir = base.join("tagcloud").join("font-cache");
    Some((dir.join(format!("{hash:x}.font")), dir.join(format!("{hash:x}.meta"))))
}

fn load_cached_face(family_key: &str) -> Option<FontFace> {
    let (font_path, meta_path) = cache_paths(family_key)?;
    if !font_path.exists() || !meta_path.exists() {
        return None;
    }
    let bytes = fs::read(font_path).ok()?;
    let index: u32 = fs::read_to_string(meta_path).ok()?.trim().parse().ok()?;
    FontFace::new(bytes, index)
}
