use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub background: String,
    /// Cycled through by label index.
    pub text_colors: Vec<String>,
    pub font_weight: String,
}

impl Theme {
    pub fn classic() -> Self {
        Self {
            font_family: "Arial, Helvetica, sans-serif".to_string(),
            background: "#FFFFFF".to_string(),
            text_colors: vec!["#000000".to_string()],
            font_weight: "normal".to_string(),
        }
    }

    pub fn modern() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            background: "#FFFFFF".to_string(),
            text_colors: [
                "#1C2430", "#3B5BDB", "#0C8599", "#E8590C", "#862E9C", "#2B8A3E", "#C92A2A",
            ]
            .iter()
            .map(|color| color.to_string())
            .collect(),
            font_weight: "600".to_string(),
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "classic" | "default" => Some(Self::classic()),
            "modern" => Some(Self::modern()),
            _ => None,
        }
    }

    pub fn color_for(&self, index: usize) -> &str {
        if self.text_colors.is_empty() {
            return "#000000";
        }
        &self.text_colors[index % self.text_colors.len()]
    }
}
