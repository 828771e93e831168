//! Graphic descriptors
//!
//! Texture paths and shader names are opaque to this crate; they are
//! handed to the host unchanged.

use serde::{Deserialize, Serialize};

/// RGBA color with components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "default_alpha")]
    pub a: f32,
}

fn default_alpha() -> f32 {
    1.0
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    /// Opaque color from RGB components
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShaderType {
    #[default]
    Cutout,
    CutoutComplex,
    Transparent,
    MetaOverlay,
}

/// How a def is drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphicData {
    pub tex_path: String,
    /// Host graphic class name, e.g. `Graphic_Single`
    pub graphic_class: String,
    pub shader_type: ShaderType,
    pub color: Color,
}

impl Default for GraphicData {
    fn default() -> Self {
        Self {
            tex_path: String::new(),
            graphic_class: "Graphic_Single".to_string(),
            shader_type: ShaderType::Cutout,
            color: Color::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_ron_alpha_defaults_to_opaque() {
        let color: Color = ron::from_str("(r: 0.5, g: 0.4, b: 0.3)").unwrap();
        assert_eq!(color, Color::rgb(0.5, 0.4, 0.3));
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn test_graphic_data_defaults() {
        let data: GraphicData = ron::from_str("(tex_path: \"Things/Building/Linked/Rock_Atlas\")").unwrap();
        assert_eq!(data.graphic_class, "Graphic_Single");
        assert_eq!(data.shader_type, ShaderType::Cutout);
        assert_eq!(data.color, Color::WHITE);
    }
}
