//! # Demo Controls
//!
//! Plain state behind the demo's control panel. Widget binding lives with
//! whatever GUI drives the demo; it reports changes here as [`ControlAction`]s.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors raised while interpreting control values
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ControlsError {
    #[error("color '{0}' is not of the form #rrggbb")]
    InvalidColor(String),
    #[error("unknown shape '{0}' (expected cube or square)")]
    UnknownShape(String),
    #[error("unknown shader '{0}' (expected lambert or wave)")]
    UnknownShader(String),
}

/// Primitive to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shape {
    #[default]
    Cube,
    Square,
}

impl FromStr for Shape {
    type Err = ControlsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cube" => Ok(Shape::Cube),
            "square" => Ok(Shape::Square),
            other => Err(ControlsError::UnknownShape(other.to_string())),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Cube => write!(f, "cube"),
            Shape::Square => write!(f, "square"),
        }
    }
}

/// Shader program the renderer should bind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShaderKind {
    /// Flat-lit diffuse shading driven by the geometry color
    #[default]
    Lambert,
    /// Time-driven vertex displacement
    Wave,
}

impl ShaderKind {
    /// Whether the cube drawn under this shader uses conjoint corners
    pub fn cube_topology(self) -> bool {
        matches!(self, ShaderKind::Wave)
    }
}

impl FromStr for ShaderKind {
    type Err = ControlsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lambert" => Ok(ShaderKind::Lambert),
            "wave" => Ok(ShaderKind::Wave),
            other => Err(ControlsError::UnknownShader(other.to_string())),
        }
    }
}

impl fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderKind::Lambert => write!(f, "lambert"),
            ShaderKind::Wave => write!(f, "wave"),
        }
    }
}

/// A change reported by the control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlAction {
    SetColor(String),
    SetShape(Shape),
    SetShader(ShaderKind),
    /// Regenerate every mesh
    LoadScene,
}

/// Current control panel values
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    /// Geometry color as `#rrggbb`
    pub color: String,
    pub shape: Shape,
    pub shader: ShaderKind,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            color: "#ff0000".to_string(),
            shape: Shape::Cube,
            shader: ShaderKind::Lambert,
        }
    }
}

impl Controls {
    /// Apply a panel action. Returns `true` when the scene must be regenerated.
    pub fn apply(&mut self, action: ControlAction) -> bool {
        log::debug!("Control action: {:?}", action);
        match action {
            ControlAction::SetColor(color) => self.color = color,
            ControlAction::SetShape(shape) => self.shape = shape,
            ControlAction::SetShader(shader) => self.shader = shader,
            ControlAction::LoadScene => return true,
        }
        false
    }

    /// The geometry color as normalized RGBA with alpha 1
    pub fn color_rgba(&self) -> Result<[f32; 4], ControlsError> {
        parse_hex_color(&self.color)
    }
}

/// Parse `#rrggbb` into normalized RGBA
pub fn parse_hex_color(color: &str) -> Result<[f32; 4], ControlsError> {
    let invalid = || ControlsError::InvalidColor(color.to_string());

    let hex = color.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;

    let r = (value >> 16) & 0xff;
    let g = (value >> 8) & 0xff;
    let b = value & 0xff;
    Ok([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0])
}
