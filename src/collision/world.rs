//! Static scene description consumed by collision detection.
//!
//! Worlds are usually authored as JSON or YAML:
//!
//! ```yaml
//! name: "Tight Lot"
//! offset: {x: 0.0, y: -20.0}
//! objects:
//!   - {type: rect, x: -220, y: -220, width: 440, height: 440}   # painted, not solid
//!   - {type: rect, x: 50, y: 10, width: 73.5, height: 184.8, solid: true, kind: car}
//!   - {type: line, x1: 0, y1: 0, x2: 100, y2: 0}                # decoration
//! ```
//!
//! Only `rect` objects with `solid: true` take part in collision tests.
//! Other object types and presentation fields (`fill`, `stroke`, ...) are
//! accepted and ignored.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::Point2D;
use crate::error::Result;
use crate::geometry::Rect;

/// Kind reported for solid obstacles without an explicit `kind`.
pub const DEFAULT_OBSTACLE_KIND: &str = "solid";

/// Kind whose collisions cost `car_multiplier` times more.
pub const CAR_KIND: &str = "car";

/// Axis-aligned rectangular obstacle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectObject {
    /// Minimum X
    pub x: f64,
    /// Minimum Y
    pub y: f64,
    /// Extent along X
    pub width: f64,
    /// Extent along Y
    pub height: f64,
    /// Whether the vehicle collides with this rectangle.
    #[serde(default)]
    pub solid: bool,
    /// Obstacle tag reported in contacts (e.g. `"car"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl RectObject {
    /// Solid rectangle with no kind tag.
    pub fn solid(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            solid: true,
            kind: None,
        }
    }

    /// Set the kind tag.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Geometry as a [`Rect`].
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Kind tag, falling back to [`DEFAULT_OBSTACLE_KIND`].
    #[inline]
    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or(DEFAULT_OBSTACLE_KIND)
    }
}

/// One entry of a world's object list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorldObject {
    /// Rectangle (solid or painted).
    Rect(RectObject),
    /// Any other drawable (lines, labels, ...); never collides.
    #[serde(other)]
    Decoration,
}

/// A solid rectangle ready for testing: offset applied, kind resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolidRect<'a> {
    /// Rectangle in world coordinates.
    pub rect: Rect,
    /// Obstacle kind tag.
    pub kind: &'a str,
}

/// Static obstacle layout.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct World {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Translation applied to every object before testing.
    #[serde(default)]
    pub offset: Point2D,
    /// Objects in test order.
    #[serde(default)]
    pub objects: Vec<WorldObject>,
}

impl World {
    /// Empty world with a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style object append.
    pub fn with_object(mut self, object: WorldObject) -> Self {
        self.objects.push(object);
        self
    }

    /// Builder-style rectangle append.
    pub fn with_rect(self, rect: RectObject) -> Self {
        self.with_object(WorldObject::Rect(rect))
    }

    /// Builder-style offset.
    pub fn with_offset(mut self, offset: Point2D) -> Self {
        self.offset = offset;
        self
    }

    /// Solid rectangles in declaration order, offset applied.
    pub fn solid_rects(&self) -> impl Iterator<Item = SolidRect<'_>> + '_ {
        let offset = self.offset;
        self.objects.iter().filter_map(move |object| match object {
            WorldObject::Rect(r) if r.solid => Some(SolidRect {
                rect: r.rect().translated(offset),
                kind: r.kind(),
            }),
            _ => None,
        })
    }

    /// Parse a world from YAML (JSON documents are valid YAML too).
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a world from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a world file; `.json` files are parsed as JSON, anything else as YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&contents),
            _ => Self::from_yaml_str(&contents),
        }
    }
}
