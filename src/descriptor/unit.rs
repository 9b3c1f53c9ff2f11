use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Measurement kind of a [`UnitValue`]. The host rejects a field whose unit tag
/// differs from the one it expects, and this layer never converts between kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    Pixels,
    Percent,
    Angle,
    Density,
    Raw,
}

impl UnitKind {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Pixels => "pixelsUnit",
            Self::Percent => "percentUnit",
            Self::Angle => "angleUnit",
            Self::Density => "densityUnit",
            Self::Raw => "noneUnit",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "pixelsUnit" => Some(Self::Pixels),
            "percentUnit" => Some(Self::Percent),
            "angleUnit" => Some(Self::Angle),
            "densityUnit" => Some(Self::Density),
            "noneUnit" => Some(Self::Raw),
            _ => None,
        }
    }
}

/// A number tagged with its measurement kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitValue {
    pub kind: UnitKind,
    pub value: f64,
}

impl UnitValue {
    pub const fn new(kind: UnitKind, value: f64) -> Self {
        Self { kind, value }
    }

    pub const fn pixels(value: f64) -> Self {
        Self::new(UnitKind::Pixels, value)
    }

    pub const fn percent(value: f64) -> Self {
        Self::new(UnitKind::Percent, value)
    }

    pub const fn angle(value: f64) -> Self {
        Self::new(UnitKind::Angle, value)
    }

    pub const fn density(value: f64) -> Self {
        Self::new(UnitKind::Density, value)
    }
}

impl Serialize for UnitValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("_unit", self.kind.tag())?;
        map.serialize_entry("_value", &self.value)?;
        map.end()
    }
}
