//! Clothing recommendation derived from the latest readings.

use serde::{Deserialize, Serialize};

/// What to wear given the indoor climate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClothingAdvice {
    /// Hot.
    Light,
    /// Hot and humid.
    LightHumid,
    /// Mild.
    LightJacket,
    /// Cold.
    WarmLayers,
}

impl ClothingAdvice {
    /// Pick advice for `temperature` (°C) and `humidity` (%).
    #[must_use]
    pub fn for_conditions(temperature: f64, humidity: f64) -> Self {
        if temperature >= 25.0 {
            if humidity > 70.0 {
                Self::LightHumid
            } else {
                Self::Light
            }
        } else if temperature >= 15.0 {
            Self::LightJacket
        } else {
            Self::WarmLayers
        }
    }

    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::Light => "Light, loose-fitting clothes. Avoid heavy fabrics to stay cool.",
            Self::LightHumid => {
                "Light, loose-fitting clothes. High humidity makes it feel warmer."
            }
            Self::LightJacket => "Light jacket or sweater recommended. Layers are a great idea.",
            Self::WarmLayers => {
                "A jacket, long pants, and layers are a must. Avoid light clothing."
            }
        }
    }
}

impl std::fmt::Display for ClothingAdvice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}
