// Demo settings persisted in localStorage.
use serde::{Deserialize, Serialize};

use crate::model::{DEFAULT_MAX_RADIUS, DEFAULT_MIN_RADIUS, Rgba, SplashConfig, SplashError};

pub const SETTINGS_STORAGE_KEY: &str = "splash_settings";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashSettings {
    pub min_radius: f64,
    pub max_radius: f64,
    /// `#rrggbb` or `#rrggbbaa`.
    pub color_hex: String,
}

impl Default for SplashSettings {
    fn default() -> Self {
        Self {
            min_radius: DEFAULT_MIN_RADIUS,
            max_radius: DEFAULT_MAX_RADIUS,
            color_hex: Rgba::BLACK.to_hex_rgb(),
        }
    }
}

impl SplashSettings {
    /// Unparseable colours fall back to black.
    pub fn color(&self) -> Rgba {
        Rgba::from_hex(&self.color_hex).unwrap_or(Rgba::BLACK)
    }

    pub fn to_config(&self) -> Result<SplashConfig, SplashError> {
        SplashConfig::new(self.min_radius, self.max_radius, self.color())
    }

    /// Corrupt JSON yields the defaults.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|e| {
            log::warn!("discarding stored splash settings: {e}");
            Self::default()
        })
    }

    pub fn load() -> Self {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(SETTINGS_STORAGE_KEY) {
                    return Self::from_json(&raw);
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        let raw = match serde_json::to_string(self) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("could not serialise splash settings: {e}");
                return;
            }
        };
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if store.set_item(SETTINGS_STORAGE_KEY, &raw).is_err() {
                    log::warn!("could not persist splash settings");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_build_default_config() {
        let cfg = SplashSettings::default().to_config().unwrap();
        assert_eq!(cfg.min_radius(), 50.0);
        assert_eq!(cfg.max_radius(), 120.0);
        assert_eq!(cfg.color(), Rgba::BLACK);
    }

    #[test]
    fn json_round_trip_keeps_fields() {
        let s = SplashSettings {
            min_radius: 20.0,
            max_radius: 90.0,
            color_hex: "#3366ff".into(),
        };
        let raw = serde_json::to_string(&s).unwrap();
        assert_eq!(SplashSettings::from_json(&raw), s);
        assert_eq!(s.color(), Rgba::new(0x33, 0x66, 0xff, 255));
    }

    #[test]
    fn partial_and_corrupt_json_fall_back() {
        let s = SplashSettings::from_json(r#"{"min_radius": 30.0}"#);
        assert_eq!(s.min_radius, 30.0);
        assert_eq!(s.max_radius, 120.0);
        assert_eq!(SplashSettings::from_json("not json"), SplashSettings::default());
    }

    #[test]
    fn invalid_radii_surface_as_error() {
        let s = SplashSettings {
            min_radius: 100.0,
            max_radius: 40.0,
            ..Default::default()
        };
        assert!(matches!(
            s.to_config(),
            Err(SplashError::InvertedRadii { .. })
        ));
    }
}
