//! Player preferences
//!
//! Purely in-memory: nothing is persisted across runs. Hosts with storage
//! of their own can serialize the struct themselves.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // === Input ===
    /// Keyboard steering enabled
    pub keys_enabled: bool,
    /// Tilt steering enabled
    pub tilt_enabled: bool,
    /// Invert the tilt axis
    pub invert_tilt: bool,
    /// Tilt response multiplier (clamped to 0.5 - 2.0)
    pub tilt_response: f32,

    // === Accessibility ===
    /// High contrast block colors
    pub high_contrast: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            keys_enabled: true,
            tilt_enabled: true,
            invert_tilt: false,
            tilt_response: 1.0,
            high_contrast: false,
        }
    }
}

impl Settings {
    /// Gate a raw key press through the keyboard toggle
    pub fn shape_keys(&self, pressed: bool) -> bool {
        self.keys_enabled && pressed
    }

    /// Shape a raw accelerometer reading according to preferences
    pub fn shape_tilt(&self, raw: f32) -> f32 {
        if !self.tilt_enabled {
            return 0.0;
        }
        let shaped = raw * self.tilt_response.clamp(0.5, 2.0);
        if self.invert_tilt { -shaped } else { shaped }
    }
}
