use crate::geometry::Vec2;
use crate::locale::Locale;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Upper bound of the mood and health meters (lower bound is always 0).
    pub status_max: u8,
    pub initial_mood: u8,
    pub initial_health: u8,

    /// Delay between revealed characters in the dialogue box. Zero reveals a
    /// line instantly.
    pub typing_delay_ms: u32,

    /// Player walking speed in map pixels per second.
    pub player_speed: f32,

    /// Player collider size in map pixels.
    pub player_size: Vec2,

    /// Extra distance around the player that still counts as touching a
    /// static region. Regions are solid, so overlap alone never happens.
    pub touch_margin: f32,

    /// Spawn used when the map has no usable spawn point or fails to load.
    pub default_spawn: Vec2,

    /// Minimum time between two notifications leaving the queue.
    pub notification_interval_ms: u32,

    pub default_locale: Locale,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of labeled options in a single branch point.
    pub const MAX_CHOICES: usize = 4;
    pub const MAX_INVENTORY_SLOTS: usize = 10;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STATUS_MAX: u8 = 9;
    pub const DEFAULT_TYPING_DELAY_MS: u32 = 15;
    pub const DEFAULT_PLAYER_SPEED: f32 = 120.0;
    pub const DEFAULT_TOUCH_MARGIN: f32 = 2.0;
    pub const DEFAULT_NOTIFICATION_INTERVAL_MS: u32 = 800;

    pub fn new() -> Self {
        Self {
            status_max: Self::DEFAULT_STATUS_MAX,
            initial_mood: Self::DEFAULT_STATUS_MAX,
            initial_health: Self::DEFAULT_STATUS_MAX,
            typing_delay_ms: Self::DEFAULT_TYPING_DELAY_MS,
            player_speed: Self::DEFAULT_PLAYER_SPEED,
            player_size: Vec2::new(16.0, 16.0),
            touch_margin: Self::DEFAULT_TOUCH_MARGIN,
            default_spawn: Vec2::new(100.0, 100.0),
            notification_interval_ms: Self::DEFAULT_NOTIFICATION_INTERVAL_MS,
            default_locale: Locale::default(),
        }
    }

    /// Config with instant text reveal, handy for scripted runs and tests.
    pub fn instant_text() -> Self {
        Self {
            typing_delay_ms: 0,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
