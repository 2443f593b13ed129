//! Persistent game state.
//!
//! [`GameState`] survives scene transitions and is owned by the session. Hooks
//! receive it by `&mut` for the duration of a completion; nothing else holds a
//! reference to it.
mod error;
mod inventory;
mod quest;
mod status;

use std::collections::BTreeSet;

pub use error::StateError;
pub use inventory::{Inventory, InventoryItem};
pub use quest::{QuestChain, QuestItem, QuestLog, QuestTarget, TargetType, quest_number};
pub use status::{PlayerStatus, StatKind, StatMeter};

use crate::config::GameConfig;
use crate::interaction::InteractionKey;
use crate::locale::Locale;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub locale: Locale,
    pub status: PlayerStatus,
    pub quests: QuestLog,
    pub inventory: Inventory,
    pub flags: BTreeSet<String>,
    /// Interactions whose declared effects already fired.
    completed: BTreeSet<InteractionKey>,
    /// Set while a dialogue owns input.
    pub freeze_player: bool,
    pub muted: bool,
    pub current_scene: Option<String>,
    pub previous_scene: Option<String>,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            locale: config.default_locale,
            status: PlayerStatus::new(config.initial_mood, config.initial_health, config.status_max),
            quests: QuestLog::default(),
            inventory: Inventory::new(),
            flags: BTreeSet::new(),
            completed: BTreeSet::new(),
            freeze_player: false,
            muted: false,
            current_scene: None,
            previous_scene: None,
        }
    }

    pub fn with_quests(mut self, quests: Vec<QuestItem>) -> Self {
        self.quests = QuestLog::new(quests);
        self
    }

    /// Records that `key` completed. Returns true on the first completion.
    pub fn mark_completed(&mut self, key: &InteractionKey) -> bool {
        self.completed.insert(key.clone())
    }

    pub fn has_completed(&self, key: &InteractionKey) -> bool {
        self.completed.contains(key)
    }

    pub fn set_flag(&mut self, flag: impl Into<String>) -> bool {
        self.flags.insert(flag.into())
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }

    pub fn toggle_locale(&mut self) -> Locale {
        self.locale = self.locale.toggled();
        self.locale
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Moves the scene bookkeeping forward; the old scene becomes `previous`.
    pub fn enter_scene(&mut self, name: impl Into<String>) {
        self.previous_scene = self.current_scene.take();
        self.current_scene = Some(name.into());
    }
}
