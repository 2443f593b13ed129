//! Declared completion effects.
//!
//! Effects are plain data attached to an interaction kind. Applying one
//! mutates [`GameState`] and reports what happened so the runtime can notify
//! the player. `Invoke` effects are not applied here: they name a callback the
//! runtime looks up at completion time.

use crate::state::{GameState, InventoryItem, QuestItem, StatKind, StateError};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Effect {
    AdjustStatus { stat: StatKind, delta: i32 },
    SetFlag(String),
    AddItem(InventoryItem),
    AddQuest(QuestItem),
    Invoke(String),
}

/// Effects fired when an interaction of one kind completes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionEffects {
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<Effect>,
    /// Fire on every completion instead of only the first.
    #[cfg_attr(feature = "serde", serde(default))]
    pub repeatable: bool,
}

impl InteractionEffects {
    pub fn once(effects: impl IntoIterator<Item = Effect>) -> Self {
        Self {
            effects: effects.into_iter().collect(),
            repeatable: false,
        }
    }

    pub fn repeatable(effects: impl IntoIterator<Item = Effect>) -> Self {
        Self {
            effects: effects.into_iter().collect(),
            repeatable: true,
        }
    }
}

/// Observable result of applying one [`Effect`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EffectOutcome {
    StatusChanged {
        stat: StatKind,
        /// Change after clamping; zero when the meter was already at a bound.
        applied: i32,
        current: u8,
    },
    FlagSet(String),
    ItemAdded(InventoryItem),
    QuestAdded(QuestItem),
    /// Named callback the caller must dispatch.
    Invoke(String),
}

impl Effect {
    pub fn apply(&self, state: &mut GameState) -> Result<EffectOutcome, StateError> {
        match self {
            Effect::AdjustStatus { stat, delta } => {
                let applied = state.status.adjust(*stat, *delta);
                Ok(EffectOutcome::StatusChanged {
                    stat: *stat,
                    applied,
                    current: state.status.meter(*stat).current(),
                })
            }
            Effect::SetFlag(flag) => {
                state.set_flag(flag.clone());
                Ok(EffectOutcome::FlagSet(flag.clone()))
            }
            Effect::AddItem(item) => {
                state.inventory.add(item.clone())?;
                Ok(EffectOutcome::ItemAdded(item.clone()))
            }
            Effect::AddQuest(quest) => {
                state.quests.add_safely(quest.clone())?;
                Ok(EffectOutcome::QuestAdded(quest.clone()))
            }
            Effect::Invoke(name) => Ok(EffectOutcome::Invoke(name.clone())),
        }
    }
}
