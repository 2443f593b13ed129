//! Frame-driven game session.
//!
//! [`GameSession`] owns the persistent [`GameState`], the current scene and
//! the dialogue presenter. The frontend calls [`GameSession::update`] once per
//! frame and renders from the event bus. Each frame runs, in order:
//!
//! 1. collision enter/exit against interactables and doors
//! 2. input dispatch (interact, dialogue navigation, toggles)
//! 3. player movement, skipped while a dialogue freezes the player
//! 4. presenter tick, then completion hooks for a finished dialogue
//! 5. a pending scene transition
//! 6. notification pacing
mod source;

pub use source::{InMemorySource, SceneSource};

use std::collections::HashMap;
use std::sync::Arc;

use school_content::{QuestCatalog, SceneManifest};
use school_core::env;
use school_core::{
    DialogueOracle, DialogueOutcome, DialoguePresenter, EmptyDialogue, EntityKind, GameConfig,
    GameError, GameState, Interactable, PresenterEvent, PresenterOptions, PresenterState,
    QuestChain, Vec2,
};
use tracing::{debug, error, info, warn};

use crate::events::{DialogueEvent, Event, EventBus, InteractionEvent, NotificationEvent, SceneEvent};
use crate::hooks::{HookContext, HookRegistry};
use crate::input::{FrameInput, InputAction};
use crate::interaction::InteractionRegistry;
use crate::scene::{CollisionTracker, LoadedScene, MapObjectLoader, move_player};
use crate::services::{NotificationQueue, SceneServices};

/// Audio cue emitted with every line of an interaction dialogue.
pub const TALK_CUE: &str = "talk";

/// What the running dialogue belongs to.
#[derive(Debug, Clone)]
enum ActiveDialogue {
    Interaction(Interactable),
    Script { once_flag: Option<String> },
}

pub struct GameSession {
    config: GameConfig,
    state: GameState,
    chains: Vec<QuestChain>,
    hooks: HookRegistry,
    services: SceneServices,
    source: Box<dyn SceneSource>,

    scene: LoadedScene,
    interactions: InteractionRegistry,
    collisions: CollisionTracker,
    presenter: DialoguePresenter,
    active: Option<ActiveDialogue>,
    pending_transition: Option<(String, Option<String>)>,
}

impl GameSession {
    pub fn builder() -> GameSessionBuilder {
        GameSessionBuilder::new()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn scene(&self) -> &LoadedScene {
        &self.scene
    }

    pub fn presenter(&self) -> &DialoguePresenter {
        &self.presenter
    }

    pub fn interactions(&self) -> &InteractionRegistry {
        &self.interactions
    }

    pub fn services(&self) -> &SceneServices {
        &self.services
    }

    pub fn bus(&self) -> &EventBus {
        &self.services.bus
    }

    pub fn player_position(&self) -> Option<Vec2> {
        self.scene.entities.player().map(|player| player.rect.origin())
    }

    /// Loads `name` and makes it the current scene.
    ///
    /// `spawn` selects the spawn marker; without one the manifest picks it
    /// from the scene the player came from. Load failures never escape: a
    /// missing manifest becomes a bare manifest, a broken map an empty scene,
    /// and missing dialogue placeholder text.
    pub fn enter_scene(&mut self, name: &str, spawn: Option<&str>) {
        if let Some(from) = self.state.current_scene.clone() {
            self.publish(Event::Scene(SceneEvent::TransitionStarted {
                from,
                to: name.to_string(),
            }));
        }
        self.state.enter_scene(name);

        let manifest = self.source.manifest(name).unwrap_or_else(|e| {
            error!(
                target: "runtime::scene",
                scene = name,
                error = %e,
                code = e.error_code(),
                "Scene manifest unavailable, using bare manifest"
            );
            SceneManifest::bare(name)
        });

        let spawn_name = spawn
            .map(str::to_string)
            .unwrap_or_else(|| manifest.spawn_name(self.state.previous_scene.as_deref()).to_string());
        let map = self.source.map(&manifest);
        self.scene = MapObjectLoader::new(&manifest, &self.config, &spawn_name).build_or_fallback(map);

        let oracle: Arc<dyn DialogueOracle> = self.source.dialogue(&manifest).unwrap_or_else(|e| {
            warn!(
                target: "runtime::scene",
                scene = name,
                error = %e,
                "Dialogue table unavailable, every interaction shows placeholder text"
            );
            Arc::new(EmptyDialogue)
        });
        self.interactions = InteractionRegistry::new(oracle, manifest.effects.clone());
        self.collisions.reset();
        self.presenter = DialoguePresenter::new();
        self.active = None;
        self.pending_transition = None;
        self.state.freeze_player = false;

        info!(
            target: "runtime::scene",
            scene = name,
            spawn = %spawn_name,
            entities = self.scene.entities.len(),
            fallback = self.scene.fallback,
            "Scene entered"
        );
        self.publish(Event::Scene(SceneEvent::Loaded {
            scene: name.to_string(),
            entities: self.scene.entities.len(),
            fallback: self.scene.fallback,
        }));

        if let Some(beat) = manifest.intro.as_ref() {
            if !self.state.has_flag(&beat.once_flag) {
                self.play_script_dialogue(&beat.kind, beat.forced, Some(beat.once_flag.clone()));
            }
        }
    }

    /// Runs one frame.
    pub fn update(&mut self, input: &FrameInput) {
        self.update_collisions();

        for &action in &input.actions {
            self.dispatch(action);
        }

        if !self.state.freeze_player && input.movement != Vec2::ZERO {
            let distance = self.config.player_speed * input.elapsed_ms as f32 / 1000.0;
            let offset = input.movement.normalized().scaled(distance);
            move_player(&mut self.scene.entities, offset);
        }

        self.presenter.tick(input.elapsed_ms);
        self.pump_presenter();

        if !self.state.freeze_player {
            if let Some((target, spawn)) = self.pending_transition.take() {
                self.enter_scene(&target, spawn.as_deref());
            }
        }

        if let Some(notification) = self.services.notifications.tick(input.elapsed_ms) {
            self.publish(Event::Notification(NotificationEvent::from(&notification)));
        }
    }

    /// Starts the dialogue of the held interactable.
    ///
    /// Returns false when nothing is held or a dialogue is already running.
    pub fn interact(&mut self) -> bool {
        if self.presenter.is_active() {
            debug!(target: "runtime::interaction", "Interact ignored while dialogue is active");
            return false;
        }
        let Some(held) = self.interactions.holder().get().cloned() else {
            return false;
        };
        self.start_interaction(held)
    }

    fn start_interaction(&mut self, held: Interactable) -> bool {
        let mut options = PresenterOptions::new(self.config.typing_delay_ms)
            .with_speed_multiplier(self.interactions.speed_multiplier(&held.key.kind));
        if !self.state.muted {
            options = options.with_talk_cue(TALK_CUE);
        }

        if let Err(e) = self.presenter.start(held.data.content.clone(), options) {
            warn!(
                target: "runtime::interaction",
                key = %held.key,
                error = %e,
                code = e.error_code(),
                "Dialogue did not start"
            );
            return false;
        }

        debug!(target: "runtime::interaction", key = %held.key, "Interaction started");
        self.state.freeze_player = true;
        self.publish(Event::Dialogue(DialogueEvent::Started {
            speaker: held.data.speaker.clone(),
            key: Some(held.key.to_string()),
        }));
        self.active = Some(ActiveDialogue::Interaction(held));
        self.pump_presenter();
        true
    }

    /// Shows dialogue that belongs to no interactable, e.g. a scene intro.
    ///
    /// Forced beats cannot be skipped or cancelled. `once_flag` is set when
    /// the beat finishes.
    pub fn play_script_dialogue(&mut self, kind: &str, forced: bool, once_flag: Option<String>) -> bool {
        let data = env::resolve(self.interactions.oracle(), self.state.locale, kind);
        let options = if forced {
            PresenterOptions::scripted(self.config.typing_delay_ms)
        } else {
            PresenterOptions::new(self.config.typing_delay_ms)
        }
        .with_speed_multiplier(self.interactions.speed_multiplier(kind));

        if let Err(e) = self.presenter.start(data.content, options) {
            warn!(target: "runtime::interaction", kind, error = %e, "Scripted dialogue did not start");
            return false;
        }
        self.state.freeze_player = true;
        self.publish(Event::Dialogue(DialogueEvent::Started {
            speaker: data.speaker,
            key: None,
        }));
        self.active = Some(ActiveDialogue::Script { once_flag });
        self.pump_presenter();
        true
    }

    pub fn toggle_locale(&mut self) {
        let locale = self.state.toggle_locale();
        self.interactions.refresh(locale);
        self.publish(Event::Scene(SceneEvent::LocaleChanged {
            locale: locale.to_string(),
        }));
    }

    pub fn toggle_mute(&mut self) {
        let muted = self.state.toggle_mute();
        self.publish(Event::Scene(SceneEvent::MuteChanged { muted }));
    }

    fn dispatch(&mut self, action: InputAction) {
        match action {
            InputAction::ToggleLocale => return self.toggle_locale(),
            InputAction::ToggleMute => return self.toggle_mute(),
            _ => {}
        }

        if !self.presenter.is_active() {
            if action == InputAction::Confirm {
                self.interact();
            }
            return;
        }

        match (action, self.presenter.state()) {
            (InputAction::Confirm, PresenterState::Typing) => self.presenter.skip(),
            (InputAction::Confirm, PresenterState::AwaitingAdvance) => self.presenter.advance(),
            (InputAction::Confirm, PresenterState::Choice) => self.presenter.confirm(),
            (InputAction::Cancel, _) => self.presenter.cancel(),
            (InputAction::Up, _) => self.presenter.select_previous(),
            (InputAction::Down, _) => self.presenter.select_next(),
            _ => {}
        }
    }

    fn update_collisions(&mut self) {
        let Some(player) = self.scene.entities.player() else {
            return;
        };
        let probe = player.rect.inflated(self.config.touch_margin);
        let delta = self.collisions.update(&self.scene.entities, &probe);

        for entity in delta.exited {
            if self.interactions.on_exit(entity) {
                self.publish(Event::Interaction(InteractionEvent::Exited { entity: entity.0 }));
            }
        }

        for entity in delta.entered {
            let Some(kind) = self.scene.entities.get(entity).map(|e| e.kind.clone()) else {
                continue;
            };
            match kind {
                EntityKind::Interactable { key } => {
                    self.publish(Event::Interaction(InteractionEvent::Entered {
                        entity: entity.0,
                        key: key.to_string(),
                    }));
                    self.interactions.on_enter(entity, key, self.state.locale);
                }
                EntityKind::Transition { target, spawn } if !self.state.freeze_player => {
                    debug!(target: "runtime::scene", %target, "Door touched");
                    self.pending_transition = Some((target, spawn));
                }
                _ => {}
            }
        }
    }

    fn pump_presenter(&mut self) {
        for event in self.presenter.drain_events() {
            self.publish(Event::Dialogue(DialogueEvent::from(&event)));
            if let PresenterEvent::Finished(outcome) = event {
                self.complete(outcome);
            }
        }
    }

    /// Runs completion hooks for the dialogue that just reached `Done`.
    fn complete(&mut self, outcome: DialogueOutcome) {
        self.state.freeze_player = false;
        match self.active.take() {
            Some(ActiveDialogue::Interaction(held)) => {
                let first_completion = self.state.mark_completed(&held.key);
                let mut ctx = HookContext {
                    key: &held.key,
                    outcome: &outcome,
                    first_completion,
                    effects: self.interactions.effects_for(&held.key.kind),
                    chains: &self.chains,
                    state: &mut self.state,
                    services: &mut self.services,
                };
                if let Err(e) = self.hooks.execute_hooks(&mut ctx) {
                    error!(
                        target: "runtime::hooks",
                        key = %held.key,
                        error = %e,
                        code = e.error_code(),
                        "Critical completion hook failed"
                    );
                }

                self.interactions.clear();
                info!(
                    target: "runtime::interaction",
                    key = %held.key,
                    first_completion,
                    "Interaction completed"
                );
                self.publish(Event::Interaction(InteractionEvent::Completed {
                    key: held.key.to_string(),
                    first_time: first_completion,
                }));
            }
            Some(ActiveDialogue::Script { once_flag }) => {
                if let Some(flag) = once_flag {
                    self.state.set_flag(flag);
                }
            }
            None => {
                warn!(target: "runtime::interaction", "Dialogue finished with no owner");
            }
        }
    }

    fn publish(&self, event: Event) {
        self.services.bus.publish(event);
    }
}

/// Builder for [`GameSession`].
pub struct GameSessionBuilder {
    config: GameConfig,
    state: Option<GameState>,
    quests: Option<QuestCatalog>,
    hooks: Option<HookRegistry>,
    services: Option<SceneServices>,
}

impl GameSessionBuilder {
    fn new() -> Self {
        Self {
            config: GameConfig::default(),
            state: None,
            quests: None,
            hooks: None,
            services: None,
        }
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide initial game state. Defaults to a fresh state from the config
    /// with the catalog's initial quests.
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn quests(mut self, quests: QuestCatalog) -> Self {
        self.quests = Some(quests);
        self
    }

    /// Set completion hooks. Defaults to [`HookRegistry::default_hooks`].
    pub fn hooks(mut self, hooks: HookRegistry) -> Self {
        self.hooks = Some(hooks);
        self
    }

    pub fn services(mut self, services: SceneServices) -> Self {
        self.services = Some(services);
        self
    }

    /// Builds the session without entering a scene.
    pub fn build(self, source: impl SceneSource + 'static) -> GameSession {
        let quests = self.quests.unwrap_or_default();
        let state = self.state.unwrap_or_else(|| {
            let mut state = GameState::new(&self.config);
            state.quests = quests.initial_log();
            state
        });
        let services = self.services.unwrap_or_else(|| {
            SceneServices::new(
                NotificationQueue::new(self.config.notification_interval_ms),
                EventBus::new(),
            )
        });

        GameSession {
            state,
            chains: quests.chains,
            hooks: self.hooks.unwrap_or_else(HookRegistry::default_hooks),
            services,
            source: Box::new(source),
            scene: LoadedScene {
                name: String::new(),
                entities: Default::default(),
                fallback: true,
            },
            interactions: InteractionRegistry::new(Arc::new(EmptyDialogue), HashMap::new()),
            collisions: CollisionTracker::new(),
            presenter: DialoguePresenter::new(),
            active: None,
            pending_transition: None,
            config: self.config,
        }
    }
}
