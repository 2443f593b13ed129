//! Builds a ready-to-run game session from the content directory.
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use scene_runtime::{CompletionHook, GameSession, HookRegistry, NotifyCallback};
use school_content::ContentFactory;
use tracing::{debug, info};

use crate::config::RuntimeConfig;

/// Named callbacks the bundled content refers to.
pub fn default_callbacks() -> Vec<Arc<dyn CompletionHook>> {
    vec![Arc::new(NotifyCallback::new(
        "kick_ball",
        "The ball bounced off the wall!",
        "공이 벽에 맞고 튕겨 나왔다!",
    ))]
}

/// Builder that loads configuration and quests for a new session.
pub struct SessionBuilder {
    config: RuntimeConfig,
    callbacks: Vec<Arc<dyn CompletionHook>>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            callbacks: default_callbacks(),
        }
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Registers an extra named callback. A callback with the same name as
    /// an earlier one replaces it.
    pub fn callback(mut self, callback: impl CompletionHook + 'static) -> Self {
        self.callbacks.push(Arc::new(callback));
        self
    }

    pub fn build(self) -> Result<SessionSetup> {
        let data_dir = &self.config.data_dir;
        if !data_dir.is_dir() {
            bail!(
                "Content data directory not found: {}. Set CONTENT_DATA_DIR to override.",
                data_dir.display()
            );
        }

        let factory = ContentFactory::new(data_dir);
        let mut game_config = factory
            .load_config()
            .with_context(|| format!("Failed to load config.toml from {}", data_dir.display()))?;
        if let Some(locale) = self.config.locale {
            game_config.default_locale = locale;
        }
        if let Some(delay) = self.config.typing_delay_ms {
            game_config.typing_delay_ms = delay;
        }

        let quests = factory
            .load_quests()
            .with_context(|| format!("Failed to load quests.ron from {}", data_dir.display()))?;
        debug!(
            quests = quests.quests.len(),
            chains = quests.chains.len(),
            "Quest catalog loaded"
        );

        let session = GameSession::builder()
            .config(game_config)
            .quests(quests)
            .hooks(HookRegistry::with_callbacks(self.callbacks))
            .build(factory);

        info!(
            scene = %self.config.start_scene,
            data_dir = %data_dir.display(),
            "Session built"
        );

        Ok(SessionSetup {
            config: self.config,
            session,
        })
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A built session that has not entered a scene yet, so observers can
/// subscribe to the bus before the first events fire.
pub struct SessionSetup {
    pub config: RuntimeConfig,
    pub session: GameSession,
}

impl SessionSetup {
    pub fn enter_start_scene(&mut self) {
        self.session.enter_scene(&self.config.start_scene, None);
    }
}
