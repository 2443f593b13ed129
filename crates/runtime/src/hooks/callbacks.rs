//! Reusable named callbacks.

use school_core::{Locale, Notification};

use super::{CompletionHook, HookContext, HookRegistry};
use crate::error::HookError;
use crate::services::NotificationSink;

/// Named callback that pushes a localized info notification.
pub struct NotifyCallback {
    name: String,
    english: String,
    korean: String,
}

impl NotifyCallback {
    pub fn new(name: impl Into<String>, english: impl Into<String>, korean: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            english: english.into(),
            korean: korean.into(),
        }
    }
}

impl CompletionHook for NotifyCallback {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self, ctx: &mut HookContext<'_>, _registry: &HookRegistry) -> Result<(), HookError> {
        let message = match ctx.state.locale {
            Locale::Korean => &self.korean,
            Locale::English => &self.english,
        };
        ctx.services
            .notifications
            .notify(Notification::info(message.clone()));
        Ok(())
    }
}
