//! Input-driven dialogue reveal.
//!
//! The presenter never waits on anything itself: the session feeds it frame
//! time through [`DialoguePresenter::tick`] and player input through the
//! remaining methods, then drains [`PresenterEvent`]s to drive the UI.
//!
//! ```text
//! Idle -> Typing -> AwaitingAdvance -> Typing | Choice | Done
//!                                      Choice -> Typing (response) | Done
//! ```

use std::collections::VecDeque;

use super::{BranchPoint, ChoiceAction, ContentBundle, DialogueError};

/// Per-invocation presentation flags.
#[derive(Clone, Debug, PartialEq)]
pub struct PresenterOptions {
    /// Milliseconds per revealed character. Zero reveals lines instantly.
    pub typing_delay_ms: u32,
    /// Speaker voice profile: scales the typing delay.
    pub speed_multiplier: f32,
    /// Whether skip input may complete a line early.
    pub skippable: bool,
    /// Whether cancel input may close an open branch point.
    pub cancellable: bool,
    /// Audio cue emitted with every started line.
    pub talk_cue: Option<String>,
}

impl PresenterOptions {
    pub fn new(typing_delay_ms: u32) -> Self {
        Self {
            typing_delay_ms,
            speed_multiplier: 1.0,
            skippable: true,
            cancellable: true,
            talk_cue: None,
        }
    }

    /// Options for a forced beat the player cannot skip or cancel.
    pub fn scripted(typing_delay_ms: u32) -> Self {
        Self {
            skippable: false,
            cancellable: false,
            ..Self::new(typing_delay_ms)
        }
    }

    pub fn with_speed_multiplier(mut self, multiplier: f32) -> Self {
        self.speed_multiplier = multiplier;
        self
    }

    pub fn with_talk_cue(mut self, cue: impl Into<String>) -> Self {
        self.talk_cue = Some(cue.into());
        self
    }

    fn effective_delay_ms(&self) -> u32 {
        let scaled = self.typing_delay_ms as f32 * self.speed_multiplier.max(0.0);
        scaled.round() as u32
    }
}

impl Default for PresenterOptions {
    fn default() -> Self {
        Self::new(0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PresenterState {
    #[default]
    Idle,
    Typing,
    AwaitingAdvance,
    Choice,
    Done,
}

/// Result reported once the presenter reaches [`PresenterState::Done`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DialogueOutcome {
    /// Index of the confirmed choice, if a branch point was resolved.
    pub selected: Option<usize>,
    pub action: Option<ChoiceAction>,
    /// True when the branch point was dismissed with cancel input.
    pub cancelled: bool,
    pub lines_shown: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PresenterEvent {
    LineStarted { index: usize, text: String },
    /// Number of visible characters of the current line.
    Revealed { visible: usize },
    /// Line fully shown; the continue indicator may blink.
    LineSettled { index: usize },
    TalkCue(String),
    ChoiceOpened { question: String, labels: Vec<String> },
    SelectionMoved { selected: usize },
    Finished(DialogueOutcome),
}

#[derive(Debug, Default)]
pub struct DialoguePresenter {
    state: PresenterState,
    options: PresenterOptions,
    pending: VecDeque<String>,
    line: Vec<char>,
    visible: usize,
    elapsed_ms: u32,
    branch: Option<BranchPoint>,
    selected: usize,
    outcome: DialogueOutcome,
    events: Vec<PresenterEvent>,
}

impl DialoguePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PresenterState {
        self.state
    }

    /// True while the presenter owns player input.
    pub fn is_active(&self) -> bool {
        matches!(
            self.state,
            PresenterState::Typing | PresenterState::AwaitingAdvance | PresenterState::Choice
        )
    }

    /// Visible part of the current line.
    pub fn visible_text(&self) -> String {
        self.line[..self.visible].iter().collect()
    }

    pub fn selected(&self) -> Option<usize> {
        (self.state == PresenterState::Choice).then_some(self.selected)
    }

    pub fn start(
        &mut self,
        bundle: ContentBundle,
        options: PresenterOptions,
    ) -> Result<(), DialogueError> {
        if self.is_active() {
            return Err(DialogueError::AlreadyActive);
        }
        if bundle.is_empty() {
            return Err(DialogueError::EmptyBundle);
        }

        self.options = options;
        self.pending = bundle.lines.into();
        self.branch = bundle.branch;
        self.selected = 0;
        self.outcome = DialogueOutcome::default();
        self.events.clear();
        self.next_unit();
        Ok(())
    }

    /// Advances the character reveal by `elapsed_ms` of frame time.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.state != PresenterState::Typing {
            return;
        }
        let delay = self.options.effective_delay_ms();
        if delay == 0 {
            self.settle();
            return;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        let target = ((self.elapsed_ms / delay) as usize).min(self.line.len());
        if target > self.visible {
            self.visible = target;
            self.events.push(PresenterEvent::Revealed {
                visible: self.visible,
            });
        }
        if self.visible == self.line.len() {
            self.settle();
        }
    }

    /// Moves past a settled line. Ignored in any other state.
    pub fn advance(&mut self) {
        if self.state == PresenterState::AwaitingAdvance {
            self.next_unit();
        }
    }

    /// Completes the line being typed, unless skipping is disabled.
    pub fn skip(&mut self) {
        if self.state == PresenterState::Typing && self.options.skippable {
            self.settle();
        }
    }

    pub fn select_previous(&mut self) {
        self.move_selection(|selected, count| (selected + count - 1) % count);
    }

    pub fn select_next(&mut self) {
        self.move_selection(|selected, count| (selected + 1) % count);
    }

    /// Resolves the open branch point with the highlighted option.
    pub fn confirm(&mut self) {
        if self.state != PresenterState::Choice {
            return;
        }
        let Some(branch) = self.branch.take() else {
            self.finish();
            return;
        };
        let Some(choice) = branch.choices.get(self.selected).cloned() else {
            self.finish();
            return;
        };

        self.outcome.selected = Some(self.selected);
        self.outcome.action = choice.action;
        self.pending = choice
            .response
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect();
        self.next_unit();
    }

    /// Skip while typing; close without a selection while choosing.
    pub fn cancel(&mut self) {
        match self.state {
            PresenterState::Typing => self.skip(),
            PresenterState::Choice if self.options.cancellable => {
                self.branch = None;
                self.outcome.cancelled = true;
                self.finish();
            }
            _ => {}
        }
    }

    pub fn drain_events(&mut self) -> Vec<PresenterEvent> {
        std::mem::take(&mut self.events)
    }

    fn move_selection(&mut self, step: impl Fn(usize, usize) -> usize) {
        if self.state != PresenterState::Choice {
            return;
        }
        let count = self.branch.as_ref().map_or(0, |branch| branch.choices.len());
        if count == 0 {
            return;
        }
        self.selected = step(self.selected, count);
        self.events.push(PresenterEvent::SelectionMoved {
            selected: self.selected,
        });
    }

    fn next_unit(&mut self) {
        if let Some(line) = self.pending.pop_front() {
            self.begin_line(line);
            return;
        }
        match &self.branch {
            Some(branch) if !branch.choices.is_empty() => {
                self.state = PresenterState::Choice;
                self.selected = 0;
                self.events.push(PresenterEvent::ChoiceOpened {
                    question: branch.question.clone(),
                    labels: branch.labels(),
                });
            }
            _ => self.finish(),
        }
    }

    fn begin_line(&mut self, text: String) {
        let index = self.outcome.lines_shown;
        self.outcome.lines_shown += 1;
        self.line = text.chars().collect();
        self.visible = 0;
        self.elapsed_ms = 0;
        self.state = PresenterState::Typing;
        self.events.push(PresenterEvent::LineStarted { index, text });
        if let Some(cue) = &self.options.talk_cue {
            self.events.push(PresenterEvent::TalkCue(cue.clone()));
        }
        if self.options.effective_delay_ms() == 0 {
            self.settle();
        }
    }

    fn settle(&mut self) {
        if self.visible != self.line.len() {
            self.visible = self.line.len();
            self.events.push(PresenterEvent::Revealed {
                visible: self.visible,
            });
        }
        self.state = PresenterState::AwaitingAdvance;
        self.events.push(PresenterEvent::LineSettled {
            index: self.outcome.lines_shown.saturating_sub(1),
        });
    }

    fn finish(&mut self) {
        self.state = PresenterState::Done;
        self.line.clear();
        self.visible = 0;
        self.pending.clear();
        self.events
            .push(PresenterEvent::Finished(std::mem::take(&mut self.outcome)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::ChoiceOption;

    fn lines(n: usize) -> ContentBundle {
        ContentBundle::from_lines((0..n).map(|i| format!("line {i}")))
    }

    fn settle_current(presenter: &mut DialoguePresenter) {
        for _ in 0..1000 {
            if presenter.state() != PresenterState::Typing {
                break;
            }
            presenter.tick(16);
        }
    }

    #[test]
    fn n_lines_need_exactly_n_advances() {
        for n in 1..6 {
            let mut presenter = DialoguePresenter::new();
            presenter.start(lines(n), PresenterOptions::new(15)).unwrap();
            for step in 0..n {
                assert!(presenter.is_active(), "done early at step {step} of {n}");
                // advancing mid-line does nothing
                presenter.advance();
                settle_current(&mut presenter);
                assert_eq!(presenter.state(), PresenterState::AwaitingAdvance);
                presenter.advance();
            }
            assert_eq!(presenter.state(), PresenterState::Done);
        }
    }

    #[test]
    fn instant_text_settles_on_start() {
        let mut presenter = DialoguePresenter::new();
        presenter.start(lines(2), PresenterOptions::new(0)).unwrap();
        assert_eq!(presenter.state(), PresenterState::AwaitingAdvance);
        assert_eq!(presenter.visible_text(), "line 0");
    }

    #[test]
    fn typing_reveals_per_delay() {
        let mut presenter = DialoguePresenter::new();
        presenter
            .start(ContentBundle::from_lines(["abcd"]), PresenterOptions::new(10))
            .unwrap();
        presenter.tick(25);
        assert_eq!(presenter.visible_text(), "ab");
        presenter.tick(20);
        assert_eq!(presenter.state(), PresenterState::AwaitingAdvance);
        assert_eq!(presenter.visible_text(), "abcd");
    }

    #[test]
    fn start_while_active_is_rejected() {
        let mut presenter = DialoguePresenter::new();
        presenter.start(lines(1), PresenterOptions::default()).unwrap();
        assert_eq!(
            presenter.start(lines(1), PresenterOptions::default()),
            Err(DialogueError::AlreadyActive)
        );
        presenter.advance();
        assert!(presenter.start(lines(1), PresenterOptions::default()).is_ok());
    }

    #[test]
    fn empty_bundle_is_rejected() {
        let mut presenter = DialoguePresenter::new();
        assert_eq!(
            presenter.start(ContentBundle::default(), PresenterOptions::default()),
            Err(DialogueError::EmptyBundle)
        );
        assert_eq!(presenter.state(), PresenterState::Idle);
    }

    #[test]
    fn unskippable_line_ignores_skip_and_cancel() {
        let mut presenter = DialoguePresenter::new();
        presenter
            .start(ContentBundle::from_lines(["long line"]), PresenterOptions::scripted(50))
            .unwrap();
        presenter.skip();
        presenter.cancel();
        assert_eq!(presenter.state(), PresenterState::Typing);

        let mut skippable = DialoguePresenter::new();
        skippable
            .start(ContentBundle::from_lines(["long line"]), PresenterOptions::new(50))
            .unwrap();
        skippable.skip();
        assert_eq!(skippable.state(), PresenterState::AwaitingAdvance);
    }

    fn lunch_menu() -> ContentBundle {
        let branch = BranchPoint::new(
            "Do you know the lunch menu?",
            [
                ChoiceOption::new("Yes").with_response("So what is it?"),
                ChoiceOption::new("No")
                    .with_response("Then go away.")
                    .with_action(ChoiceAction::Named("sulk".into())),
            ],
        )
        .unwrap();
        ContentBundle::from_lines(["(chatting)"]).with_branch(branch)
    }

    #[test]
    fn choice_response_is_typed_before_done() {
        let mut presenter = DialoguePresenter::new();
        presenter.start(lunch_menu(), PresenterOptions::new(0)).unwrap();
        presenter.advance();
        assert_eq!(presenter.state(), PresenterState::Choice);

        presenter.select_next();
        presenter.select_next();
        presenter.select_previous();
        assert_eq!(presenter.selected(), Some(1));
        presenter.confirm();
        assert_eq!(presenter.state(), PresenterState::AwaitingAdvance);
        assert_eq!(presenter.visible_text(), "Then go away.");
        presenter.advance();

        let finished = presenter.drain_events().into_iter().find_map(|event| match event {
            PresenterEvent::Finished(outcome) => Some(outcome),
            _ => None,
        });
        let outcome = finished.unwrap();
        assert_eq!(outcome.selected, Some(1));
        assert_eq!(outcome.action, Some(ChoiceAction::Named("sulk".into())));
        assert_eq!(outcome.lines_shown, 2);
    }

    #[test]
    fn cancel_closes_choice_only_when_allowed() {
        let mut presenter = DialoguePresenter::new();
        presenter.start(lunch_menu(), PresenterOptions::scripted(0)).unwrap();
        presenter.advance();
        presenter.cancel();
        assert_eq!(presenter.state(), PresenterState::Choice);

        let mut presenter = DialoguePresenter::new();
        presenter.start(lunch_menu(), PresenterOptions::new(0)).unwrap();
        presenter.advance();
        presenter.cancel();
        assert_eq!(presenter.state(), PresenterState::Done);
        let events = presenter.drain_events();
        assert!(events.contains(&PresenterEvent::Finished(DialogueOutcome {
            selected: None,
            action: None,
            cancelled: true,
            lines_shown: 1,
        })));
    }

    #[test]
    fn talk_cue_accompanies_each_line() {
        let mut presenter = DialoguePresenter::new();
        presenter
            .start(lines(2), PresenterOptions::new(0).with_talk_cue("blip"))
            .unwrap();
        presenter.advance();
        let cues = presenter
            .drain_events()
            .into_iter()
            .filter(|event| matches!(event, PresenterEvent::TalkCue(_)))
            .count();
        assert_eq!(cues, 2);
    }

    #[test]
    fn speed_multiplier_scales_delay() {
        let mut presenter = DialoguePresenter::new();
        presenter
            .start(
                ContentBundle::from_lines(["abcd"]),
                PresenterOptions::new(10).with_speed_multiplier(2.0),
            )
            .unwrap();
        presenter.tick(40);
        assert_eq!(presenter.visible_text(), "ab");
    }
}
