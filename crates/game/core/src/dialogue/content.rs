use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::locale::Locale;

use super::DialogueError;

/// Side effect attached to a choice option.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ChoiceAction {
    /// Close the dialogue without further effect.
    Cancel,
    OpenLink { url: String },
    /// Launch the attached mini game.
    PlayGame,
    /// Callback registered under this name at session construction.
    Named(String),
}

/// One selectable option of a [`BranchPoint`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChoiceOption {
    pub label: String,
    /// Lines shown after the option is confirmed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub response: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub action: Option<ChoiceAction>,
}

impl ChoiceOption {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            response: Vec::new(),
            action: None,
        }
    }

    pub fn with_response(mut self, line: impl Into<String>) -> Self {
        self.response.push(line.into());
        self
    }

    pub fn with_action(mut self, action: ChoiceAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// A question with a small fixed set of labeled options.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BranchPoint {
    pub question: String,
    pub choices: ArrayVec<ChoiceOption, { GameConfig::MAX_CHOICES }>,
}

impl BranchPoint {
    pub fn new(
        question: impl Into<String>,
        choices: impl IntoIterator<Item = ChoiceOption>,
    ) -> Result<Self, DialogueError> {
        let choices: Vec<ChoiceOption> = choices.into_iter().collect();
        let count = choices.len();
        let choices = ArrayVec::try_from(choices.as_slice())
            .map_err(|_| DialogueError::TooManyChoices {
                count,
                max: GameConfig::MAX_CHOICES,
            })?;
        Ok(Self {
            question: question.into(),
            choices,
        })
    }

    pub fn labels(&self) -> Vec<String> {
        self.choices.iter().map(|choice| choice.label.clone()).collect()
    }
}

/// One entry of a content sequence as supplied by a dialogue table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayUnit {
    Line(String),
    Branch(BranchPoint),
}

/// Normalized content for one interaction.
///
/// Lines are shown in order and the optional branch point is consulted after
/// the last line. Nested branches cannot be expressed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentBundle {
    pub lines: Vec<String>,
    pub branch: Option<BranchPoint>,
}

impl ContentBundle {
    /// Normalizes table entries: blank lines are dropped and only the first
    /// branch point is kept.
    pub fn from_units(units: impl IntoIterator<Item = DisplayUnit>) -> Self {
        let mut bundle = Self::default();
        for unit in units {
            match unit {
                DisplayUnit::Line(line) if line.trim().is_empty() => {}
                DisplayUnit::Line(line) => bundle.lines.push(line),
                DisplayUnit::Branch(branch) => {
                    if bundle.branch.is_none() {
                        bundle.branch = Some(branch);
                    }
                }
            }
        }
        bundle
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_units(lines.into_iter().map(|line| DisplayUnit::Line(line.into())))
    }

    /// Two-line stand-in used when a table has no entry for `kind`.
    pub fn placeholder(kind: &str) -> Self {
        Self::from_lines([format!("This is {kind}"), format!("이것은 {kind}입니다")])
    }

    pub fn with_branch(mut self, branch: BranchPoint) -> Self {
        self.branch = Some(branch);
        self
    }

    /// Yes/no prompt that opens `url` on confirmation.
    pub fn link_prompt(question: impl Into<String>, url: impl Into<String>, locale: Locale) -> Self {
        let (yes, no) = yes_no(locale);
        let choices = [
            ChoiceOption::new(no).with_action(ChoiceAction::Cancel),
            ChoiceOption::new(yes).with_action(ChoiceAction::OpenLink { url: url.into() }),
        ];
        Self::default().with_branch(BranchPoint {
            question: question.into(),
            choices: ArrayVec::from_iter(choices),
        })
    }

    /// Yes/no prompt that starts the attached mini game on confirmation.
    pub fn game_prompt(question: impl Into<String>, locale: Locale) -> Self {
        let (yes, no) = yes_no(locale);
        let decline = match locale {
            Locale::Korean => "아쉽네요.",
            Locale::English => "Maybe next time.",
        };
        let choices = [
            ChoiceOption::new(no)
                .with_response(decline)
                .with_action(ChoiceAction::Cancel),
            ChoiceOption::new(yes).with_action(ChoiceAction::PlayGame),
        ];
        Self::default().with_branch(BranchPoint {
            question: question.into(),
            choices: ArrayVec::from_iter(choices),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.branch.is_none()
    }
}

fn yes_no(locale: Locale) -> (&'static str, &'static str) {
    match locale {
        Locale::Korean => ("예", "아니오"),
        Locale::English => ("Yes", "No"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_and_extra_branches_are_dropped() {
        let first = BranchPoint::new("q1", [ChoiceOption::new("a")]).unwrap();
        let second = BranchPoint::new("q2", [ChoiceOption::new("b")]).unwrap();
        let bundle = ContentBundle::from_units([
            DisplayUnit::Line("hello".into()),
            DisplayUnit::Line("   ".into()),
            DisplayUnit::Branch(first.clone()),
            DisplayUnit::Branch(second),
        ]);
        assert_eq!(bundle.lines, vec!["hello".to_string()]);
        assert_eq!(bundle.branch, Some(first));
    }

    #[test]
    fn branch_rejects_too_many_choices() {
        let choices = (0..5).map(|i| ChoiceOption::new(format!("option {i}")));
        let err = BranchPoint::new("pick", choices).unwrap_err();
        assert_eq!(err, DialogueError::TooManyChoices { count: 5, max: 4 });
    }

    #[test]
    fn placeholder_names_kind_in_both_lines() {
        let bundle = ContentBundle::placeholder("ball");
        assert_eq!(bundle.lines.len(), 2);
        assert!(bundle.lines.iter().all(|line| line.contains("ball")));
    }

    #[test]
    fn link_prompt_opens_url_on_yes() {
        let bundle = ContentBundle::link_prompt("Visit?", "https://example.com", Locale::English);
        let branch = bundle.branch.unwrap();
        assert_eq!(branch.labels(), vec!["No".to_string(), "Yes".to_string()]);
        assert_eq!(
            branch.choices[1].action,
            Some(ChoiceAction::OpenLink {
                url: "https://example.com".into()
            })
        );
    }
}
