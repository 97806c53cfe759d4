//! Step Controller: the builder wizard's state machine.
//!
//! Navigation is intentionally ungated: any step can be reached at any time,
//! including jumping past steps whose sections are still empty. Navigation
//! only changes which editor is visible; it never touches the Document.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::SectionKind;
use crate::i18n::{Label, Language};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Step {
    PersonalInfo = 1,
    Summary = 2,
    Experience = 3,
    Education = 4,
    Skills = 5,
    Preview = 6,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::PersonalInfo,
        Step::Summary,
        Step::Experience,
        Step::Education,
        Step::Skills,
        Step::Preview,
    ];

    pub const FIRST: Step = Step::PersonalInfo;
    pub const LAST: Step = Step::Preview;

    /// 1-based position in the wizard.
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(number: u8) -> Option<Step> {
        let index = usize::from(number.checked_sub(1)?);
        Self::ALL.get(index).copied()
    }

    /// The section edited on this step; `None` for the preview.
    pub fn section(self) -> Option<SectionKind> {
        match self {
            Step::PersonalInfo => Some(SectionKind::PersonalInfo),
            Step::Summary => Some(SectionKind::Summary),
            Step::Experience => Some(SectionKind::Experience),
            Step::Education => Some(SectionKind::Education),
            Step::Skills => Some(SectionKind::Skills),
            Step::Preview => None,
        }
    }

    pub fn title(self, language: Language) -> &'static str {
        let label = match self {
            Step::PersonalInfo => Label::PersonalInfo,
            Step::Summary => Label::Summary,
            Step::Experience => Label::Experience,
            Step::Education => Label::Education,
            Step::Skills => Label::Skills,
            Step::Preview => Label::Preview,
        };
        label.text(language)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepError {
    #[error("Step {0} does not exist (valid steps are 1-6)")]
    OutOfRange(u8),
}

/// Snapshot for a step indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepProgress {
    pub current: u8,
    pub step: Step,
    pub title: &'static str,
    pub total: u8,
    pub is_first: bool,
    pub is_last: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepController {
    current: Step,
}

impl Default for StepController {
    fn default() -> Self {
        Self { current: Step::FIRST }
    }
}

impl StepController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Step {
        self.current
    }

    /// Advances one step; a no-op on the preview step.
    pub fn next(&mut self) -> Step {
        if let Some(step) = Step::from_number(self.current.number() + 1) {
            self.current = step;
        }
        self.current
    }

    /// Goes back one step; a no-op on the first step.
    pub fn prev(&mut self) -> Step {
        if let Some(step) = self
            .current
            .number()
            .checked_sub(1)
            .and_then(Step::from_number)
        {
            self.current = step;
        }
        self.current
    }

    /// Jumps to any step without checking earlier steps for completeness.
    pub fn go_to(&mut self, number: u8) -> Result<Step, StepError> {
        let step = Step::from_number(number).ok_or(StepError::OutOfRange(number))?;
        self.current = step;
        Ok(step)
    }

    pub fn progress(&self, language: Language) -> StepProgress {
        StepProgress {
            current: self.current.number(),
            step: self.current,
            title: self.current.title(language),
            total: Step::LAST.number(),
            is_first: self.current == Step::FIRST,
            is_last: self.current == Step::LAST,
        }
    }
}
