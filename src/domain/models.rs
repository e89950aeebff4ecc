use serde::Serialize;

use super::errors::{DomainError, DomainResult};

/// Messages shown for each step, indexed by `step - 1`.
pub const MESSAGES: [&str; 3] = [
    "Learn React ⚛️",
    "Apply for jobs 💼",
    "Invest your new income 🤑",
];

/// Number of steps in the indicator.
pub const STEP_COUNT: u8 = MESSAGES.len() as u8;

/// A step number that is always within `1..=3`.
///
/// # Examples
///
/// ```
/// use steps::domain::StepIndex;
///
/// let step = StepIndex::new(2).unwrap();
/// assert_eq!(step.get(), 2);
/// assert!(StepIndex::new(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StepIndex(u8);

impl StepIndex {
    pub const FIRST: StepIndex = StepIndex(1);
    pub const LAST: StepIndex = StepIndex(STEP_COUNT);

    pub fn new(step: u8) -> DomainResult<Self> {
        if (Self::FIRST.0..=Self::LAST.0).contains(&step) {
            Ok(Self(step))
        } else {
            Err(DomainError::StepOutOfRange(step))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn message(self) -> &'static str {
        MESSAGES[usize::from(self.0 - 1)]
    }

    /// The previous step, or `None` at the first step.
    pub fn previous(self) -> Option<Self> {
        (self > Self::FIRST).then(|| Self(self.0 - 1))
    }

    /// The next step, or `None` at the last step.
    pub fn next(self) -> Option<Self> {
        (self < Self::LAST).then(|| Self(self.0 + 1))
    }
}

impl Default for StepIndex {
    fn default() -> Self {
        Self::FIRST
    }
}

impl std::fmt::Display for StepIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Marker {
    pub number: u8,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DismissControl {
    pub label: &'static str,
}

impl DismissControl {
    pub const CLOSE_LABEL: &'static str = "×";
    pub const OPEN_LABEL: &'static str = "☰";
}

/// Markers, message and navigation controls. Absent while dismissed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepPanel {
    pub markers: [Marker; 3],
    pub step: StepIndex,
    pub message: &'static str,
    pub message_line: String,
    /// Presentational hint: a Previous press would change the step.
    pub previous_enabled: bool,
    /// Presentational hint: a Next press would change the step.
    pub next_enabled: bool,
}

/// Pure-data output of [`StepWidget::render`](super::StepWidget::render).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewDescription {
    pub dismiss: DismissControl,
    pub panel: Option<StepPanel>,
}

impl ViewDescription {
    pub fn is_panel_visible(&self) -> bool {
        self.panel.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_index_accepts_range() {
        for n in 1..=3 {
            assert_eq!(StepIndex::new(n).unwrap().get(), n);
        }
    }

    #[test]
    fn test_step_index_rejects_out_of_range() {
        assert_eq!(StepIndex::new(0), Err(DomainError::StepOutOfRange(0)));
        assert_eq!(StepIndex::new(4), Err(DomainError::StepOutOfRange(4)));
        assert_eq!(StepIndex::new(u8::MAX), Err(DomainError::StepOutOfRange(255)));
    }

    #[test]
    fn test_step_index_messages() {
        assert_eq!(StepIndex::FIRST.message(), "Learn React ⚛️");
        assert_eq!(StepIndex::new(2).unwrap().message(), "Apply for jobs 💼");
        assert_eq!(StepIndex::LAST.message(), "Invest your new income 🤑");
    }

    #[test]
    fn test_step_index_neighbours() {
        assert_eq!(StepIndex::FIRST.previous(), None);
        assert_eq!(StepIndex::LAST.next(), None);
        assert_eq!(StepIndex::FIRST.next(), StepIndex::new(2).ok());
        assert_eq!(StepIndex::LAST.previous(), StepIndex::new(2).ok());
    }

    #[test]
    fn test_default_step_is_first() {
        assert_eq!(StepIndex::default(), StepIndex::FIRST);
    }
}
