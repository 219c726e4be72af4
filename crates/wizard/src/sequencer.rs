//! Step sequencing: a 1-based cursor over an ordered list of steps.
//!
//! The sequencer knows nothing about what a step is; the coordinator uses
//! it over [`resume::SectionKey`], tests use it over plain strings.

use crate::error::{Error, Result};
use resume::SectionKey;
use std::fmt;

/// Default wizard steps, in order.
pub const DEFAULT_STEPS: [SectionKey; 5] = SectionKey::ALL;

/// Display status of one step relative to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Before the current step
    Completed,
    /// The current step
    Active,
    /// After the current step
    Pending,
}

impl StepStatus {
    /// Indicator glyph used by the terminal UI
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Completed => "✓",
            Self::Active => "●",
            Self::Pending => "○",
        }
    }
}

/// One entry of the progress indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepIndicator<'a, T> {
    /// 1-based position
    pub position: usize,
    /// The step itself
    pub step: &'a T,
    /// Status relative to the cursor
    pub status: StepStatus,
}

/// Cursor over a non-empty, duplicate-free list of steps.
#[derive(Debug, Clone)]
pub struct StepSequencer<T> {
    steps: Vec<T>,
    current: usize,
}

impl<T: PartialEq + fmt::Debug> StepSequencer<T> {
    /// Start at the first of `steps`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSteps`] for an empty list or a repeated step.
    pub fn new(steps: Vec<T>) -> Result<Self> {
        if steps.is_empty() {
            return Err(Error::InvalidSteps("at least one step is required".to_string()));
        }
        for (i, step) in steps.iter().enumerate() {
            if steps[..i].contains(step) {
                return Err(Error::InvalidSteps(format!("{step:?} appears more than once")));
            }
        }
        Ok(Self { steps, current: 1 })
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Current 1-based position
    pub fn position(&self) -> usize {
        self.current
    }

    /// The current step
    pub fn current(&self) -> &T {
        &self.steps[self.current - 1]
    }

    /// All steps in order
    pub fn steps(&self) -> &[T] {
        &self.steps
    }

    /// True at position 1
    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    /// True at position N
    pub fn is_last(&self) -> bool {
        self.current == self.steps.len()
    }

    /// Move forward one step; returns false (and stays) at the last step.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Move back one step; returns false (and stays) at the first step.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Status of the step at 1-based `position`.
    ///
    /// Positions past the end report [`StepStatus::Pending`].
    pub fn status(&self, position: usize) -> StepStatus {
        match position.cmp(&self.current) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Active,
            std::cmp::Ordering::Greater => StepStatus::Pending,
        }
    }

    /// Progress indicator entries, one per step
    pub fn indicators(&self) -> Vec<StepIndicator<'_, T>> {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| StepIndicator {
                position: i + 1,
                step,
                status: self.status(i + 1),
            })
            .collect()
    }
}

impl Default for StepSequencer<SectionKey> {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS.to_vec(),
            current: 1,
        }
    }
}
