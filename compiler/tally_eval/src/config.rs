//! Engine limits.
//!
//! A host decides how much a single run may consume. Every limit is
//! optional; `None` means the engine never checks it. Exceeding a limit is a
//! language-level failure: the run terminates with a limit diagnostic, the
//! same way a divide by zero does.

/// Limits applied to one run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EngineConfig {
    /// Maximum number of frames on the execution stack.
    pub max_call_depth: Option<usize>,
    /// Maximum number of instructions a run may execute.
    pub step_budget: Option<u64>,
    /// Maximum number of values on the evaluation stack.
    pub max_evaluation_stack: Option<usize>,
}

impl EngineConfig {
    /// Call depth used by [`EngineConfig::sandboxed`].
    pub const SANDBOX_CALL_DEPTH: usize = 200;
    /// Step budget used by [`EngineConfig::sandboxed`].
    pub const SANDBOX_STEP_BUDGET: u64 = 1_000_000;
    /// Stack size used by [`EngineConfig::sandboxed`].
    pub const SANDBOX_EVALUATION_STACK: usize = 10_000;

    /// No limits. Same as `Default`.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Limits suited to running untrusted programs.
    pub fn sandboxed() -> Self {
        EngineConfig {
            max_call_depth: Some(Self::SANDBOX_CALL_DEPTH),
            step_budget: Some(Self::SANDBOX_STEP_BUDGET),
            max_evaluation_stack: Some(Self::SANDBOX_EVALUATION_STACK),
        }
    }

    #[must_use]
    pub fn with_max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = Some(depth);
        self
    }

    #[must_use]
    pub fn with_step_budget(mut self, budget: u64) -> Self {
        self.step_budget = Some(budget);
        self
    }

    #[must_use]
    pub fn with_max_evaluation_stack(mut self, slots: usize) -> Self {
        self.max_evaluation_stack = Some(slots);
        self
    }

    /// Whether any limit is set.
    pub fn is_bounded(&self) -> bool {
        self.max_call_depth.is_some()
            || self.step_budget.is_some()
            || self.max_evaluation_stack.is_some()
    }
}

/// Per-run counters checked against an [`EngineConfig`].
#[derive(Debug, Default)]
pub(crate) struct Budget {
    steps: u64,
    limit: Option<u64>,
}

/// The step budget ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BudgetExceeded {
    pub budget: u64,
}

impl Budget {
    pub(crate) fn new(config: &EngineConfig) -> Self {
        Budget {
            steps: 0,
            limit: config.step_budget,
        }
    }

    /// Count one instruction. A step the budget refuses is not counted.
    #[inline]
    pub(crate) fn charge(&mut self) -> Result<(), BudgetExceeded> {
        if let Some(budget) = self.limit {
            if self.steps >= budget {
                return Err(BudgetExceeded { budget });
            }
        }
        self.steps = self.steps.saturating_add(1);
        Ok(())
    }

    #[inline]
    pub(crate) fn steps(&self) -> u64 {
        self.steps
    }
}

#[cfg(test)]
mod tests;
