use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// How many trials an estimator may run, and when it has to stop early.
///
/// The deadline and the cancellation flag are checked between trials, so a
/// live agent can bound the time spent in one estimate.
#[derive(Debug, Clone, Copy)]
pub struct TrialBudget<'a> {
    trials: usize,
    deadline: Option<Instant>,
    cancel: Option<&'a AtomicBool>,
}

impl<'a> TrialBudget<'a> {
    pub fn new(trials: usize) -> Self {
        TrialBudget { trials, deadline: None, cancel: None }
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Deadline `limit` from now.
    pub fn with_time_limit(self, limit: Duration) -> Self {
        self.with_deadline(Instant::now() + limit)
    }

    /// Stop as soon as `flag` is set.
    pub fn with_cancel(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn interrupted(&self) -> bool {
        let cancelled = self.cancel.is_some_and(|f| f.load(Ordering::Relaxed));
        let expired = self.deadline.is_some_and(|d| Instant::now() >= d);
        cancelled || expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_budget_never_interrupts() {
        let budget = TrialBudget::new(10);
        assert_eq!(budget.trials(), 10);
        assert!(!budget.interrupted());
    }

    #[test]
    fn cancel_flag_interrupts() {
        let flag = AtomicBool::new(false);
        let budget = TrialBudget::new(10).with_cancel(&flag);
        assert!(!budget.interrupted());
        flag.store(true, Ordering::Relaxed);
        assert!(budget.interrupted());
    }

    #[test]
    fn past_deadline_interrupts() {
        let budget = TrialBudget::new(10).with_deadline(Instant::now());
        assert!(budget.interrupted());
        let budget = TrialBudget::new(10).with_time_limit(Duration::from_secs(3600));
        assert!(!budget.interrupted());
    }
}
