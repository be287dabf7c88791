//! A group of inserts awaited at a single join point.

use std::future::Future;

use futures::future::{BoxFuture, try_join_all};

use crate::{ResultEngine, plan::SeedStep};

/// Rows written by one seed step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepReport {
    pub step: SeedStep,
    pub inserted: u64,
    /// Rows left untouched because their key was already present.
    pub skipped: u64,
}

/// Inserts of a single seed step.
///
/// Each task resolves to the number of rows it inserted (`0` when the row was
/// skipped on conflict). All tasks are polled together by [`join`], which
/// stops at the first error and drops the remaining tasks.
///
/// [`join`]: InsertBatch::join
pub struct InsertBatch<'a> {
    step: SeedStep,
    tasks: Vec<BoxFuture<'a, ResultEngine<u64>>>,
}

impl<'a> InsertBatch<'a> {
    pub fn new(step: SeedStep) -> Self {
        Self {
            step,
            tasks: Vec::new(),
        }
    }

    pub fn push<F>(&mut self, task: F)
    where
        F: Future<Output = ResultEngine<u64>> + Send + 'a,
    {
        self.tasks.push(Box::pin(task));
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub async fn join(self) -> ResultEngine<StepReport> {
        let attempted = self.tasks.len() as u64;
        let inserted: u64 = try_join_all(self.tasks).await?.into_iter().sum();

        Ok(StepReport {
            step: self.step,
            inserted,
            skipped: attempted.saturating_sub(inserted),
        })
    }
}
