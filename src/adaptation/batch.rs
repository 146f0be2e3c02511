//! Batch coordination: fan pattern collections through the generator
//! with per-item failure isolation.
//!
//! Callers always receive one outcome per input, in input order. A
//! single malformed pattern yields an error at its own index and never
//! prevents insights from the rest of the batch.

use crate::adaptation::generator::InsightGenerator;
use crate::adaptation::types::{Insight, InsightContext, Pattern, RawPattern};
use crate::error::Result;

use serde_json::Value;
use tokio::sync::Semaphore;

use std::sync::Arc;

impl InsightGenerator {
    /// Generate one insight per pattern, in input order.
    pub fn generate_batch(
        &self,
        patterns: &[Pattern],
        context: Option<&InsightContext>,
    ) -> Vec<Result<Insight>> {
        patterns
            .iter()
            .enumerate()
            .map(|(index, pattern)| {
                let outcome = self.generate(pattern, context);
                if let Err(error) = &outcome {
                    tracing::debug!(%error, index, kind = %pattern.kind, "batch item failed generation");
                }
                outcome
            })
            .collect()
    }

    /// Parse, validate, and generate from raw detector entries.
    ///
    /// Each entry independently runs the full ingress path: JSON shape
    /// check, required-field check, confidence validation, generation.
    pub fn generate_batch_raw(
        &self,
        entries: Vec<Value>,
        context: Option<&InsightContext>,
    ) -> Vec<Result<Insight>> {
        entries
            .into_iter()
            .map(|entry| {
                let pattern = RawPattern::from_value(entry)?.validate()?;
                self.generate(&pattern, context)
            })
            .collect()
    }

    /// Concurrent batch generation on a task pool.
    ///
    /// Items are processed in whatever order the scheduler picks, bounded
    /// by `max_concurrent_generations`; results are collected
    /// positionally, so the output sequence always matches input order
    /// regardless of completion order.
    pub async fn generate_batch_concurrent(
        self: Arc<Self>,
        patterns: Vec<Pattern>,
        context: Option<InsightContext>,
    ) -> Vec<Result<Insight>> {
        let patterns = Arc::new(patterns);
        let context = context.map(Arc::new);
        let semaphore = Arc::new(Semaphore::new(self.config().max_concurrent_generations));

        let mut tasks = Vec::with_capacity(patterns.len());
        for index in 0..patterns.len() {
            let generator = Arc::clone(&self);
            let patterns = Arc::clone(&patterns);
            let context = context.clone();
            let semaphore = Arc::clone(&semaphore);
            tasks.push(tokio::spawn(async move {
                // The semaphore is never closed, so acquisition only fails
                // on runtime shutdown; generation proceeds unthrottled then.
                let _permit = semaphore.acquire().await;
                generator.generate(&patterns[index], context.as_deref())
            }));
        }

        // Awaiting the handles in spawn order assembles the output
        // positionally.
        let mut outcomes = Vec::with_capacity(tasks.len());
        for (index, task) in tasks.into_iter().enumerate() {
            let outcome = match task.await {
                Ok(outcome) => outcome,
                Err(error) => {
                    // Generation is pure, so computing the lost item inline
                    // is deterministic and keeps one outcome per input.
                    tracing::error!(%error, index, "batch generation task failed; computing inline");
                    self.generate(&patterns[index], context.as_deref())
                }
            };
            outcomes.push(outcome);
        }
        outcomes
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
