//! Non-blocking recomputation driver.
//!
//! Runs recomputations on rayon's thread pool and lets a new request
//! supersede an in-flight one: submitting replaces the pending result
//! channel, so the stale result is discarded on arrival and only the newest
//! submission's surface is ever presented.
//!
//! # Flow
//!
//! ```text
//! Main thread                        Worker (rayon)
//! ┌────────────────┐
//! │ submit(params) │
//! └───────┬────────┘
//!         │                         ┌────────────────┐
//!         └────────────────────────►│ recompute()    │
//!                                   │ (lattice,      │
//!                                   │  density,      │
//!                                   │  extraction)   │
//!                                   └───────┬────────┘
//! ┌────────────────┐                        │
//! │ poll()         │◄───────────────────────┘
//! │ - swap surface │
//! │ - recycle old  │
//! └────────────────┘
//! ```
//!
//! A failed recomputation keeps the previously computed surface: the driver
//! only swaps surfaces on success, so the renderer can keep drawing the last
//! good mesh while the parameter layer decides whether to resubmit.

use crossbeam_channel::{self as channel, Receiver, TryRecvError};

use super::process::recompute;
use super::types::{RecomputeStats, SurfaceParams};
use crate::error::PipelineError;
use crate::metrics::PipelineMetrics;
use crate::surface::{SurfaceBuffer, SurfaceBufferManager};

/// What a worker sends back: the recomputation outcome plus whatever spare
/// allocation the worker-side manager still holds (populated on failure,
/// when the acquired buffer was returned instead of filled).
struct TaskResult {
  outcome: Result<(SurfaceBuffer, RecomputeStats), PipelineError>,
  spare: Option<SurfaceBuffer>,
}

/// Async front-end over [`recompute`] with supersession.
pub struct SurfaceDriver {
  /// Receiver for the newest submission. Replaced on every submit; the
  /// previous task keeps running but its send lands on a dropped channel.
  receiver: Option<Receiver<TaskResult>>,
  /// Last successfully computed surface.
  surface: Option<SurfaceBuffer>,
  /// Recycled allocation handed to the next submission.
  spare: Option<SurfaceBuffer>,
  metrics: PipelineMetrics,
}

impl SurfaceDriver {
  pub fn new() -> Self {
    Self {
      receiver: None,
      surface: None,
      spare: None,
      metrics: PipelineMetrics::new(),
    }
  }

  /// Check if a recomputation is in flight.
  pub fn is_busy(&self) -> bool {
    self.receiver.is_some()
  }

  /// Start a recomputation for one parameter snapshot (non-blocking).
  ///
  /// Supersedes any in-flight request: its result will be discarded on
  /// arrival and never presented.
  pub fn submit(&mut self, params: SurfaceParams) {
    let spare = self.spare.take();
    let (sender, receiver) = channel::bounded(1);
    self.receiver = Some(receiver);

    rayon::spawn(move || {
      let mut manager = SurfaceBufferManager::with_spare(spare);
      let outcome =
        recompute(&params, &mut manager).map(|output| (output.surface, output.stats));
      // Ignore send error (receiver dropped = superseded)
      let _ = sender.send(TaskResult {
        outcome,
        spare: manager.into_spare(),
      });
    });
  }

  /// Poll for the newest submission's result (non-blocking).
  ///
  /// Returns `Some(Ok(stats))` when a recomputation completed and its
  /// surface became current, `Some(Err(..))` when it failed (the previous
  /// surface stays current), `None` while still running or idle.
  pub fn poll(&mut self) -> Option<Result<RecomputeStats, PipelineError>> {
    let receiver = self.receiver.as_ref()?;

    match receiver.try_recv() {
      Ok(result) => {
        self.receiver = None;
        if result.spare.is_some() {
          self.spare = result.spare;
        }
        match result.outcome {
          Ok((surface, stats)) => {
            self.metrics.record_recompute(&stats);
            // The displaced surface becomes the next spare allocation
            let previous = self.surface.replace(surface);
            if self.spare.is_none() {
              self.spare = previous;
            }
            Some(Ok(stats))
          }
          Err(err) => Some(Err(err)),
        }
      }
      Err(TryRecvError::Empty) => None,
      Err(TryRecvError::Disconnected) => {
        self.receiver = None;
        None
      }
    }
  }

  /// The last successfully computed surface, if any.
  pub fn surface(&self) -> Option<&SurfaceBuffer> {
    self.surface.as_ref()
  }

  /// Discard any in-flight submission without waiting for it.
  pub fn cancel(&mut self) {
    self.receiver = None;
  }

  pub fn metrics(&self) -> &PipelineMetrics {
    &self.metrics
  }
}

impl Default for SurfaceDriver {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
#[path = "driver_test.rs"]
mod driver_test;
