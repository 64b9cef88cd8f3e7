//! Background backend calls tied to the mounted screen
//!
//! Every call runs in its own tokio task and reports back over a channel to
//! the UI loop, which owns all state. Each screen mount gets a fresh
//! cancellation token and a generation number. Leaving the screen cancels
//! the token. A result that still arrives is tagged with an older generation
//! and is dropped by the app.

use crate::api::ApiError;
use crate::state::{Document, DocumentRequirement, SelectOption};
use std::future::Future;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Generation number of a screen mount
pub type MountId = u64;

/// What a finished task hands back to the UI loop
#[derive(Debug)]
pub enum TaskOutput {
    DocumentLoaded(Result<Document, ApiError>),
    RequirementLoaded(Result<DocumentRequirement, ApiError>),
    /// Document type options and internship type options, in that order
    OptionsLoaded(Result<(Vec<SelectOption>, Vec<SelectOption>), ApiError>),
    DocumentsListed(Result<Vec<Document>, ApiError>),
    RequirementsListed(Result<Vec<DocumentRequirement>, ApiError>),
    Saved(Result<(), ApiError>),
    /// The mount ended before the call finished
    Cancelled,
}

#[derive(Debug)]
pub struct TaskEvent {
    pub mount: MountId,
    pub output: TaskOutput,
}

/// Spawns tasks for the current mount and collects their results
pub struct TaskRunner {
    tx: mpsc::UnboundedSender<TaskEvent>,
    rx: mpsc::UnboundedReceiver<TaskEvent>,
    token: CancellationToken,
    mount: MountId,
    in_flight: usize,
}

impl TaskRunner {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx,
            token: CancellationToken::new(),
            mount: 0,
            in_flight: 0,
        }
    }

    pub fn mount(&self) -> MountId {
        self.mount
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Cancel everything started by the current mount and begin a new one
    pub fn remount(&mut self) -> MountId {
        self.token.cancel();
        self.token = CancellationToken::new();
        self.mount += 1;
        self.mount
    }

    /// Run `work` for the current mount. Exactly one event is sent back for it.
    pub fn spawn<F>(&mut self, work: F)
    where
        F: Future<Output = TaskOutput> + Send + 'static,
    {
        let tx = self.tx.clone();
        let token = self.token.clone();
        let mount = self.mount;
        self.in_flight += 1;

        tokio::spawn(async move {
            let output = tokio::select! {
                biased;
                _ = token.cancelled() => TaskOutput::Cancelled,
                output = work => output,
            };
            // The receiver lives as long as the runner; a failed send means the app is gone.
            let _ = tx.send(TaskEvent { mount, output });
        });
    }

    /// Next finished task, without waiting
    pub fn try_next(&mut self) -> Option<TaskEvent> {
        let event = self.rx.try_recv().ok()?;
        self.in_flight -= 1;
        Some(event)
    }

    /// Wait for the next finished task. `None` once nothing is in flight.
    #[cfg(test)]
    pub async fn next(&mut self) -> Option<TaskEvent> {
        if self.in_flight == 0 {
            return None;
        }
        let event = self.rx.recv().await?;
        self.in_flight -= 1;
        Some(event)
    }
}

impl Default for TaskRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_spawned_task_reports_once() {
        let mut runner = TaskRunner::new();
        runner.spawn(async { TaskOutput::Saved(Ok(())) });
        assert_eq!(runner.in_flight(), 1);

        let event = runner.next().await.unwrap();
        assert_eq!(event.mount, 0);
        assert!(matches!(event.output, TaskOutput::Saved(Ok(()))));
        assert_eq!(runner.in_flight(), 0);
        assert!(runner.next().await.is_none());
    }

    #[tokio::test]
    async fn test_remount_cancels_pending_work() {
        let mut runner = TaskRunner::new();
        runner.spawn(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            TaskOutput::Saved(Ok(()))
        });

        let new_mount = runner.remount();
        assert_eq!(new_mount, 1);

        let event = runner.next().await.unwrap();
        assert_eq!(event.mount, 0);
        assert!(matches!(event.output, TaskOutput::Cancelled));
    }

    #[tokio::test]
    async fn test_tasks_after_remount_carry_new_generation() {
        let mut runner = TaskRunner::new();
        runner.remount();
        runner.spawn(async { TaskOutput::DocumentsListed(Ok(Vec::new())) });

        let event = runner.next().await.unwrap();
        assert_eq!(event.mount, 1);
        assert!(matches!(event.output, TaskOutput::DocumentsListed(Ok(_))));
    }

    #[test]
    fn test_try_next_on_idle_runner() {
        let mut runner = TaskRunner::new();
        assert!(runner.try_next().is_none());
        assert_eq!(runner.in_flight(), 0);
    }
}
