//! The system loop: one task per machine, one merged event stream.
//!
//! Externally injected events and feedback-produced events are merged
//! into a single mpsc channel consumed by a single task, so the reducer
//! is only ever invoked from one logical thread and needs no locking.
//! The only suspension point is awaiting a feedback's effect.

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use super::bus::EventBus;
use super::event::MachineEvent;
use super::feedback::Feedback;
use super::observe::{StateCell, StateStream};
use super::reducer::Reducer;
use super::state::MachineState;

type BoxedFeedback<S, E> = Box<dyn Feedback<State = S, Event = E>>;

/// Builder for one feedback-loop state machine.
pub struct System<R: Reducer> {
    initial: R::State,
    feedbacks: Vec<BoxedFeedback<R::State, R::Event>>,
}

impl<R: Reducer + 'static> System<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            initial,
            feedbacks: Vec::new(),
        }
    }

    pub fn with_feedback<F>(mut self, feedback: F) -> Self
    where
        F: Feedback<State = R::State, Event = R::Event> + 'static,
    {
        self.feedbacks.push(Box::new(feedback));
        self
    }

    /// Establish the loop.
    ///
    /// The initial state becomes current immediately and every feedback
    /// is evaluated against it, covering machines whose starting state
    /// already demands an effect. Events arriving on `bus` are
    /// republished into the merged stream unchanged.
    pub fn start(self, bus: &EventBus<R::Event>) -> SystemHandle<R::State> {
        let cell = StateCell::new(self.initial.clone());
        let (loop_tx, loop_rx) = mpsc::unbounded_channel::<R::Event>();

        let forward_task = spawn_pass_through(bus.subscribe(), loop_tx.clone());
        let loop_task = spawn_loop::<R>(self.initial, self.feedbacks, cell.clone(), loop_tx, loop_rx);

        SystemHandle {
            cell,
            loop_task,
            forward_task,
        }
    }
}

/// Republishes every event placed on the bus into the merged stream.
fn spawn_pass_through<E: Clone + Send + 'static>(
    mut bus_rx: broadcast::Receiver<E>,
    loop_tx: mpsc::UnboundedSender<E>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match bus_rx.recv().await {
                Ok(event) => {
                    if loop_tx.send(event).is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "event bus overflow, dropping stale events");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}

fn spawn_loop<R: Reducer + 'static>(
    initial: R::State,
    feedbacks: Vec<BoxedFeedback<R::State, R::Event>>,
    cell: StateCell<R::State>,
    loop_tx: mpsc::UnboundedSender<R::Event>,
    mut loop_rx: mpsc::UnboundedReceiver<R::Event>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut current = initial;
        run_feedbacks(&feedbacks, &current, &loop_tx).await;

        while let Some(event) = loop_rx.recv().await {
            let next = R::reduce(current.clone(), event);
            if next == current {
                continue;
            }
            tracing::debug!(state = ?next, "committed transition");
            current = next;
            // Feedbacks only see fully committed, published states.
            cell.publish(current.clone());
            run_feedbacks(&feedbacks, &current, &loop_tx).await;
        }
    })
}

async fn run_feedbacks<S: MachineState, E: MachineEvent>(
    feedbacks: &[BoxedFeedback<S, E>],
    state: &S,
    loop_tx: &mpsc::UnboundedSender<E>,
) {
    for feedback in feedbacks {
        for event in feedback.run(state).await {
            let _ = loop_tx.send(event);
        }
    }
}

/// Handle to a running system.
///
/// Dropping the handle aborts both the loop and the pass-through task;
/// an effect response arriving after that point is silently discarded.
pub struct SystemHandle<S> {
    cell: StateCell<S>,
    loop_task: JoinHandle<()>,
    forward_task: JoinHandle<()>,
}

impl<S: MachineState> SystemHandle<S> {
    /// Snapshot of the latest committed state.
    pub fn state(&self) -> S {
        self.cell.latest()
    }

    /// Observe the current state and every subsequent committed state.
    pub fn observe(&self) -> StateStream<S> {
        self.cell.observe()
    }

    /// Tear the loop down. Idempotent; also invoked on drop.
    pub fn dispose(&self) {
        self.loop_task.abort();
        self.forward_task.abort();
    }
}

impl<S> Drop for SystemHandle<S> {
    fn drop(&mut self) {
        self.loop_task.abort();
        self.forward_task.abort();
    }
}
