//! Deferred work on a virtual clock.
//!
//! Simulated generation and AI calls are modelled as tasks due at a point in
//! time. Each task may carry a [`CancellationToken`] tying it to the canvas
//! generation (bumped by `clear`) and optionally to one node; when the token
//! is stale at run time the task is skipped without touching the target.
//!
//! Time only moves through [`TaskQueue::advance`], which keeps hosts and
//! tests deterministic.

use crate::engine::CanvasEngine;
use crate::surface::{ContainerSurface, ContentSurface};
use crate::types::NodeId;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use tracing::debug;

/// What a cancellation token checks liveness against.
pub trait TaskTarget {
    fn generation(&self) -> u64;
    fn contains_node(&self, id: &NodeId) -> bool;
}

impl<C: ContentSurface, V: ContainerSurface> TaskTarget for CanvasEngine<C, V> {
    fn generation(&self) -> u64 {
        CanvasEngine::generation(self)
    }

    fn contains_node(&self, id: &NodeId) -> bool {
        self.contains(id)
    }
}

/// Guard against mutating a canvas that moved on.
///
/// Clones share the explicit cancel flag.
#[derive(Clone, Debug)]
pub struct CancellationToken {
    generation: u64,
    node: Option<NodeId>,
    cancelled: Rc<Cell<bool>>,
}

impl CancellationToken {
    /// Valid until the canvas is cleared.
    pub fn for_canvas(generation: u64) -> Self {
        Self {
            generation,
            node: None,
            cancelled: Rc::new(Cell::new(false)),
        }
    }

    /// Valid until the canvas is cleared or `node` is deleted.
    pub fn for_node(generation: u64, node: NodeId) -> Self {
        Self {
            node: Some(node),
            ..Self::for_canvas(generation)
        }
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    pub fn node(&self) -> Option<&NodeId> {
        self.node.as_ref()
    }

    pub fn is_stale<T: TaskTarget + ?Sized>(&self, target: &T) -> bool {
        self.is_cancelled()
            || self.generation != target.generation()
            || self.node.as_ref().is_some_and(|id| !target.contains_node(id))
    }
}

pub type TaskFn<E> = Box<dyn FnOnce(&mut E, &mut Spawner<E>)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

struct Scheduled<E> {
    id: TaskId,
    due: Duration,
    label: &'static str,
    token: Option<CancellationToken>,
    run: TaskFn<E>,
}

struct Spawned<E> {
    delay: Duration,
    label: &'static str,
    token: Option<CancellationToken>,
    run: TaskFn<E>,
}

/// Handle given to a running task for scheduling follow-ups.
///
/// Follow-up delays count from the moment the parent task was due.
pub struct Spawner<E> {
    spawned: Vec<Spawned<E>>,
}

impl<E> Spawner<E> {
    fn new() -> Self {
        Self {
            spawned: Vec::new(),
        }
    }

    pub fn schedule(
        &mut self,
        delay: Duration,
        label: &'static str,
        token: Option<CancellationToken>,
        run: impl FnOnce(&mut E, &mut Spawner<E>) + 'static,
    ) {
        self.spawned.push(Spawned {
            delay,
            label,
            token,
            run: Box::new(run),
        });
    }
}

/// Outcome of one `advance` call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskReport {
    /// Labels of tasks that ran, in run order
    pub ran: Vec<&'static str>,
    /// Labels of tasks skipped because their token was stale
    pub skipped: Vec<&'static str>,
}

pub struct TaskQueue<E> {
    now: Duration,
    next_id: u64,
    tasks: Vec<Scheduled<E>>,
}

impl<E> Default for TaskQueue<E> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            tasks: Vec::new(),
        }
    }
}

impl<E: TaskTarget> TaskQueue<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the queue's clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Run `run` once `delay` has elapsed. Tasks due at the same instant run
    /// in scheduling order.
    pub fn schedule(
        &mut self,
        delay: Duration,
        label: &'static str,
        token: Option<CancellationToken>,
        run: impl FnOnce(&mut E, &mut Spawner<E>) + 'static,
    ) -> TaskId {
        self.push(self.now + delay, label, token, Box::new(run))
    }

    /// Drop a task before it runs. Returns false if it already ran.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Move the clock forward, running every task that falls due, including
    /// follow-ups spawned along the way.
    pub fn advance(&mut self, elapsed: Duration, target: &mut E) -> TaskReport {
        let end = self.now + elapsed;
        let mut report = TaskReport::default();

        while let Some(index) = self.next_due(end) {
            let task = self.tasks.remove(index);
            self.now = self.now.max(task.due);

            if task.token.as_ref().is_some_and(|t| t.is_stale(&*target)) {
                debug!(task = task.label, "Skipping stale task");
                report.skipped.push(task.label);
                continue;
            }

            let mut spawner = Spawner::new();
            (task.run)(&mut *target, &mut spawner);
            report.ran.push(task.label);

            for child in spawner.spawned {
                self.push(task.due + child.delay, child.label, child.token, child.run);
            }
        }

        self.now = end;
        report
    }

    fn push(
        &mut self,
        due: Duration,
        label: &'static str,
        token: Option<CancellationToken>,
        run: TaskFn<E>,
    ) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        self.tasks.push(Scheduled {
            id,
            due,
            label,
            token,
            run,
        });
        id
    }

    /// Earliest task due by `end`; ids break ties.
    fn next_due(&self, end: Duration) -> Option<usize> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= end)
            .min_by_key(|(_, t)| (t.due, t.id))
            .map(|(index, _)| index)
    }
}
