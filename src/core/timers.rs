use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Handle to a scheduled timer. Ids are never reused within one queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(u64);

impl TimerId {
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Purpose of a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerKind {
    /// Repeating auto-advance tick.
    AutoAdvance,
    /// Clears the manual-scroll cooldown once scrolling goes quiet.
    ScrollDebounce,
    /// Boundary snap-back check after scrolling settles.
    BoundarySettle,
    /// Boundary snap-back check after a touch gesture ends.
    TouchBoundaryCheck,
    /// Restarts auto-advance after a touch gesture.
    GestureResume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerEntry {
    pub id: TimerId,
    pub kind: TimerKind,
    pub due_at_ms: u64,
    /// `Some` for repeating timers.
    pub interval_ms: Option<u64>,
}

/// Timer popped by [`TimerQueue::pop_due`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiredTimer {
    pub id: TimerId,
    pub kind: TimerKind,
    pub fired_at_ms: u64,
}

/// Deterministic host-driven timer queue on a millisecond clock.
///
/// Nothing fires on its own: the owner calls [`TimerQueue::pop_due`] with the
/// current clock. Due timers come out in `(due_at_ms, id)` order and a
/// repeating timer re-arms at `due_at_ms + interval_ms`.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    next_id: u64,
    entries: SmallVec<[TimerEntry; 4]>,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule_once(&mut self, kind: TimerKind, now_ms: u64, delay_ms: u64) -> TimerId {
        self.push(kind, now_ms.saturating_add(delay_ms), None)
    }

    /// Schedules a repeating timer. Zero intervals are raised to 1ms.
    pub fn schedule_repeating(
        &mut self,
        kind: TimerKind,
        now_ms: u64,
        interval_ms: u64,
    ) -> TimerId {
        let interval_ms = interval_ms.max(1);
        self.push(kind, now_ms.saturating_add(interval_ms), Some(interval_ms))
    }

    /// Cancels one timer. Returns `false` when the id is not live.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    #[must_use]
    pub fn contains(&self, id: TimerId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    #[must_use]
    pub fn count_of(&self, kind: TimerKind) -> usize {
        self.entries.iter().filter(|entry| entry.kind == kind).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[TimerEntry] {
        &self.entries
    }

    #[must_use]
    pub fn next_due_at(&self) -> Option<u64> {
        self.entries.iter().map(|entry| entry.due_at_ms).min()
    }

    /// Pops the earliest timer due at or before `now_ms`.
    ///
    /// A repeating timer whose next due time would overflow the clock is
    /// retired after this firing.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<FiredTimer> {
        let position = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due_at_ms <= now_ms)
            .min_by_key(|(_, entry)| (entry.due_at_ms, entry.id))
            .map(|(position, _)| position)?;

        let entry = self.entries[position];
        match entry
            .interval_ms
            .and_then(|interval_ms| entry.due_at_ms.checked_add(interval_ms))
        {
            Some(next_due_at_ms) => self.entries[position].due_at_ms = next_due_at_ms,
            None => {
                self.entries.remove(position);
            }
        }

        Some(FiredTimer {
            id: entry.id,
            kind: entry.kind,
            fired_at_ms: entry.due_at_ms,
        })
    }

    /// Drops every live timer and returns how many there were.
    pub fn clear(&mut self) -> usize {
        let cleared = self.entries.len();
        self.entries.clear();
        cleared
    }

    fn push(&mut self, kind: TimerKind, due_at_ms: u64, interval_ms: Option<u64>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(TimerEntry {
            id,
            kind,
            due_at_ms,
            interval_ms,
        });
        id
    }
}
