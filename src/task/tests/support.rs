//! Deterministic capabilities shared by task unit tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;

use crate::task::domain::{IdGenerator, PersistedTaskData, Task, TaskId};

/// Clock that returns `start`, then advances by one second per reading.
#[derive(Debug)]
pub struct SteppingClock {
    next: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            next: Mutex::new(start),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().expect("clock lock");
        let current = *next;
        *next = current + Duration::seconds(1);
        current
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Generates `task-1`, `task-2`, ... in order.
#[derive(Debug, Default)]
pub struct SequentialIds {
    issued: AtomicUsize,
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> TaskId {
        let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        TaskId::new(format!("task-{n}"))
    }
}

pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Builds a persisted task with both timestamps at [`epoch`].
pub fn stored_task(id: &str, title: &str, completed: bool) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        title: title.to_owned(),
        completed,
        created_at: epoch(),
        updated_at: epoch(),
    })
}
