// SPDX-FileCopyrightText: 2026 Termin contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Reminder alarms derived from resolved occurrences.
//!
//! One lightweight timer task per armed alarm. Pending entries are not
//! persisted; after a restart [`AlarmScheduler::rearm_all`] recomputes
//! them from event state.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{Local, NaiveDate, NaiveDateTime};
use tokio::task::JoinHandle;

use crate::resolver::{following_occurrence, next_occurrence};
use crate::{Event, EventId, RemindOption, ResolveError};

/// Cap on how many occurrences a past trigger may be advanced over.
const ADVANCE_LIMIT: usize = 1000;

/// Looks events up by id at fire time.
///
/// The scheduler reads through this without holding any lock across
/// the callback; the event may have changed since the alarm was armed.
pub trait EventStore: Send + Sync {
    /// The current state of the event, `None` when it no longer exists.
    fn event(&self, id: EventId) -> Option<Event>;
}

/// Receives fired alarms, typically the notification layer.
pub trait AlarmHandler: Send + Sync {
    /// Called once per fire, outside any scheduler lock.
    fn alarm_fired(&self, event: &Event, occurrence: NaiveDate);
}

/// Lifecycle of one alarm entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmState {
    /// Armed, waiting for the trigger instant.
    Pending,

    /// The callback ran.
    Fired,

    /// Torn down before (or dropped after) firing.
    Cancelled,

    /// Superseded by a fresh pending entry via remind-again.
    Rescheduled,
}

/// One armed (or finished) reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmEntry {
    /// The event this alarm belongs to.
    pub event_id: EventId,

    /// The resolved occurrence being reminded of.
    pub occurrence: NaiveDate,

    /// When the alarm goes off.
    pub trigger: NaiveDateTime,

    /// Current lifecycle state.
    pub state: AlarmState,
}

/// Computes the trigger instant for a reminder, advancing over
/// occurrences whose trigger already passed.
///
/// Pure: the periodic UI tick may call this repeatedly with the same
/// inputs and gets the same answer.
pub fn compute_trigger(
    event: &Event,
    occurrence: NaiveDate,
    option: RemindOption,
    now: NaiveDateTime,
) -> Result<(NaiveDateTime, NaiveDate), ResolveError> {
    let mut occurrence = occurrence;
    for _ in 0..ADVANCE_LIMIT {
        let instant = event.anchor.on_date(occurrence).instant();
        let trigger = instant - option.lead.delta();
        if trigger > now {
            return Ok((trigger, occurrence));
        }
        occurrence = following_occurrence(event, occurrence)?;
    }
    Err(ResolveError::NoOccurrenceFound)
}

struct Armed {
    entry: AlarmEntry,
    generation: u64,
    handle: JoinHandle<()>,
}

struct Inner {
    store: Arc<dyn EventStore>,
    handler: Arc<dyn AlarmHandler>,
    alarms: Mutex<HashMap<EventId, Armed>>,
    generation: AtomicU64,
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, HashMap<EventId, Armed>> {
        self.alarms.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Timer expiry. The generation check under the lock makes a
    /// cancel/fire race structurally impossible: whichever side takes
    /// the lock first wins, the other becomes a no-op.
    fn fire(self: &Arc<Self>, id: EventId, generation: u64) {
        let fired = {
            let mut alarms = self.lock();
            match alarms.get_mut(&id) {
                Some(armed)
                    if armed.generation == generation
                        && armed.entry.state == AlarmState::Pending =>
                {
                    armed.entry.state = AlarmState::Fired;
                    Some(armed.entry.clone())
                }
                _ => None,
            }
        };
        let Some(entry) = fired else { return };

        match self.store.event(id) {
            Some(event) => self.handler.alarm_fired(&event, entry.occurrence),
            None => {
                tracing::warn!(event = %id, "event gone at fire time, treating as cancelled");
                let mut alarms = self.lock();
                if let Some(armed) = alarms.get_mut(&id)
                    && armed.generation == generation
                {
                    armed.entry.state = AlarmState::Cancelled;
                }
            }
        }
    }
}

/// Arms, fires, cancels and re-arms reminder timers.
///
/// At most one pending entry exists per event; scheduling again for
/// the same event cancels the previous entry first.
#[derive(Clone)]
pub struct AlarmScheduler {
    inner: Arc<Inner>,
}

impl AlarmScheduler {
    /// Creates a scheduler over the given event store and fire handler.
    pub fn new(store: Arc<dyn EventStore>, handler: Arc<dyn AlarmHandler>) -> Self {
        Self {
            inner: Arc::new(Inner {
                store,
                handler,
                alarms: Mutex::new(HashMap::new()),
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Arms a reminder for the given occurrence, relative to wall-clock now.
    pub fn schedule(
        &self,
        event: &Event,
        occurrence: NaiveDate,
        option: RemindOption,
    ) -> Result<AlarmEntry, ResolveError> {
        self.schedule_at(event, occurrence, option, Local::now().naive_local())
    }

    /// Arms a reminder relative to an explicit `now`.
    ///
    /// When the trigger for `occurrence` already passed, the event's
    /// following occurrence is used, repeatedly, until a future trigger
    /// is found or the series is exhausted.
    pub fn schedule_at(
        &self,
        event: &Event,
        occurrence: NaiveDate,
        option: RemindOption,
        now: NaiveDateTime,
    ) -> Result<AlarmEntry, ResolveError> {
        let (trigger, occurrence) = compute_trigger(event, occurrence, option, now)?;
        let generation = self.inner.generation.fetch_add(1, Ordering::Relaxed) + 1;
        let entry = AlarmEntry {
            event_id: event.id,
            occurrence,
            trigger,
            state: AlarmState::Pending,
        };

        let delay = (trigger - now).to_std().unwrap_or_default();
        let id = event.id;

        let mut alarms = self.inner.lock();
        if let Some(old) = alarms.remove(&id) {
            old.handle.abort();
        }
        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            inner.fire(id, generation);
        });
        alarms.insert(
            id,
            Armed {
                entry: entry.clone(),
                generation,
                handle,
            },
        );

        Ok(entry)
    }

    /// Tears down the event's alarm entry, pending or finished.
    ///
    /// Returns `true` when a pending timer was stopped. A cancel issued
    /// before the trigger instant guarantees the callback never runs.
    pub fn cancel(&self, id: EventId) -> bool {
        let mut alarms = self.inner.lock();
        match alarms.remove(&id) {
            Some(armed) => {
                armed.handle.abort();
                armed.entry.state == AlarmState::Pending
            }
            None => false,
        }
    }

    /// Snooze: replaces a fired entry with a brand-new pending one.
    ///
    /// The fired entry is marked rescheduled, never resurrected.
    pub fn remind_again(
        &self,
        id: EventId,
        option: RemindOption,
    ) -> Result<AlarmEntry, ResolveError> {
        self.remind_again_at(id, option, Local::now().naive_local())
    }

    /// Snooze relative to an explicit `now`.
    pub fn remind_again_at(
        &self,
        id: EventId,
        option: RemindOption,
        now: NaiveDateTime,
    ) -> Result<AlarmEntry, ResolveError> {
        let occurrence = {
            let mut alarms = self.inner.lock();
            match alarms.get_mut(&id) {
                Some(armed) if armed.entry.state == AlarmState::Fired => {
                    armed.entry.state = AlarmState::Rescheduled;
                    armed.entry.occurrence
                }
                _ => {
                    tracing::warn!(event = %id, "remind-again without a fired alarm");
                    return Err(ResolveError::NoOccurrenceFound);
                }
            }
        };
        let Some(event) = self.inner.store.event(id) else {
            tracing::warn!(event = %id, "remind-again for a missing event");
            return Err(ResolveError::NoOccurrenceFound);
        };
        self.schedule_at(&event, occurrence, option, now)
    }

    /// The event's current alarm entry, if any.
    pub fn entry(&self, id: EventId) -> Option<AlarmEntry> {
        self.inner.lock().get(&id).map(|a| a.entry.clone())
    }

    /// Re-arms reminders for all given events, used after a restart.
    ///
    /// Events without a reminder or without a future occurrence are
    /// skipped. Returns the number of alarms armed.
    pub fn rearm_all(&self, events: impl IntoIterator<Item = Event>) -> usize {
        self.rearm_all_at(events, Local::now().naive_local())
    }

    /// Restart re-arming relative to an explicit `now`.
    pub fn rearm_all_at(
        &self,
        events: impl IntoIterator<Item = Event>,
        now: NaiveDateTime,
    ) -> usize {
        let mut armed = 0;
        for event in events {
            let Some(option) = event.reminder else { continue };
            let Ok(occurrence) = next_occurrence(&event, now.date()) else {
                continue;
            };
            if self.schedule_at(&event, occurrence, option, now).is_ok() {
                armed += 1;
            }
        }
        armed
    }

    /// Stops every timer and clears all entries.
    pub fn shutdown(&self) {
        let mut alarms = self.inner.lock();
        for (_, armed) in alarms.drain() {
            armed.handle.abort();
        }
    }
}
