// SPDX-FileCopyrightText: 2026 Termin contributors
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end alarm scheduling against a paused clock.

mod common;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use common::date;
use termin_core::{
    AlarmHandler, AlarmScheduler, AlarmState, Event, EventId, EventStore, IntervalUnit,
    RecurrenceRule, RemindOption, ResolveError,
};

#[derive(Default)]
struct MapStore {
    events: Mutex<HashMap<EventId, Event>>,
}

impl MapStore {
    fn insert(&self, event: Event) {
        self.events.lock().unwrap().insert(event.id, event);
    }
}

impl EventStore for MapStore {
    fn event(&self, id: EventId) -> Option<Event> {
        self.events.lock().unwrap().get(&id).cloned()
    }
}

#[derive(Default)]
struct RecordingHandler {
    fired: Mutex<Vec<(EventId, NaiveDate)>>,
}

impl AlarmHandler for RecordingHandler {
    fn alarm_fired(&self, event: &Event, occurrence: NaiveDate) {
        self.fired.lock().unwrap().push((event.id, occurrence));
    }
}

struct Fixture {
    store: Arc<MapStore>,
    handler: Arc<RecordingHandler>,
    scheduler: AlarmScheduler,
}

fn fixture() -> Fixture {
    let store = Arc::new(MapStore::default());
    let handler = Arc::new(RecordingHandler::default());
    let scheduler = AlarmScheduler::new(store.clone(), handler.clone());
    Fixture {
        store,
        handler,
        scheduler,
    }
}

fn timed_event(id: u32, day: NaiveDate, hour: u32) -> Event {
    Event::new(
        EventId(id),
        format!("event-{id}"),
        day.and_hms_opt(hour, 0, 0).unwrap(),
    )
}

fn option(code: &str) -> RemindOption {
    RemindOption::by_short_code(code).unwrap()
}

fn now_at(day: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
    day.and_hms_opt(h, m, 0).unwrap()
}

#[tokio::test(start_paused = true)]
async fn alarm_fires_at_the_trigger_instant() {
    let f = fixture();
    let event = timed_event(1, date(2024, 6, 1), 9);
    f.store.insert(event.clone());

    let now = now_at(date(2024, 6, 1), 8, 0);
    let entry = f
        .scheduler
        .schedule_at(&event, date(2024, 6, 1), option("30m"), now)
        .unwrap();
    assert_eq!(entry.state, AlarmState::Pending);
    assert_eq!(entry.trigger, now_at(date(2024, 6, 1), 8, 30));

    // half an hour passes
    tokio::time::sleep(Duration::from_secs(31 * 60)).await;

    assert_eq!(
        f.handler.fired.lock().unwrap().as_slice(),
        &[(EventId(1), date(2024, 6, 1))]
    );
    assert_eq!(
        f.scheduler.entry(EventId(1)).unwrap().state,
        AlarmState::Fired
    );
}

#[tokio::test(start_paused = true)]
async fn cancel_before_trigger_suppresses_the_callback() {
    let f = fixture();
    let event = timed_event(1, date(2024, 6, 1), 9);
    f.store.insert(event.clone());

    let now = now_at(date(2024, 6, 1), 8, 0);
    f.scheduler
        .schedule_at(&event, date(2024, 6, 1), option("30m"), now)
        .unwrap();

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert!(f.scheduler.cancel(EventId(1)));

    tokio::time::sleep(Duration::from_secs(2 * 60 * 60)).await;
    assert!(f.handler.fired.lock().unwrap().is_empty());
    assert_eq!(f.scheduler.entry(EventId(1)), None);
}

#[tokio::test(start_paused = true)]
async fn rescheduling_replaces_the_pending_entry() {
    let f = fixture();
    let event = timed_event(1, date(2024, 6, 1), 9);
    f.store.insert(event.clone());

    let now = now_at(date(2024, 6, 1), 8, 0);
    f.scheduler
        .schedule_at(&event, date(2024, 6, 1), option("30m"), now)
        .unwrap();
    // a second request for the same event supersedes the first
    let entry = f
        .scheduler
        .schedule_at(&event, date(2024, 6, 1), option("15m"), now)
        .unwrap();
    assert_eq!(entry.trigger, now_at(date(2024, 6, 1), 8, 45));

    tokio::time::sleep(Duration::from_secs(60 * 60)).await;

    // exactly one fire, from the surviving entry
    assert_eq!(f.handler.fired.lock().unwrap().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn fire_for_a_deleted_event_is_a_no_op() {
    let f = fixture();
    let event = timed_event(1, date(2024, 6, 1), 9);
    // the event is armed but never stored, as if deleted meanwhile

    let now = now_at(date(2024, 6, 1), 8, 0);
    f.scheduler
        .schedule_at(&event, date(2024, 6, 1), option("30m"), now)
        .unwrap();

    tokio::time::sleep(Duration::from_secs(60 * 60)).await;

    assert!(f.handler.fired.lock().unwrap().is_empty());
    assert_eq!(
        f.scheduler.entry(EventId(1)).unwrap().state,
        AlarmState::Cancelled
    );
}

#[tokio::test(start_paused = true)]
async fn remind_again_arms_a_fresh_entry() {
    let f = fixture();
    let mut event = timed_event(1, date(2024, 6, 1), 9);
    event.rule = RecurrenceRule::fixed_interval(1, IntervalUnit::Days).unwrap();
    f.store.insert(event.clone());

    let now = now_at(date(2024, 6, 1), 8, 0);
    f.scheduler
        .schedule_at(&event, date(2024, 6, 1), option("30m"), now)
        .unwrap();
    tokio::time::sleep(Duration::from_secs(31 * 60)).await;
    assert_eq!(f.handler.fired.lock().unwrap().len(), 1);

    // snooze: the 08:30 trigger has passed, so the scheduler advances
    // to tomorrow's occurrence
    let entry = f
        .scheduler
        .remind_again_at(EventId(1), option("30m"), now_at(date(2024, 6, 1), 8, 31))
        .unwrap();
    assert_eq!(entry.state, AlarmState::Pending);
    assert_eq!(entry.occurrence, date(2024, 6, 2));
    assert_eq!(entry.trigger, now_at(date(2024, 6, 2), 8, 30));

    tokio::time::sleep(Duration::from_secs(24 * 60 * 60)).await;
    assert_eq!(f.handler.fired.lock().unwrap().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn past_trigger_on_a_one_time_event_is_rejected() {
    let f = fixture();
    let event = timed_event(1, date(2024, 6, 1), 9);
    f.store.insert(event.clone());

    // 08:40 is past the 08:30 trigger and a one-time event has no
    // following occurrence to fall back to
    let now = now_at(date(2024, 6, 1), 8, 40);
    assert_eq!(
        f.scheduler
            .schedule_at(&event, date(2024, 6, 1), option("30m"), now),
        Err(ResolveError::NoOccurrenceFound)
    );
    assert_eq!(f.scheduler.entry(EventId(1)), None);
}

#[tokio::test(start_paused = true)]
async fn rearm_recomputes_pending_alarms_from_event_state() {
    let f = fixture();

    let mut weekly = timed_event(1, date(2024, 6, 3), 9);
    weekly.rule = RecurrenceRule::fixed_interval(1, IntervalUnit::Weeks).unwrap();
    weekly.reminder = Some(option("1h"));
    f.store.insert(weekly.clone());

    let mut silent = timed_event(2, date(2024, 6, 3), 10);
    silent.reminder = None;
    f.store.insert(silent.clone());

    let now = now_at(date(2024, 6, 1), 12, 0);
    let armed = f.scheduler.rearm_all_at(vec![weekly, silent], now);
    assert_eq!(armed, 1);

    let entry = f.scheduler.entry(EventId(1)).unwrap();
    assert_eq!(entry.occurrence, date(2024, 6, 3));
    assert_eq!(entry.trigger, now_at(date(2024, 6, 3), 8, 0));
    assert_eq!(f.scheduler.entry(EventId(2)), None);
}
