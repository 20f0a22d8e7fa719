//! Common test utilities for integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use projtrack::{Member, NotificationStrategy, Project, Task};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared log of delivered notifications: (message, recipient) pairs in
/// delivery order.
pub type DeliveryLog = Rc<RefCell<Vec<(String, String)>>>;

/// Strategy that records every delivery instead of printing it.
pub struct RecordingNotification {
    log: DeliveryLog,
}

impl NotificationStrategy for RecordingNotification {
    fn send(&self, message: &str, recipient: &str) {
        self.log
            .borrow_mut()
            .push((message.to_string(), recipient.to_string()));
    }
}

/// Create a recording strategy together with a handle on its delivery log.
pub fn recording_strategy() -> (Box<RecordingNotification>, DeliveryLog) {
    let log: DeliveryLog = Rc::new(RefCell::new(Vec::new()));
    let strategy = Box::new(RecordingNotification {
        log: Rc::clone(&log),
    });
    (strategy, log)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Create a bare test project with no notification channel.
pub fn test_project() -> Project {
    Project::new(
        "Alpha",
        "Web application development",
        date(2023, 5, 1),
        date(2023, 12, 31),
        100_000.0,
    )
}

/// Create a test task ending on the given date.
pub fn test_task(name: &str, end_date: NaiveDate, responsible: Rc<Member>) -> Rc<Task> {
    Task::new(
        name,
        "test task",
        date(2023, 5, 1),
        end_date,
        responsible,
        "pending",
    )
}
