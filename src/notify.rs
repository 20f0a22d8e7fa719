//! Notification dispatch for project events
//!
//! A `NotificationStrategy` encapsulates how a single message reaches a
//! single recipient. The `NotificationContext` holds exactly one active
//! strategy and delegates every send to it, so new delivery channels
//! (push, webhook, ...) can be added without touching any consumer.

use std::str::FromStr;

/// How one notification message is delivered to one recipient.
///
/// Delivery is fire-and-forget: no return value and no declared failure
/// mode. A real-transport implementation must define its own retry and
/// failure policy internally.
pub trait NotificationStrategy {
    /// Deliver `message` to `recipient`.
    fn send(&self, message: &str, recipient: &str);
}

/// Simulated email delivery: one formatted line on standard output.
pub struct EmailNotification;

impl NotificationStrategy for EmailNotification {
    fn send(&self, message: &str, recipient: &str) {
        println!("Notification sent to {} by email: {}", recipient, message);
    }
}

/// Simulated SMS delivery: one formatted line on standard output.
pub struct SmsNotification;

impl NotificationStrategy for SmsNotification {
    fn send(&self, message: &str, recipient: &str) {
        println!("Notification sent to {} by SMS: {}", recipient, message);
    }
}

/// Built-in delivery channels, as named in config files and on the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Email,
    Sms,
}

impl NotificationKind {
    /// Build the strategy for this channel.
    pub fn strategy(self) -> Box<dyn NotificationStrategy> {
        match self {
            NotificationKind::Email => Box::new(EmailNotification),
            NotificationKind::Sms => Box::new(SmsNotification),
        }
    }
}

impl FromStr for NotificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(NotificationKind::Email),
            "sms" => Ok(NotificationKind::Sms),
            _ => Err(format!(
                "Invalid notification channel '{}'. Valid options are: email, sms",
                s
            )),
        }
    }
}

/// Holds the currently active strategy and delegates send requests to it.
///
/// A context always has a strategy: construction requires one, so a send
/// with no strategy configured cannot occur through the public API.
pub struct NotificationContext {
    strategy: Box<dyn NotificationStrategy>,
}

impl std::fmt::Debug for NotificationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationContext").finish_non_exhaustive()
    }
}

impl NotificationContext {
    /// Create a context with the given active strategy.
    pub fn new(strategy: Box<dyn NotificationStrategy>) -> Self {
        Self { strategy }
    }

    /// Replace the active strategy.
    ///
    /// Takes effect for all subsequent sends; already-dispatched
    /// notifications are unaffected.
    pub fn set_strategy(&mut self, strategy: Box<dyn NotificationStrategy>) {
        self.strategy = strategy;
    }

    /// Forward `message` and `recipient` verbatim to the active strategy.
    pub fn send(&self, message: &str, recipient: &str) {
        self.strategy.send(message, recipient);
    }
}
