// SPDX-License-Identifier: MPL-2.0
//! Timer subscriptions for the application.

use super::config::TICK_INTERVAL_MS;
use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval used when only notification timers need checking.
const NOTIFICATION_TICK_MS: u64 = 100;

/// Ticks at animation rate while a spinner or pulse is running, slowly
/// while only notifications are waiting to expire, and not at all otherwise.
pub fn create_tick_subscription(animating: bool, has_notifications: bool) -> Subscription<Message> {
    match tick_interval(animating, has_notifications) {
        Some(interval) => time::every(interval).map(Message::Tick),
        None => Subscription::none(),
    }
}

fn tick_interval(animating: bool, has_notifications: bool) -> Option<Duration> {
    if animating {
        Some(Duration::from_millis(TICK_INTERVAL_MS))
    } else if has_notifications {
        Some(Duration::from_millis(NOTIFICATION_TICK_MS))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_uses_the_fast_tick() {
        assert_eq!(
            tick_interval(true, true),
            Some(Duration::from_millis(TICK_INTERVAL_MS))
        );
    }

    #[test]
    fn notifications_alone_tick_slowly() {
        assert_eq!(
            tick_interval(false, true),
            Some(Duration::from_millis(NOTIFICATION_TICK_MS))
        );
    }

    #[test]
    fn idle_app_does_not_tick() {
        assert_eq!(tick_interval(false, false), None);
    }
}
