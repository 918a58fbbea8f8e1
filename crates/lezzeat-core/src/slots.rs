//! Pickup time-slot generation
//!
//! A [`SlotWindow`] enumerates every pickup start `t` with
//! `start <= t <= end` and `(t - start) % step == 0`. The end boundary is
//! inclusive. Generation is pure: the same window always yields the same
//! slots, and nothing is cached between calls.

use crate::error::SlotError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Minute of the day, `00:00..=23:59`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// From hour and minute
    ///
    /// # Errors
    /// Returns error if the time is outside the day
    pub fn new(hour: u32, minute: u32) -> Result<Self, SlotError> {
        if hour >= 24 || minute >= 60 {
            return Err(SlotError::InvalidTime(format!("{hour:02}:{minute:02}")));
        }
        Self::from_minutes(hour * 60 + minute)
    }

    /// From minute-of-day
    ///
    /// # Errors
    /// Returns error if `minutes >= 1440`
    pub fn from_minutes(minutes: u32) -> Result<Self, SlotError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(SlotError::OutOfDay(minutes));
        }
        #[allow(clippy::cast_possible_truncation)]
        Ok(Self(minutes as u16))
    }

    /// Minute-of-day
    #[inline]
    #[must_use]
    pub fn minutes(self) -> u32 {
        u32::from(self.0)
    }

    /// Hour in 24-hour form
    #[inline]
    #[must_use]
    pub fn hour(self) -> u32 {
        self.minutes() / 60
    }

    /// Minute within the hour
    #[inline]
    #[must_use]
    pub fn minute(self) -> u32 {
        self.minutes() % 60
    }

    /// 12-hour label, e.g. `9:30 AM`, `3:45 PM`, `12:00 AM` for midnight
    #[must_use]
    pub fn to_12h(self) -> String {
        let h = self.hour();
        let display_hour = ((h + 11) % 12) + 1;
        let suffix = if h >= 12 { "PM" } else { "AM" };
        format!("{display_hour}:{:02} {suffix}", self.minute())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SlotError::InvalidTime(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
        if m.len() != 2 {
            return Err(invalid());
        }
        let hour: u32 = h.parse().map_err(|_| invalid())?;
        let minute: u32 = m.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = SlotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// One selectable pickup time
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Interval start
    pub time: TimeOfDay,
    /// Display label
    pub label: String,
}

impl TimeSlot {
    /// Slot starting at `time`
    #[must_use]
    pub fn at(time: TimeOfDay) -> Self {
        Self {
            label: time.to_12h(),
            time,
        }
    }

    /// Display label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl PartialOrd for TimeSlot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeSlot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time.cmp(&other.time)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Pickup window with a fixed step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotWindow {
    start: TimeOfDay,
    end: TimeOfDay,
    step_minutes: u32,
}

impl SlotWindow {
    /// Canteen pickup hours: 09:30 to 15:45 every 15 minutes
    pub const DEFAULT_START: TimeOfDay = TimeOfDay(9 * 60 + 30);
    /// Last pickup start
    pub const DEFAULT_END: TimeOfDay = TimeOfDay(15 * 60 + 45);
    /// Slot width
    pub const DEFAULT_STEP_MINUTES: u32 = 15;

    /// Create window
    ///
    /// # Errors
    /// Returns error if `step_minutes` is zero or `start > end`
    pub fn new(start: TimeOfDay, end: TimeOfDay, step_minutes: u32) -> Result<Self, SlotError> {
        if step_minutes == 0 {
            return Err(SlotError::ZeroStep);
        }
        if start > end {
            return Err(SlotError::InvertedWindow {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self {
            start,
            end,
            step_minutes,
        })
    }

    /// First pickup start
    #[inline]
    #[must_use]
    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    /// Last possible pickup start
    #[inline]
    #[must_use]
    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Step between slots
    #[inline]
    #[must_use]
    pub fn step_minutes(&self) -> u32 {
        self.step_minutes
    }

    /// Number of slots the window yields
    #[must_use]
    pub fn len(&self) -> usize {
        ((self.end.minutes() - self.start.minutes()) / self.step_minutes + 1) as usize
    }

    /// Always false, a valid window holds at least its start
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Fresh iterator over the slots
    #[must_use]
    pub fn iter(&self) -> SlotIter {
        SlotIter {
            next: Some(self.start.minutes()),
            end: self.end.minutes(),
            step: self.step_minutes,
        }
    }

    /// Subtitle text, e.g. `9:30 AM - 3:45 PM`
    #[must_use]
    pub fn describe(&self) -> String {
        format!("{} - {}", self.start.to_12h(), self.end.to_12h())
    }
}

impl Default for SlotWindow {
    fn default() -> Self {
        Self {
            start: Self::DEFAULT_START,
            end: Self::DEFAULT_END,
            step_minutes: Self::DEFAULT_STEP_MINUTES,
        }
    }
}

impl<'a> IntoIterator for &'a SlotWindow {
    type Item = TimeSlot;
    type IntoIter = SlotIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a window's slots
#[derive(Debug, Clone)]
pub struct SlotIter {
    next: Option<u32>,
    end: u32,
    step: u32,
}

impl Iterator for SlotIter {
    type Item = TimeSlot;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        if current > self.end {
            self.next = None;
            return None;
        }
        self.next = current.checked_add(self.step);
        TimeOfDay::from_minutes(current).ok().map(TimeSlot::at)
    }
}

/// Ordered pickup slots for `window`
#[must_use]
pub fn generate_slots(window: &SlotWindow) -> Vec<TimeSlot> {
    window.iter().collect()
}
