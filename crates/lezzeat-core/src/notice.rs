//! User-facing notices
//!
//! A [`Notice`] is a blocking message with a title and a body. Front ends
//! decide how to show it by implementing [`Notifier`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Blocking message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Short heading
    pub title: String,
    /// Message text, may span lines
    pub body: String,
}

impl Notice {
    /// Create notice
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Notice titled "Error"
    #[must_use]
    pub fn error(body: impl Into<String>) -> Self {
        Self::new("Error", body)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.title, self.body)
    }
}

/// Surface for notices
pub trait Notifier {
    /// Show a notice
    fn notify(&mut self, notice: &Notice);
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&mut self, notice: &Notice) {
        (**self).notify(notice);
    }
}

/// Notifier that only logs
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, notice: &Notice) {
        tracing::info!(title = %notice.title, "{}", notice.body);
    }
}
