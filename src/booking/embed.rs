//! Calendar embed — lifecycle of the external scheduling widget.
//!
//! The widget itself is opaque: the engine only knows its URL, the script
//! it needs injected once, the container anchor to scroll to, and the
//! fixed frame height per viewport breakpoint.

use crate::config::BookingConfig;

/// Container anchor the booking surface scrolls to once the calendar shows.
pub const EMBED_ANCHOR: &str = "cal-embed";

/// Viewport breakpoint, by width in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    /// Classify a viewport width: mobile < 640, tablet < 1024, else desktop.
    pub fn from_width(width: u32) -> Self {
        if width < 640 {
            Self::Mobile
        } else if width < 1024 {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    /// Fixed embed frame height for this breakpoint, in pixels. Reserving
    /// the height up front keeps the layout stable while the widget loads.
    pub fn frame_height(&self) -> u32 {
        match self {
            Self::Mobile => 500,
            Self::Tablet => 600,
            Self::Desktop => 700,
        }
    }
}

/// The third-party scheduling widget, mounted only after wizard completion.
///
/// Owns the one-time external script injection: mounting twice is
/// deduplicated, and teardown removes the script again.
#[derive(Debug)]
pub struct CalendarEmbed {
    scheduling_url: String,
    script_url: String,
    script_mounted: bool,
}

impl CalendarEmbed {
    pub fn new(scheduling_url: impl Into<String>, script_url: impl Into<String>) -> Self {
        Self {
            scheduling_url: scheduling_url.into(),
            script_url: script_url.into(),
            script_mounted: false,
        }
    }

    pub fn from_config(config: &BookingConfig) -> Self {
        Self::new(
            config.scheduling_url.clone(),
            config.scheduling_script_url.clone(),
        )
    }

    /// Inject the external script. Returns `false` when it was already
    /// mounted (the injection is deduplicated).
    pub fn mount(&mut self) -> bool {
        if self.script_mounted {
            tracing::debug!(script = %self.script_url, "Embed script already mounted");
            return false;
        }
        self.script_mounted = true;
        tracing::info!(script = %self.script_url, "Mounted scheduling embed script");
        true
    }

    /// Remove the injected script. Safe to call when never mounted.
    pub fn unmount(&mut self) -> bool {
        if !self.script_mounted {
            return false;
        }
        self.script_mounted = false;
        tracing::info!(script = %self.script_url, "Removed scheduling embed script");
        true
    }

    pub fn is_mounted(&self) -> bool {
        self.script_mounted
    }

    /// URL of the scheduling widget frame.
    pub fn scheduling_url(&self) -> &str {
        &self.scheduling_url
    }
}

impl Drop for CalendarEmbed {
    fn drop(&mut self) {
        self.unmount();
    }
}
