//! Booking surface — decides between the wizard and the calendar embed.
//!
//! On wizard completion the surface flips to the calendar exactly once,
//! dispatches the lead without awaiting it, and schedules a scroll to the
//! embed container after layout settles. Calendar visibility never depends
//! on the CRM submission outcome.

use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::{RwLock, broadcast};
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::leads::{LeadGateway, LeadPayload};
use crate::wizard::state::AnswerSet;

/// Broadcast capacity for surface events; a session emits a handful.
const EVENT_CAPACITY: usize = 16;

/// Events fanned out to whatever view hosts the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The wizard finished; the calendar embed should be shown.
    CalendarShown,
    /// Layout has settled; scroll the embed container into view.
    ScrollToCalendar,
}

#[derive(Debug, Default)]
struct SurfaceState {
    show_external_calendar: bool,
    completed_answers: Option<AnswerSet>,
    completed_at: Option<DateTime<Utc>>,
}

/// Page-level orchestrator for one booking session.
///
/// Owns every task it spawns (the scroll timer and the lead submission);
/// tearing the surface down aborts them so nothing mutates a view that is
/// gone. The flip to the calendar is irreversible within the session.
pub struct BookingSurface {
    session_id: Uuid,
    state: RwLock<SurfaceState>,
    gateway: LeadGateway,
    scroll_settle_delay: Duration,
    events: broadcast::Sender<SurfaceEvent>,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl BookingSurface {
    pub fn new(gateway: LeadGateway, scroll_settle_delay: Duration) -> Self {
        let (events, _rx) = broadcast::channel(EVENT_CAPACITY);
        Self {
            session_id: Uuid::new_v4(),
            state: RwLock::new(SurfaceState::default()),
            gateway,
            scroll_settle_delay,
            events,
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// Session id, for log correlation.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Subscribe to surface events. Each hosting view calls this.
    pub fn subscribe(&self) -> broadcast::Receiver<SurfaceEvent> {
        self.events.subscribe()
    }

    /// Whether the external calendar is the visible surface.
    pub async fn shows_external_calendar(&self) -> bool {
        self.state.read().await.show_external_calendar
    }

    /// Snapshot of the completed answers, if the wizard finished.
    pub async fn completed_answers(&self) -> Option<AnswerSet> {
        self.state.read().await.completed_answers.clone()
    }

    /// When the wizard completed, if it has.
    pub async fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.state.read().await.completed_at
    }

    /// Accept a completed wizard session.
    ///
    /// Stores the answers, flips to the calendar, dispatches the lead
    /// without awaiting it, and schedules the scroll event. A second
    /// completion is ignored — the flip happens exactly once.
    pub async fn complete_wizard(&self, answers: AnswerSet) {
        let payload = {
            let mut state = self.state.write().await;
            if state.show_external_calendar {
                tracing::warn!(
                    session_id = %self.session_id,
                    "Wizard completion after calendar already shown; ignoring"
                );
                return;
            }
            let payload = LeadPayload::from_answers(&answers);
            state.show_external_calendar = true;
            state.completed_answers = Some(answers);
            state.completed_at = Some(Utc::now());
            payload
        };

        tracing::info!(session_id = %self.session_id, "Qualification complete; showing calendar");
        let _ = self.events.send(SurfaceEvent::CalendarShown);

        // Lead capture is best-effort and must not gate booking: the
        // submission task is spawned, not awaited.
        let submission = self.gateway.submit_detached(payload);

        let events = self.events.clone();
        let delay = self.scroll_settle_delay;
        let scroll = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(SurfaceEvent::ScrollToCalendar);
        });

        let mut tasks = self.tasks.lock().unwrap();
        tasks.push(submission);
        tasks.push(scroll);
    }

    /// Wait for the surface's background tasks (submission, scroll timer)
    /// to finish, up to `timeout` each. Returns `false` if any timed out.
    pub async fn await_background(&self, timeout: Duration) -> bool {
        let handles: Vec<JoinHandle<()>> = {
            let mut tasks = self.tasks.lock().unwrap();
            tasks.drain(..).collect()
        };

        let mut all_done = true;
        for handle in handles {
            if tokio::time::timeout(timeout, handle).await.is_err() {
                all_done = false;
            }
        }
        all_done
    }

    /// Abort any pending timers and the in-flight submission.
    ///
    /// Called when the hosting view is torn down before they fire; a lead
    /// lost this way is the documented best-effort tradeoff.
    pub fn teardown(&self) {
        let mut tasks = self.tasks.lock().unwrap();
        for handle in tasks.drain(..) {
            handle.abort();
        }
        tracing::debug!(session_id = %self.session_id, "Booking surface torn down");
    }
}

impl Drop for BookingSurface {
    fn drop(&mut self) {
        self.teardown();
    }
}
