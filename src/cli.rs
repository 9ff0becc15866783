//! Interactive booking surface — stdin/stdout front end for the wizard.
//!
//! Drives one full qualification session in the terminal: renders each
//! step, collects answers, and on completion hands off to the booking
//! surface and the calendar embed. This is a host view for the engine;
//! the library never depends on it.

use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use futures::{Stream, StreamExt, stream};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::booking::{Breakpoint, BookingSurface, CalendarEmbed, EMBED_ANCHOR, SurfaceEvent};
use crate::config::BookingConfig;
use crate::leads::{LeadGateway, WebhookSink};
use crate::wizard::presenter::{self, MotionConfig, MotionPhase};
use crate::wizard::registry::{self, STEP_COUNT, StepId};
use crate::wizard::state::{Advance, AnswerSet, Direction, QualificationWizard};

/// How long the exiting process waits for the detached lead submission
/// before giving up on it (best-effort by design).
const SUBMISSION_GRACE: Duration = Duration::from_secs(5);

type InputStream = Pin<Box<dyn Stream<Item = String> + Send>>;

/// Read stdin line by line as a stream.
fn input_lines() -> InputStream {
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();

    tokio::spawn(async move {
        let stdin = tokio::io::stdin();
        let reader = BufReader::new(stdin);
        let mut lines = reader.lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Ok(None) => break, // EOF
                Err(e) => {
                    tracing::error!("Error reading stdin: {}", e);
                    break;
                }
            }
        }
    });

    Box::pin(stream::unfold(rx, |mut rx| async move {
        rx.recv().await.map(|line| (line, rx))
    }))
}

/// Terminal front end for one booking session.
pub struct CliSurface {
    config: BookingConfig,
    motion: MotionConfig,
}

impl CliSurface {
    pub fn new(config: BookingConfig) -> Self {
        let motion = MotionConfig {
            reduced_motion: config.reduced_motion,
        };
        Self { config, motion }
    }

    /// Run the wizard to completion (or abandonment) and hand off.
    pub async fn run(&self) -> anyhow::Result<()> {
        let mut lines = input_lines();
        let mut wizard = QualificationWizard::new();

        self.render_step(&wizard);

        loop {
            let Some(line) = lines.next().await else {
                // Abandoned mid-wizard: in-memory state is simply discarded.
                tracing::info!("Input closed; abandoning wizard session");
                return Ok(());
            };
            let input = line.trim().to_string();

            match input.as_str() {
                "quit" | "exit" => {
                    tracing::info!("Wizard session abandoned");
                    return Ok(());
                }
                "back" => {
                    if wizard.retreat() {
                        self.transition_pause(wizard.direction()).await;
                        self.render_step(&wizard);
                    } else {
                        eprintln!("Already at the first step.");
                    }
                }
                "" | "next" | "continue" => match wizard.advance() {
                    Advance::Blocked => self.render_errors(&wizard),
                    Advance::Moved(_) => {
                        self.transition_pause(wizard.direction()).await;
                        self.render_step(&wizard);
                    }
                    Advance::Completed(answers) => {
                        return self.handoff(answers).await;
                    }
                },
                _ => self.apply_input(&mut wizard, &input),
            }
        }
    }

    /// Interpret a non-command input for the current step.
    fn apply_input(&self, wizard: &mut QualificationWizard, input: &str) {
        let step = wizard.step_id();

        if let Some(options) = registry::options_for(step) {
            // Selection step: accept a 1-based number or an option value.
            let chosen = input
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| options.get(i))
                .or_else(|| options.iter().find(|o| o.value == input));

            match (chosen, registry::selection_field(step)) {
                (Some(option), Some(field)) => {
                    wizard.set_answer(field, option.value);
                    eprintln!("  ✓ {}", option.label);
                    eprintln!("  (press Enter to continue)");
                }
                _ => eprintln!("  Unknown option {input:?} — pick a number from the list."),
            }
            return;
        }

        // Contact step: accept `field: value` (or `field=value`) pairs.
        let Some((name, value)) = input.split_once(':').or_else(|| input.split_once('=')) else {
            eprintln!("  Enter details as `field: value`, e.g. `email: jane@co.com`.");
            return;
        };
        let name = name.trim();
        let value = value.trim();

        let field = registry::step(StepId::Contact)
            .fields
            .iter()
            .find(|f| format!("{f}") == name)
            .copied();

        match field {
            Some(field) => {
                wizard.set_answer(field, value);
                eprintln!("  ✓ {}: {}", field.label(), value);
            }
            None => eprintln!("  Unknown field {name:?}."),
        }
    }

    /// Render the current step: progress, copy, and inputs.
    fn render_step(&self, wizard: &QualificationWizard) {
        let step = wizard.current_step();
        let percent = wizard.progress_percent();
        let filled = (percent as usize * 24) / 100;

        println!();
        println!(
            "Step {} of {} · {}%  [{}{}]",
            wizard.step_number(),
            STEP_COUNT,
            percent,
            "█".repeat(filled),
            "░".repeat(24 - filled),
        );
        println!("{}", step.title);
        println!("{}", step.subtitle);
        println!();

        if let Some(options) = registry::options_for(step.id) {
            let selected = registry::selection_field(step.id)
                .map(|f| wizard.answer(f).to_string())
                .unwrap_or_default();
            for (i, option) in options.iter().enumerate() {
                let marker = if option.value == selected { "●" } else { "○" };
                match option.description {
                    Some(desc) => println!("  {marker} {}. {} — {}", i + 1, option.label, desc),
                    None => println!("  {marker} {}. {}", i + 1, option.label),
                }
            }
            eprintln!("\n(number to choose · Enter to continue · 'back' · 'quit')");
        } else {
            for field in step.fields {
                let value = wizard.answer(*field);
                let hint = if field.is_optional() { " (optional)" } else { "" };
                println!("  {field}: {value}{hint}");
            }
            eprintln!("\n(`field: value` to fill in · Enter to book · 'back' · 'quit')");
        }
    }

    /// Render validation output after a blocked advance.
    fn render_errors(&self, wizard: &QualificationWizard) {
        for (field, message) in wizard.errors() {
            println!("  ✗ {}: {}", field.label(), message);
        }
        if wizard.show_step_notice() && !wizard.step_id().is_last() {
            println!("Please select an option to continue");
        }
    }

    /// Sleep through the exit-then-enter choreography of a step change.
    /// Zero-length under reduced motion.
    async fn transition_pause(&self, direction: Direction) {
        let exit = presenter::step_motion(direction, MotionPhase::Exit, &self.motion);
        let enter = presenter::step_motion(direction, MotionPhase::Enter, &self.motion);
        let total = u64::from(exit.duration_ms + enter.duration_ms);
        if total > 0 {
            tokio::time::sleep(Duration::from_millis(total)).await;
        }
    }

    /// Hand a completed session to the booking surface and show the
    /// calendar embed.
    async fn handoff(&self, answers: AnswerSet) -> anyhow::Result<()> {
        let sink = Arc::new(WebhookSink::from_config(&self.config));
        let surface = BookingSurface::new(LeadGateway::new(sink), self.config.scroll_settle_delay);
        let mut events = surface.subscribe();
        let mut embed = CalendarEmbed::from_config(&self.config);

        surface.complete_wizard(answers).await;

        loop {
            match events.recv().await {
                Ok(SurfaceEvent::CalendarShown) => {
                    embed.mount();
                    let height = Breakpoint::Desktop.frame_height();
                    println!();
                    println!("🎉 You're booked in — pick a time below.");
                    println!("   {}", embed.scheduling_url());
                    println!("   ({}px frame, container #{})", height, EMBED_ANCHOR);
                }
                Ok(SurfaceEvent::ScrollToCalendar) => {
                    eprintln!("   ↓ scrolled #{EMBED_ANCHOR} into view");
                    break;
                }
                Err(_) => break,
            }
        }

        // Let the detached submission finish if it can; never longer than
        // the grace period, and the calendar was shown either way.
        surface.await_background(SUBMISSION_GRACE).await;
        Ok(())
    }
}
