//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Main menu -> booking flow (specialty -> lawyer -> date -> time -> confirm)
//! or history table. Esc cancels the current prompt back to the menu.

use crate::domain::{Appointment, BookingDraft, DomainError, Weekday};
use crate::ports::InputPort;
use crate::usecases::BookingService;
use async_trait::async_trait;
use chrono::{Days, Local};
use crossterm::style::Stylize;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{Confirm, DateSelect, InquireError, Select};
use std::sync::Arc;

const MENU_BOOK: &str = "Book appointment";
const MENU_HISTORY: &str = "Appointment history";
const MENU_QUIT: &str = "Quit";

/// Suffix rendered on slots already booked. Picking one anyway fails the
/// conflict re-check at submission.
const TAKEN_SUFFIX: &str = " [taken]";

/// Applies the render theme for all subsequent inquire prompts.
pub fn apply_theme() {
    let mut cfg = RenderConfig::default_colored();
    cfg.prompt_prefix = Styled::new("§").with_fg(Color::DarkBlue);
    cfg.answered_prompt_prefix = Styled::new("§").with_fg(Color::DarkYellow);
    cfg.highlighted_option_prefix = Styled::new("›").with_fg(Color::DarkYellow);
    inquire::set_global_render_config(cfg);
}

/// Ok(None) when the user cancels the prompt (Esc / Ctrl-C).
fn cancellable<T>(result: Result<T, InquireError>) -> Result<Option<T>, DomainError> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(DomainError::Input(e.to_string())),
    }
}

/// TUI adapter. Inquire prompts over the booking service.
pub struct TuiInputPort {
    booking: Arc<BookingService>,
    /// Upper bound for the date picker, in days from today.
    booking_window_days: u32,
}

impl TuiInputPort {
    pub fn new(booking: Arc<BookingService>, booking_window_days: u32) -> Self {
        Self {
            booking,
            booking_window_days,
        }
    }

    /// One booking attempt. User-facing errors are printed and leave the
    /// menu loop in place; only infrastructure errors propagate.
    async fn run_booking(&self) -> Result<(), DomainError> {
        let mut draft = BookingDraft::default();

        let specialties = self.booking.specialties().await?;
        if specialties.is_empty() {
            println!("{}", "The catalog has no specialties.".yellow());
            return Ok(());
        }
        let Some(specialty) = cancellable(Select::new("Select specialty", specialties).prompt())?
        else {
            return Ok(());
        };
        draft.select_specialty(specialty.clone());

        let lawyers = self.booking.lawyers_for_specialty(&specialty).await?;
        if lawyers.is_empty() {
            println!("{}", format!("No lawyers offer {specialty}.").yellow());
            return Ok(());
        }
        let options: Vec<String> = lawyers
            .iter()
            .map(|l| format!("{} - ${}", l.name, l.cost_per_appointment))
            .collect();
        let Some(picked) = cancellable(Select::new("Select lawyer", options).prompt())? else {
            return Ok(());
        };
        // Map the selected display string back to the lawyer (full match).
        let lawyer = lawyers
            .iter()
            .find(|l| picked == format!("{} - ${}", l.name, l.cost_per_appointment))
            .cloned()
            .ok_or_else(|| DomainError::Input(format!("unknown lawyer option: {picked}")))?;
        draft.select_lawyer(lawyer.clone());

        // Date then time; re-prompt the date when the chosen day has no slots.
        'date: loop {
            let today = Local::now().date_naive();
            let Some(date) = cancellable(
                DateSelect::new("Select date")
                    .with_min_date(today)
                    .with_max_date(today + Days::new(u64::from(self.booking_window_days)))
                    .prompt(),
            )?
            else {
                return Ok(());
            };
            draft.select_date(date);

            // Time then submit; errors keep the form in place with the
            // lawyer and date retained, re-listing the slots for correction.
            loop {
                let listing = self.booking.slot_listing(&lawyer, date).await?;
                if listing.is_empty() {
                    println!(
                        "{}",
                        format!(
                            "{} has no slots on a {}.",
                            lawyer.name,
                            Weekday::from_date(date)
                        )
                        .yellow()
                    );
                    match cancellable(
                        Confirm::new("Pick another date?").with_default(true).prompt(),
                    )? {
                        Some(true) => continue 'date,
                        _ => return Ok(()),
                    }
                }

                println!("Available times for {}:", Weekday::from_date(date));
                let options: Vec<String> = listing
                    .iter()
                    .map(|s| {
                        if s.taken {
                            format!("{}{}", s.time, TAKEN_SUFFIX)
                        } else {
                            s.time.clone()
                        }
                    })
                    .collect();
                let Some(picked) = cancellable(Select::new("Select time", options).prompt())?
                else {
                    return Ok(());
                };
                let time = picked
                    .strip_suffix(TAKEN_SUFFIX)
                    .unwrap_or(&picked)
                    .to_string();
                draft.select_time(time);

                // Stage is Ready here; book() still re-validates everything.
                let summary = format!(
                    "Book {} ({}) on {} at {} for ${}?",
                    lawyer.name,
                    draft.specialty.as_deref().unwrap_or_default(),
                    draft.date.unwrap_or_default(),
                    draft.time.as_deref().unwrap_or_default(),
                    lawyer.cost_per_appointment
                );
                match cancellable(Confirm::new(&summary).with_default(true).prompt())? {
                    Some(true) => {}
                    _ => return Ok(()),
                }

                match self.booking.book(&draft).await {
                    Ok(appointment) => {
                        println!(
                            "{}",
                            format!(
                                "Appointment booked successfully! {} on {} at {}.",
                                appointment.lawyer_name, appointment.date, appointment.time
                            )
                            .green()
                        );
                        return Ok(());
                    }
                    Err(e @ (DomainError::IncompleteSelection | DomainError::SlotTaken)) => {
                        println!("{}", e.to_string().red());
                    }
                    Err(e) => return Err(e),
                }
            }
        }
    }

    async fn show_history(&self) -> Result<(), DomainError> {
        let history = self.booking.history().await?;
        if history.is_empty() {
            println!("{}", "No appointments booked yet.".yellow());
            return Ok(());
        }
        println!(
            "{}",
            format!(
                "{:<20} {:<15} {:<12} {:<7} {:>6}",
                "Lawyer", "Specialty", "Date", "Time", "Cost"
            )
            .bold()
        );
        for a in &history {
            println!("{}", history_row(a));
        }
        Ok(())
    }
}

fn history_row(a: &Appointment) -> String {
    format!(
        "{:<20} {:<15} {:<12} {:<7} {:>6}",
        a.lawyer_name,
        a.specialty,
        a.date.to_string(),
        a.time,
        format!("${}", a.cost)
    )
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let choice = Select::new("Main menu", vec![MENU_BOOK, MENU_HISTORY, MENU_QUIT]).prompt();
            match cancellable(choice)? {
                Some(MENU_BOOK) => self.run_booking().await?,
                Some(MENU_HISTORY) => self.show_history().await?,
                Some(MENU_QUIT) | None => return Ok(()),
                Some(other) => {
                    return Err(DomainError::Input(format!("unknown menu entry: {other}")));
                }
            }
        }
    }
}
