use chrono::NaiveDateTime;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::booking::{Appointment, BookingList, BookingSender, format_date, format_time, now};
use crate::catalog::{Catalog, Service};

/// Reasons a confirmation is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor, selecione um serviço")]
    NoServiceSelected,
    #[error("Este agendamento já foi confirmado")]
    AlreadyConfirmed,
}

/// Outcome reported by the date/time picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerResolution {
    Confirmed(NaiveDateTime),
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    ServiceChosen,
    Confirmed,
}

/// Mutable state of one scheduling session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    selected_service: Option<Service>,
    selected_moment: NaiveDateTime,
    picker_visible: bool,
}

impl SelectionState {
    const fn starting_at(moment: NaiveDateTime) -> Self {
        Self {
            selected_service: None,
            selected_moment: moment,
            picker_visible: false,
        }
    }

    pub const fn selected_service(&self) -> Option<&Service> {
        self.selected_service.as_ref()
    }

    pub const fn selected_moment(&self) -> NaiveDateTime {
        self.selected_moment
    }

    pub const fn picker_visible(&self) -> bool {
        self.picker_visible
    }
}

/// Drives a single scheduling session from service choice to confirmation.
///
/// A controller is created for every visit of the scheduling screen and owns
/// the sending half of that visit's booking channel. Once a confirmation
/// succeeds the session is over: the sender is spent and further input is
/// ignored.
#[derive(Debug)]
pub struct SelectionController {
    catalog: Catalog,
    state: SelectionState,
    outbox: Option<BookingSender>,
}

impl SelectionController {
    /// Start a session at the current local time.
    pub fn new(catalog: Catalog, outbox: BookingSender) -> Self {
        Self::starting_at(catalog, outbox, now())
    }

    pub fn starting_at(catalog: Catalog, outbox: BookingSender, moment: NaiveDateTime) -> Self {
        Self {
            catalog,
            state: SelectionState::starting_at(moment),
            outbox: Some(outbox),
        }
    }

    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub const fn state(&self) -> &SelectionState {
        &self.state
    }

    pub const fn phase(&self) -> Phase {
        if self.outbox.is_none() {
            Phase::Confirmed
        } else if self.state.selected_service.is_some() {
            Phase::ServiceChosen
        } else {
            Phase::Idle
        }
    }

    fn is_closed(&self) -> bool {
        if self.outbox.is_none() {
            warn!("Ignoring input on a confirmed scheduling session");
            return true;
        }
        false
    }

    pub fn select_service(&mut self, service: &Service) {
        if self.is_closed() {
            return;
        }
        debug!("Selected service {} ({})", service.id, service.name);
        self.state.selected_service = Some(*service);
    }

    pub fn open_picker(&mut self) {
        if self.is_closed() {
            return;
        }
        self.state.picker_visible = true;
    }

    pub fn resolve_picker(&mut self, resolution: PickerResolution) {
        if self.is_closed() {
            return;
        }
        self.state.picker_visible = false;
        match resolution {
            PickerResolution::Confirmed(moment) => {
                debug!("Selected moment {}", moment);
                self.state.selected_moment = moment;
            }
            PickerResolution::Cancelled => debug!("Picker cancelled"),
        }
    }

    /// Validate the selection and hand the resulting booking to the listing.
    ///
    /// On failure nothing changes and nothing is sent.
    ///
    /// # Errors
    /// [`ValidationError::NoServiceSelected`] when no service was chosen,
    /// [`ValidationError::AlreadyConfirmed`] when this session already confirmed.
    pub fn confirm(&mut self) -> Result<Appointment, ValidationError> {
        if self.outbox.is_none() {
            return Err(ValidationError::AlreadyConfirmed);
        }
        let Some(service) = self.state.selected_service else {
            return Err(ValidationError::NoServiceSelected);
        };

        let moment = self.state.selected_moment;
        let appointment = Appointment::new(service.name, format_date(&moment), format_time(&moment));
        info!("Booking confirmed: {}", appointment);

        if let Some(outbox) = self.outbox.take() {
            outbox.send(BookingList::single(appointment.clone()));
        }
        Ok(appointment)
    }
}
