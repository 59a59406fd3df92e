//! Scheduling workflow: selection, confirmation and hand-off of bookings.

mod format;
mod listing;
mod model;
mod selection;
mod transfer;

pub use format::{format_date, format_moment, format_time, now};
pub use listing::{EMPTY_NOTICE, Listing, ListingRow};
pub use model::{Appointment, BookingList};
pub use selection::{Phase, PickerResolution, SelectionController};
pub use transfer::{BookingReceiver, BookingSender, channel};
