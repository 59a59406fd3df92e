use std::fmt::Display;

/// A confirmed booking.
///
/// Holds display strings only; the values are copied at confirmation time and
/// never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    service_name: String,
    formatted_date: String,
    formatted_time: String,
}

impl Appointment {
    pub(crate) fn new(
        service_name: impl Into<String>,
        formatted_date: impl Into<String>,
        formatted_time: impl Into<String>,
    ) -> Self {
        Self {
            service_name: service_name.into(),
            formatted_date: formatted_date.into(),
            formatted_time: formatted_time.into(),
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn formatted_date(&self) -> &str {
        &self.formatted_date
    }

    pub fn formatted_time(&self) -> &str {
        &self.formatted_time
    }
}

impl Display for Appointment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} em {} às {}",
            self.service_name, self.formatted_date, self.formatted_time
        )
    }
}

/// Ordered bookings handed to the listing screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingList(Vec<Appointment>);

impl BookingList {
    pub const fn new(appointments: Vec<Appointment>) -> Self {
        Self(appointments)
    }

    pub fn single(appointment: Appointment) -> Self {
        Self(vec![appointment])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Appointment> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a BookingList {
    type Item = &'a Appointment;
    type IntoIter = std::slice::Iter<'a, Appointment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
