use crate::booking::{Appointment, BookingList};

/// Shown instead of rows when there is nothing to list.
pub const EMPTY_NOTICE: &str = "Nenhum agendamento encontrado";

/// A row of the listing, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingRow<'a> {
    pub position: usize,
    pub appointment: &'a Appointment,
}

impl ListingRow<'_> {
    pub fn title(&self) -> String {
        format!("Agendamento #{}", self.position)
    }
}

/// Read-only view over the bookings received on navigation.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    bookings: BookingList,
}

impl Listing {
    /// A missing parameter is treated as an empty list.
    pub fn new(params: Option<BookingList>) -> Self {
        Self {
            bookings: params.unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn rows(&self) -> Vec<ListingRow<'_>> {
        self.bookings
            .iter()
            .enumerate()
            .map(|(i, appointment)| ListingRow {
                position: i + 1,
                appointment,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_params_is_empty() {
        let listing = Listing::new(None);
        assert!(listing.is_empty());
        assert!(listing.rows().is_empty());
    }

    #[test]
    fn test_rows_keep_order_and_number_from_one() {
        let list = BookingList::new(vec![
            Appointment::new("Barba", "01/05/2024", "14:05"),
            Appointment::new("Corte de Cabelo", "02/05/2024", "09:00"),
            Appointment::new("Hidratação", "03/05/2024", "18:30"),
        ]);
        let listing = Listing::new(Some(list));
        let rows = listing.rows();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[0].title(), "Agendamento #1");
        assert_eq!(rows[0].appointment.service_name(), "Barba");
        assert_eq!(rows[2].position, 3);
        assert_eq!(rows[2].appointment.formatted_time(), "18:30");
    }
}
