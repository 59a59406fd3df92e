//! One-shot hand-off of bookings from a scheduling session to the listing screen.
//!
//! Each session owns a [`BookingSender`]; the router keeps the matching
//! [`BookingReceiver`] and consumes it when the listing screen is opened. A
//! sender can deliver exactly one list and a receiver can be read exactly once,
//! both enforced by taking `self` by value.

use tokio::sync::oneshot;
use tracing::debug;

use crate::booking::BookingList;

/// Create a connected sender/receiver pair for one scheduling session.
pub fn channel() -> (BookingSender, BookingReceiver) {
    let (tx, rx) = oneshot::channel();
    (BookingSender { tx }, BookingReceiver { rx })
}

#[derive(Debug)]
pub struct BookingSender {
    tx: oneshot::Sender<BookingList>,
}

impl BookingSender {
    /// Fire-and-forget delivery. Returns `false` if nobody is listening anymore.
    pub fn send(self, bookings: BookingList) -> bool {
        let count = bookings.len();
        match self.tx.send(bookings) {
            Ok(()) => {
                debug!("Transferred {} booking(s)", count);
                true
            }
            Err(_) => {
                debug!("Booking receiver dropped, discarding {} booking(s)", count);
                false
            }
        }
    }
}

#[derive(Debug)]
pub struct BookingReceiver {
    rx: oneshot::Receiver<BookingList>,
}

impl BookingReceiver {
    /// Take the delivered list, or an empty one if nothing was sent.
    pub fn receive(mut self) -> BookingList {
        self.rx.try_recv().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::Appointment;

    #[test]
    fn test_delivers_once() {
        let (tx, rx) = channel();
        let appointment = Appointment::new("Barba", "01/05/2024", "14:05");

        assert!(tx.send(BookingList::single(appointment.clone())));

        let received = rx.receive();
        assert_eq!(received.len(), 1);
        assert_eq!(received.iter().next(), Some(&appointment));
    }

    #[test]
    fn test_nothing_sent_yields_empty() {
        let (_tx, rx) = channel();
        assert!(rx.receive().is_empty());
    }

    #[test]
    fn test_dropped_sender_yields_empty() {
        let (tx, rx) = channel();
        drop(tx);
        assert!(rx.receive().is_empty());
    }

    #[test]
    fn test_send_after_receiver_dropped() {
        let (tx, rx) = channel();
        drop(rx);
        assert!(!tx.send(BookingList::default()));
    }
}
