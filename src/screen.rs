//! Full-page screens and the routes between them.

mod bookings;
mod home;
mod profile;
mod schedule;
mod services;

use std::fmt;

use clap::ValueEnum;

use crate::booking::Appointment;

pub use bookings::BookingsScreen;
pub use home::HomeScreen;
pub use profile::ProfileScreen;
pub use schedule::ScheduleScreen;
pub use services::ServicesScreen;

/// Destinations reachable from the home menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Route {
    Home,
    Schedule,
    Services,
    Profile,
    Bookings,
}

impl Route {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Início",
            Self::Schedule => "Agendar Horário",
            Self::Services => "Nossos Serviços",
            Self::Profile => "Meu Perfil",
            Self::Bookings => "Meus Agendamentos",
        }
    }

    /// Breadcrumb trail leading to this route.
    pub fn breadcrumbs(self) -> Vec<String> {
        match self {
            Self::Home => vec![Self::Home.title().to_string()],
            other => vec![Self::Home.title().to_string(), other.title().to_string()],
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Messages screens send up to the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenMsg {
    Navigate(Route),
    /// A scheduling session was confirmed; the booking is already on its
    /// way to the listing.
    Booked(Appointment),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breadcrumbs_start_at_home() {
        assert_eq!(Route::Home.breadcrumbs(), vec!["Início"]);
        assert_eq!(
            Route::Bookings.breadcrumbs(),
            vec!["Início", "Meus Agendamentos"]
        );
    }

    #[test]
    fn test_routes_parse_from_cli_names() {
        assert_eq!(Route::from_str("schedule", true), Ok(Route::Schedule));
        assert_eq!(Route::from_str("BOOKINGS", true), Ok(Route::Bookings));
        assert!(Route::from_str("agenda", true).is_err());
    }
}
