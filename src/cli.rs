use clap::Parser;

use crate::screen::Route;

#[derive(Parser, Debug)]
#[command(name = "barbearia", version, about = "Agendamento de horários na barbearia")]
pub struct Args {
    /// Screen to open at startup
    #[arg(short, long, value_enum, default_value_t = Route::Home)]
    pub screen: Route,

    /// Theme for this run (e.g. "Catppuccin Latte"); not saved
    #[arg(short, long)]
    pub theme: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_home() {
        let args = Args::try_parse_from(["barbearia"]).unwrap();
        assert_eq!(args.screen, Route::Home);
        assert!(args.theme.is_none());
    }

    #[test]
    fn test_parses_screen_and_theme() {
        let args =
            Args::try_parse_from(["barbearia", "--screen", "bookings", "-t", "Catppuccin Latte"])
                .unwrap();
        assert_eq!(args.screen, Route::Bookings);
        assert_eq!(args.theme.as_deref(), Some("Catppuccin Latte"));
    }

    #[test]
    fn test_rejects_unknown_screen() {
        assert!(Args::try_parse_from(["barbearia", "--screen", "agenda"]).is_err());
    }
}
