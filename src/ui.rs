pub mod components;

mod error_dialog;
mod help;
mod status_bar;
mod toast;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

pub use color_eyre::Result;

use crate::Theme;

pub use components::{DateTimePicker, List, ListEvent, ListRow, PickerEvent};
pub use error_dialog::{ErrorDialog, ErrorDialogEvent};
pub use help::{HelpEvent, HelpOverlay, Keybinding, KeybindingSection};
pub use status_bar::StatusBar;
pub use toast::{Toast, ToastManager};

/// Result of handling an input event.
///
/// - `Ignored` - the handler didn't recognize this input, the parent should process it
/// - `Consumed` - the input was handled but produced nothing
/// - `Event(E)` - the input was handled and produced an output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult<E> {
    Ignored,
    Consumed,
    Event(E),
}

impl<E> From<E> for EventResult<E> {
    fn from(event: E) -> Self {
        Self::Event(event)
    }
}

/// Interactive UI building block.
///
/// Components are reusable widgets that handle input events and emit
/// generic outputs. They know nothing about bookings.
///
/// # Examples
///
/// - `List` - selectable list with navigation
/// - `DateTimePicker` - field-by-field date and time editor
/// - `ErrorDialog` - blocking notice dismissed by a key
pub trait Component {
    /// The output type produced by this component.
    type Output;

    /// Handle a key event.
    ///
    /// Returns `Err(...)` if an error occurred during handling.
    fn handle_key(&mut self, key: KeyEvent) -> Result<EventResult<Self::Output>> {
        _ = key;
        Ok(EventResult::Ignored)
    }

    /// Called on each tick for animations and time-based updates.
    fn handle_tick(&mut self) {}

    /// Render the component to the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);
}

/// Full-page view that orchestrates components.
///
/// Screens connect UI interactions to the booking workflow by translating
/// component events into navigation and domain calls.
pub trait Screen {
    /// The message type produced by this screen.
    type Output;

    /// Handle a key event.
    fn handle_key(&mut self, key: KeyEvent) -> Result<EventResult<Self::Output>>;

    /// Render the screen to the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);

    /// Called on each tick for animations and time-based updates.
    fn handle_tick(&mut self) {}

    /// Breadcrumb segments for navigation context.
    fn breadcrumbs(&self) -> Vec<String> {
        vec![]
    }

    /// Returns the keybindings for this screen.
    fn keybindings(&self) -> Vec<Keybinding> {
        vec![]
    }
}
