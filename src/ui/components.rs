mod date_time_picker;
mod list;

pub use date_time_picker::{DateTimePicker, PickerEvent};
pub use list::{List, ListEvent, ListRow};
