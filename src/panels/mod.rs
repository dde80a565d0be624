mod central_panel;
mod tools_panel;
mod windows;

pub use central_panel::central_panel;
pub use tools_panel::tools_panel;
pub use windows::{color_picker_window, settings_window};
