mod recording;
mod terminal;
mod view;

pub use recording::{RecordingView, ViewCall};
pub use terminal::{SHELL_COMMANDS, TerminalView};
pub use view::View;
