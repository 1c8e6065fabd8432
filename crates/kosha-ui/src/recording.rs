use kosha_types::{DictionaryEntry, Mode, Panel, Screen, Theme, Translation};

use crate::view::View;

/// Everything a view can be asked to do, as data. Lets tests assert on the
/// exact render sequence without a terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCall {
    ConfigPrompt,
    Screen(Screen),
    Shell,
    Mode(Mode),
    Entry(String),
    Translation { word: String, translated: String },
    Error(String),
    Suggestions(Vec<String>),
    Loading(bool),
    Theme(Theme),
    Notify(String),
}

/// Non-terminal renderer for tests: records every call and mirrors the
/// panel-exclusivity rules of the real view.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub calls: Vec<ViewCall>,
    pub visible_panel: Option<Panel>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl View for RecordingView {
    fn show_config_prompt(&mut self) {
        self.calls.push(ViewCall::ConfigPrompt);
    }

    fn show_screen(&mut self, screen: Screen) {
        self.calls.push(ViewCall::Screen(screen));
    }

    fn show_shell(&mut self) {
        self.calls.push(ViewCall::Shell);
    }

    fn show_mode(&mut self, mode: Mode) {
        self.visible_panel = None;
        self.calls.push(ViewCall::Mode(mode));
    }

    fn render_entry(&mut self, entry: &DictionaryEntry) {
        self.visible_panel = Some(Panel::Dictionary);
        self.calls.push(ViewCall::Entry(entry.word.clone()));
    }

    fn render_translation(&mut self, word: &str, translation: &Translation, _from: &str, _to: &str) {
        self.visible_panel = Some(Panel::Translation);
        self.calls.push(ViewCall::Translation {
            word: word.to_string(),
            translated: translation.word.clone(),
        });
    }

    fn render_error(&mut self, message: &str) {
        self.visible_panel = Some(Panel::Error);
        self.calls.push(ViewCall::Error(message.to_string()));
    }

    fn render_suggestions(&mut self, words: &[String]) {
        self.calls.push(ViewCall::Suggestions(words.to_vec()));
    }

    fn set_loading(&mut self, loading: bool) {
        self.calls.push(ViewCall::Loading(loading));
    }

    fn set_theme(&mut self, theme: Theme) {
        self.calls.push(ViewCall::Theme(theme));
    }

    fn notify(&mut self, message: &str) {
        self.calls.push(ViewCall::Notify(message.to_string()));
    }
}
