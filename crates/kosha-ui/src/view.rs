use kosha_types::{DictionaryEntry, Mode, Screen, Theme, Translation};

/// Rendering capability set, no business logic behind it.
///
/// The three result renderers are mutually exclusive: each one replaces
/// whatever result panel was visible before it. `show_mode` hides the
/// visible result panel unconditionally.
pub trait View: Send {
    /// First-run setup prompt shown when no credentials are configured.
    fn show_config_prompt(&mut self);

    /// Login or signup screen, shown while unauthenticated.
    fn show_screen(&mut self, screen: Screen);

    /// Authenticated app shell.
    fn show_shell(&mut self);

    /// Switch between dictionary and translate input panels.
    fn show_mode(&mut self, mode: Mode);

    fn render_entry(&mut self, entry: &DictionaryEntry);

    fn render_translation(&mut self, word: &str, translation: &Translation, from: &str, to: &str);

    fn render_error(&mut self, message: &str);

    /// Autocomplete dropdown. An empty slice hides it.
    fn render_suggestions(&mut self, words: &[String]);

    fn set_loading(&mut self, loading: bool);

    fn set_theme(&mut self, theme: Theme);

    /// Blocking-alert counterpart for auth flow messages.
    fn notify(&mut self, message: &str);
}
