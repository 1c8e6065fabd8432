use crossterm::style::Stylize;

use kosha_types::{DictionaryEntry, Mode, Panel, Screen, Theme, Translation};

use crate::view::View;

/// Every slash command the input grammar accepts, as shown in the shell.
pub const SHELL_COMMANDS: &str =
    "/mode /lang /source /target /swap /theme /screen /config /logout /quit";

/// Terminal renderer. Tracks which result panel is visible so renders stay
/// mutually exclusive, and keeps the theme for the prompt glyph.
pub struct TerminalView {
    styled: bool,
    theme: Theme,
    visible_panel: Option<Panel>,
}

impl TerminalView {
    pub fn new(styled: bool, theme: Theme) -> Self {
        Self {
            styled,
            theme,
            visible_panel: None,
        }
    }

    pub fn visible_panel(&self) -> Option<Panel> {
        self.visible_panel
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    fn heading(&self, text: &str) -> String {
        if self.styled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.styled {
            text.to_string().dim().to_string()
        } else {
            text.to_string()
        }
    }
}

impl View for TerminalView {
    fn show_config_prompt(&mut self) {
        println!("{}", self.heading("Setup required"));
        println!("No backend configured. Run:");
        println!("  /config <endpoint-url> <api-key>");
    }

    fn show_screen(&mut self, screen: Screen) {
        match screen {
            Screen::Login => {
                println!("{}", self.heading("Welcome Back"));
                println!("Log in to your account:  /login <email> <password>");
                println!("{}", self.dim("No account yet?  /signup <name> <email> <password>"));
            }
            Screen::Signup => {
                println!("{}", self.heading("Join Kosha"));
                println!("Start your linguistic journey:  /signup <name> <email> <password>");
                println!("{}", self.dim("Already registered?  /login <email> <password>"));
            }
        }
    }

    fn show_shell(&mut self) {
        println!("{}", self.heading("Kosha"));
        println!("Type a word to look it up. Commands: {SHELL_COMMANDS}");
    }

    fn show_mode(&mut self, mode: Mode) {
        // Switching modes always clears the results area.
        self.visible_panel = None;
        match mode {
            Mode::Dictionary => println!("-- dictionary mode --"),
            Mode::Translate => println!("-- translate mode --"),
        }
    }

    fn render_entry(&mut self, entry: &DictionaryEntry) {
        self.visible_panel = Some(Panel::Dictionary);

        println!("{}", self.heading(&entry.word));
        println!(
            "{}",
            self.dim(entry.part_of_speech.as_deref().unwrap_or("noun"))
        );
        if let Some(pronunciation) = &entry.pronunciation {
            println!("{}", self.dim(pronunciation));
        }
        println!("{}", entry.definition);

        if !entry.translations.is_empty() {
            println!();
            let mut langs: Vec<_> = entry.translations.keys().collect();
            langs.sort();
            for lang in langs {
                println!("  {}  {}", self.dim(lang), entry.translations[lang].word);
            }
        }
    }

    fn render_translation(&mut self, word: &str, translation: &Translation, from: &str, to: &str) {
        self.visible_panel = Some(Panel::Translation);
        println!(
            "{} ({})  ->  {} ({})",
            self.heading(word),
            from,
            self.heading(&translation.word),
            to
        );
    }

    fn render_error(&mut self, message: &str) {
        self.visible_panel = Some(Panel::Error);
        if self.styled {
            println!("{}", message.to_string().red());
        } else {
            println!("{message}");
        }
    }

    fn render_suggestions(&mut self, words: &[String]) {
        if words.is_empty() {
            tracing::debug!("suggestions cleared");
            return;
        }
        for word in words {
            println!("  {}", self.dim(word));
        }
    }

    fn set_loading(&mut self, loading: bool) {
        if loading {
            println!("{}", self.dim("..."));
        }
    }

    fn set_theme(&mut self, theme: Theme) {
        tracing::debug!("theme applied: {}", theme.as_str());
        self.theme = theme;
        println!("theme: {}", theme.as_str());
    }

    fn notify(&mut self, message: &str) {
        if self.styled {
            println!("{}", message.to_string().yellow());
        } else {
            println!("{message}");
        }
    }
}
