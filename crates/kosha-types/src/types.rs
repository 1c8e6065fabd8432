use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Endpoint URL + API key pair for the remote backend.
///
/// Presence is necessary but not sufficient: the remote service may still
/// reject the pair, and no format validation happens on this side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub endpoint_url: String,
    pub api_key: String,
}

/// Opaque proof of authentication issued by the remote auth service.
///
/// The app only ever checks presence/absence; the access token is carried
/// for request authorization but never parsed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub email: String,
}

/// One translation target, normalized at the deserialization boundary.
///
/// The remote stores translation values either as a bare string or as an
/// object `{ "word": ... }`; both decode into this single shape so nothing
/// downstream has to shape-check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub word: String,
}

impl<'de> Deserialize<'de> for Translation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bare(String),
            Object { word: String },
        }

        let word = match Raw::deserialize(deserializer)? {
            Raw::Bare(word) => word,
            Raw::Object { word } => word,
        };

        Ok(Translation { word })
    }
}

/// One word's definition record from the remote `dictionary` table.
///
/// Read-only: fetched fresh per query, rendered, discarded on the next query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub pronunciation: Option<String>,
    #[serde(default)]
    pub translations: HashMap<String, Translation>,
}

/// Input mode of the app shell. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Dictionary,
    Translate,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Dictionary => write!(f, "dictionary"),
            Mode::Translate => write!(f, "translate"),
        }
    }
}

/// Theme preference. Persisted through the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Which result panel is visible. Panels are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Dictionary,
    Translation,
    Error,
}

/// Which auth screen is visible when unauthenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Signup,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    // ui -> app
    Search {
        word: String,
        language: String,
    },
    Suggest {
        prefix: String,
        language: String,
    },
    Translate {
        word: String,
        from: String,
        to: String,
    },
    Login {
        email: String,
        password: String,
    },
    Signup {
        name: String,
        email: String,
        password: String,
    },
    Logout,
    SwitchMode(Mode),
    SwitchScreen(Screen),
    SwapLanguages,
    ToggleTheme,
    SaveConfig {
        url: String,
        key: String,
    },
    ConfigChanged,
    SessionChanged(Option<Session>),
    Close,

    // app -> ui
    ShowConfigPrompt,
    ShowScreen(Screen),
    ShowShell,
    ShowMode(Mode),
    ShowEntry(DictionaryEntry),
    ShowTranslation {
        word: String,
        translation: Translation,
        from: String,
        to: String,
    },
    ShowSuggestions(Vec<String>),
    ShowError(String),
    SetLoading(bool),
    SetTheme(Theme),
    Notify(String),
}
