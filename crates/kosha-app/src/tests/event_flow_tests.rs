use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;

use kosha_config::Settings;
use kosha_query::{QueryClient, QueryError, TranslatedWord};
use kosha_types::{AppEvent, Credentials, DictionaryEntry, Screen, Session, Theme, Translation};

use crate::events::auth::session_view_event;
use crate::events::event_loop;
use crate::events::search::{handle_search, search_outcome};
use crate::events::suggest::handle_suggest;
use crate::events::translate::{handle_translate, translate_outcome};
use crate::state::AppState;

// Connection-refused endpoint so no test depends on a live backend.
fn query_client() -> QueryClient {
    QueryClient::new(&Credentials {
        endpoint_url: "http://127.0.0.1:1".into(),
        api_key: "anon-key".into(),
    })
    .unwrap()
}

async fn recv(rx: &kanal::AsyncReceiver<AppEvent>) -> AppEvent {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timeout waiting for event")
        .expect("channel closed")
}

#[tokio::test]
async fn search_without_session_is_silent() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();
    let client = query_client();

    handle_search(Some(&client), None, &tx, "apple", "en")
        .await
        .unwrap();
    handle_search(None, Some("tok"), &tx, "apple", "en")
        .await
        .unwrap();

    assert_eq!(rx.try_recv().unwrap(), None);
}

#[tokio::test]
async fn search_failure_shows_connection_error_between_loading_toggles() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();
    let client = query_client();

    handle_search(Some(&client), Some("tok"), &tx, "apple", "en")
        .await
        .unwrap();

    assert_eq!(recv(&rx).await, AppEvent::SetLoading(true));
    assert_eq!(
        recv(&rx).await,
        AppEvent::ShowError("Connection error.".to_string())
    );
    assert_eq!(recv(&rx).await, AppEvent::SetLoading(false));
}

#[tokio::test]
async fn one_char_prefix_never_fetches() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();
    let client = query_client();

    handle_suggest(Some(&client), Some("tok"), &tx, "a", "en")
        .await
        .unwrap();

    // Dropdown cleared without any remote call.
    assert_eq!(recv(&rx).await, AppEvent::ShowSuggestions(Vec::new()));
    assert_eq!(rx.try_recv().unwrap(), None);
}

#[tokio::test]
async fn suggestion_fetch_failure_is_swallowed() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();
    let client = query_client();

    handle_suggest(Some(&client), Some("tok"), &tx, "ap", "en")
        .await
        .unwrap();

    // Connection refused, but suggestions degrade to an empty list with no
    // error panel and no loading overlay.
    assert_eq!(recv(&rx).await, AppEvent::ShowSuggestions(Vec::new()));
    assert_eq!(rx.try_recv().unwrap(), None);
}

#[tokio::test]
async fn suggest_without_session_is_silent() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();
    let client = query_client();

    handle_suggest(Some(&client), None, &tx, "ap", "en")
        .await
        .unwrap();

    assert_eq!(rx.try_recv().unwrap(), None);
}

#[tokio::test]
async fn translate_failure_shows_sync_error() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();
    let client = query_client();

    handle_translate(Some(&client), Some("tok"), &tx, "apple", "en", "fr")
        .await
        .unwrap();

    assert_eq!(recv(&rx).await, AppEvent::SetLoading(true));
    assert_eq!(
        recv(&rx).await,
        AppEvent::ShowError("Sync error.".to_string())
    );
    assert_eq!(recv(&rx).await, AppEvent::SetLoading(false));
}

#[test]
fn search_outcome_maps_rows_and_misses() {
    let entry = DictionaryEntry {
        word: "apple".into(),
        language: "en".into(),
        part_of_speech: Some("noun".into()),
        definition: "a fruit".into(),
        pronunciation: None,
        translations: Default::default(),
    };

    assert_eq!(
        search_outcome(Ok(Some(entry.clone()))),
        AppEvent::ShowEntry(entry)
    );
    assert_eq!(
        search_outcome(Ok(None)),
        AppEvent::ShowError("Word not found.".to_string())
    );
    assert_eq!(
        search_outcome(Err(QueryError::Api {
            status: 500,
            message: "boom".into()
        })),
        AppEvent::ShowError("Connection error.".to_string())
    );
}

#[test]
fn translate_outcome_maps_hits_and_misses() {
    let hit = TranslatedWord {
        word: "apple".into(),
        translation: Translation { word: "pomme".into() },
    };

    assert_eq!(
        translate_outcome(Ok(Some(hit)), "en", "fr"),
        AppEvent::ShowTranslation {
            word: "apple".into(),
            translation: Translation { word: "pomme".into() },
            from: "en".into(),
            to: "fr".into(),
        }
    );
    // Missing source row and missing target key both arrive here as None.
    assert_eq!(
        translate_outcome(Ok(None), "en", "fr"),
        AppEvent::ShowError("Translation not found.".to_string())
    );
    assert_eq!(
        translate_outcome(
            Err(QueryError::Api {
                status: 500,
                message: "boom".into()
            }),
            "en",
            "fr"
        ),
        AppEvent::ShowError("Sync error.".to_string())
    );
}

#[tokio::test]
async fn missing_credentials_show_setup_prompt_and_build_no_clients() {
    let state = Arc::new(AppState::new(Settings::default(), std::env::temp_dir()));
    let (ui_tx, ui_rx) = kanal::bounded_async::<AppEvent>(64);
    let (app_tx, app_rx) = kanal::bounded_async::<AppEvent>(64);

    let loop_task = tokio::spawn(event_loop(state, ui_rx, app_tx.clone(), ui_tx.clone()));

    assert_eq!(recv(&app_rx).await, AppEvent::ShowConfigPrompt);
    assert_eq!(recv(&app_rx).await, AppEvent::SetTheme(Theme::Light));

    // Without clients a query event must be swallowed, not rendered.
    ui_tx
        .send(AppEvent::Search {
            word: "apple".into(),
            language: "en".into(),
        })
        .await
        .unwrap();
    ui_tx.send(AppEvent::Close).await.unwrap();

    timeout(Duration::from_secs(2), loop_task)
        .await
        .expect("event loop did not stop")
        .unwrap()
        .unwrap();
    assert_eq!(app_rx.try_recv().unwrap(), None);
}

#[test]
fn session_presence_selects_the_surface() {
    let session = Session {
        access_token: "tok".into(),
        token_type: "bearer".into(),
        user: None,
    };

    assert_eq!(session_view_event(Some(&session)), AppEvent::ShowShell);
    assert_eq!(
        session_view_event(None),
        AppEvent::ShowScreen(Screen::Login)
    );
}
