use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinHandle;

use kosha_auth::AuthClient;
use kosha_query::QueryClient;
use kosha_types::{AppEvent, Credentials};

use crate::state::AppState;

pub mod auth;
pub mod search;
pub mod suggest;
pub mod translate;

use auth::{handle_login, handle_logout, handle_signup, session_view_event};
use search::handle_search;
use suggest::handle_suggest;
use translate::handle_translate;

/// Remote clients, rebuilt together whenever credentials change.
pub struct Clients {
    pub auth: AuthClient,
    pub query: QueryClient,
}

impl Clients {
    pub fn new(credentials: &Credentials) -> anyhow::Result<Self> {
        Ok(Self {
            auth: AuthClient::new(credentials)?,
            query: QueryClient::new(credentials)?,
        })
    }
}

enum Flow {
    Continue,
    /// Re-run client initialization with the current settings.
    Reload,
    Shutdown,
}

/// App's main loop. The outer loop rebuilds the remote clients after a
/// config save, mirroring a full reload; the inner loop drains events.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    loop {
        let credentials = { state.settings.read().await.credentials() };

        let clients = match &credentials {
            Some(credentials) => match Clients::new(credentials) {
                Ok(clients) => Some(clients),
                Err(e) => {
                    // Construction failure falls back to the setup prompt.
                    tracing::error!("remote client init failed: {e}");
                    app_to_ui_tx.send(AppEvent::ShowConfigPrompt).await?;
                    None
                }
            },
            None => {
                app_to_ui_tx.send(AppEvent::ShowConfigPrompt).await?;
                None
            }
        };

        {
            let theme = state.settings.read().await.theme;
            app_to_ui_tx.send(AppEvent::SetTheme(theme)).await?;
        }

        // Report the initial session and forward every later transition
        // back into the event channel.
        let mut session_forwarder: Option<JoinHandle<()>> = None;
        if let Some(clients) = &clients {
            event_tx
                .send(AppEvent::SessionChanged(clients.auth.current_session()))
                .await?;

            let mut subscription = clients.auth.subscribe()?;
            let tx = event_tx.clone();
            session_forwarder = Some(tokio::spawn(async move {
                while subscription.changed().await.is_ok() {
                    let session = subscription.borrow_and_update().clone();
                    if tx.send(AppEvent::SessionChanged(session)).await.is_err() {
                        break;
                    }
                }
            }));
        }

        tracing::info!("event loop ready, waiting for events");
        let reload = loop {
            let event = ui_to_app_rx.recv().await?;
            tracing::debug!("event received: {:?}", std::mem::discriminant(&event));

            match handle_events(&state, clients.as_ref(), &app_to_ui_tx, event).await? {
                Flow::Continue => {}
                Flow::Reload => break true,
                Flow::Shutdown => break false,
            }
        };

        if let Some(forwarder) = session_forwarder {
            forwarder.abort();
        }
        if !reload {
            return Ok(());
        }
        tracing::info!("config changed, rebuilding remote clients");
    }
}

async fn handle_events(
    state: &Arc<AppState>,
    clients: Option<&Clients>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<Flow> {
    // Query operations silently no-op without an active session.
    let token = clients
        .and_then(|c| c.auth.current_session())
        .map(|s| s.access_token);
    let query = clients.map(|c| &c.query);

    match event {
        AppEvent::Search { word, language } => {
            handle_search(query, token.as_deref(), app_to_ui_tx, &word, &language).await?;
        }
        AppEvent::Suggest { prefix, language } => {
            handle_suggest(query, token.as_deref(), app_to_ui_tx, &prefix, &language).await?;
        }
        AppEvent::Translate { word, from, to } => {
            handle_translate(query, token.as_deref(), app_to_ui_tx, &word, &from, &to).await?;
        }
        AppEvent::Login { email, password } => {
            handle_login(clients, app_to_ui_tx, &email, &password).await?;
        }
        AppEvent::Signup {
            name,
            email,
            password,
        } => {
            handle_signup(clients, app_to_ui_tx, &name, &email, &password).await?;
        }
        AppEvent::Logout => {
            handle_logout(clients, app_to_ui_tx).await?;
        }
        AppEvent::SessionChanged(session) => {
            app_to_ui_tx.send(session_view_event(session.as_ref())).await?;
        }
        AppEvent::SwitchMode(mode) => {
            *state.mode.write().await = mode;
            app_to_ui_tx.send(AppEvent::ShowMode(mode)).await?;
        }
        AppEvent::SwitchScreen(screen) => {
            app_to_ui_tx.send(AppEvent::ShowScreen(screen)).await?;
        }
        AppEvent::SwapLanguages => {
            let mut source = state.source_lang.write().await;
            let mut target = state.target_lang.write().await;
            std::mem::swap(&mut *source, &mut *target);
            let notice = format!("translate: {} -> {}", &*source, &*target);
            drop(target);
            drop(source);
            app_to_ui_tx.send(AppEvent::Notify(notice)).await?;
        }
        AppEvent::ToggleTheme => {
            let theme = {
                let mut settings = state.settings.write().await;
                settings.theme = settings.theme.toggled();
                if let Err(e) = settings.save(&state.config_dir) {
                    tracing::error!("failed to persist theme: {e}");
                }
                settings.theme
            };
            app_to_ui_tx.send(AppEvent::SetTheme(theme)).await?;
        }
        AppEvent::SaveConfig { url, key } => {
            {
                let mut settings = state.settings.write().await;
                settings.sb_url = url;
                settings.sb_key = key;
                if let Err(e) = settings.save(&state.config_dir) {
                    tracing::error!("failed to persist config: {e}");
                }
            }
            // Full reload, like the original after a config save.
            return Ok(Flow::Reload);
        }
        AppEvent::ConfigChanged => return Ok(Flow::Reload),
        AppEvent::Close => return Ok(Flow::Shutdown),

        // Render events are UI-bound; nothing to do in the backend.
        AppEvent::ShowConfigPrompt
        | AppEvent::ShowScreen(_)
        | AppEvent::ShowShell
        | AppEvent::ShowMode(_)
        | AppEvent::ShowEntry(_)
        | AppEvent::ShowTranslation { .. }
        | AppEvent::ShowSuggestions(_)
        | AppEvent::ShowError(_)
        | AppEvent::SetLoading(_)
        | AppEvent::SetTheme(_)
        | AppEvent::Notify(_) => {}
    }

    Ok(Flow::Continue)
}
