use kanal::AsyncSender;

use kosha_types::{AppEvent, Screen, Session};

use crate::events::Clients;

/// Password sign-in. Failure surfaces the remote message verbatim; success
/// arrives through the session subscription, not here.
pub async fn handle_login(
    clients: Option<&Clients>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    email: &str,
    password: &str,
) -> anyhow::Result<()> {
    let Some(clients) = clients else {
        return Ok(());
    };

    app_to_ui_tx.send(AppEvent::SetLoading(true)).await?;
    let result = clients.auth.login(email, password).await;
    app_to_ui_tx.send(AppEvent::SetLoading(false)).await?;

    if let Err(e) = result {
        app_to_ui_tx.send(AppEvent::Notify(e.to_string())).await?;
    }

    Ok(())
}

/// Account creation. No auto-login on success; the user confirms by email.
pub async fn handle_signup(
    clients: Option<&Clients>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    name: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<()> {
    let Some(clients) = clients else {
        return Ok(());
    };

    app_to_ui_tx.send(AppEvent::SetLoading(true)).await?;
    let result = clients.auth.signup(name, email, password).await;
    app_to_ui_tx.send(AppEvent::SetLoading(false)).await?;

    let message = match result {
        Ok(()) => "Check your email for confirmation!".to_string(),
        Err(e) => e.to_string(),
    };
    app_to_ui_tx.send(AppEvent::Notify(message)).await?;

    Ok(())
}

pub async fn handle_logout(
    clients: Option<&Clients>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(clients) = clients else {
        return Ok(());
    };

    app_to_ui_tx.send(AppEvent::SetLoading(true)).await?;
    let result = clients.auth.logout().await;
    app_to_ui_tx.send(AppEvent::SetLoading(false)).await?;

    if let Err(e) = result {
        tracing::debug!("logout failed: {e}");
    }

    Ok(())
}

/// Session presence decides the whole surface: shell when authenticated,
/// login screen otherwise. Re-evaluated on every transition.
pub fn session_view_event(session: Option<&Session>) -> AppEvent {
    if session.is_some() {
        AppEvent::ShowShell
    } else {
        AppEvent::ShowScreen(Screen::Login)
    }
}
