use kanal::AsyncReceiver;

use kosha_types::AppEvent;
use kosha_ui::View;

/// Drains render events into the view until the backend goes away.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    mut view: impl View + 'static,
) -> anyhow::Result<()> {
    while let Ok(event) = app_to_ui_rx.recv().await {
        render(&mut view, event);
    }
    Ok(())
}

/// Pure dispatch from render events to view capabilities.
pub fn render(view: &mut dyn View, event: AppEvent) {
    match event {
        AppEvent::ShowConfigPrompt => view.show_config_prompt(),
        AppEvent::ShowScreen(screen) => view.show_screen(screen),
        AppEvent::ShowShell => view.show_shell(),
        AppEvent::ShowMode(mode) => view.show_mode(mode),
        AppEvent::ShowEntry(entry) => view.render_entry(&entry),
        AppEvent::ShowTranslation {
            word,
            translation,
            from,
            to,
        } => view.render_translation(&word, &translation, &from, &to),
        AppEvent::ShowSuggestions(words) => view.render_suggestions(&words),
        AppEvent::ShowError(message) => view.render_error(&message),
        AppEvent::SetLoading(loading) => view.set_loading(loading),
        AppEvent::SetTheme(theme) => view.set_theme(theme),
        AppEvent::Notify(message) => view.notify(&message),
        // Backend-bound events never reach this channel.
        _ => {}
    }
}
