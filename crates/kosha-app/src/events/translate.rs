use kanal::AsyncSender;

use kosha_query::{QueryClient, QueryError, TranslatedWord};
use kosha_types::AppEvent;

/// Translation lookup via the source entry's translation map.
pub async fn handle_translate(
    query: Option<&QueryClient>,
    token: Option<&str>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    word: &str,
    from: &str,
    to: &str,
) -> anyhow::Result<()> {
    let (Some(query), Some(token)) = (query, token) else {
        return Ok(());
    };
    let word = word.trim();
    if word.is_empty() {
        return Ok(());
    }

    app_to_ui_tx.send(AppEvent::SetLoading(true)).await?;
    let result = query.translate(token, word, from, to).await;
    app_to_ui_tx.send(translate_outcome(result, from, to)).await?;
    app_to_ui_tx.send(AppEvent::SetLoading(false)).await?;

    Ok(())
}

/// Missing source entry and missing target key are the same "not found";
/// transport failure gets its own message.
pub fn translate_outcome(
    result: Result<Option<TranslatedWord>, QueryError>,
    from: &str,
    to: &str,
) -> AppEvent {
    match result {
        Ok(Some(translated)) => AppEvent::ShowTranslation {
            word: translated.word,
            translation: translated.translation,
            from: from.to_string(),
            to: to.to_string(),
        },
        Ok(None) => AppEvent::ShowError("Translation not found.".to_string()),
        Err(e) => {
            tracing::debug!("translate failed: {e}");
            AppEvent::ShowError("Sync error.".to_string())
        }
    }
}
