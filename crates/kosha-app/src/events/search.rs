use kanal::AsyncSender;

use kosha_query::{QueryClient, QueryError};
use kosha_types::{AppEvent, DictionaryEntry};

/// Exact dictionary lookup. No client or no session means no work at all.
pub async fn handle_search(
    query: Option<&QueryClient>,
    token: Option<&str>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    word: &str,
    language: &str,
) -> anyhow::Result<()> {
    let (Some(query), Some(token)) = (query, token) else {
        return Ok(());
    };
    let word = word.trim();
    if word.is_empty() {
        return Ok(());
    }

    app_to_ui_tx.send(AppEvent::SetLoading(true)).await?;
    let result = query.find_word(token, word, language).await;
    app_to_ui_tx.send(search_outcome(result)).await?;
    app_to_ui_tx.send(AppEvent::SetLoading(false)).await?;

    Ok(())
}

/// Not-found and transport failure are both non-fatal, with distinct
/// messages. The underlying error is logged and discarded.
pub fn search_outcome(result: Result<Option<DictionaryEntry>, QueryError>) -> AppEvent {
    match result {
        Ok(Some(entry)) => AppEvent::ShowEntry(entry),
        Ok(None) => AppEvent::ShowError("Word not found.".to_string()),
        Err(e) => {
            tracing::debug!("search failed: {e}");
            AppEvent::ShowError("Connection error.".to_string())
        }
    }
}
