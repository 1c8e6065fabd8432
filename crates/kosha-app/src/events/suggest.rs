use kanal::AsyncSender;

use kosha_query::QueryClient;
use kosha_types::AppEvent;

/// Minimum prefix length before a remote fetch is issued.
const MIN_PREFIX_CHARS: usize = 2;

/// Type-ahead fetch. Short prefixes clear the dropdown without touching the
/// network; fetch failures come back as an empty list from the gateway, so
/// a broken connection never produces an error panel here.
pub async fn handle_suggest(
    query: Option<&QueryClient>,
    token: Option<&str>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    prefix: &str,
    language: &str,
) -> anyhow::Result<()> {
    if prefix.chars().count() < MIN_PREFIX_CHARS {
        app_to_ui_tx.send(AppEvent::ShowSuggestions(Vec::new())).await?;
        return Ok(());
    }

    let (Some(query), Some(token)) = (query, token) else {
        return Ok(());
    };

    let words = query.suggest(token, prefix, language).await;
    app_to_ui_tx.send(AppEvent::ShowSuggestions(words)).await?;

    Ok(())
}
