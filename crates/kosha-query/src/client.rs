use serde::Deserialize;
use serde::de::DeserializeOwned;

use kosha_types::{Credentials, DictionaryEntry, Translation};

use crate::table::TableQuery;

const DICTIONARY_TABLE: &str = "dictionary";

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("query failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Successful translation lookup: the matched source row's headword plus
/// the target-language translation, already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedWord {
    pub word: String,
    pub translation: Translation,
}

/// Client for the remote tabular-query API.
///
/// Every call carries the API key and the caller's bearer token; callers are
/// expected to hold an active session before invoking anything here. Results
/// are fetched fresh per query and never cached.
pub struct QueryClient {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl QueryClient {
    pub fn new(credentials: &Credentials) -> Result<Self, QueryError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            base_url: credentials.endpoint_url.trim_end_matches('/').to_string(),
            api_key: credentials.api_key.clone(),
            http,
        })
    }

    /// Case-insensitive exact lookup, at most one row.
    pub async fn find_word(
        &self,
        token: &str,
        word: &str,
        language: &str,
    ) -> Result<Option<DictionaryEntry>, QueryError> {
        let query = TableQuery::new(DICTIONARY_TABLE)
            .select("*")
            .eq("language", language)
            .ilike("word", word)
            .limit(1);

        self.fetch_first(token, query).await
    }

    /// Case-insensitive prefix match, at most five rows. All failures are
    /// swallowed into an empty list: an autocomplete dropdown that fails to
    /// populate is not worth an error panel.
    pub async fn suggest(&self, token: &str, prefix: &str, language: &str) -> Vec<String> {
        #[derive(Deserialize)]
        struct Row {
            word: String,
        }

        let query = TableQuery::new(DICTIONARY_TABLE)
            .select("word")
            .eq("language", language)
            .ilike("word", &format!("{prefix}%"))
            .limit(5);

        match self.fetch_rows::<Row>(token, query).await {
            Ok(rows) => rows.into_iter().map(|r| r.word).collect(),
            Err(e) => {
                tracing::debug!("suggestion fetch failed, returning empty list: {e}");
                Vec::new()
            }
        }
    }

    /// Look up the target-language entry in the source word's translation
    /// map. Missing source row and missing target key are the same outcome:
    /// no translation.
    pub async fn translate(
        &self,
        token: &str,
        word: &str,
        from: &str,
        to: &str,
    ) -> Result<Option<TranslatedWord>, QueryError> {
        #[derive(Deserialize)]
        struct Row {
            word: String,
            #[serde(default)]
            translations: std::collections::HashMap<String, Translation>,
        }

        let query = TableQuery::new(DICTIONARY_TABLE)
            .select("word,translations")
            .eq("language", from)
            .ilike("word", word)
            .limit(1);

        let row: Option<Row> = self.fetch_first(token, query).await?;

        Ok(row.and_then(|mut row| {
            row.translations.remove(to).map(|translation| TranslatedWord {
                word: row.word,
                translation,
            })
        }))
    }

    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        token: &str,
        query: TableQuery,
    ) -> Result<Vec<T>, QueryError> {
        let response = self
            .http
            .get(format!("{}/rest/v1/{}", self.base_url, query.table()))
            .query(&query.params())
            .header("apikey", &self.api_key)
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(QueryError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }

    async fn fetch_first<T: DeserializeOwned>(
        &self,
        token: &str,
        query: TableQuery,
    ) -> Result<Option<T>, QueryError> {
        let rows = self.fetch_rows(token, query).await?;
        Ok(rows.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_trims_trailing_slash() {
        let client = QueryClient::new(&Credentials {
            endpoint_url: "http://127.0.0.1:1/".into(),
            api_key: "anon-key".into(),
        })
        .unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:1");
    }

    #[test]
    fn translated_word_from_object_shape() {
        let row: std::collections::HashMap<String, Translation> =
            serde_json::from_str(r#"{"fr":{"word":"pomme"},"hi":"seb"}"#).unwrap();
        assert_eq!(row["fr"], Translation { word: "pomme".into() });
        assert_eq!(row["hi"], Translation { word: "seb".into() });
    }
}
