use std::sync::Arc;

use quiz_core::model::{HistoryEntry, QuestionId};
use serde::Serialize;
use serde::de::DeserializeOwned;
use storage::repository::KeyValueStore;

/// Key holding the active session's ordered question ids.
pub const SESSION_KEY: &str = "quiz-session";
/// Key holding the answer history of the active session.
pub const HISTORY_KEY: &str = "quiz-progress";

/// Reads and writes session state through the key-value port.
///
/// Reads never fail: missing keys, backend errors, and malformed JSON all read
/// as "nothing stored". Writes are fire-and-forget; failures are logged and the
/// caller carries on with its in-memory state.
#[derive(Clone)]
pub struct SessionStore {
    kv: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    pub async fn load_session_ids(&self) -> Option<Vec<QuestionId>> {
        self.read_json(SESSION_KEY).await
    }

    pub async fn load_history(&self) -> Vec<HistoryEntry> {
        self.read_json(HISTORY_KEY).await.unwrap_or_default()
    }

    pub async fn save_session_ids(&self, ids: &[QuestionId]) {
        self.write_json(SESSION_KEY, ids).await;
    }

    pub async fn save_history(&self, history: &[HistoryEntry]) {
        self.write_json(HISTORY_KEY, history).await;
    }

    pub async fn clear_history(&self) {
        self.delete(HISTORY_KEY).await;
    }

    /// Remove both session keys.
    pub async fn clear(&self) {
        self.delete(SESSION_KEY).await;
        self.delete(HISTORY_KEY).await;
    }

    async fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.kv.get(key).await {
            Ok(raw) => raw?,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read stored value");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "ignoring malformed stored value");
                None
            }
        }
    }

    async fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to encode value");
                return;
            }
        };
        if let Err(err) = self.kv.put(key, &raw).await {
            tracing::warn!(key, error = %err, "failed to store value");
        }
    }

    async fn delete(&self, key: &str) {
        if let Err(err) = self.kv.delete(key).await {
            tracing::warn!(key, error = %err, "failed to delete stored value");
        }
    }
}
