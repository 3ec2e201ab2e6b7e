use crate::actions::{self, Outcome, DB_UNREACHABLE};
use crate::client::ActivityClient;
use crate::view::{AdminView, StatusMessage};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::warn;

#[derive(Clone)]
pub struct AppState {
    pub client: ActivityClient,
    pub view: Arc<Mutex<AdminView>>,
}

impl AppState {
    pub fn new(client: ActivityClient) -> Self {
        Self {
            client,
            view: Arc::new(Mutex::new(AdminView::default())),
        }
    }

    /// Writes the outcome's status, then re-reads the table if it asks for it.
    pub async fn settle(&self, outcome: Outcome) {
        self.view.lock().await.set_status(outcome.status);
        if outcome.refresh {
            self.refresh().await;
        }
    }

    /// Replaces the table with a fresh snapshot. On failure the previous
    /// table stays and the status reports the database as unreachable.
    pub async fn refresh(&self) -> bool {
        match actions::refresh(&self.client).await {
            Ok(table) => {
                self.view.lock().await.replace_table(table);
                true
            }
            Err(err) => {
                warn!("could not fetch activities: {err}");
                self.view
                    .lock()
                    .await
                    .set_status(StatusMessage::failure(DB_UNREACHABLE));
                false
            }
        }
    }
}
