//! Release-body update, the only mutating call of a run.

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::error::SourceError;
use crate::run::Publisher;

use super::GitHubRepo;

#[async_trait]
impl Publisher for GitHubRepo {
    /// `PATCH /repos/{owner}/{repo}/releases/{id}` with the rendered notes.
    ///
    /// Deliberately not retried: a failed update is surfaced to the invoking
    /// framework instead.
    async fn publish(
        &self,
        release_id: u64,
        tag_name: &str,
        body: &str,
    ) -> Result<(), SourceError> {
        let route = format!(
            "/repos/{}/{}/releases/{}",
            self.owner, self.repo, release_id
        );
        let payload = json!({
            "tag_name": tag_name,
            "body": body,
        });

        let _: serde_json::Value = self
            .client
            .patch(route, Some(&payload))
            .await
            .map_err(|e| self.map_api_error(e))?;

        debug!(release_id, tag_name, "release body updated");
        Ok(())
    }
}
