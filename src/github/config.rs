//! Changelog config loaded from the repository's `.github/release.yml`.

use async_trait::async_trait;
use tracing::debug;

use crate::config::{ChangelogConfig, ConfigSource, PartialConfig};
use crate::error::SourceError;

use super::GitHubRepo;

const CONFIG_PATH: &str = ".github/release.yml";

#[async_trait]
impl ConfigSource for GitHubRepo {
    async fn load(&self) -> Result<ChangelogConfig, SourceError> {
        let content = match self
            .client
            .repos(self.owner.clone(), self.repo.clone())
            .get_content()
            .path(CONFIG_PATH)
            .send()
            .await
        {
            Ok(mut items) => items
                .take_items()
                .into_iter()
                .next()
                .and_then(|item| item.decoded_content()),
            Err(err) if is_not_found(&err) => None,
            Err(err) => return Err(self.map_api_error(err)),
        };

        let Some(content) = content else {
            debug!("no {CONFIG_PATH} in repository, using the default changelog config");
            return Ok(ChangelogConfig::default());
        };

        let partial: PartialConfig =
            serde_yaml::from_str(&content).map_err(SourceError::InvalidConfig)?;
        Ok(ChangelogConfig::from_partial(partial))
    }
}

fn is_not_found(err: &octocrab::Error) -> bool {
    matches!(err, octocrab::Error::GitHub { source, .. } if source.status_code.as_u16() == 404)
}
