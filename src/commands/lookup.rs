//! Product lookup command implementation.

use crate::args::Invocation;
use crate::config::Config;
use crate::error::{LookupError, Result};
use crate::format::Formatter;
use crate::wildberries::{LookupResult, ProductSource, WbClient};
use tracing::{debug, info, warn};

/// Executes a single product lookup.
pub struct LookupCommand {
    config: Config,
}

impl LookupCommand {
    /// Creates a new lookup command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fetches the product and returns formatted output.
    pub async fn execute(&self, invocation: &Invocation) -> Result<String> {
        let client = WbClient::new(&self.config)?;

        self.execute_with_client(&client, invocation).await
    }

    /// Fetches the product with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl ProductSource,
        invocation: &Invocation,
    ) -> Result<String> {
        let result = self.lookup(client, &invocation.article).await?;

        debug!("Formatting field: {}", invocation.field);
        Ok(Formatter::format(&result, invocation.field))
    }

    /// Runs fetch and decode under the overall deadline.
    ///
    /// The client enforces its own, independent request deadline; whichever of
    /// the two fires first ends the lookup.
    pub async fn lookup(&self, client: &impl ProductSource, article: &str) -> Result<LookupResult> {
        let timeouts = self.config.timeouts();
        let overall = timeouts.overall;

        info!("Looking up product: {}", article);
        debug!(
            "Deadline {:?} (overall {:?}, request {:?})",
            timeouts.effective(),
            overall,
            timeouts.request
        );

        let result = tokio::time::timeout(overall, client.fetch(article))
            .await
            .map_err(|_| LookupError::Timeout(overall))
            .and_then(|fetched| fetched);

        if let Err(e) = &result {
            if e.is_timeout() {
                warn!("Lookup of {} gave up: {}", article, e);
            }
        }

        result
    }
}
