//! Web search via the daedra crate, which uses DuckDuckGo as the backend.

use crate::ports::WebSearch;
use crate::types::{CrewError, Result};
use async_trait::async_trait;

/// Web-search capability powered by daedra.
pub struct DuckDuckGoSearch {
    max_results: usize,
}

impl DuckDuckGoSearch {
    pub fn new(max_results: usize) -> Self {
        Self { max_results }
    }
}

impl Default for DuckDuckGoSearch {
    fn default() -> Self {
        Self::new(5)
    }
}

#[async_trait]
impl WebSearch for DuckDuckGoSearch {
    async fn search(&self, query: &str) -> Result<String> {
        let args = daedra::SearchArgs {
            query: query.to_string(),
            options: Some(daedra::SearchOptions {
                num_results: self.max_results,
                ..Default::default()
            }),
        };

        match daedra::tools::search::perform_search(&args).await {
            Ok(response) => {
                let mut summary = String::new();
                for result in &response.data {
                    summary.push_str(&format!(
                        "- {} ({})\n  {}\n",
                        result.title, result.url, result.description
                    ));
                }
                if summary.is_empty() {
                    summary.push_str("No results found.");
                }
                tracing::debug!(query, results = response.data.len(), "web search completed");
                Ok(summary)
            }
            Err(e) => Err(CrewError::Search(format!("Search failed: {}", e))),
        }
    }
}
