use crate::error::{ClientError, Result};
use crate::model::Roadmap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use trailhead_core::GraphPayload;
use url::Url;

/// The reference dashboard configured no timeout at all, so a stalled call
/// left its view loading forever. Every client built here carries one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const STATUS_SNIPPET_CHARS: usize = 200;

/// Body for `POST /roadmaps/generate`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub goal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours_per_week: Option<f64>,
}

/// Bearer-token client for the roadmap API. The token is an opaque string
/// supplied by the surrounding authentication context.
///
/// Dropping an in-flight future cancels the underlying request, so a caller
/// that navigates away can simply stop polling instead of ignoring a late
/// response.
#[derive(Debug, Clone)]
pub struct RoadmapClient {
    http: reqwest::Client,
    base_url: Url,
    token: String,
}

impl RoadmapClient {
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, token, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, token: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url,
            token: token.into(),
        })
    }

    /// `GET /roadmaps`
    pub async fn list_roadmaps(&self) -> Result<Vec<Roadmap>> {
        let url = self.endpoint(&["roadmaps"])?;
        self.get_json(url).await
    }

    /// `POST /roadmaps/generate`. Unlike the read paths, failures here are
    /// meant to reach the user (retry/cancel), so no lenient wrapper exists.
    pub async fn generate_roadmap(&self, request: &GenerateRequest) -> Result<Roadmap> {
        let url = self.endpoint(&["roadmaps", "generate"])?;
        debug!(%url, goal = %request.goal, "generating roadmap");
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `PATCH /roadmaps/{id}/tasks/{index}`. Returns the updated roadmap;
    /// callers apply local state only after this succeeds, so there is
    /// nothing to roll back on failure.
    pub async fn set_task_completed(
        &self,
        roadmap_id: &str,
        task_index: usize,
        completed: bool,
    ) -> Result<Roadmap> {
        let index = task_index.to_string();
        let url = self.endpoint(&["roadmaps", roadmap_id, "tasks", &index])?;
        debug!(%url, completed, "updating task");
        let body = serde_json::json!({ "completed": completed });
        let response = self
            .http
            .patch(url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `GET /roadmaps/{id}/prerequisite-graph`
    pub async fn prerequisite_graph(&self, roadmap_id: &str) -> Result<GraphPayload> {
        let url = self.endpoint(&["roadmaps", roadmap_id, "prerequisite-graph"])?;
        self.get_json(url).await
    }

    /// Documented "silent empty state" policy: a failed list fetch is logged
    /// and the view shows an empty list.
    pub async fn list_roadmaps_or_empty(&self) -> Vec<Roadmap> {
        match self.list_roadmaps().await {
            Ok(roadmaps) => roadmaps,
            Err(err) => {
                warn!(error = %err, "roadmap list fetch failed; showing empty list");
                Vec::new()
            }
        }
    }

    /// Documented "silent empty state" policy for the graph view.
    pub async fn prerequisite_graph_or_none(&self, roadmap_id: &str) -> Option<GraphPayload> {
        match self.prerequisite_graph(roadmap_id).await {
            Ok(payload) => Some(payload),
            Err(err) => {
                warn!(roadmap_id, error = %err, "prerequisite graph fetch failed");
                None
            }
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut parts = url
                .path_segments_mut()
                .map_err(|()| ClientError::BaseUrlNotHierarchical)?;
            parts.pop_if_empty();
            for segment in segments {
                parts.push(segment);
            }
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(%url, "fetching");
        let response = self.http.get(url).bearer_auth(&self.token).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::Status {
                status,
                snippet: body.chars().take(STATUS_SNIPPET_CHARS).collect(),
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}
