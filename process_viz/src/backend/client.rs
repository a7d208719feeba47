use crate::backend::payload::{AnalysisSnapshot, CutSelectedRequest};
use crate::cut::cut_struct::CutSuggestion;
use tracing::{debug, error};

///
/// Error while exchanging state with the analysis backend
///
#[derive(Debug)]
pub enum BackendError {
    /// The HTTP exchange itself failed
    Request(reqwest::Error),
    /// The response body was not a valid snapshot
    Decode(serde_json::Error),
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendError::Request(e) => write!(f, "Backend request failed: {e}"),
            BackendError::Decode(e) => write!(f, "Failed to decode backend response: {e}"),
        }
    }
}

impl std::error::Error for BackendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BackendError::Request(e) => Some(e),
            BackendError::Decode(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(e: reqwest::Error) -> Self {
        Self::Request(e)
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e)
    }
}

///
/// Blocking HTTP client for the analysis backend
///
/// `GET <base>/` fetches the current snapshot; `POST <base>/cut-selected`
/// reports the operator's chosen cut and returns the recomputed snapshot.
///
#[derive(Debug)]
pub struct BackendClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl BackendClient {
    /// Creates a client against `base_url` (e.g. `http://localhost:8080`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Fetches the current analysis snapshot.
    pub fn fetch_snapshot(&self) -> Result<AnalysisSnapshot, BackendError> {
        let body = self
            .http
            .get(format!("{}/", self.base_url))
            .send()?
            .error_for_status()?
            .text()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Reports a chosen cut and returns the recomputed snapshot.
    pub fn select_cut(
        &self,
        request: &CutSelectedRequest,
    ) -> Result<AnalysisSnapshot, BackendError> {
        let body = self
            .http
            .post(format!("{}/cut-selected", self.base_url))
            .json(request)
            .send()?
            .error_for_status()?
            .text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

///
/// A client session holding the latest snapshot delivered by the backend
///
/// Every successful exchange replaces the snapshot wholesale; a failed one
/// logs the error and leaves the previous snapshot in place.
///
#[derive(Debug)]
pub struct ExplorerSession {
    client: BackendClient,
    snapshot: AnalysisSnapshot,
}

impl ExplorerSession {
    /// Creates a session with an empty snapshot; call [`Self::refresh`] to
    /// load the initial state.
    pub fn new(client: BackendClient) -> Self {
        Self {
            client,
            snapshot: AnalysisSnapshot::default(),
        }
    }

    /// Returns the latest snapshot.
    pub fn snapshot(&self) -> &AnalysisSnapshot {
        &self.snapshot
    }

    /// Re-fetches the snapshot from the backend.
    ///
    /// Returns `true` if the snapshot was replaced.
    pub fn refresh(&mut self) -> bool {
        match self.client.fetch_snapshot() {
            Ok(snapshot) => {
                debug!(
                    nodes = snapshot.dfg.nodes.len(),
                    edges = snapshot.dfg.edges.len(),
                    cuts = snapshot.cut_suggestions_list.cuts.len(),
                    "fetched analysis snapshot"
                );
                self.snapshot = snapshot;
                true
            }
            Err(e) => {
                error!("Could not fetch analysis snapshot: {e}");
                false
            }
        }
    }

    /// Reports `cut` as chosen and swaps in the recomputed snapshot.
    ///
    /// Returns `true` if the snapshot was replaced.
    pub fn select_cut(&mut self, cut: &CutSuggestion) -> bool {
        let request = self.snapshot.cut_selected_request(cut);
        match self.client.select_cut(&request) {
            Ok(snapshot) => {
                self.snapshot = snapshot;
                true
            }
            Err(e) => {
                error!("Could not report the selected cut: {e}");
                false
            }
        }
    }
}
