use std::collections::VecDeque;

use tokio::sync::Mutex;

use crate::proto::v1;

use super::Transport;
use super::error::TransportError;

/// In-memory transport that records requests and replays queued outcomes.
///
/// With nothing queued, searches and aggregations return empty replies.
#[derive(Default)]
pub struct MockTransport {
    search_requests: Mutex<Vec<v1::SearchRequest>>,
    aggregate_requests: Mutex<Vec<v1::AggregateRequest>>,
    search_replies: Mutex<VecDeque<Result<v1::SearchReply, tonic::Status>>>,
    aggregate_replies: Mutex<VecDeque<Result<v1::AggregateReply, tonic::Status>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push_search_reply(&self, reply: v1::SearchReply) {
        self.search_replies.lock().await.push_back(Ok(reply));
    }

    pub async fn push_search_status(&self, status: tonic::Status) {
        self.search_replies.lock().await.push_back(Err(status));
    }

    pub async fn push_aggregate_reply(&self, reply: v1::AggregateReply) {
        self.aggregate_replies.lock().await.push_back(Ok(reply));
    }

    pub async fn push_aggregate_status(&self, status: tonic::Status) {
        self.aggregate_replies.lock().await.push_back(Err(status));
    }

    /// Search requests received so far, oldest first.
    pub async fn search_requests(&self) -> Vec<v1::SearchRequest> {
        self.search_requests.lock().await.clone()
    }

    pub async fn aggregate_requests(&self) -> Vec<v1::AggregateRequest> {
        self.aggregate_requests.lock().await.clone()
    }
}

impl Transport for MockTransport {
    async fn search(&self, request: v1::SearchRequest) -> Result<v1::SearchReply, TransportError> {
        self.search_requests.lock().await.push(request);

        match self.search_replies.lock().await.pop_front() {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(status)) => Err(TransportError::from_status("search", status)),
            None => Ok(v1::SearchReply::default()),
        }
    }

    async fn aggregate(
        &self,
        request: v1::AggregateRequest,
    ) -> Result<v1::AggregateReply, TransportError> {
        self.aggregate_requests.lock().await.push(request);

        match self.aggregate_replies.lock().await.pop_front() {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(status)) => Err(TransportError::from_status("aggregate", status)),
            None => Ok(v1::AggregateReply::default()),
        }
    }
}
