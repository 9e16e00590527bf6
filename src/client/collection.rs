use std::sync::Arc;

use tracing::{debug, instrument};

use crate::aggregate::{AggregateParams, AggregateResult, build_aggregate, decode_aggregate_reply};
use crate::proto::v1;
use crate::query::{
    Bm25Params, ConsistencyLevel, HybridParams, NearMediaParams, NearObjectParams,
    NearTextParams, NearVectorParams, QueryOptions, build_bm25, build_hybrid, build_near_media,
    build_near_object, build_near_text, build_near_vector,
};
use crate::results::{SearchResponse, decode_reply};
use crate::transport::Transport;

use super::error::ClientError;

/// Handle for querying one collection.
///
/// Tenant and consistency level set here apply to every call whose options
/// do not set their own.
pub struct Collection<T: Transport> {
    name: String,
    transport: Arc<T>,
    tenant: Option<String>,
    consistency_level: Option<ConsistencyLevel>,
}

impl<T: Transport> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            transport: Arc::clone(&self.transport),
            tenant: self.tenant.clone(),
            consistency_level: self.consistency_level,
        }
    }
}

impl<T: Transport> Collection<T> {
    pub(crate) fn new(name: String, transport: Arc<T>) -> Self {
        Self {
            name,
            transport,
            tenant: None,
            consistency_level: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn with_tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = Some(tenant.into());
        self
    }

    pub fn with_consistency_level(mut self, level: ConsistencyLevel) -> Self {
        self.consistency_level = Some(level);
        self
    }

    #[instrument(skip(self, params, options), fields(collection = %self.name))]
    pub async fn near_vector(
        &self,
        params: NearVectorParams,
        options: QueryOptions,
    ) -> Result<SearchResponse, ClientError> {
        let options = self.scoped(options);
        let request = build_near_vector(&self.name, params, &options)?;
        self.search(request, &options).await
    }

    #[instrument(skip(self, params, options), fields(collection = %self.name))]
    pub async fn near_text(
        &self,
        params: NearTextParams,
        options: QueryOptions,
    ) -> Result<SearchResponse, ClientError> {
        let options = self.scoped(options);
        let request = build_near_text(&self.name, params, &options)?;
        self.search(request, &options).await
    }

    #[instrument(skip(self, params, options), fields(collection = %self.name, id = %params.id))]
    pub async fn near_object(
        &self,
        params: NearObjectParams,
        options: QueryOptions,
    ) -> Result<SearchResponse, ClientError> {
        let options = self.scoped(options);
        let request = build_near_object(&self.name, params, &options)?;
        self.search(request, &options).await
    }

    #[instrument(skip(self, params, options), fields(collection = %self.name, kind = %params.kind))]
    pub async fn near_media(
        &self,
        params: NearMediaParams,
        options: QueryOptions,
    ) -> Result<SearchResponse, ClientError> {
        let options = self.scoped(options);
        let request = build_near_media(&self.name, params, &options)?;
        self.search(request, &options).await
    }

    #[instrument(skip(self, params, options), fields(collection = %self.name))]
    pub async fn bm25(
        &self,
        params: Bm25Params,
        options: QueryOptions,
    ) -> Result<SearchResponse, ClientError> {
        let options = self.scoped(options);
        let request = build_bm25(&self.name, params, &options)?;
        self.search(request, &options).await
    }

    #[instrument(skip(self, params, options), fields(collection = %self.name))]
    pub async fn hybrid(
        &self,
        params: HybridParams,
        options: QueryOptions,
    ) -> Result<SearchResponse, ClientError> {
        let options = self.scoped(options);
        let request = build_hybrid(&self.name, params, &options)?;
        self.search(request, &options).await
    }

    #[instrument(skip(self, params), fields(collection = %self.name))]
    pub async fn aggregate(
        &self,
        mut params: AggregateParams,
    ) -> Result<AggregateResult, ClientError> {
        if params.tenant.is_none() {
            params.tenant = self.tenant.clone();
        }

        let request = build_aggregate(&self.name, params)?;
        let reply = self.transport.aggregate(request).await?;

        Ok(decode_aggregate_reply(reply)?)
    }

    fn scoped(&self, mut options: QueryOptions) -> QueryOptions {
        if options.tenant.is_none() {
            options.tenant = self.tenant.clone();
        }
        if options.consistency_level.is_none() {
            options.consistency_level = self.consistency_level;
        }
        options
    }

    async fn search(
        &self,
        request: v1::SearchRequest,
        options: &QueryOptions,
    ) -> Result<SearchResponse, ClientError> {
        let reply = self.transport.search(request).await?;
        debug!(
            results = reply.results.len(),
            groups = reply.group_by_results.len(),
            took = reply.took,
            "Search reply received"
        );

        Ok(decode_reply(&self.name, reply, options.group_by.is_some())?)
    }
}
