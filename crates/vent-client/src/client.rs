//! Typed API client
//!
//! Wraps a [`Transport`] with the full API surface, a per-session query
//! cache, and the optimistic stamp-toggle flow.

use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::cache::QueryCache;
use crate::error::{ClientError, ClientResult};
use crate::identity;
use crate::models::{
    ClientIdBody, CreatePostBody, EmotionTag, ErrorBody, Post, PostPage, SortOrder, Stamp,
    SubscriptionBody, ToggleStampBody,
};
use crate::optimistic::{ToggleOutcome, ToggleState};
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

/// Parameters for a post listing query
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub emotion_tag_id: Option<String>,
    pub order: SortOrder,
    pub cursor: Option<String>,
    pub limit: Option<u32>,
}

impl ListQuery {
    /// Render as a URL query string
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut parts = vec![format!("order={}", self.order.as_str())];
        if let Some(tag) = &self.emotion_tag_id {
            parts.push(format!("emotion_tag_id={tag}"));
        }
        if let Some(cursor) = &self.cursor {
            parts.push(format!("cursor={cursor}"));
        }
        if let Some(limit) = self.limit {
            parts.push(format!("limit={limit}"));
        }
        format!("?{}", parts.join("&"))
    }

    /// Cache key for pages fetched with this query
    #[must_use]
    pub fn cache_key(&self) -> String {
        self.to_query_string()
    }
}

/// API client for one anonymous session
pub struct VentClient {
    transport: Arc<dyn Transport>,
    identity: Mutex<Option<String>>,
    cache: Mutex<QueryCache>,
}

impl VentClient {
    /// Create a client with no resolved identity
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            identity: Mutex::new(None),
            cache: Mutex::new(QueryCache::new()),
        }
    }

    /// Create a client with a previously persisted identity token
    #[must_use]
    pub fn with_identity(transport: Arc<dyn Transport>, token: impl Into<String>) -> Self {
        let client = Self::new(transport);
        client.set_identity(token);
        client
    }

    /// Set the resolved identity token
    pub fn set_identity(&self, token: impl Into<String>) {
        *self.lock_identity() = Some(token.into());
    }

    /// Currently resolved identity, if any
    #[must_use]
    pub fn identity(&self) -> Option<String> {
        self.lock_identity().clone()
    }

    /// Resolve an identity, generating and storing a fresh one if needed
    pub fn ensure_identity(&self) -> String {
        let mut guard = self.lock_identity();
        match guard.as_ref() {
            Some(token) => token.clone(),
            None => {
                let token = identity::generate();
                *guard = Some(token.clone());
                token
            }
        }
    }

    /// Ask the server to echo the identity it resolved for this session
    pub async fn fetch_client_id(&self) -> ClientResult<String> {
        let body: ClientIdBody = self
            .send_json(self.request(Method::Get, "/api/v1/identity"))
            .await?;
        Ok(body.client_id)
    }

    /// Fetch the emotion tag catalog
    pub async fn emotion_tags(&self) -> ClientResult<Vec<EmotionTag>> {
        self.send_json(self.request(Method::Get, "/api/v1/emotion-tags"))
            .await
    }

    /// Create a post; cached listings are invalidated on success
    pub async fn create_post(
        &self,
        content: impl Into<String>,
        emotion_tag_id: impl Into<String>,
    ) -> ClientResult<Post> {
        let body = CreatePostBody {
            content: content.into(),
            emotion_tag_id: emotion_tag_id.into(),
        };
        let payload =
            serde_json::to_value(&body).map_err(|e| ClientError::Decode(e.to_string()))?;
        let post: Post = self
            .send_json(self.request(Method::Post, "/api/v1/posts").with_body(payload))
            .await?;

        self.lock_cache().clear();
        Ok(post)
    }

    /// Fetch one listing page and cache it
    pub async fn list_posts(&self, query: &ListQuery) -> ClientResult<PostPage> {
        let path = format!("/api/v1/posts{}", query.to_query_string());
        let page: PostPage = self.send_json(self.request(Method::Get, path)).await?;

        self.lock_cache().store(&query.cache_key(), &page);
        Ok(page)
    }

    /// Refetch a listing page in the background
    ///
    /// Returns whether the result landed in the cache; it is discarded when
    /// an optimistic patch superseded it mid-flight.
    pub async fn refresh_posts(&self, query: &ListQuery) -> ClientResult<bool> {
        let token = self.lock_cache().begin_refetch(&query.cache_key());

        let path = format!("/api/v1/posts{}", query.to_query_string());
        let page: PostPage = self.send_json(self.request(Method::Get, path)).await?;

        Ok(self.lock_cache().complete_refetch(&token, &page))
    }

    /// Fetch a single post; `None` when it does not exist or has expired
    pub async fn get_post(&self, post_id: &str) -> ClientResult<Option<Post>> {
        let path = format!("/api/v1/posts/{post_id}");
        match self.send_json(self.request(Method::Get, path)).await {
            Ok(post) => Ok(Some(post)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Delete the session's own post; cached listings are invalidated
    pub async fn delete_post(&self, post_id: &str) -> ClientResult<()> {
        let path = format!("/api/v1/posts/{post_id}");
        self.send_expect_empty(self.request(Method::Delete, path))
            .await?;

        self.lock_cache().clear();
        Ok(())
    }

    /// Toggle a stamp with optimistic cache patching
    ///
    /// The cached stamp set flips immediately; the server call then either
    /// confirms (cache reconciled to the returned list) or fails (the
    /// pre-toggle snapshot is restored verbatim). A no-op while the identity
    /// is unresolved, so an unattributed reaction can never be sent.
    pub async fn toggle_stamp(&self, post_id: &str, kind: &str, native: &str) -> ToggleOutcome {
        if self.identity().is_none() {
            debug!(post_id, kind, "Skipping stamp toggle, identity unresolved");
            return ToggleOutcome::Skipped;
        }

        let mut state = ToggleState::Idle;
        let snapshot = {
            let mut cache = self.lock_cache();
            // Cancel in-flight refetches so a stale page cannot clobber the
            // optimistic state
            cache.abort_refetches();
            let snapshot = cache.snapshot();
            cache.apply_stamp_toggle(post_id, kind, native);
            snapshot
        };
        state = state.apply();

        let body = ToggleStampBody {
            kind: kind.to_string(),
            native: native.to_string(),
        };
        let payload = match serde_json::to_value(&body) {
            Ok(payload) => payload,
            Err(e) => {
                self.lock_cache().restore(snapshot);
                debug!(post_id, kind, state = ?state.roll_back(), "Stamp toggle aborted");
                return ToggleOutcome::RolledBack(ClientError::Decode(e.to_string()));
            }
        };

        let path = format!("/api/v1/posts/{post_id}/stamps");
        let result: ClientResult<Vec<Stamp>> = self
            .send_json(self.request(Method::Post, path).with_body(payload))
            .await;

        match result {
            Ok(stamps) => {
                self.lock_cache().reconcile_stamps(post_id, &stamps);
                debug!(post_id, kind, state = ?state.confirm(), "Stamp toggle confirmed");
                ToggleOutcome::Confirmed(stamps)
            }
            Err(err) => {
                warn!(post_id, kind, error = %err, state = ?state.roll_back(), "Stamp toggle failed, rolling back");
                self.lock_cache().restore(snapshot);
                ToggleOutcome::RolledBack(err)
            }
        }
    }

    /// Store the session's push subscription
    pub async fn save_push_subscription(
        &self,
        subscription: serde_json::Value,
    ) -> ClientResult<()> {
        let body = SubscriptionBody { subscription };
        let payload =
            serde_json::to_value(&body).map_err(|e| ClientError::Decode(e.to_string()))?;
        self.send_expect_empty(
            self.request(Method::Put, "/api/v1/notifications/subscription")
                .with_body(payload),
        )
        .await
    }

    /// Remove the session's push subscription
    pub async fn delete_push_subscription(&self) -> ClientResult<()> {
        self.send_expect_empty(self.request(Method::Delete, "/api/v1/notifications/subscription"))
            .await
    }

    /// Cached posts for a listing query, if present
    #[must_use]
    pub fn cached_posts(&self, query: &ListQuery) -> Option<Vec<Post>> {
        self.lock_cache()
            .posts(&query.cache_key())
            .map(<[Post]>::to_vec)
    }

    fn request(&self, method: Method, path: impl Into<String>) -> ApiRequest {
        let mut request = ApiRequest::new(method, path);
        if let Some(token) = self.identity() {
            request = request.with_identity(token);
        }
        request
    }

    async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> ClientResult<T> {
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(Self::error_from(response));
        }
        let body = response
            .body
            .ok_or_else(|| ClientError::Decode("empty response body".to_string()))?;
        serde_json::from_value(body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn send_expect_empty(&self, request: ApiRequest) -> ClientResult<()> {
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(Self::error_from(response));
        }
        Ok(())
    }

    fn error_from(response: ApiResponse) -> ClientError {
        let status = response.status;
        match response
            .body
            .and_then(|body| serde_json::from_value::<ErrorBody>(body).ok())
        {
            Some(body) => ClientError::Api {
                status,
                code: body.error.code,
                message: body.error.message,
            },
            None => ClientError::Api {
                status,
                code: "UNKNOWN".to_string(),
                message: format!("HTTP {status}"),
            },
        }
    }

    fn lock_identity(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        match self.identity.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, QueryCache> {
        match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl std::fmt::Debug for VentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VentClient")
            .field("identity", &self.identity())
            .finish()
    }
}
