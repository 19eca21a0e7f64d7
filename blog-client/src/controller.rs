use tracing::debug;

use crate::http::PostApi;
use crate::model::{Post, PostDraft};
use crate::state::OpSlot;

/// Where a view should navigate after a successful operation. Navigation
/// is data, not a side effect, so the controller needs no UI runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Detail(String),
}

/// Drives the five post operations for one view instance. Each operation
/// owns its own [`OpSlot`]; different operations may be in flight at the
/// same time, but no single operation can be submitted twice concurrently.
pub struct PostController {
    api: PostApi,
    pub list: OpSlot<Vec<Post>>,
    pub detail: OpSlot<Post>,
    pub submit: OpSlot<Post>,
    pub removal: OpSlot<()>,
}

impl PostController {
    pub fn new(api: PostApi) -> Self {
        Self {
            api,
            list: OpSlot::new(),
            detail: OpSlot::new(),
            submit: OpSlot::new(),
            removal: OpSlot::new(),
        }
    }

    /// Loads all posts. An empty store is a success with an empty list,
    /// not a failure.
    pub async fn load_list(&mut self) {
        let Some(ticket) = self.list.begin() else {
            return;
        };
        let result = self.api.list_posts().await;
        self.list.settle(ticket, result);
    }

    /// Loads one post. A missing post settles into a not-found failure,
    /// distinct from other errors.
    pub async fn load_post(&mut self, post_id: &str) {
        let Some(ticket) = self.detail.begin() else {
            return;
        };
        let result = self.api.get_post(post_id).await;
        self.detail.settle(ticket, result);
    }

    /// Submits a new post. On success the created post (with its
    /// store-assigned id) lands in `submit` and the view is told to
    /// navigate to the detail page. A draft failing local validation
    /// settles as failed without any request.
    pub async fn submit_create(&mut self, draft: PostDraft) -> Option<Route> {
        let ticket = self.submit.begin()?;
        let result = self.api.create_post(&draft).await;
        let route = result
            .as_ref()
            .ok()
            .map(|post| Route::Detail(post.post_id.clone()));
        self.submit.settle(ticket, result);
        route
    }

    /// Submits a full replacement of an existing post's writable fields.
    pub async fn submit_update(&mut self, post_id: &str, draft: PostDraft) -> Option<Route> {
        let ticket = self.submit.begin()?;
        let result = self.api.update_post(post_id, &draft).await;
        let route = result.is_ok().then(|| Route::Detail(post_id.to_string()));
        self.submit.settle(ticket, result);
        route
    }

    /// Deletes a post. `confirmed` is the destructive-action guard the
    /// caller must supply; without it nothing is issued and the state is
    /// untouched. On failure the post stays where it is and no navigation
    /// happens.
    pub async fn delete_post(&mut self, post_id: &str, confirmed: bool) -> Option<Route> {
        if !confirmed {
            debug!(post_id, "delete not confirmed, skipping");
            return None;
        }
        let ticket = self.removal.begin()?;
        let result = self.api.delete_post(post_id).await;
        let route = result.is_ok().then_some(Route::List);
        self.removal.settle(ticket, result);
        route
    }

    /// Called when the owning view goes away: any response still in flight
    /// will be discarded rather than applied to a view nobody renders.
    pub fn abandon(&mut self) {
        self.list.reset();
        self.detail.reset();
        self.submit.reset();
        self.removal.reset();
    }
}
