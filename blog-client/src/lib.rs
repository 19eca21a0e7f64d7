//! Client side of the blog's post store: a typed HTTP client for the
//! `/posts` contract, the per-operation request state machine views hold,
//! and a controller that turns operation outcomes into navigation.

pub mod controller;
pub mod error;
pub mod http;
pub mod model;
pub mod state;

pub use controller::{PostController, Route};
pub use error::ClientError;
pub use http::PostApi;
pub use model::{Post, PostDraft};
pub use state::{Failure, FailureKind, OpSlot, OpState, Ticket};
