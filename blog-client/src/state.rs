use crate::error::ClientError;

/// What kind of failure a view is looking at. `NotFound` is kept distinct
/// so a UI can offer "go back to the list" instead of a retry affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Validation,
    NotFound,
    Api,
    Network,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    pub fn is_not_found(&self) -> bool {
        self.kind == FailureKind::NotFound
    }
}

impl From<&ClientError> for Failure {
    fn from(err: &ClientError) -> Self {
        let kind = match err {
            ClientError::Validation(_) => FailureKind::Validation,
            ClientError::NotFound => FailureKind::NotFound,
            ClientError::Api { .. } | ClientError::UnexpectedResponse(_) => FailureKind::Api,
            ClientError::Network(_) => FailureKind::Network,
        };
        Failure {
            kind,
            message: err.ui_message(),
        }
    }
}

/// Per-operation request state as a view sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum OpState<T> {
    Idle,
    Pending,
    Success(T),
    Failed(Failure),
}

impl<T> OpState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, OpState::Pending)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            OpState::Success(v) => Some(v),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            OpState::Failed(f) => Some(f),
            _ => None,
        }
    }
}

/// Proof that a particular attempt is still the current one. Issued by
/// [`OpSlot::begin`] and consumed by [`OpSlot::settle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// The `idle → pending → success | failed` machine one view instance owns
/// per operation.
///
/// `begin` refuses a second submission while one is in flight. A result is
/// applied only when its ticket is still current: `reset` (the view was
/// abandoned) invalidates outstanding tickets, so a late response is
/// discarded instead of resurrecting a dead view. A failed attempt is
/// recoverable; the next `begin` re-enters `Pending`. Nothing here retries
/// on its own.
#[derive(Debug)]
pub struct OpSlot<T> {
    state: OpState<T>,
    generation: u64,
}

impl<T> Default for OpSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OpSlot<T> {
    pub fn new() -> Self {
        Self {
            state: OpState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &OpState<T> {
        &self.state
    }

    /// Enters `Pending`. Returns `None` while a request is already in
    /// flight, which is the resubmission guard.
    pub fn begin(&mut self) -> Option<Ticket> {
        if self.state.is_pending() {
            return None;
        }
        self.generation += 1;
        self.state = OpState::Pending;
        Some(Ticket(self.generation))
    }

    /// Applies a result. Returns `false` when the ticket is stale, in
    /// which case the state is left untouched.
    pub fn settle(&mut self, ticket: Ticket, result: Result<T, ClientError>) -> bool {
        if ticket.0 != self.generation || !self.state.is_pending() {
            return false;
        }
        self.state = match result {
            Ok(value) => OpState::Success(value),
            Err(err) => OpState::Failed(Failure::from(&err)),
        };
        true
    }

    /// Abandons the slot: back to `Idle`, outstanding tickets invalidated.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = OpState::Idle;
    }
}
