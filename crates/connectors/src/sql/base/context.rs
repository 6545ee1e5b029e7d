use tokio_util::sync::{CancellationToken, WaitForCancellationFuture};

/// Per-call context handed down to query executors.
///
/// Cloning shares the same cancellation state.
#[derive(Debug, Clone, Default)]
pub struct QueryContext {
    cancel: CancellationToken,
}

impl QueryContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(cancel: CancellationToken) -> Self {
        QueryContext { cancel }
    }

    /// A context that is cancelled together with this one, but can also be
    /// cancelled on its own.
    pub fn child(&self) -> Self {
        QueryContext {
            cancel: self.cancel.child_token(),
        }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn cancelled(&self) -> WaitForCancellationFuture<'_> {
        self.cancel.cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_follows_parent() {
        let parent = QueryContext::new();
        let child = parent.child();
        assert!(!child.is_cancelled());

        parent.cancel();
        assert!(child.is_cancelled());
    }

    #[test]
    fn test_child_does_not_cancel_parent() {
        let parent = QueryContext::new();
        let child = parent.child();

        child.cancel();
        assert!(child.is_cancelled());
        assert!(!parent.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancelled_future_resolves() {
        let token = CancellationToken::new();
        let ctx = QueryContext::with_token(token.clone());

        token.cancel();
        ctx.cancelled().await;
        assert!(ctx.is_cancelled());
    }
}
