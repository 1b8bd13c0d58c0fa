use anyhow::Result;

/// Seam for an optional hosted text-generation backend. The core never
/// calls this; the agent consults it only for input no trigger rule
/// matched, and treats every failure as recoverable.
pub trait CompletionService: Send + Sync {
    fn complete(&self, prompt: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Placeholder backend for hosts that run fully offline.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCompletion;

impl CompletionService for NoCompletion {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        Err(anyhow::anyhow!("no completion backend configured"))
    }
}
