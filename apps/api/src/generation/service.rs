//! AI task orchestration.
//!
//! Flow: build_prompt → one completion call → interpret. Exactly one outbound
//! call per task, no retries, no state kept between calls.

use std::sync::Arc;

use tracing::{info, warn};

use crate::generation::interpreter::{interpret, TaskOutput};
use crate::generation::renderer::{build_prompt, TaskRequest};
use crate::llm_client::prompts::ASSISTANT_SYSTEM;
use crate::llm_client::{CompletionTransport, GenerationParams, LlmError};

/// Runs AI tasks against an injected completion transport. Cheap to clone.
#[derive(Clone)]
pub struct AiService {
    transport: Arc<dyn CompletionTransport>,
    params: GenerationParams,
}

impl AiService {
    pub fn new(transport: Arc<dyn CompletionTransport>) -> Self {
        Self {
            transport,
            params: GenerationParams::default(),
        }
    }

    /// Renders, completes, and interprets one task.
    ///
    /// A transport failure is returned as `Err`; it is never folded into the
    /// content. Use `interpreter::failure_text` when a display string is needed.
    pub async fn run(&self, request: &TaskRequest<'_>) -> Result<TaskOutput, LlmError> {
        let kind = request.kind();
        let prompt = build_prompt(request);
        info!("Running AI task {:?} (prompt {} bytes)", kind, prompt.len());

        let raw = self
            .transport
            .complete(ASSISTANT_SYSTEM, &prompt, self.params)
            .await
            .map_err(|e| {
                warn!("AI task {:?} failed: {}", kind, e);
                e
            })?;

        Ok(interpret(kind.response_mode(), raw))
    }
}
