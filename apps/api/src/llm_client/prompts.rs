// Shared prompt constants used by every completion call.
// Task-specific prompt text lives in generation::prompts.

/// System instruction sent with every completion request.
pub const ASSISTANT_SYSTEM: &str = "You are an AI assistant that helps with professional \
    resume and portfolio content creation, job applications, and interview preparation.";

/// Prefix placed in front of a failed completion's message when it is shown as text.
pub const ERROR_MARKER: &str = "Error generating AI content:";
