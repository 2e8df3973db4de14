// AI task layer: prompt building, completion, response interpretation.
// All completion calls go through llm_client; no direct HTTP calls here.

pub mod handlers;
pub mod interpreter;
pub mod prompts;
pub mod renderer;
pub mod service;
pub mod template;
