// Cross-cutting prompt fragments shared by every LLM caller.
// Feature-specific prompts live in a prompts.rs next to the feature.

/// Appended to system prompts to enforce JSON-only output.
pub const JSON_ONLY_INSTRUCTION: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
