use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};

use crate::core::config::OutputMode;
use crate::normalize::heuristic::ACTION_ITEMS_MARKER;

const STRICT_JSON_PROMPT: &str = "You are an assistant that summarizes conversations. \
    Always respond strictly in JSON format with these two fields: \
    1. \"summary\": a short summary of the conversation. \
    2. \"actionItems\": an array of tasks in the format \"Person: Task\". \
    Do not include any text outside the JSON object. \
    Do not include \"Summary\" or \"Action Items\" headers.";

/// System prompt matching the normalizer that will read the reply.
#[must_use]
pub fn system_prompt(mode: OutputMode, participants: &[&str]) -> String {
    match mode {
        OutputMode::StrictJson => STRICT_JSON_PROMPT.to_string(),
        OutputMode::Heuristic => {
            let names = if participants.is_empty() {
                "the people in the conversation".to_string()
            } else {
                participants.join(", ")
            };
            format!(
                "You are an assistant that summarizes conversations and meeting notes. \
                First write a short summary in plain prose. \
                Then write a line containing exactly \"{ACTION_ITEMS_MARKER}\" \
                followed by one bullet per task, each starting with \"- \" and the \
                responsible person's name and a colon, e.g. \"- Name: task\". \
                Known participants: {names}. \
                Use no markdown formatting and no other headers."
            )
        }
    }
}

/// Removes control characters other than newlines and tabs.
#[must_use]
pub fn sanitize_user_text(raw: &str) -> String {
    raw.chars()
        .filter(|&c| c == '\n' || c == '\t' || !c.is_control())
        .collect()
}

pub fn build_messages(system_prompt: &str, user_text: &str) -> Vec<ChatCompletionMessage> {
    vec![
        ChatCompletionMessage {
            role: MessageRole::system,
            content: Content::Text(system_prompt.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
        ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(sanitize_user_text(user_text)),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
    ]
}

/// Text of a message; non-text content renders empty.
#[must_use]
pub fn message_text(msg: &ChatCompletionMessage) -> &str {
    match &msg.content {
        Content::Text(text) => text.as_str(),
        _ => "",
    }
}

#[must_use]
pub fn role_str(role: &MessageRole) -> &'static str {
    match role {
        MessageRole::system => "system",
        MessageRole::assistant => "assistant",
        _ => "user",
    }
}
