use serde_json::{Value, json};

/// Outcome of a single send attempt that reached the provider.
#[derive(Clone, Debug, PartialEq)]
pub enum SendResult {
    /// 2xx; `response` is the decoded JSON body (carries the message `name`).
    Sent { response: Value },
    /// Non-2xx; the raw body is kept verbatim for the operator.
    Rejected {
        status: u16,
        reason: String,
        details: String,
    },
}

impl SendResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SendResult::Sent { .. })
    }

    /// JSON shape printed by the CLI: the response itself, or `{error, details}`.
    pub fn to_json(&self) -> Value {
        match self {
            SendResult::Sent { response } => response.clone(),
            SendResult::Rejected { reason, details, .. } => json!({
                "error": reason,
                "details": details,
            }),
        }
    }
}
