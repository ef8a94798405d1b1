pub mod action;
pub use action::Action;

pub mod action_payload;
pub use action_payload::ActionPayload;

pub mod access_token;
pub use access_token::AccessToken;

pub mod send_result;
pub use send_result::SendResult;
