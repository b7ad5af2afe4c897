//! Wire types for the OpenAI-compatible API.

mod chat_completion;
mod message;
mod response;

pub use chat_completion::{
    ChatCompletion, ChatCompletionChoice, ChatCompletionParams, ChoiceMessage,
};
pub use message::{Message, Role};
pub use response::{ResponseCreateParams, ResponseObject};
