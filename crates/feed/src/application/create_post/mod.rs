mod create_post_command;
mod create_post_use_case;


pub use create_post_command::{Attachment, CreatePostCommand};
pub use create_post_use_case::CreatePostUseCase;
