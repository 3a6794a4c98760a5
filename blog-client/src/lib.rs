mod error;
mod http_client;
mod models;

pub use error::BlogClientError;
pub use http_client::BlogClient;
pub use models::{Comment, Created, NewComment, NewPost, Post};
