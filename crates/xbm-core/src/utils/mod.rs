//! Small pure helpers shared by the services and adapters.

pub mod markup;
pub mod time;
pub mod validation;

pub use markup::html_to_text;
pub use time::now_timestamp;
pub use validation::{ValidationError, normalize_item_url, validate_item_url, validate_tag_name};
