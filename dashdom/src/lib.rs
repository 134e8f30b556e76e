pub mod document;
pub mod element;
pub mod types;

pub use document::Document;
pub use element::{find_all, find_element, find_element_mut, find_parent_mut, walk_mut, Content, Element};
pub use types::Tag;
