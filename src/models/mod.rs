pub mod event;
pub mod page;

pub use event::Event;
pub use page::{decode_page, PageRequest, PageResponse};
