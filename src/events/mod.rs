pub mod page_show;
pub mod scroll;

pub use page_show::wire_page_show;
pub use scroll::{mount_nav, wire_mount_on_content_loaded};
