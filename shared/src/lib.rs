//! Content and presentation logic for the PT ARCH landing page.
//!
//! Nothing in here touches the browser. The frontend renders these types and
//! the backend pre-renders them, so both agree on the same data.

pub mod build_mode;
pub mod content;
pub mod display;
pub mod page_state;

pub use build_mode::BuildMode;
pub use content::{
    section_ids, Brand, ContactEntry, ContentError, NavLink, Product, ProductCategory, SiteContent,
    VisionCard,
};
pub use display::{copyright_line, ImageDisplay, ScrollState, SCROLL_THRESHOLD_PX};
pub use page_state::{PageState, APP_ROOT_ID, PAGE_STATE_ID};
