//! Page rendering module
//! 
//! This module contains the render target the countdown writes into and the
//! HTML markup the service serves around it.

pub mod markup;
pub mod page;

// Re-export main types
pub use markup::{escape_html, render_page, ENDED_MESSAGE};
pub use page::{DisplaySnapshot, PageDisplay};
