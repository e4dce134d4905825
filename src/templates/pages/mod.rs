pub mod home;
pub mod preview;

pub use home::home_page;
pub use preview::{preview_page, PreviewVm};
