pub mod browse;
pub mod session;

pub mod prelude {
    pub use crate::browse::{BrowseError, BrowseHandle, BrowseScreen, BrowseView};
    pub use crate::session::Session;
}

pub use browse::{BrowseError, BrowseHandle, BrowseScreen, BrowseView};
pub use session::Session;
