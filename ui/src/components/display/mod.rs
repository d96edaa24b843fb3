pub mod loading_indicator;
pub mod notification_banner;

pub use loading_indicator::*;
pub use notification_banner::*;
