pub mod config;
pub mod photo_info;
pub mod view_spec;

pub use config::{AppConfig, ObjectConfig, RoomConfig};
pub use photo_info::{PhotoInfo, PromotedBucket};
pub use view_spec::ViewSpec;
