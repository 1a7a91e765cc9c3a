pub mod render_service;
pub mod room_service;

pub use render_service::RenderService;
pub use room_service::{LoadedRoom, RoomService};
