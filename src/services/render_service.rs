use photo_quant::{Palette, RenderContext};

use crate::error::{RenderError, RoomError};
use crate::models::{AppConfig, ViewSpec};
use crate::rendering::encode_indexed_png;
use crate::services::RoomService;

/// Composes view windows of the active room and encodes them as PNG.
///
/// Owns the render context and the palette of the room currently shown.
pub struct RenderService {
    rooms: RoomService,
    context: RenderContext,
    palette: Palette,
    view: ViewSpec,
}

impl RenderService {
    pub fn new(config: AppConfig) -> Self {
        let view = config.view;
        Self {
            rooms: RoomService::new(config),
            context: RenderContext::new(),
            palette: Palette::with_rgb222_sprites(),
            view,
        }
    }

    /// Switch to a room. `None` enters the default room.
    pub fn enter_room(&mut self, name: Option<&str>) -> Result<(), RoomError> {
        self.palette = self.rooms.activate(name, &mut self.context)?;
        Ok(())
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut RenderContext {
        &mut self.context
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn view(&self) -> ViewSpec {
        self.view
    }

    /// Palette indices of the view window whose top-left corner is `(x, y)`.
    pub fn render_indices(&self, x: i32, y: i32) -> Result<Vec<u8>, RenderError> {
        let view = self.context.render_view(
            x,
            y,
            self.view.width as usize,
            self.view.height as usize,
        )?;
        Ok(view)
    }

    /// The view window at `(x, y)` as an indexed PNG.
    pub fn render_png(&self, x: i32, y: i32) -> Result<Vec<u8>, RenderError> {
        let indices = self.render_indices(x, y)?;
        tracing::debug!(x, y, "Rendering view");
        encode_indexed_png(self.view.width, self.view.height, &indices, &self.palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use photo_quant::{QuantizeError, Rgb565, PHOTO_BASE};
    use tempfile::TempDir;

    fn service() -> (TempDir, RenderService) {
        let dir = TempDir::new().unwrap();
        let pixels = vec![Rgb565::from_channels(0, 63, 0); 6];
        crate::loader::write_photo(&dir.path().join("a.photo"), 3, 2, &pixels).unwrap();
        let yaml = "view: { width: 4, height: 3 }\ndefault_room: a\nrooms:\n  a:\n    photo: a.photo\n";
        let config = AppConfig::from_yaml(yaml, dir.path()).unwrap();
        (dir, RenderService::new(config))
    }

    #[test]
    fn test_render_without_room_fails() {
        let (_dir, service) = service();
        assert!(matches!(
            service.render_indices(0, 0),
            Err(RenderError::Composite(QuantizeError::NoActiveRoom))
        ));
    }

    #[test]
    fn test_render_indices_after_enter() {
        let (_dir, mut service) = service();
        service.enter_room(None).unwrap();

        let indices = service.render_indices(1, 0).unwrap();
        let p = PHOTO_BASE;
        assert_eq!(indices, vec![p, p, 0, 0, p, p, 0, 0, 0, 0, 0, 0]);
        assert_eq!(
            service.palette().get(PHOTO_BASE).unwrap().to_bytes(),
            [0, 63, 0]
        );
    }

    #[test]
    fn test_render_png_has_signature() {
        let (_dir, mut service) = service();
        service.enter_room(Some("a")).unwrap();
        let png = service.render_png(-1, -1).unwrap();
        assert_eq!(&png[..4], b"\x89PNG");
    }
}
