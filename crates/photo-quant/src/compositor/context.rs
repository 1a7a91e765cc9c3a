//! Render context: owns the active room and composes lines from it.

use super::room::Room;
use super::scanline::{compose_line, compose_view, Orientation};
use crate::api::QuantizeError;

/// Holds the room currently being displayed.
///
/// Line requests are answered from the active room. A context with no
/// active room refuses every request with [`QuantizeError::NoActiveRoom`]
/// rather than producing stale output.
///
/// # Example
///
/// ```
/// use photo_quant::{IndexedPhoto, RenderContext, Room};
///
/// let photo = IndexedPhoto::new(vec![64, 65, 66, 67], 2, 2).unwrap();
/// let mut ctx = RenderContext::new();
/// ctx.set_active_room(Room::new(photo));
///
/// let mut line = [0u8; 3];
/// ctx.fill_horizontal(0, 1, &mut line).unwrap();
/// assert_eq!(line, [66, 67, 0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    room: Option<Room>,
}

impl RenderContext {
    /// An empty context with no active room.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `room` the active room, returning the previous one.
    pub fn set_active_room(&mut self, room: Room) -> Option<Room> {
        self.room.replace(room)
    }

    /// Drop the active room, returning it.
    pub fn clear_active_room(&mut self) -> Option<Room> {
        self.room.take()
    }

    /// The room being composited, if one is set.
    #[inline]
    pub fn active_room(&self) -> Option<&Room> {
        self.room.as_ref()
    }

    /// Mutable access to the active room, e.g. to move its objects.
    #[inline]
    pub fn active_room_mut(&mut self) -> Option<&mut Room> {
        self.room.as_mut()
    }

    /// Whether compositing calls will succeed.
    #[inline]
    pub fn has_active_room(&self) -> bool {
        self.room.is_some()
    }

    fn room(&self) -> Result<&Room, QuantizeError> {
        self.room.as_ref().ok_or(QuantizeError::NoActiveRoom)
    }

    /// Fill `buf` with the horizontal line starting at `(x, y)`.
    pub fn fill_horizontal(&self, x: i32, y: i32, buf: &mut [u8]) -> Result<(), QuantizeError> {
        compose_line(self.room()?, x, y, Orientation::Horizontal, buf);
        Ok(())
    }

    /// Fill `buf` with the vertical line starting at `(x, y)`.
    pub fn fill_vertical(&self, x: i32, y: i32, buf: &mut [u8]) -> Result<(), QuantizeError> {
        compose_line(self.room()?, x, y, Orientation::Vertical, buf);
        Ok(())
    }

    /// Compose a line of `len` pixels into a fresh buffer.
    pub fn composite_line(
        &self,
        x: i32,
        y: i32,
        orientation: Orientation,
        len: usize,
    ) -> Result<Vec<u8>, QuantizeError> {
        let room = self.room()?;
        let mut buf = vec![0u8; len];
        compose_line(room, x, y, orientation, &mut buf);
        Ok(buf)
    }

    /// Compose a full `width x height` view, row-major.
    pub fn render_view(
        &self,
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    ) -> Result<Vec<u8>, QuantizeError> {
        Ok(compose_view(self.room()?, x, y, width, height))
    }
}
