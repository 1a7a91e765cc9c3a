//! Scanline composition of photo and sprites.
//!
//! A scanline is a run of `L` palette indices along one row (horizontal) or
//! one column (vertical) of room coordinates, starting at a scroll origin.
//! The photo is sampled first, then every intersecting object is drawn over
//! it in list order, skipping [`TRANSPARENT`] pixels.

use super::room::Room;
use super::sprite::TRANSPARENT;

/// Direction a scanline advances from its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Along a photo row: `(x + i, y)`.
    Horizontal,
    /// Down a photo column: `(x, y + i)`.
    Vertical,
}

/// Fill `buf` with the line starting at room coordinate `(x, y)`.
///
/// The line length is `buf.len()`. Samples outside the photo are `0`.
/// Objects are clipped to the line; transparent sprite pixels leave the
/// underlying value alone.
pub fn compose_line(room: &Room, x: i32, y: i32, orientation: Orientation, buf: &mut [u8]) {
    compose_line_at(room, x as i64, y as i64, orientation, buf);
}

/// [`compose_line`] with widened origin, so callers can step past `i32`
/// bounds without overflow.
fn compose_line_at(room: &Room, x: i64, y: i64, orientation: Orientation, buf: &mut [u8]) {
    let len = buf.len() as i64;
    let photo = room.photo();

    for (i, out) in buf.iter_mut().enumerate() {
        let i = i as i64;
        let (px, py) = match orientation {
            Orientation::Horizontal => (x + i, y),
            Orientation::Vertical => (x, y + i),
        };
        *out = photo.pixel(px, py).unwrap_or(0);
    }

    // `start` advances along the line, `cross` is the fixed coordinate.
    let (start, cross) = match orientation {
        Orientation::Horizontal => (x, y),
        Orientation::Vertical => (y, x),
    };

    for object in room.objects() {
        let image = object.image();
        let (obj_start, obj_cross, extent, cross_extent) = match orientation {
            Orientation::Horizontal => (
                object.x() as i64,
                object.y() as i64,
                image.width() as i64,
                image.height() as i64,
            ),
            Orientation::Vertical => (
                object.y() as i64,
                object.x() as i64,
                image.height() as i64,
                image.width() as i64,
            ),
        };

        if cross < obj_cross || cross >= obj_cross + cross_extent {
            continue;
        }
        let from = start.max(obj_start);
        let to = (start + len).min(obj_start + extent);
        if from >= to {
            continue;
        }

        let cross_offset = (cross - obj_cross) as usize;
        for pos in from..to {
            let along = (pos - obj_start) as usize;
            let pixel = match orientation {
                Orientation::Horizontal => image.pixel(along, cross_offset),
                Orientation::Vertical => image.pixel(cross_offset, along),
            };
            if pixel != TRANSPARENT {
                buf[(pos - start) as usize] = pixel;
            }
        }
    }
}

/// Fill `buf` with the horizontal line whose leftmost pixel is `(x, y)`.
#[inline]
pub fn compose_horizontal(room: &Room, x: i32, y: i32, buf: &mut [u8]) {
    compose_line(room, x, y, Orientation::Horizontal, buf);
}

/// Fill `buf` with the vertical line whose top pixel is `(x, y)`.
#[inline]
pub fn compose_vertical(room: &Room, x: i32, y: i32, buf: &mut [u8]) {
    compose_line(room, x, y, Orientation::Vertical, buf);
}

/// Compose a `width x height` window whose top-left corner is `(x, y)`,
/// row by row.
pub fn compose_view(room: &Room, x: i32, y: i32, width: usize, height: usize) -> Vec<u8> {
    let mut view = vec![0u8; width * height];
    if width == 0 {
        return view;
    }
    for (row, line) in view.chunks_exact_mut(width).enumerate() {
        compose_line_at(
            room,
            x as i64,
            y as i64 + row as i64,
            Orientation::Horizontal,
            line,
        );
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compositor::{PlacedObject, SpriteImage};
    use crate::output::IndexedPhoto;
    use std::sync::Arc;

    /// 4x3 photo with index `100 + y * 4 + x`.
    fn room() -> Room {
        let indices = (0..12).map(|i| 100 + i as u8).collect();
        Room::new(IndexedPhoto::new(indices, 4, 3).unwrap())
    }

    fn sprite(pixels: Vec<u8>, w: usize, h: usize) -> Arc<SpriteImage> {
        Arc::new(SpriteImage::new(pixels, w, h).unwrap())
    }

    #[test]
    fn test_horizontal_background_with_clipping() {
        let room = room();
        let mut buf = [0xAA; 6];
        compose_horizontal(&room, -1, 1, &mut buf);
        assert_eq!(buf, [0, 104, 105, 106, 107, 0]);
    }

    #[test]
    fn test_vertical_background_with_clipping() {
        let room = room();
        let mut buf = [0xAA; 5];
        compose_vertical(&room, 2, -1, &mut buf);
        assert_eq!(buf, [0, 102, 106, 110, 0]);
    }

    #[test]
    fn test_rows_outside_photo_are_zero() {
        let room = room();
        let mut buf = [0xAA; 4];
        compose_horizontal(&room, 0, 3, &mut buf);
        assert_eq!(buf, [0; 4]);
        compose_vertical(&room, -1, 0, &mut buf);
        assert_eq!(buf, [0; 4]);
    }

    #[test]
    fn test_horizontal_object_overlay() {
        let mut room = room();
        // 2x2 sprite at (1, 0): top row [1, T], bottom row [3, 4]
        room.push_object(PlacedObject::new(
            1,
            0,
            sprite(vec![1, TRANSPARENT, 3, 4], 2, 2),
        ));

        let mut buf = [0; 4];
        compose_horizontal(&room, 0, 0, &mut buf);
        assert_eq!(buf, [100, 1, 102, 103]);

        compose_horizontal(&room, 0, 1, &mut buf);
        assert_eq!(buf, [104, 3, 4, 107]);

        compose_horizontal(&room, 0, 2, &mut buf);
        assert_eq!(buf, [108, 109, 110, 111]);
    }

    #[test]
    fn test_vertical_object_overlay() {
        let mut room = room();
        room.push_object(PlacedObject::new(
            1,
            0,
            sprite(vec![1, TRANSPARENT, 3, 4], 2, 2),
        ));

        let mut buf = [0; 3];
        compose_vertical(&room, 2, 0, &mut buf);
        assert_eq!(buf, [102, 4, 110]);

        compose_vertical(&room, 1, 0, &mut buf);
        assert_eq!(buf, [1, 3, 109]);
    }

    #[test]
    fn test_object_starting_left_of_line_is_clipped() {
        let mut room = room();
        room.push_object(PlacedObject::new(-2, 0, sprite(vec![1, 2, 3, 4], 4, 1)));

        let mut buf = [0; 3];
        compose_horizontal(&room, 0, 0, &mut buf);
        assert_eq!(buf, [3, 4, 102]);
    }

    #[test]
    fn test_object_extending_past_line_end_is_clipped() {
        let mut room = room();
        room.push_object(PlacedObject::new(2, 0, sprite(vec![7; 10], 10, 1)));

        let mut buf = [0; 4];
        compose_horizontal(&room, 0, 0, &mut buf);
        assert_eq!(buf, [100, 101, 7, 7]);
    }

    #[test]
    fn test_later_object_wins() {
        let mut room = room();
        room.push_object(PlacedObject::new(0, 0, sprite(vec![5, 5, 5], 3, 1)));
        room.push_object(PlacedObject::new(1, 0, sprite(vec![9, TRANSPARENT], 2, 1)));

        let mut buf = [0; 4];
        compose_horizontal(&room, 0, 0, &mut buf);
        assert_eq!(buf, [5, 9, 5, 103]);
    }

    #[test]
    fn test_objects_outside_room_photo_still_draw() {
        // Objects live in room coordinates; they draw over the zero fill too.
        let mut room = room();
        room.push_object(PlacedObject::new(10, 10, sprite(vec![8], 1, 1)));

        let mut buf = [0xAA; 3];
        compose_horizontal(&room, 9, 10, &mut buf);
        assert_eq!(buf, [0, 8, 0]);
    }

    #[test]
    fn test_compose_view_stacks_rows() {
        let room = room();
        let view = compose_view(&room, 1, 1, 2, 3);
        assert_eq!(view, vec![105, 106, 109, 110, 0, 0]);
    }

    #[test]
    fn test_view_near_coordinate_limit_is_zero() {
        let room = Room::new(IndexedPhoto::new(vec![70; 4], 2, 2).unwrap());
        assert_eq!(compose_view(&room, 0, i32::MAX - 1, 2, 4), vec![0u8; 8]);
        assert_eq!(compose_view(&room, i32::MAX - 1, 0, 4, 2), vec![0u8; 8]);
    }

    #[test]
    fn test_zero_length_line() {
        let room = room();
        let mut buf: [u8; 0] = [];
        compose_horizontal(&room, 0, 0, &mut buf);
        assert!(compose_view(&room, 0, 0, 0, 5).is_empty());
    }
}
