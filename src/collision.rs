//! AABB Collision Detection
//!
//! Everything that can occupy a board tile exposes a "tile square" through the
//! [`TileBounded`] trait: a rectangle derived from the entity's sprite position
//! but narrower than the sprite's visual bounds, so collisions feel fair. The
//! overlap test itself is a pure axis-aligned rectangle intersection.
//!
//! The per-kind square offsets are deliberately asymmetric (enemies and items
//! use a wide 100x75 square, the player a slim 49x67 footprint) and must stay
//! that way: gameplay feel depends on the exact constants.

use sdl2::rect::Rect;

/// Trait for entities that occupy a tile square on the board.
///
/// The square is recomputed from the entity's current position on every
/// check, never stored.
pub trait TileBounded {
    /// The rectangle used for overlap tests against other entities
    fn tile_square(&self) -> Rect;
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// Strict inequalities on every edge: rectangles that only touch along a
/// boundary do not overlap. The test is symmetric in its arguments.
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x() < b.x() + b.width() as i32 && a.x() + a.width() as i32 > b.x();
    let y_overlap = a.y() < b.y() + b.height() as i32 && a.y() + a.height() as i32 > b.y();

    x_overlap && y_overlap
}

/// Returns indices of every entity in `entities` whose tile square overlaps
/// `square`.
pub fn overlapping_indices<T: TileBounded>(square: &Rect, entities: &[T]) -> Vec<usize> {
    entities
        .iter()
        .enumerate()
        .filter(|(_, other)| aabb_intersect(square, &other.tile_square()))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_intersect_overlapping() {
        let rect_a = Rect::new(0, 0, 100, 75);
        let rect_b = Rect::new(50, 50, 100, 75);

        assert!(aabb_intersect(&rect_a, &rect_b));
        assert!(aabb_intersect(&rect_b, &rect_a)); // Symmetric
    }

    #[test]
    fn test_aabb_intersect_touching_edges() {
        // Rectangles sharing only a boundary edge do NOT intersect
        let rect_a = Rect::new(0, 0, 100, 75);
        let right = Rect::new(100, 0, 100, 75);
        let below = Rect::new(0, 75, 100, 75);

        assert!(!aabb_intersect(&rect_a, &right));
        assert!(!aabb_intersect(&rect_a, &below));
    }

    #[test]
    fn test_aabb_intersect_separated() {
        let rect_a = Rect::new(0, 0, 100, 75);
        let rect_b = Rect::new(300, 300, 100, 75);

        assert!(!aabb_intersect(&rect_a, &rect_b));
    }

    #[test]
    fn test_aabb_intersect_contained() {
        let large = Rect::new(0, 0, 200, 200);
        let small = Rect::new(50, 50, 49, 67);

        assert!(aabb_intersect(&large, &small));
        assert!(aabb_intersect(&small, &large));
    }

    #[test]
    fn test_overlapping_indices() {
        struct Square(Rect);
        impl TileBounded for Square {
            fn tile_square(&self) -> Rect {
                self.0
            }
        }

        let squares = vec![
            Square(Rect::new(0, 0, 100, 75)),
            Square(Rect::new(500, 500, 100, 75)),
            Square(Rect::new(40, 40, 100, 75)),
        ];
        let probe = Rect::new(20, 20, 49, 67);

        assert_eq!(overlapping_indices(&probe, &squares), vec![0, 2]);
    }
}
