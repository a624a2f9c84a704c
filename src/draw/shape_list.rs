//! Ordered shape storage with undo-by-truncation.

use super::shape::Shape;
use crate::util::Point;
use log::debug;

/// Container for all shapes on the canvas.
///
/// Insertion order is paint order: the first shape is the bottom layer, the last
/// one is drawn on top and wins hit tests. Undo removes the most recently added
/// shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeList {
    shapes: Vec<Shape>,
}

impl ShapeList {
    /// Creates a new empty list.
    pub const fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Adds a new shape on top of existing shapes and returns its index.
    pub fn push(&mut self, shape: Shape) -> usize {
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    /// Removes and returns the most recently added shape, if any.
    ///
    /// Undo on an empty list is a silent no-op.
    pub fn undo(&mut self) -> Option<Shape> {
        let removed = self.shapes.pop();
        if removed.is_none() {
            debug!("Undo requested on empty canvas");
        }
        removed
    }

    /// Redo is not supported; undone shapes are not recorded.
    ///
    /// Always returns `false`.
    pub fn redo(&mut self) -> bool {
        debug!("Redo requested; undone shapes are not kept");
        false
    }

    /// Removes all shapes.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Returns the index of the topmost shape containing `p`.
    pub fn hit_test(&self, p: Point) -> Option<usize> {
        self.shapes
            .iter()
            .enumerate()
            .rev()
            .find(|(_, shape)| shape.contains_point(p))
            .map(|(index, _)| index)
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.shapes.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterates shapes in paint order (bottom first).
    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    pub fn as_slice(&self) -> &[Shape] {
        &self.shapes
    }
}

impl<'a> IntoIterator for &'a ShapeList {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Color, shape::ShapeKind};

    fn line(x: i32) -> Shape {
        Shape::new(
            ShapeKind::Line,
            Point::new(x, 0),
            Point::new(x + 1, 1),
            Color::new(1.0, 0.0, 0.0, 1.0),
            2,
        )
    }

    fn rect(x1: i32, y1: i32, x2: i32, y2: i32) -> Shape {
        Shape::new(
            ShapeKind::Rectangle,
            Point::new(x1, y1),
            Point::new(x2, y2),
            Color::new(0.0, 0.0, 1.0, 1.0),
            2,
        )
    }

    #[test]
    fn undo_inverts_each_push() {
        let mut list = ShapeList::new();
        for x in 0..5 {
            list.push(line(x));
        }

        for expected_len in (0..5).rev() {
            assert!(list.undo().is_some());
            assert_eq!(list.len(), expected_len);
        }
        assert!(list.is_empty());

        // One extra undo changes nothing
        assert!(list.undo().is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn undo_removes_last_pushed() {
        let mut list = ShapeList::new();
        list.push(line(1));
        list.push(line(2));

        let removed = list.undo().unwrap();
        assert_eq!(removed, line(2));
        assert_eq!(list.as_slice(), &[line(1)]);
    }

    #[test]
    fn redo_is_a_no_op() {
        let mut list = ShapeList::new();
        list.push(line(1));
        list.undo();

        assert!(!list.redo());
        assert!(list.is_empty());
    }

    #[test]
    fn hit_test_prefers_topmost() {
        let mut list = ShapeList::new();
        let a = list.push(rect(0, 0, 50, 50));
        let b = list.push(rect(25, 25, 75, 75));

        assert_eq!(list.hit_test(Point::new(30, 30)), Some(b));
        assert_eq!(list.hit_test(Point::new(10, 10)), Some(a));
        assert_eq!(list.hit_test(Point::new(100, 100)), None);
    }

    #[test]
    fn clear_empties_list() {
        let mut list = ShapeList::new();
        list.push(line(1));
        list.push(line(2));
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);
    }
}
