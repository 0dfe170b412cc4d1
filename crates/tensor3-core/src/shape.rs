use std::fmt;

/// Extents of a 3D tensor: `(depth, height, width)`.
///
/// Any extent may be zero, in which case the shape describes an empty tensor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    depth: usize,
    height: usize,
    width: usize,
}

impl Shape {
    /// Create a new shape from its three extents.
    pub const fn new(depth: usize, height: usize, width: usize) -> Self {
        Self {
            depth,
            height,
            width,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Extents as `[depth, height, width]`.
    pub fn dims(&self) -> [usize; 3] {
        [self.depth, self.height, self.width]
    }

    /// Total number of elements.
    ///
    /// # Panics
    /// Panics if the extent product does not fit in `usize`; see
    /// [`Shape::checked_volume`].
    pub fn volume(&self) -> usize {
        self.checked_volume()
            .unwrap_or_else(|| panic!("volume of shape {self} overflows usize"))
    }

    /// Total number of elements, or `None` if it does not fit in `usize`.
    pub fn checked_volume(&self) -> Option<usize> {
        self.depth
            .checked_mul(self.height)?
            .checked_mul(self.width)
    }

    /// Whether the shape holds no elements at all.
    pub fn is_empty(&self) -> bool {
        self.depth == 0 || self.height == 0 || self.width == 0
    }

    /// Row-major strides (in elements) for `[z, y, x]`.
    pub fn strides(&self) -> [usize; 3] {
        [self.height * self.width, self.width, 1]
    }

    /// Whether every coordinate of `pos` lies inside this shape.
    pub fn contains(&self, pos: Position) -> bool {
        pos.z < self.depth && pos.y < self.height && pos.x < self.width
    }

    /// Flat buffer offset of `pos`, or `None` if it lies outside the shape
    /// or past `usize::MAX`.
    pub fn offset_of(&self, pos: Position) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        pos.z
            .checked_mul(self.height)?
            .checked_add(pos.y)?
            .checked_mul(self.width)?
            .checked_add(pos.x)
    }

    /// Inverse of [`Shape::offset_of`].
    pub fn position_of(&self, offset: usize) -> Option<Position> {
        if self.is_empty() || self.checked_volume().is_some_and(|v| offset >= v) {
            return None;
        }
        let (z, rem) = match self.height.checked_mul(self.width) {
            Some(plane) => (offset / plane, offset % plane),
            None => (0, offset),
        };
        Some(Position::new(z, rem / self.width, rem % self.width))
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape({}, {}, {})", self.depth, self.height, self.width)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.depth, self.height, self.width)
    }
}

impl From<[usize; 3]> for Shape {
    fn from([depth, height, width]: [usize; 3]) -> Self {
        Shape::new(depth, height, width)
    }
}

impl From<(usize, usize, usize)> for Shape {
    fn from((depth, height, width): (usize, usize, usize)) -> Self {
        Shape::new(depth, height, width)
    }
}

/// Coordinates `(z, y, x)` of one element.
///
/// A position carries no bounds of its own; it is validated against a
/// [`Shape`] by the tensor that resolves it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    z: usize,
    y: usize,
    x: usize,
}

impl Position {
    pub const fn new(z: usize, y: usize, x: usize) -> Self {
        Self { z, y, x }
    }

    /// `(0, 0, 0)`.
    pub const fn origin() -> Self {
        Self::new(0, 0, 0)
    }

    pub fn z(&self) -> usize {
        self.z
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn x(&self) -> usize {
        self.x
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}, {}, {})", self.z, self.y, self.x)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.z, self.y, self.x)
    }
}

impl From<[usize; 3]> for Position {
    fn from([z, y, x]: [usize; 3]) -> Self {
        Position::new(z, y, x)
    }
}

impl From<(usize, usize, usize)> for Position {
    fn from((z, y, x): (usize, usize, usize)) -> Self {
        Position::new(z, y, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_shape() {
        let s = Shape::new(2, 3, 4);
        assert_eq!(s.depth(), 2);
        assert_eq!(s.height(), 3);
        assert_eq!(s.width(), 4);
        assert_eq!(s.volume(), 24);
        assert_eq!(s.dims(), [2, 3, 4]);
        assert!(!s.is_empty());
    }

    #[test]
    fn test_empty_shape() {
        assert!(Shape::new(0, 3, 4).is_empty());
        assert!(Shape::new(2, 0, 4).is_empty());
        assert!(Shape::default().is_empty());
        assert_eq!(Shape::new(2, 3, 0).volume(), 0);
    }

    #[test]
    fn test_checked_volume() {
        assert_eq!(Shape::new(2, 3, 4).checked_volume(), Some(24));
        assert_eq!(Shape::new(0, usize::MAX, 2).checked_volume(), Some(0));
        assert_eq!(Shape::new(usize::MAX, 2, 1).checked_volume(), None);
        assert_eq!(Shape::new(usize::MAX / 2 + 1, 2, 1).checked_volume(), None);

        let huge = Shape::new(usize::MAX, 2, 1);
        assert!(!huge.is_empty());
        assert_eq!(huge.position_of(3), Some(Position::new(1, 1, 0)));
    }

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn test_volume_overflow_panics() {
        let _ = Shape::new(usize::MAX, 2, 1).volume();
    }

    #[test]
    fn test_strides() {
        assert_eq!(Shape::new(2, 3, 4).strides(), [12, 4, 1]);
    }

    #[test]
    fn test_offset_row_major() {
        let s = Shape::new(2, 3, 4);
        assert_eq!(s.offset_of(Position::new(0, 0, 0)), Some(0));
        assert_eq!(s.offset_of(Position::new(0, 0, 1)), Some(1));
        assert_eq!(s.offset_of(Position::new(0, 1, 0)), Some(4));
        assert_eq!(s.offset_of(Position::new(1, 0, 0)), Some(12));
        assert_eq!(s.offset_of(Position::new(1, 2, 3)), Some(12 + 8 + 3));
    }

    #[test]
    fn test_offset_out_of_range() {
        let s = Shape::new(2, 3, 4);
        assert_eq!(s.offset_of(Position::new(2, 0, 0)), None);
        assert_eq!(s.offset_of(Position::new(0, 3, 0)), None);
        assert_eq!(s.offset_of(Position::new(0, 0, 4)), None);
        // (0, 0, 4) would alias (0, 1, 0) without the check
        assert!(!s.contains(Position::new(0, 0, 4)));
    }

    #[test]
    fn test_position_of_inverts_offset() {
        let s = Shape::new(2, 3, 4);
        for offset in 0..s.volume() {
            let pos = s.position_of(offset).unwrap();
            assert_eq!(s.offset_of(pos), Some(offset));
        }
        assert_eq!(s.position_of(24), None);
        assert_eq!(Shape::new(0, 0, 0).position_of(0), None);
    }

    #[test]
    fn test_from_array_and_tuple() {
        let s: Shape = [1, 2, 3].into();
        assert_eq!(s, Shape::new(1, 2, 3));
        let s: Shape = (1, 2, 3).into();
        assert_eq!(s, Shape::new(1, 2, 3));

        let p: Position = (3, 2, 1).into();
        assert_eq!((p.z(), p.y(), p.x()), (3, 2, 1));
        assert_eq!(Position::origin(), Position::new(0, 0, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Shape::new(1, 2, 3)), "(1, 2, 3)");
        assert_eq!(format!("{:?}", Shape::new(1, 2, 3)), "Shape(1, 2, 3)");
        assert_eq!(format!("{}", Position::new(0, 1, 2)), "(0, 1, 2)");
    }
}
