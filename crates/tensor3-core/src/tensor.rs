use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::TensorError;
use crate::scalar::Scalar;
use crate::shape::{Position, Shape};
use crate::Result;

/// A dense `depth × height × width` tensor backed by one row-major buffer.
///
/// The buffer length always equals `shape.volume()`. Element `(z, y, x)`
/// lives at flat index `z * height * width + y * width + x`.
///
/// # Examples
///
/// ```
/// use tensor3_core::{Position, Shape, Tensor3};
///
/// let mut t = Tensor3::zeros(Shape::new(2, 2, 2));
/// t.set(Position::new(1, 0, 1), 5.0).unwrap();
/// assert_eq!(t.get_zyx(1, 0, 1).unwrap(), 5.0);
/// assert_eq!(t.as_slice()[5], 5.0);
///
/// // Out-of-range coordinates are rejected, never clamped
/// assert!(t.get_zyx(0, 0, 2).is_err());
/// ```
#[derive(Clone, PartialEq)]
pub struct Tensor3 {
    shape: Shape,
    values: Vec<Scalar>,
}

impl Tensor3 {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a tensor from row-major data.
    ///
    /// Fails when `values.len() != shape.volume()`, or when the volume does
    /// not fit in `usize`.
    pub fn from_vec(shape: Shape, values: Vec<Scalar>) -> Result<Self> {
        let expected = shape
            .checked_volume()
            .ok_or(TensorError::VolumeOverflow { shape })?;
        if values.len() != expected {
            return Err(TensorError::LengthMismatch {
                shape,
                expected,
                got: values.len(),
            });
        }
        Ok(Self { shape, values })
    }

    /// Create a tensor by copying row-major data from a slice.
    pub fn from_slice(shape: Shape, values: &[Scalar]) -> Result<Self> {
        Self::from_vec(shape, values.to_vec())
    }

    /// Create a zero-filled tensor.
    pub fn zeros(shape: Shape) -> Self {
        Self::full(shape, 0.0)
    }

    /// Create a tensor of ones.
    pub fn ones(shape: Shape) -> Self {
        Self::full(shape, 1.0)
    }

    /// Create a tensor with every element set to `value`.
    ///
    /// # Panics
    /// Panics if the shape's volume overflows `usize`.
    pub fn full(shape: Shape, value: Scalar) -> Self {
        Self {
            shape,
            values: vec![value; shape.volume()],
        }
    }

    /// Create a tensor by evaluating `f` at every position in row-major order.
    pub fn from_fn(shape: Shape, mut f: impl FnMut(Position) -> Scalar) -> Self {
        let mut values = Vec::with_capacity(shape.volume());
        values.extend(positions(shape).map(&mut f));
        Self { shape, values }
    }

    /// Create a tensor with values uniformly distributed in `[low, high)`.
    ///
    /// # Panics
    /// Panics if `low >= high` and the shape is not empty, or if the
    /// shape's volume overflows `usize`.
    pub fn random_uniform(shape: Shape, low: Scalar, high: Scalar) -> Self {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        let values = (0..shape.volume()).map(|_| rng.gen_range(low..high)).collect();
        Self { shape, values }
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// Shape of the tensor.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Total number of elements.
    pub fn numel(&self) -> usize {
        self.values.len()
    }

    /// Whether the tensor holds no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // =========================================================================
    // Data access
    // =========================================================================

    /// Element at `pos`.
    pub fn get(&self, pos: Position) -> Result<Scalar> {
        let offset = self.offset(pos)?;
        Ok(self.values[offset])
    }

    /// Element at `(z, y, x)`.
    pub fn get_zyx(&self, z: usize, y: usize, x: usize) -> Result<Scalar> {
        self.get(Position::new(z, y, x))
    }

    /// Overwrite the element at `pos`.
    pub fn set(&mut self, pos: Position, value: Scalar) -> Result<()> {
        let offset = self.offset(pos)?;
        self.values[offset] = value;
        Ok(())
    }

    /// Overwrite the element at `(z, y, x)`.
    pub fn set_zyx(&mut self, z: usize, y: usize, x: usize, value: Scalar) -> Result<()> {
        self.set(Position::new(z, y, x), value)
    }

    /// Backing buffer in row-major order.
    pub fn as_slice(&self) -> &[Scalar] {
        &self.values
    }

    /// Consume the tensor and return its buffer.
    pub fn into_vec(self) -> Vec<Scalar> {
        self.values
    }

    /// Iterate over the elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.values.iter()
    }

    /// Iterate over every valid position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        positions(self.shape)
    }

    fn offset(&self, pos: Position) -> Result<usize> {
        self.shape.offset_of(pos).ok_or(TensorError::OutOfBounds {
            position: pos,
            shape: self.shape,
        })
    }

    /// Split into shape and buffer (used by ops that rebuild tensors).
    pub(crate) fn into_parts(self) -> (Shape, Vec<Scalar>) {
        (self.shape, self.values)
    }

    /// Build from parts whose lengths are already known to agree.
    pub(crate) fn from_parts(shape: Shape, values: Vec<Scalar>) -> Self {
        debug_assert_eq!(shape.volume(), values.len());
        Self { shape, values }
    }
}

/// Row-major walk over all positions of `shape`: z outer, y middle, x inner.
fn positions(shape: Shape) -> impl Iterator<Item = Position> {
    let (h, w) = (shape.height(), shape.width());
    (0..shape.depth()).flat_map(move |z| {
        (0..h).flat_map(move |y| (0..w).map(move |x| Position::new(z, y, x)))
    })
}

impl Index<Position> for Tensor3 {
    type Output = Scalar;

    fn index(&self, pos: Position) -> &Scalar {
        match self.offset(pos) {
            Ok(offset) => &self.values[offset],
            Err(e) => panic!("{e}"),
        }
    }
}

impl IndexMut<Position> for Tensor3 {
    fn index_mut(&mut self, pos: Position) -> &mut Scalar {
        match self.offset(pos) {
            Ok(offset) => &mut self.values[offset],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<'a> IntoIterator for &'a Tensor3 {
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl fmt::Debug for Tensor3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.numel() <= 20 {
            write!(f, "Tensor3(shape={}, values={:?})", self.shape, self.values)
        } else {
            write!(
                f,
                "Tensor3(shape={}, values=[{:?}, {:?}, ..., {:?}])",
                self.shape,
                self.values[0],
                self.values[1],
                self.values[self.numel() - 1],
            )
        }
    }
}

/// One bracketed group per depth slice, one bracketed row per `y`:
///
/// ```text
/// [[[1, 2],
///   [3, 4]],
///  [[5, 6],
///   [7, 8]]]
/// ```
impl fmt::Display for Tensor3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (d, h, w) = (self.shape.depth(), self.shape.height(), self.shape.width());
        write!(f, "[")?;
        for z in 0..d {
            if z > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "[")?;
            for y in 0..h {
                if y > 0 {
                    write!(f, ",\n  ")?;
                }
                let row = &self.values[(z * h + y) * w..(z * h + y + 1) * w];
                write!(f, "[")?;
                for (i, v) in row.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
