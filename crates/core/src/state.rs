use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

/// A fixed-dimension state vector of `N` double-precision components.
///
/// The dimension is a const generic parameter, so every vector taking part in
/// the arithmetic of one problem has the same size by construction: adding a
/// `StateVector<2>` to a `StateVector<3>` is a type error, not a runtime one.
///
/// `StateVector` is a plain value type. It is `Copy`, and every arithmetic
/// operation returns a new vector.
///
/// # Example
///
/// ```
/// use cauchy_core::StateVector;
///
/// let y = StateVector::new([1.0, 2.0]);
/// let k = StateVector::new([0.5, -1.0]);
///
/// assert_eq!(y + 2.0 * k, StateVector::new([2.0, 0.0]));
/// assert_eq!(y.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector<const N: usize>([f64; N]);

impl<const N: usize> StateVector<N> {
    /// Creates a state vector from its components.
    #[must_use]
    pub const fn new(components: [f64; N]) -> Self {
        Self(components)
    }

    /// Returns the dimension `N`.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` for the zero-dimensional vector.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the component at `index`, or `None` if it is out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Returns the components as an array reference.
    #[must_use]
    pub const fn as_array(&self) -> &[f64; N] {
        &self.0
    }

    /// Consumes the vector and returns its components.
    #[must_use]
    pub const fn into_inner(self) -> [f64; N] {
        self.0
    }

    /// Iterates over the components in order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    /// Returns `true` if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|x| x.is_finite())
    }

    /// Returns `self + h * derivative`, the explicit update every
    /// Runge–Kutta stage is built from.
    #[must_use]
    pub fn step(&self, derivative: Self, h: f64) -> Self {
        self.zip_with(derivative, |y, k| y + h * k)
    }

    fn zip_with(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self(std::array::from_fn(|i| f(self.0[i], other.0[i])))
    }

    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self(self.0.map(f))
    }
}

impl<const N: usize> Default for StateVector<N> {
    /// Returns the zero vector.
    fn default() -> Self {
        Self([0.0; N])
    }
}

impl<const N: usize> From<[f64; N]> for StateVector<N> {
    fn from(components: [f64; N]) -> Self {
        Self(components)
    }
}

impl<const N: usize> From<StateVector<N>> for [f64; N] {
    fn from(state: StateVector<N>) -> Self {
        state.0
    }
}

/// Bounds-checked read access.
///
/// # Panics
///
/// Panics if `index >= N`. An out-of-range index is a programming error;
/// use [`StateVector::get`] for a non-panicking read.
impl<const N: usize> Index<usize> for StateVector<N> {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        assert!(index < N, "state index {index} out of range for dimension {N}");
        &self.0[index]
    }
}

/// Bounds-checked write access.
///
/// # Panics
///
/// Panics if `index >= N`.
impl<const N: usize> IndexMut<usize> for StateVector<N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        assert!(index < N, "state index {index} out of range for dimension {N}");
        &mut self.0[index]
    }
}

impl<const N: usize> Add for StateVector<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<const N: usize> Sub for StateVector<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<const N: usize> Neg for StateVector<N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(|x| -x)
    }
}

impl<const N: usize> Mul<f64> for StateVector<N> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.map(|x| x * rhs)
    }
}

impl<const N: usize> Mul<StateVector<N>> for f64 {
    type Output = StateVector<N>;

    fn mul(self, rhs: StateVector<N>) -> Self::Output {
        rhs * self
    }
}
