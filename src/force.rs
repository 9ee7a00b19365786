//! Eades force model
//!
//! Attractive spring force `c1 * log10(d / c2)` along edges and repulsive
//! force `c3 / d^2` between every pair of vertices. Both act along the unit
//! vector between the two points.

use std::f64::consts::TAU;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Floor applied to the distance used in force magnitudes
pub const MIN_DISTANCE: f64 = 1.0;

/// 2D vector used for both positions and forces
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const X: Vec2 = Vec2 { x: 1.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Vector pointing from `self` to `other`
    pub fn to(self, other: Vec2) -> Vec2 {
        other - self
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for (f64, f64) {
    fn from(v: Vec2) -> Self {
        (v.x, v.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

/// Distance and direction from one point to another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Separation {
    /// Distance between the points, never below `MIN_DISTANCE`
    pub distance: f64,
    /// Unit vector from the first point toward the second
    pub unit: Vec2,
}

impl Separation {
    /// Separation from `a` to `b`, or `None` when the points coincide
    pub fn between(a: Vec2, b: Vec2) -> Option<Self> {
        let delta = a.to(b);
        let length = delta.length();
        if length == 0.0 || !length.is_finite() {
            return None;
        }
        Some(Self {
            distance: length.max(MIN_DISTANCE),
            unit: Vec2::new(delta.x / length, delta.y / length),
        })
    }

    /// Like [`Separation::between`], but coincident points get `fallback`
    /// as their direction.
    pub fn resolve(a: Vec2, b: Vec2, fallback: Vec2) -> Self {
        Self::between(a, b).unwrap_or(Self {
            distance: MIN_DISTANCE,
            unit: fallback,
        })
    }
}

/// Unit direction used to split vertices `v` and `w` when they coincide.
///
/// Swapping the arguments yields the opposite direction, so the two
/// vertices are pushed apart instead of moving together.
pub fn fallback_direction(v: usize, w: usize) -> Vec2 {
    let (lo, hi, sign) = if v <= w { (v, w, 1.0) } else { (w, v, -1.0) };
    let angle = ((lo as f64) * 0.618_034 + (hi as f64) * 0.414_214) * TAU;
    Vec2::new(angle.cos(), angle.sin()) * sign
}

/// Spring force on the first point of `sep` toward the second.
///
/// Signed: negative when the distance is below `c2`, which pushes the
/// points apart.
pub fn attractive(c1: f64, c2: f64, sep: &Separation) -> Vec2 {
    let magnitude = c1 * (sep.distance / c2).log10();
    sep.unit * magnitude
}

/// Repulsion on the first point of `sep`, pointing away from the second
pub fn repulsive(c3: f64, sep: &Separation) -> Vec2 {
    let magnitude = c3 / (sep.distance * sep.distance);
    -sep.unit * magnitude
}

/// Attractive force on `a` from a spring to `b`
pub fn attractive_force(c1: f64, c2: f64, a: Vec2, b: Vec2) -> Vec2 {
    attractive(c1, c2, &Separation::resolve(a, b, Vec2::X))
}

/// Repulsive force on `a` from `b`
pub fn repulsive_force(c3: f64, a: Vec2, b: Vec2) -> Vec2 {
    repulsive(c3, &Separation::resolve(a, b, Vec2::X))
}
