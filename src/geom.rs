// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use float_cmp::ApproxEqUlps;

/// A trait for fuzzy/approximate equality comparisons of float numbers.
pub trait FuzzyEq<Rhs: ?Sized = Self> {
    /// Returns `true` if values are approximately equal.
    fn fuzzy_eq(&self, other: &Rhs) -> bool;
}

impl FuzzyEq for f64 {
    #[inline]
    fn fuzzy_eq(&self, other: &f64) -> bool {
        self.approx_eq_ulps(other, 4)
    }
}

/// The current transformation matrix.
///
/// Represents the affine matrix `[[a, c, e], [b, d, f], [0, 0, 1]]`,
/// applied as `x' = a*x + c*y + e`, `y' = b*x + d*y + f`.
#[derive(Clone, Copy, PartialEq, Debug)]
#[allow(missing_docs)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Transform {
    #[inline]
    fn default() -> Self {
        Transform::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }
}

impl Transform {
    /// Constructs a new transform.
    #[inline]
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Transform { a, b, c, d, e, f }
    }

    /// Constructs the identity transform.
    #[inline]
    pub fn identity() -> Self {
        Transform::default()
    }

    /// Constructs a new translation transform.
    #[inline]
    pub fn new_translate(x: f64, y: f64) -> Self {
        Transform::new(1.0, 0.0, 0.0, 1.0, x, y)
    }

    /// Constructs a new scale transform.
    #[inline]
    pub fn new_scale(sx: f64, sy: f64) -> Self {
        Transform::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Constructs a new rotation transform, in degrees, about the origin.
    #[inline]
    pub fn new_rotate(angle_deg: f64) -> Self {
        let v = angle_deg.to_radians();
        let a = v.cos();
        let b = v.sin();
        let c = -b;
        let d = a;
        Transform::new(a, b, c, d, 0.0, 0.0)
    }

    /// Constructs a new rotation transform, in degrees, about `(x, y)`.
    ///
    /// Matches the original `svgtiny_parse_transform_attributes` derivation
    /// of `rotate(angle x y)` directly, rather than composing
    /// translate/rotate/translate, so the resulting coefficients are
    /// bit-for-bit what the corpus of test inputs expects.
    pub fn new_rotate_at(angle_deg: f64, x: f64, y: f64) -> Self {
        let v = angle_deg.to_radians();
        let a = v.cos();
        let b = v.sin();
        let c = -b;
        let d = a;
        let e = -x * a + y * b + x;
        let f = -x * b - y * a + y;
        Transform::new(a, b, c, d, e, f)
    }

    /// Constructs a new `skewX` transform, in degrees.
    #[inline]
    pub fn new_skew_x(angle_deg: f64) -> Self {
        Transform::new(1.0, 0.0, angle_deg.to_radians().tan(), 1.0, 0.0, 0.0)
    }

    /// Constructs a new `skewY` transform, in degrees.
    #[inline]
    pub fn new_skew_y(angle_deg: f64) -> Self {
        Transform::new(1.0, angle_deg.to_radians().tan(), 0.0, 1.0, 0.0, 0.0)
    }

    /// Appends (right-multiplies) `other` onto `self`: `self := self * other`.
    ///
    /// This is the nesting rule a child element's own `transform=` uses:
    /// the child's matrix composes *inside* the inherited CTM.
    #[inline]
    pub fn append(&mut self, other: &Transform) {
        let ts = multiply(self, other);
        *self = ts;
    }

    /// Returns `true` if the transform is the identity, `(1 0 0 1 0 0)`.
    pub fn is_default(&self) -> bool {
        self.a.fuzzy_eq(&1.0)
            && self.b.fuzzy_eq(&0.0)
            && self.c.fuzzy_eq(&0.0)
            && self.d.fuzzy_eq(&1.0)
            && self.e.fuzzy_eq(&0.0)
            && self.f.fuzzy_eq(&0.0)
    }

    /// Applies the transform to a point.
    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let new_x = self.a * x + self.c * y + self.e;
        let new_y = self.b * x + self.d * y + self.f;
        (new_x, new_y)
    }

    /// The isotropic scale approximation used for stroke widths,
    /// `(a + d) / 2`. The rasterizer this feeds is 2D-uniform, so an
    /// anisotropic transform can only be approximated, not captured exactly.
    #[inline]
    pub fn isotropic_scale(&self) -> f64 {
        (self.a + self.d) / 2.0
    }
}

fn multiply(ts: &Transform, other: &Transform) -> Transform {
    Transform {
        a: ts.a * other.a + ts.c * other.b,
        b: ts.b * other.a + ts.d * other.b,
        c: ts.a * other.c + ts.c * other.d,
        d: ts.b * other.c + ts.d * other.d,
        e: ts.a * other.e + ts.c * other.f + ts.e,
        f: ts.b * other.e + ts.d * other.f + ts.f,
    }
}
