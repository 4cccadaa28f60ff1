//! Homogeneous transform in row-vector convention.

use std::ops::Mul;

use nalgebra::{Matrix3, Matrix4, Point3, Rotation3, Unit, UnitQuaternion, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Axis;

/// Basis rows shorter than this are treated as zero scale.
const SCALE_EPSILON: f64 = 1e-12;

/// Normalised basis rows spanning less volume than this are coplanar.
const BASIS_EPSILON: f64 = 1e-9;

/// A 4x4 homogeneous transform in **row-vector convention**.
///
/// Points are row vectors multiplied on the left: `p' = [x y z 1] * M`.
/// Rows 0, 1 and 2 hold the X, Y and Z basis vectors (rotation times scale)
/// and row 3 holds the translation. This is the layout used by most DCC
/// hosts; callers working with column vectors must transpose.
///
/// Composition reads left to right: `a.then(&b)` (or `a * b`) applies `a`
/// first and `b` second.
///
/// # Example
///
/// ```
/// use rig_roll::Transform;
/// use nalgebra::{Point3, UnitQuaternion, Vector3};
/// use std::f64::consts::FRAC_PI_2;
///
/// let spin = Transform::from_rotation(&UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2));
/// let lift = Transform::from_translation(Vector3::new(0.0, 0.0, 5.0));
///
/// let p = spin.then(&lift).transform_point(&Point3::new(1.0, 0.0, 0.0));
/// assert!((p - Point3::new(0.0, 1.0, 5.0)).norm() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transform {
    matrix: Matrix4<f64>,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// The identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Wrap a matrix that is already in row-vector layout.
    #[must_use]
    pub const fn from_matrix(matrix: Matrix4<f64>) -> Self {
        Self { matrix }
    }

    /// Build from four rows, translation in the last one.
    #[must_use]
    pub fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        Self {
            matrix: Matrix4::from_fn(|r, c| rows[r][c]),
        }
    }

    /// Translation only.
    #[must_use]
    pub fn from_translation(translation: Vector3<f64>) -> Self {
        let mut matrix = Matrix4::identity();
        matrix[(3, 0)] = translation.x;
        matrix[(3, 1)] = translation.y;
        matrix[(3, 2)] = translation.z;
        Self { matrix }
    }

    /// Rotation only.
    #[must_use]
    pub fn from_rotation(rotation: &UnitQuaternion<f64>) -> Self {
        Self {
            matrix: rotation.to_homogeneous().transpose(),
        }
    }

    /// Rotation followed by translation.
    #[must_use]
    pub fn from_rotation_translation(
        rotation: &UnitQuaternion<f64>,
        translation: Vector3<f64>,
    ) -> Self {
        Self::from_rotation(rotation).then(&Self::from_translation(translation))
    }

    /// Per-axis scale only.
    #[must_use]
    pub fn from_scale(scale: Vector3<f64>) -> Self {
        Self {
            matrix: Matrix4::new_nonuniform_scaling(&scale),
        }
    }

    /// Right-handed rotation of `angle` radians about `axis`.
    #[must_use]
    pub fn from_axis_angle(axis: &Unit<Vector3<f64>>, angle: f64) -> Self {
        Self {
            matrix: Rotation3::from_axis_angle(axis, angle)
                .to_homogeneous()
                .transpose(),
        }
    }

    /// The underlying row-vector matrix.
    #[inline]
    #[must_use]
    pub const fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }

    /// The matrix as four rows.
    #[must_use]
    pub fn to_rows(&self) -> [[f64; 4]; 4] {
        std::array::from_fn(|r| std::array::from_fn(|c| self.matrix[(r, c)]))
    }

    /// Basis vector (rotation times scale) for `axis`.
    #[inline]
    #[must_use]
    pub fn basis(&self, axis: Axis) -> Vector3<f64> {
        let r = axis.index();
        Vector3::new(self.matrix[(r, 0)], self.matrix[(r, 1)], self.matrix[(r, 2)])
    }

    /// Translation row.
    #[inline]
    #[must_use]
    pub fn translation(&self) -> Vector3<f64> {
        Vector3::new(self.matrix[(3, 0)], self.matrix[(3, 1)], self.matrix[(3, 2)])
    }

    /// Length of each basis row.
    #[must_use]
    pub fn scale(&self) -> Vector3<f64> {
        Vector3::new(
            self.basis(Axis::X).norm(),
            self.basis(Axis::Y).norm(),
            self.basis(Axis::Z).norm(),
        )
    }

    /// Scale-free rotation of this transform.
    ///
    /// Basis rows are normalised and the resulting quaternion is
    /// renormalised, so small shear is tolerated. A single flattened row is
    /// rebuilt as the cross product of the other two. Returns `None` when two
    /// or more rows have zero length or the rows are coplanar.
    #[must_use]
    pub fn rotation(&self) -> Option<UnitQuaternion<f64>> {
        let rows = Axis::ALL.map(|axis| self.basis(axis).try_normalize(SCALE_EPSILON));
        let columns = match rows {
            [Some(x), Some(y), Some(z)] => [x, y, z],
            [None, Some(y), Some(z)] => [y.cross(&z).try_normalize(SCALE_EPSILON)?, y, z],
            [Some(x), None, Some(z)] => [x, z.cross(&x).try_normalize(SCALE_EPSILON)?, z],
            [Some(x), Some(y), None] => [x, y, x.cross(&y).try_normalize(SCALE_EPSILON)?],
            _ => return None,
        };
        // Column-vector rotation is the transpose of the row-vector basis
        let matrix = Matrix3::from_columns(&columns);
        if matrix.determinant().abs() <= BASIS_EPSILON {
            return None;
        }
        let basis = Rotation3::from_matrix_unchecked(matrix);
        let quaternion = UnitQuaternion::from_rotation_matrix(&basis);
        Some(UnitQuaternion::new_normalize(quaternion.into_inner()))
    }

    /// Apply `self`, then `next`.
    #[must_use]
    pub fn then(&self, next: &Self) -> Self {
        Self {
            matrix: self.matrix * next.matrix,
        }
    }

    /// Inverse transform, or `None` if the matrix is singular.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }

    /// Transform a point (affine: the homogeneous column is ignored).
    #[must_use]
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        let row = point.to_homogeneous().transpose() * self.matrix;
        Point3::new(row[0], row[1], row[2])
    }

    /// Transform a direction; translation does not apply.
    #[must_use]
    pub fn transform_vector(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        let row = vector.to_homogeneous().transpose() * self.matrix;
        Vector3::new(row[0], row[1], row[2])
    }

    /// Move every point of a buffer by this transform.
    #[must_use]
    pub fn transform_points(&self, points: &[Point3<f64>]) -> Vec<Point3<f64>> {
        points.iter().map(|p| self.transform_point(p)).collect()
    }

    /// `true` if every entry is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.matrix.iter().all(|v| v.is_finite())
    }

    /// Approximate equality, entry by entry.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.matrix
            .iter()
            .zip(other.matrix.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Mul for Transform {
    type Output = Self;

    /// `a * b` applies `a` first, matching row-vector matrix products.
    fn mul(self, rhs: Self) -> Self {
        self.then(&rhs)
    }
}

impl From<Matrix4<f64>> for Transform {
    fn from(matrix: Matrix4<f64>) -> Self {
        Self::from_matrix(matrix)
    }
}
