use core::fmt::Debug;
use num_traits::Float;

use crate::error::{PoseError, PoseResult};

/// Trait for floating-point scalars used by every type in the crate.
///
/// Blanket-implemented for all types satisfying the bounds, which in
/// practice means `f32` and `f64`.
pub trait FloatScalar: Float + Debug + Default + Send + Sync + 'static {}

impl<T: Float + Debug + Default + Send + Sync + 'static> FloatScalar for T {}

/// A field input that can be coerced to a floating-point scalar.
///
/// Floats and integers are cast; strings are trimmed and parsed as `f64`.
/// Anything that does not denote a number yields [`PoseError::Conversion`].
///
/// ```
/// use poser::FieldValue;
///
/// assert_eq!(3_i32.to_field::<f64>().unwrap(), 3.0);
/// assert_eq!(" 2.5 ".to_field::<f64>().unwrap(), 2.5);
/// assert!("north".to_field::<f64>().is_err());
/// ```
pub trait FieldValue {
    fn to_field<T: FloatScalar>(&self) -> PoseResult<T>;
}

macro_rules! impl_field_value_numeric {
    ($($t:ty),*) => {
        $(
            impl FieldValue for $t {
                #[inline]
                fn to_field<T: FloatScalar>(&self) -> PoseResult<T> {
                    T::from(*self).ok_or_else(|| reject(*self))
                }
            }
        )*
    };
}

impl_field_value_numeric!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl FieldValue for str {
    fn to_field<T: FloatScalar>(&self) -> PoseResult<T> {
        self.trim()
            .parse::<f64>()
            .ok()
            .and_then(|v| T::from(v))
            .ok_or_else(|| reject(self))
    }
}

impl FieldValue for alloc::string::String {
    #[inline]
    fn to_field<T: FloatScalar>(&self) -> PoseResult<T> {
        self.as_str().to_field()
    }
}

impl<V: FieldValue + ?Sized> FieldValue for &V {
    #[inline]
    fn to_field<T: FloatScalar>(&self) -> PoseResult<T> {
        (**self).to_field()
    }
}

fn reject(input: impl core::fmt::Display) -> PoseError {
    let err = PoseError::conversion(input);
    log::debug!("rejected field input: {}", err);
    err
}

/// Coerce a fixed-size array of field inputs, all or nothing.
pub(crate) fn coerce_array<T: FloatScalar, V: FieldValue, const N: usize>(
    values: &[V; N],
) -> PoseResult<[T; N]> {
    let mut out = [T::zero(); N];
    for (slot, value) in out.iter_mut().zip(values) {
        *slot = value.to_field()?;
    }
    Ok(out)
}

/// Coerce a nested sequence into an `R`×`C` block, all or nothing.
///
/// Every row must hold exactly `C` entries. Rows beyond `R` are rejected
/// unless `allow_extra_rows` is set (the homogeneous pose matrix carries a
/// fourth row that is not stored).
pub(crate) fn coerce_nested<T, I, const R: usize, const C: usize>(
    rows: I,
    allow_extra_rows: bool,
) -> PoseResult<[[T; C]; R]>
where
    T: FloatScalar,
    I: IntoIterator,
    I::Item: IntoIterator,
    <I::Item as IntoIterator>::Item: FieldValue,
{
    let mut out = [[T::zero(); C]; R];
    let mut row_count = 0;
    for row in rows {
        if row_count >= R {
            row_count += 1;
            continue;
        }
        let mut len = 0;
        for value in row {
            if len < C {
                out[row_count][len] = value.to_field()?;
            }
            len += 1;
        }
        if len != C {
            return Err(PoseError::RowLength {
                row: row_count,
                expected: C,
                found: len,
            });
        }
        row_count += 1;
    }
    if row_count < R || (row_count > R && !allow_extra_rows) {
        return Err(PoseError::RowCount {
            expected: R,
            found: row_count,
        });
    }
    Ok(out)
}

/// Capability shared by the 3D value types a transform can act on.
///
/// Transforms read `xyz`, compute new coordinates, and either write them back
/// (`set_xyz`) or build a fresh value of the same kind (`with_xyz`), so a
/// [`Point`](crate::Point) stays a `Point` and a
/// [`Translation`](crate::Translation) stays a `Translation`.
pub trait Coordinates<T>: Clone {
    fn xyz(&self) -> [T; 3];

    fn set_xyz(&mut self, xyz: [T; 3]);

    fn with_xyz(&self, xyz: [T; 3]) -> Self {
        let mut out = self.clone();
        out.set_xyz(xyz);
        out
    }
}

/// A rigid operation applied to 3D coordinates.
///
/// Implementors provide [`apply`](Transform::apply); the in-place and
/// copying point operations, single and batch, come for free.
///
/// ```
/// use poser::{Point, Transform, Translation};
///
/// let offset = Translation::new(1.0, 0.0, 0.0);
///
/// let mut p = Point::new(1.0, 2.0, 3.0);
/// offset.transform_point(&mut p);
/// assert_eq!(p.as_array(), [2.0, 2.0, 3.0]);
///
/// let moved: Vec<Point<f64>> = offset.transformed_points(&[p, p]);
/// assert_eq!(moved[1].x, 3.0);
/// ```
pub trait Transform<T: FloatScalar> {
    /// Map one coordinate triple.
    fn apply(&self, xyz: [T; 3]) -> [T; 3];

    /// Transform `point` in place.
    fn transform_point<P: Coordinates<T>>(&self, point: &mut P) {
        let xyz = self.apply(point.xyz());
        point.set_xyz(xyz);
    }

    /// Return a transformed copy of `point`, leaving it untouched.
    fn transformed_point<P: Coordinates<T>>(&self, point: &P) -> P {
        point.with_xyz(self.apply(point.xyz()))
    }

    /// Transform every element of a collection in place.
    fn transform_points<'a, P, I>(&self, points: I)
    where
        P: Coordinates<T> + 'a,
        I: IntoIterator<Item = &'a mut P>,
    {
        for point in points {
            self.transform_point(point);
        }
    }

    /// Collect transformed copies of every element into a new collection.
    ///
    /// The output collection type is chosen by the caller, so ordered and
    /// unordered containers keep their kind.
    fn transformed_points<'a, P, I, C>(&self, points: I) -> C
    where
        P: Coordinates<T> + 'a,
        I: IntoIterator<Item = &'a P>,
        C: FromIterator<P>,
    {
        points
            .into_iter()
            .map(|point| self.transformed_point(point))
            .collect()
    }
}
