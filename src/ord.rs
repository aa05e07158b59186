// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Total-order comparators for the elements of a list array.
//!
//! Every supported element type is ordered with nulls first, and floating
//! point values are ordered with NaN after positive infinity. The comparator
//! for an element type is resolved once through [`ElementKind`] and then
//! applied to arbitrary index pairs of a child array.

use std::cmp::Ordering;
use std::fmt;

use arrow_array::cast::AsArray;
use arrow_array::types::*;
use arrow_array::*;
use arrow_schema::{ArrowError, DataType, TimeUnit};
use half::f16;

/// Compare the values at two indices of the same array.
pub type DynComparator = Box<dyn Fn(usize, usize) -> Ordering + Send + Sync>;

const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// A three-way comparison that is total over every value of `Self`.
///
/// Unlike [`PartialOrd`], floating point implementations never report NaN as
/// unordered: NaN is greater than every other value, and all NaNs are equal.
pub trait TotalOrder: Copy {
    /// Compares `self` with `other`
    fn total_order(self, other: Self) -> Ordering;
}

macro_rules! integer_total_order {
    ($($t:ty),*) => {
        $(
            impl TotalOrder for $t {
                #[inline]
                fn total_order(self, other: Self) -> Ordering {
                    self.cmp(&other)
                }
            }
        )*
    };
}

integer_total_order!(i8, i16, i32, i64);

macro_rules! float_total_order {
    ($($t:ty),*) => {
        $(
            impl TotalOrder for $t {
                #[inline]
                fn total_order(self, other: Self) -> Ordering {
                    match (self.is_nan(), other.is_nan()) {
                        (true, true) => Ordering::Equal,
                        (true, false) => Ordering::Greater,
                        (false, true) => Ordering::Less,
                        // neither side is NaN, so `<` and `>` are total here
                        (false, false) if self < other => Ordering::Less,
                        (false, false) if self > other => Ordering::Greater,
                        (false, false) => Ordering::Equal,
                    }
                }
            }
        )*
    };
}

float_total_order!(f16, f32, f64);

/// The ordering view of a timestamp: whole seconds since the epoch and a
/// nanosecond offset within that second.
///
/// The derived ordering compares `seconds` first and breaks ties on `nanos`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    /// Seconds since the unix epoch
    pub seconds: i64,
    /// Nanoseconds after `seconds`
    pub nanos: i64,
}

impl Timestamp {
    /// Create a new [`Timestamp`]
    pub fn new(seconds: i64, nanos: i64) -> Self {
        Self { seconds, nanos }
    }

    /// Splits an arrow timestamp `value` counted in `unit`s since the epoch
    ///
    /// `nanos` is always in `0..1_000_000_000`, so instants before the epoch
    /// borrow from `seconds`: `-1ns` becomes `(-1, 999_999_999)`.
    pub fn from_value(value: i64, unit: TimeUnit) -> Self {
        let per_second = units_per_second(unit);
        Self {
            seconds: value.div_euclid(per_second),
            nanos: value.rem_euclid(per_second) * (NANOS_PER_SECOND / per_second),
        }
    }

    /// Encodes this timestamp as a count of `unit`s since the epoch, truncating
    /// any precision finer than `unit`
    ///
    /// Returns `None` if the result does not fit in an `i64`.
    pub fn to_value(self, unit: TimeUnit) -> Option<i64> {
        let per_second = units_per_second(unit);
        let sub_second = self.nanos.div_euclid(NANOS_PER_SECOND / per_second);
        self.seconds.checked_mul(per_second)?.checked_add(sub_second)
    }
}

fn units_per_second(unit: TimeUnit) -> i64 {
    match unit {
        TimeUnit::Second => 1,
        TimeUnit::Millisecond => 1_000,
        TimeUnit::Microsecond => 1_000_000,
        TimeUnit::Nanosecond => NANOS_PER_SECOND,
    }
}

/// The element types [`sort_array`](crate::sort_array) can order.
///
/// Resolved once per call from the list's child [`DataType`], then used to
/// build a [`DynComparator`] for each batch of child values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// 8-bit signed integer
    Int8,
    /// 16-bit signed integer
    Int16,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// IEEE half precision float
    Float16,
    /// IEEE single precision float
    Float32,
    /// IEEE double precision float
    Float64,
    /// UTF-8 string with 32-bit offsets
    Utf8,
    /// UTF-8 string with 64-bit offsets
    LargeUtf8,
    /// Opaque bytes with 32-bit offsets
    Binary,
    /// Opaque bytes with 64-bit offsets
    LargeBinary,
    /// Timestamp of the given unit, ordered as a [`Timestamp`]
    Timestamp(TimeUnit),
    /// Days since the epoch
    Date32,
    /// Milliseconds since the epoch
    Date64,
}

impl ElementKind {
    /// Resolves the [`ElementKind`] for `data_type`
    ///
    /// Returns an error if `sort_array` cannot order elements of this type.
    pub fn try_new(data_type: &DataType) -> Result<Self, ArrowError> {
        Ok(match data_type {
            DataType::Int8 => Self::Int8,
            DataType::Int16 => Self::Int16,
            DataType::Int32 => Self::Int32,
            DataType::Int64 => Self::Int64,
            DataType::Float16 => Self::Float16,
            DataType::Float32 => Self::Float32,
            DataType::Float64 => Self::Float64,
            DataType::Utf8 => Self::Utf8,
            DataType::LargeUtf8 => Self::LargeUtf8,
            DataType::Binary => Self::Binary,
            DataType::LargeBinary => Self::LargeBinary,
            DataType::Timestamp(unit, _) => Self::Timestamp(*unit),
            DataType::Date32 => Self::Date32,
            DataType::Date64 => Self::Date64,
            t => {
                return Err(ArrowError::ComputeError(format!(
                    "sort_array not supported for element type {t}"
                )))
            }
        })
    }

    /// Returns a comparator over two indices of `values`
    ///
    /// Null slots compare less than every value. `values` must have the
    /// data type this kind was resolved from.
    pub fn order_key(&self, values: &dyn Array) -> Result<DynComparator, ArrowError> {
        let actual = Self::try_new(values.data_type())?;
        if actual != *self {
            return Err(ArrowError::InvalidArgumentError(format!(
                "Expected {self} elements, got {}",
                values.data_type()
            )));
        }

        Ok(match self {
            Self::Int8 => compare_primitive::<Int8Type>(values),
            Self::Int16 => compare_primitive::<Int16Type>(values),
            Self::Int32 => compare_primitive::<Int32Type>(values),
            Self::Int64 => compare_primitive::<Int64Type>(values),
            Self::Float16 => compare_primitive::<Float16Type>(values),
            Self::Float32 => compare_primitive::<Float32Type>(values),
            Self::Float64 => compare_primitive::<Float64Type>(values),
            Self::Utf8 => compare_bytes::<Utf8Type>(values),
            Self::LargeUtf8 => compare_bytes::<LargeUtf8Type>(values),
            Self::Binary => compare_bytes::<BinaryType>(values),
            Self::LargeBinary => compare_bytes::<LargeBinaryType>(values),
            Self::Timestamp(TimeUnit::Second) => compare_timestamp::<TimestampSecondType>(values),
            Self::Timestamp(TimeUnit::Millisecond) => {
                compare_timestamp::<TimestampMillisecondType>(values)
            }
            Self::Timestamp(TimeUnit::Microsecond) => {
                compare_timestamp::<TimestampMicrosecondType>(values)
            }
            Self::Timestamp(TimeUnit::Nanosecond) => {
                compare_timestamp::<TimestampNanosecondType>(values)
            }
            Self::Date32 => compare_primitive::<Date32Type>(values),
            Self::Date64 => compare_primitive::<Date64Type>(values),
        })
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timestamp(unit) => write!(f, "Timestamp({unit:?})"),
            kind => write!(f, "{kind:?}"),
        }
    }
}

/// Returns the total-order comparator for the elements of `values`
///
/// ```
/// # use std::cmp::Ordering;
/// # use arrow_array::Float64Array;
/// # use arrow_sort_array::ord::make_order_key;
/// let values = Float64Array::from(vec![Some(f64::NAN), None, Some(f64::INFINITY)]);
/// let cmp = make_order_key(&values).unwrap();
///
/// assert_eq!(cmp(0, 2), Ordering::Greater); // NaN vs +inf
/// assert_eq!(cmp(1, 2), Ordering::Less); // null vs +inf
/// assert_eq!(cmp(0, 0), Ordering::Equal); // NaN vs NaN
/// ```
pub fn make_order_key(values: &dyn Array) -> Result<DynComparator, ArrowError> {
    ElementKind::try_new(values.data_type())?.order_key(values)
}

/// Wraps `cmp` so that null slots of `values` order before every value
fn compare<A, F>(values: &A, cmp: F) -> DynComparator
where
    A: Array + ?Sized,
    F: Fn(usize, usize) -> Ordering + Send + Sync + 'static,
{
    match values.logical_nulls().filter(|n| n.null_count() > 0) {
        None => Box::new(cmp),
        Some(nulls) => Box::new(move |i, j| match (nulls.is_null(i), nulls.is_null(j)) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => cmp(i, j),
        }),
    }
}

fn compare_primitive<T>(values: &dyn Array) -> DynComparator
where
    T: ArrowPrimitiveType,
    T::Native: TotalOrder,
{
    let array = values.as_primitive::<T>();
    let v = array.values().clone();
    compare(array, move |i, j| v[i].total_order(v[j]))
}

fn compare_timestamp<T: ArrowTimestampType>(values: &dyn Array) -> DynComparator {
    let array = values.as_primitive::<T>();
    let v = array.values().clone();
    compare(array, move |i, j| {
        let l = Timestamp::from_value(v[i], T::UNIT);
        let r = Timestamp::from_value(v[j], T::UNIT);
        l.cmp(&r)
    })
}

fn compare_bytes<T: ByteArrayType>(values: &dyn Array) -> DynComparator {
    let array = values.as_bytes::<T>();
    let v = array.clone();
    compare(array, move |i, j| {
        let l: &[u8] = v.value(i).as_ref();
        let r: &[u8] = v.value(j).as_ref();
        l.cmp(r)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i32() {
        let array = Int32Array::from(vec![Some(i32::MIN), Some(i32::MAX), None, Some(-1)]);
        let cmp = make_order_key(&array).unwrap();

        assert_eq!(Ordering::Less, cmp(0, 1));
        assert_eq!(Ordering::Less, cmp(0, 3));
        assert_eq!(Ordering::Greater, cmp(1, 3));
        assert_eq!(Ordering::Less, cmp(2, 0));
        assert_eq!(Ordering::Equal, cmp(2, 2));
    }

    #[test]
    fn test_i8_extremes() {
        let array = Int8Array::from(vec![i8::MIN, i8::MAX]);
        let cmp = make_order_key(&array).unwrap();

        assert_eq!(Ordering::Less, cmp(0, 1));
        assert_eq!(Ordering::Greater, cmp(1, 0));
    }

    #[test]
    fn test_f64_nan() {
        let array = Float64Array::from(vec![
            Some(f64::INFINITY),
            Some(f64::NAN),
            Some(-f64::NAN),
            None,
            Some(f64::MAX),
        ]);
        let cmp = make_order_key(&array).unwrap();

        assert_eq!(Ordering::Greater, cmp(1, 0));
        assert_eq!(Ordering::Less, cmp(0, 1));
        assert_eq!(Ordering::Equal, cmp(1, 2));
        assert_eq!(Ordering::Greater, cmp(2, 4));
        assert_eq!(Ordering::Less, cmp(3, 1));
        assert_eq!(Ordering::Less, cmp(4, 0));
    }

    #[test]
    fn test_f64_zeros() {
        let array = Float64Array::from(vec![-0.0, 0.0]);
        let cmp = make_order_key(&array).unwrap();

        assert_eq!(Ordering::Equal, cmp(0, 1));
        assert_eq!(Ordering::Equal, cmp(1, 0));
    }

    #[test]
    fn test_f32_infinities() {
        let array = Float32Array::from(vec![f32::NEG_INFINITY, f32::MIN, f32::INFINITY, f32::NAN]);
        let cmp = make_order_key(&array).unwrap();

        assert_eq!(Ordering::Less, cmp(0, 1));
        assert_eq!(Ordering::Less, cmp(1, 2));
        assert_eq!(Ordering::Less, cmp(2, 3));
        assert_eq!(Ordering::Greater, cmp(3, 0));
    }

    #[test]
    fn test_f16() {
        let array = Float16Array::from(vec![f16::from_f32(1.0), f16::NAN, f16::INFINITY]);
        let cmp = make_order_key(&array).unwrap();

        assert_eq!(Ordering::Less, cmp(0, 2));
        assert_eq!(Ordering::Greater, cmp(1, 2));
    }

    #[test]
    fn test_strings() {
        let array = StringArray::from(vec![Some(""), None, Some("a"), Some("ab"), Some("B")]);
        let cmp = make_order_key(&array).unwrap();

        assert_eq!(Ordering::Greater, cmp(0, 1));
        assert_eq!(Ordering::Less, cmp(0, 2));
        assert_eq!(Ordering::Less, cmp(2, 3));
        // byte-wise, so upper case sorts first
        assert_eq!(Ordering::Less, cmp(4, 2));
    }

    #[test]
    fn test_binary() {
        let array = LargeBinaryArray::from(vec![&[0xff_u8][..], &[0x00_u8, 0x01][..], &[][..]]);
        let cmp = make_order_key(&array).unwrap();

        assert_eq!(Ordering::Greater, cmp(0, 1));
        assert_eq!(Ordering::Less, cmp(2, 1));
    }

    #[test]
    fn test_timestamp() {
        let values = [(0, 1), (1, 0), (4, 20), (3, 30)]
            .map(|(s, n)| Timestamp::new(s, n).to_value(TimeUnit::Nanosecond).unwrap());
        let array = TimestampNanosecondArray::from(values.to_vec()).with_timezone("UTC");
        let cmp = make_order_key(&array).unwrap();

        assert_eq!(Ordering::Less, cmp(0, 1));
        assert_eq!(Ordering::Greater, cmp(2, 3));
        assert_eq!(Ordering::Equal, cmp(2, 2));
    }

    #[test]
    fn test_timestamp_split() {
        let ts = Timestamp::from_value(-1, TimeUnit::Nanosecond);
        assert_eq!(ts, Timestamp::new(-1, 999_999_999));
        assert_eq!(ts.to_value(TimeUnit::Nanosecond), Some(-1));

        let ts = Timestamp::from_value(1_500, TimeUnit::Millisecond);
        assert_eq!(ts, Timestamp::new(1, 500_000_000));
        assert_eq!(ts.to_value(TimeUnit::Millisecond), Some(1_500));

        assert!(Timestamp::new(-1, 999_999_999) < Timestamp::new(0, 0));
        assert_eq!(Timestamp::new(i64::MAX, 0).to_value(TimeUnit::Millisecond), None);
    }

    #[test]
    fn test_date32() {
        let array = Date32Array::from(vec![Some(4), None, Some(-3)]);
        let cmp = make_order_key(&array).unwrap();

        assert_eq!(Ordering::Greater, cmp(0, 2));
        assert_eq!(Ordering::Less, cmp(1, 2));
    }

    #[test]
    fn test_unsupported() {
        let err = ElementKind::try_new(&DataType::Boolean).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Compute error: sort_array not supported for element type Boolean"
        );
        assert!(ElementKind::try_new(&DataType::UInt32).is_err());
    }

    #[test]
    fn test_kind_mismatch() {
        let array = Int64Array::from(vec![1, 2]);
        let err = ElementKind::Int32.order_key(&array).err().unwrap();
        assert_eq!(
            err.to_string(),
            "Invalid argument error: Expected Int32 elements, got Int64"
        );
    }
}
