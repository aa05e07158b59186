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

//! The sort direction argument of `sort_array`

use arrow_array::cast::AsArray;
use arrow_array::{Array, Datum};
use arrow_schema::{ArrowError, DataType};

/// The order `sort_array` arranges the elements of each array in.
///
/// [`SortDirection::Descending`] is the exact reverse of
/// [`SortDirection::Ascending`], so nulls sort last when descending.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Nulls first, then values in increasing order
    #[default]
    Ascending,
    /// The reverse of [`SortDirection::Ascending`]
    Descending,
}

impl SortDirection {
    /// Returns [`SortDirection::Ascending`] if `ascending` is true
    pub fn from_ascending(ascending: bool) -> Self {
        match ascending {
            true => Self::Ascending,
            false => Self::Descending,
        }
    }

    /// Returns true if this is [`SortDirection::Descending`]
    pub fn is_descending(&self) -> bool {
        matches!(self, Self::Descending)
    }

    /// Reads the direction from the `ascending` argument of a call
    ///
    /// The argument must be a non-null boolean [`Scalar`](arrow_array::Scalar),
    /// as one direction applies to every row. An array is rejected even if it
    /// holds a single value.
    ///
    /// ```
    /// # use arrow_array::BooleanArray;
    /// # use arrow_sort_array::SortDirection;
    /// let ascending = BooleanArray::new_scalar(false);
    /// let direction = SortDirection::try_from_datum(&ascending).unwrap();
    /// assert_eq!(direction, SortDirection::Descending);
    ///
    /// let per_row = BooleanArray::from(vec![false]);
    /// assert!(SortDirection::try_from_datum(&per_row).is_err());
    /// ```
    pub fn try_from_datum(ascending: &dyn Datum) -> Result<Self, ArrowError> {
        let (array, is_scalar) = ascending.get();
        if !is_scalar || array.len() != 1 {
            return Err(ArrowError::InvalidArgumentError(format!(
                "sort_array expects a constant boolean for the sort direction, got a column of {} rows",
                array.len()
            )));
        }
        if array.data_type() != &DataType::Boolean {
            return Err(ArrowError::InvalidArgumentError(format!(
                "sort_array expects a boolean for the sort direction, got {}",
                array.data_type()
            )));
        }
        if array.is_null(0) {
            return Err(ArrowError::InvalidArgumentError(
                "sort_array expects a non-null sort direction".to_string(),
            ));
        }
        Ok(Self::from_ascending(array.as_boolean().value(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow_array::{BooleanArray, Int32Array, Scalar};

    #[test]
    fn test_default() {
        assert_eq!(SortDirection::default(), SortDirection::Ascending);
        assert!(!SortDirection::default().is_descending());
        assert!(SortDirection::from_ascending(false).is_descending());
    }

    #[test]
    fn test_scalar() {
        let d = SortDirection::try_from_datum(&BooleanArray::new_scalar(true)).unwrap();
        assert_eq!(d, SortDirection::Ascending);

        let d = SortDirection::try_from_datum(&BooleanArray::new_scalar(false)).unwrap();
        assert_eq!(d, SortDirection::Descending);
    }

    #[test]
    fn test_per_row() {
        let per_row = BooleanArray::from(vec![false]);
        let err = SortDirection::try_from_datum(&per_row).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument error: sort_array expects a constant boolean for the sort direction, got a column of 1 rows"
        );
    }

    #[test]
    fn test_not_boolean() {
        let err = SortDirection::try_from_datum(&Int32Array::new_scalar(1)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument error: sort_array expects a boolean for the sort direction, got Int32"
        );
    }

    #[test]
    fn test_null() {
        let null = Scalar::new(BooleanArray::from(vec![None::<bool>]));
        let err = SortDirection::try_from_datum(&null).unwrap_err();
        assert!(err.to_string().contains("non-null"));
    }
}
