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

//! Binding and invocation of the `sort_array` function

use std::sync::Arc;

use arrow_array::cast::AsArray;
use arrow_array::{Array, ArrayRef, Datum};
use arrow_schema::{ArrowError, DataType};
use tracing::{debug, trace};

use crate::direction::SortDirection;
use crate::ord::ElementKind;
use crate::sort::{sort_fixed_size_list, sort_list};

/// The name `sort_array` is registered under
pub const SORT_ARRAY: &str = "sort_array";

/// A bound call of `sort_array(array [, ascending])`
///
/// Binding resolves the element comparator and the sort direction once, so
/// that every error is reported before any row is sorted. The bound call can
/// then be invoked on any number of arrays (or slices of arrays) of the bound
/// type.
///
/// ```
/// # use arrow_array::{Array, BooleanArray, ListArray};
/// # use arrow_array::types::Int32Type;
/// # use arrow_sort_array::SortArray;
/// let array = ListArray::from_iter_primitive::<Int32Type, _, _>(vec![
///     Some(vec![Some(9), Some(8), Some(12)]),
/// ]);
/// let ascending = BooleanArray::new_scalar(false);
/// let sort = SortArray::try_new(array.data_type(), Some(&ascending)).unwrap();
///
/// let sorted = sort.invoke(&array).unwrap();
/// let expected = ListArray::from_iter_primitive::<Int32Type, _, _>(vec![
///     Some(vec![Some(12), Some(9), Some(8)]),
/// ]);
/// assert_eq!(sorted.as_ref(), &expected);
/// ```
#[derive(Debug, Clone)]
pub struct SortArray {
    input_type: DataType,
    element: ElementKind,
    direction: SortDirection,
}

impl SortArray {
    /// Resolves the return type of `sort_array` called with `arg_types`
    ///
    /// The first argument must be a list of a supported element type, and the
    /// optional second argument a boolean. The result has the type of the
    /// first argument.
    pub fn return_type(arg_types: &[DataType]) -> Result<DataType, ArrowError> {
        match arg_types {
            [array] | [array, DataType::Boolean] => {
                element_kind(array)?;
                Ok(array.clone())
            }
            [_, other] => Err(ArrowError::InvalidArgumentError(format!(
                "{SORT_ARRAY} expects a boolean sort direction, got {other}"
            ))),
            _ => Err(ArrowError::InvalidArgumentError(format!(
                "{SORT_ARRAY} expects 1 or 2 arguments, got {}",
                arg_types.len()
            ))),
        }
    }

    /// Binds a call on arrays of `input_type`
    ///
    /// `ascending` defaults to true and must otherwise be a boolean
    /// [`Scalar`](arrow_array::Scalar), see [`SortDirection::try_from_datum`].
    pub fn try_new(
        input_type: &DataType,
        ascending: Option<&dyn Datum>,
    ) -> Result<Self, ArrowError> {
        let element = element_kind(input_type)?;
        let direction = match ascending {
            Some(ascending) => SortDirection::try_from_datum(ascending)?,
            None => SortDirection::default(),
        };
        debug!(
            function = SORT_ARRAY,
            %element,
            ?direction,
            "bound call"
        );
        Ok(Self {
            input_type: input_type.clone(),
            element,
            direction,
        })
    }

    /// The array type this call was bound to, which is also its return type
    pub fn input_type(&self) -> &DataType {
        &self.input_type
    }

    /// The resolved element type
    pub fn element(&self) -> ElementKind {
        self.element
    }

    /// The resolved sort direction
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Sorts the elements of every non-null slot of `array`
    pub fn invoke(&self, array: &dyn Array) -> Result<ArrayRef, ArrowError> {
        if array.data_type() != &self.input_type {
            return Err(ArrowError::InvalidArgumentError(format!(
                "{SORT_ARRAY} was bound to {}, got {}",
                self.input_type,
                array.data_type()
            )));
        }
        trace!(
            function = SORT_ARRAY,
            rows = array.len(),
            nulls = array.null_count(),
            "invoke"
        );

        let (element, direction) = (&self.element, self.direction);
        let sorted: ArrayRef = match array.data_type() {
            DataType::List(_) => Arc::new(sort_list(array.as_list::<i32>(), element, direction)?),
            DataType::LargeList(_) => {
                Arc::new(sort_list(array.as_list::<i64>(), element, direction)?)
            }
            DataType::FixedSizeList(_, _) => Arc::new(sort_fixed_size_list(
                array.as_fixed_size_list(),
                element,
                direction,
            )?),
            t => {
                return Err(ArrowError::InvalidArgumentError(format!(
                    "{SORT_ARRAY} expects an array argument, got {t}"
                )))
            }
        };
        Ok(sorted)
    }
}

/// Sorts the elements of every non-null slot of the list array `array`
///
/// Elements are ordered ascending unless `ascending` is a `false` boolean
/// [`Scalar`](arrow_array::Scalar). Ascending order puts nulls first and NaN
/// after positive infinity; descending order is its exact reverse. Null slots
/// stay null.
///
/// ```
/// # use arrow_array::{BooleanArray, ListArray};
/// # use arrow_array::types::Float64Type;
/// # use arrow_sort_array::sort_array;
/// let array = ListArray::from_iter_primitive::<Float64Type, _, _>(vec![
///     Some(vec![Some(f64::NAN), None, Some(1.0), Some(f64::INFINITY)]),
///     None,
/// ]);
///
/// let sorted = sort_array(&array, None).unwrap();
/// let expected = ListArray::from_iter_primitive::<Float64Type, _, _>(vec![
///     Some(vec![None, Some(1.0), Some(f64::INFINITY), Some(f64::NAN)]),
///     None,
/// ]);
/// assert_eq!(sorted.as_ref(), &expected);
///
/// // the direction must be the same for every row
/// let per_row = BooleanArray::from(vec![true, false]);
/// assert!(sort_array(&array, Some(&per_row)).is_err());
/// ```
pub fn sort_array(
    array: &dyn Array,
    ascending: Option<&dyn Datum>,
) -> Result<ArrayRef, ArrowError> {
    SortArray::try_new(array.data_type(), ascending)?.invoke(array)
}

fn element_kind(input_type: &DataType) -> Result<ElementKind, ArrowError> {
    match input_type {
        DataType::List(f) | DataType::LargeList(f) | DataType::FixedSizeList(f, _) => {
            ElementKind::try_new(f.data_type())
        }
        t => Err(ArrowError::InvalidArgumentError(format!(
            "{SORT_ARRAY} expects an array argument, got {t}"
        ))),
    }
}
