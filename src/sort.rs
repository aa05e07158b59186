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

//! Sort kernels that reorder the elements within each slot of a list array

use crate::direction::SortDirection;
use crate::ord::{DynComparator, ElementKind};
use arrow_array::*;
use arrow_buffer::{ArrowNativeType, OffsetBuffer};
use arrow_schema::ArrowError;
use arrow_select::take::take;
use std::ops::Range;

/// Sorts the elements of every non-null slot of `array`
///
/// Each slot is sorted ascending with a stable sort, and reversed afterwards
/// if `direction` is [`SortDirection::Descending`]. Null slots stay null and
/// are emitted with no elements.
///
/// ```
/// # use arrow_array::ListArray;
/// # use arrow_array::types::Int32Type;
/// # use arrow_sort_array::ord::ElementKind;
/// # use arrow_sort_array::sort::sort_list;
/// # use arrow_sort_array::SortDirection;
/// let array = ListArray::from_iter_primitive::<Int32Type, _, _>(vec![
///     Some(vec![Some(9), Some(8), Some(12)]),
///     None,
/// ]);
/// let sorted = sort_list(&array, &ElementKind::Int32, SortDirection::Descending).unwrap();
///
/// let expected = ListArray::from_iter_primitive::<Int32Type, _, _>(vec![
///     Some(vec![Some(12), Some(9), Some(8)]),
///     None,
/// ]);
/// assert_eq!(sorted, expected);
/// ```
pub fn sort_list<O: OffsetSizeTrait>(
    array: &GenericListArray<O>,
    element: &ElementKind,
    direction: SortDirection,
) -> Result<GenericListArray<O>, ArrowError> {
    let (field, offsets, values, nulls) = array.clone().into_parts();
    let order_key = element.order_key(values.as_ref())?;

    let first = offsets[0].as_usize();
    let last = offsets[offsets.len() - 1].as_usize();
    let mut indices = Vec::with_capacity(last - first);
    let mut lengths = Vec::with_capacity(array.len());
    for (row, window) in offsets.windows(2).enumerate() {
        if nulls.as_ref().is_some_and(|n| n.is_null(row)) {
            lengths.push(0);
            continue;
        }
        let start = window[0].as_usize();
        let end = window[1].as_usize();
        sort_row(&mut indices, start..end, &order_key, direction);
        lengths.push(end - start);
    }

    let values = take(values.as_ref(), &UInt64Array::from(indices), None)?;
    GenericListArray::try_new(field, OffsetBuffer::from_lengths(lengths), values, nulls)
}

/// Sorts the elements of every non-null slot of `array`
///
/// See [`sort_list`]. As every slot has the same length, the child values of
/// null slots are carried over unsorted.
pub fn sort_fixed_size_list(
    array: &FixedSizeListArray,
    element: &ElementKind,
    direction: SortDirection,
) -> Result<FixedSizeListArray, ArrowError> {
    let (field, size, values, nulls) = array.clone().into_parts();
    let order_key = element.order_key(values.as_ref())?;
    if size == 0 {
        return Ok(array.clone());
    }

    let width = size.as_usize();
    let mut indices = Vec::with_capacity(array.len() * width);
    for row in 0..array.len() {
        let start = row * width;
        let end = start + width;
        match nulls.as_ref().is_some_and(|n| n.is_null(row)) {
            true => indices.extend((start..end).map(|i| i as u64)),
            false => sort_row(&mut indices, start..end, &order_key, direction),
        }
    }

    let values = take(values.as_ref(), &UInt64Array::from(indices), None)?;
    FixedSizeListArray::try_new(field, size, values, nulls)
}

/// Appends the child indices `range` to `indices`, ordered by `order_key`
///
/// Only the appended tail of `indices` is sorted.
fn sort_row(
    indices: &mut Vec<u64>,
    range: Range<usize>,
    order_key: &DynComparator,
    direction: SortDirection,
) {
    let row_start = indices.len();
    indices.extend(range.map(|i| i as u64));

    let row = &mut indices[row_start..];
    row.sort_by(|a, b| order_key(*a as usize, *b as usize));
    if direction.is_descending() {
        row.reverse();
    }
}
