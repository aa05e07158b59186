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

//! The `sort_array` kernel for Arrow list arrays
//!
//! Sorts the elements within every slot of a `List`, `LargeList` or
//! `FixedSizeList` array, keeping the container type, the child field and
//! the null slots of the input.
//!
//! Elements are ordered by a total order: nulls first, then values, with
//! floating point NaN after positive infinity. Descending order is the exact
//! reverse of ascending order, so it puts nulls last.
//!
//! # Sort a column
//!
//! ```
//! # use arrow_array::{BooleanArray, ListArray};
//! # use arrow_array::types::Int32Type;
//! # use arrow_sort_array::sort_array;
//! let array = ListArray::from_iter_primitive::<Int32Type, _, _>(vec![
//!     Some(vec![Some(5), Some(6), Some(1), None, Some(0), Some(99), Some(-99)]),
//!     None,
//!     Some(vec![]),
//! ]);
//!
//! let ascending = sort_array(&array, None).unwrap();
//! let expected = ListArray::from_iter_primitive::<Int32Type, _, _>(vec![
//!     Some(vec![None, Some(-99), Some(0), Some(1), Some(5), Some(6), Some(99)]),
//!     None,
//!     Some(vec![]),
//! ]);
//! assert_eq!(ascending.as_ref(), &expected);
//!
//! let descending = sort_array(&array, Some(&BooleanArray::new_scalar(false))).unwrap();
//! let expected = ListArray::from_iter_primitive::<Int32Type, _, _>(vec![
//!     Some(vec![Some(99), Some(6), Some(5), Some(1), Some(0), Some(-99), None]),
//!     None,
//!     Some(vec![]),
//! ]);
//! assert_eq!(descending.as_ref(), &expected);
//! ```

#![warn(missing_docs)]
pub mod direction;
pub mod function;
pub mod ord;
pub mod sort;

pub use direction::SortDirection;
pub use function::{sort_array, SortArray, SORT_ARRAY};
pub use ord::{ElementKind, Timestamp, TotalOrder};
