// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Business logic for the service.

use crate::db::Store;
use std::sync::Arc;

mod cart;
mod carts;
mod item;
mod items;
#[cfg(test)]
mod testutils;

/// Business logic.
///
/// The storage layer reports the absence of an entity as a regular value.  The driver is where
/// absence becomes a `DriverError::NotFound` so that upper layers can propagate it with `?`.
///
/// The public operations exposed by the driver are all "one shot" and consume the driver in an
/// attempt to minimize the possibility of executing two operations where one was intended.
#[derive(Clone)]
pub(crate) struct Driver {
    /// The storage that holds the catalog tables.
    store: Arc<dyn Store + Send + Sync>,
}

impl Driver {
    /// Creates a new driver backed by the given injected components.
    pub(crate) fn new(store: Arc<dyn Store + Send + Sync>) -> Self {
        Self { store }
    }
}
