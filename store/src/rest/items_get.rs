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

//! API to list items in the catalog.

use crate::driver::Driver;
use crate::model::{Bounds, ItemsFilter, Page, Price};
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use shop_core::rest::{EmptyBody, RestError};

/// Query parameters accepted by this API.
#[derive(Deserialize, Serialize)]
pub(crate) struct ItemsQuery {
    /// First item id to consider.
    #[serde(default)]
    pub(crate) offset: u64,

    /// Maximum number of items to return.
    #[serde(default = "super::default_limit")]
    pub(crate) limit: usize,

    /// Exclusive lower bound on the price.
    #[serde(default)]
    pub(crate) min_price: f64,

    /// Exclusive upper bound on the price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) max_price: Option<f64>,

    /// Whether to include deleted items.
    #[serde(default)]
    pub(crate) show_deleted: bool,
}

impl Default for ItemsQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: super::default_limit(),
            min_price: 0.0,
            max_price: None,
            show_deleted: false,
        }
    }
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Query(query): Query<ItemsQuery>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let page = Page::new(query.offset, query.limit)?;
    let min_price = Price::new(query.min_price)?;
    let max_price = query.max_price.map(Price::new).transpose()?;
    let filter = ItemsFilter::new(
        Bounds::new(min_price.as_f64(), max_price.map(Price::as_f64)),
        query.show_deleted,
    );

    let items = driver.list_items(page, filter).await?;

    Ok(Json(items))
}
