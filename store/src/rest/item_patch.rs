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

//! API to update some attributes of an existing item.

use crate::driver::Driver;
use crate::model::{ItemId, ItemPatch, Price};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use shop_core::driver::DriverError;
use shop_core::rest::RestError;

/// Message sent to the server to patch an item.
#[derive(Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct PatchRequest {
    /// New name of the item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,

    /// New price of the item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) price: Option<Price>,

    /// Deletion flag.  Only `false`, which leaves the item untouched, is accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) deleted: Option<bool>,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<ItemId>,
    Json(request): Json<PatchRequest>,
) -> Result<impl IntoResponse, RestError> {
    if request.deleted == Some(true) {
        return Err(RestError::UnprocessableEntity(
            "Cannot change the deleted flag of an item with a patch".to_owned(),
        ));
    }

    let patch = ItemPatch::new(request.name, request.price);
    match driver.patch_item(id, patch).await {
        Ok(item) => Ok(Json(item)),
        Err(DriverError::NotFound(msg)) => Err(RestError::NotModified(msg)),
        Err(e) => Err(e.into()),
    }
}
