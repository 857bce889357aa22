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

//! API to get one item.

use crate::driver::Driver;
use crate::model::ItemId;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use shop_core::rest::{EmptyBody, RestError};

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<ItemId>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let item = driver.get_item(id).await?;
    if *item.info().deleted() {
        return Err(RestError::NotFound(format!("Item {} not found", id)));
    }
    Ok(Json(item))
}

#[cfg(test)]
mod tests {
    use crate::rest::testutils::*;
    use axum::http::{self, StatusCode};
    use serde_json::{json, Value};
    use shop_core::rest::testutils::*;

    fn route(id: u64) -> (http::Method, String) {
        (http::Method::GET, format!("/item/{}", id))
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup();

        context.add_item("first", 1.0).await;
        context.add_item("second", 2.5).await;

        let response = OneShotBuilder::new(context.app(), route(1))
            .send_empty()
            .await
            .expect_json::<Value>()
            .await;
        assert_eq!(json!({"id": 1, "name": "second", "price": 2.5, "deleted": false}), response);
    }

    #[tokio::test]
    async fn test_missing() {
        let context = TestContext::setup();

        OneShotBuilder::new(context.app(), route(5))
            .send_empty()
            .await
            .expect_status(StatusCode::NOT_FOUND)
            .expect_error("Item 5 not found")
            .await;
    }

    #[tokio::test]
    async fn test_deleted_is_hidden() {
        let context = TestContext::setup();

        let item = context.add_item("gone", 1.0).await;
        context.delete_item(*item.id()).await;

        OneShotBuilder::new(context.app(), route(0))
            .send_empty()
            .await
            .expect_status(StatusCode::NOT_FOUND)
            .expect_error("Item 0 not found")
            .await;
    }

    #[tokio::test]
    async fn test_bad_id() {
        let context = TestContext::setup();

        OneShotBuilder::new(context.app(), (http::Method::GET, "/item/abc"))
            .send_empty()
            .await
            .expect_status(StatusCode::BAD_REQUEST)
            .expect_text("Invalid URL")
            .await;
    }

    test_payload_must_be_empty!(TestContext::setup().into_app(), route(0));
}
