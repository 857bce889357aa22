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

//! API to replace all attributes of an existing item.

use crate::driver::Driver;
use crate::model::{ItemId, ItemInfo};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use shop_core::driver::DriverError;
use shop_core::rest::RestError;

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<ItemId>,
    Json(info): Json<ItemInfo>,
) -> Result<impl IntoResponse, RestError> {
    match driver.replace_item(id, info).await {
        Ok(item) => Ok(Json(item)),
        Err(DriverError::NotFound(msg)) => Err(RestError::NotModified(msg)),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use crate::model::*;
    use crate::rest::testutils::*;
    use axum::http::{self, StatusCode};
    use serde_json::{json, Value};
    use shop_core::rest::testutils::*;

    fn route(id: u64) -> (http::Method, String) {
        (http::Method::PUT, format!("/item/{}", id))
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup();

        context.add_item("old", 1.0).await;

        let response = OneShotBuilder::new(context.app(), route(0))
            .send_json(json!({"name": "new", "price": 2.0}))
            .await
            .expect_json::<Value>()
            .await;
        assert_eq!(json!({"id": 0, "name": "new", "price": 2.0, "deleted": false}), response);

        let item = context.get_item(ItemId::new(0)).await.unwrap();
        assert_eq!("new", item.info().name());
    }

    #[tokio::test]
    async fn test_revives_deleted() {
        let context = TestContext::setup();

        let item = context.add_item("old", 1.0).await;
        context.delete_item(*item.id()).await;

        let response = OneShotBuilder::new(context.app(), route(0))
            .send_json(json!({"name": "back", "price": 1.0}))
            .await
            .expect_json::<Value>()
            .await;
        assert_eq!(json!(false), response["deleted"]);
    }

    #[tokio::test]
    async fn test_missing() {
        let context = TestContext::setup();

        OneShotBuilder::new(context.app(), route(3))
            .send_json(json!({"name": "new", "price": 2.0}))
            .await
            .expect_status(StatusCode::NOT_MODIFIED)
            .take_response()
            .await;

        assert!(context.get_item(ItemId::new(3)).await.is_none());
    }

    #[tokio::test]
    async fn test_negative_price() {
        let context = TestContext::setup();

        context.add_item("old", 1.0).await;

        OneShotBuilder::new(context.app(), route(0))
            .send_json(json!({"name": "new", "price": -2.0}))
            .await
            .expect_status(StatusCode::UNPROCESSABLE_ENTITY)
            .expect_text("cannot be negative")
            .await;

        let item = context.get_item(ItemId::new(0)).await.unwrap();
        assert_eq!("old", item.info().name());
    }

    test_payload_must_be_json!(TestContext::setup().into_app(), route(0));
}
