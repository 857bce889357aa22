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

//! API to add a new item to the catalog.

use crate::driver::Driver;
use crate::model::ItemInfo;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use shop_core::rest::RestError;

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Json(info): Json<ItemInfo>,
) -> Result<impl IntoResponse, RestError> {
    let item = driver.create_item(info).await?;
    let location = format!("/item/{}", item.id());
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(item)))
}

#[cfg(test)]
mod tests {
    use crate::model::*;
    use crate::rest::testutils::*;
    use axum::http::{self, header, StatusCode};
    use serde_json::{json, Value};
    use shop_core::rest::testutils::*;

    fn route() -> (http::Method, String) {
        (http::Method::POST, "/item".to_owned())
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup();

        let response = OneShotBuilder::new(context.app(), route())
            .send_json(json!({"name": "Milk", "price": 1.5}))
            .await
            .expect_status(StatusCode::CREATED)
            .expect_header(header::LOCATION, "/item/0")
            .expect_json::<Value>()
            .await;
        assert_eq!(json!({"id": 0, "name": "Milk", "price": 1.5, "deleted": false}), response);

        let item = context.get_item(ItemId::new(0)).await.unwrap();
        assert_eq!("Milk", item.info().name());
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let context = TestContext::setup();

        context.add_item("first", 1.0).await;

        OneShotBuilder::new(context.app(), route())
            .send_json(json!({"name": "second", "price": 2}))
            .await
            .expect_status(StatusCode::CREATED)
            .expect_header(header::LOCATION, "/item/1")
            .expect_json::<Value>()
            .await;
    }

    #[tokio::test]
    async fn test_created_as_deleted() {
        let context = TestContext::setup();

        let response = OneShotBuilder::new(context.app(), route())
            .send_json(json!({"name": "Gone", "price": 0.0, "deleted": true}))
            .await
            .expect_status(StatusCode::CREATED)
            .expect_json::<Value>()
            .await;
        assert_eq!(json!(true), response["deleted"]);
    }

    #[tokio::test]
    async fn test_negative_price() {
        let context = TestContext::setup();

        OneShotBuilder::new(context.app(), route())
            .send_json(json!({"name": "Cheap", "price": -1.0}))
            .await
            .expect_status(StatusCode::UNPROCESSABLE_ENTITY)
            .expect_text("cannot be negative")
            .await;

        assert!(context.get_item(ItemId::new(0)).await.is_none());
    }

    #[tokio::test]
    async fn test_missing_fields() {
        let context = TestContext::setup();

        OneShotBuilder::new(context.app(), route())
            .send_json(json!({"name": "No price"}))
            .await
            .expect_status(StatusCode::UNPROCESSABLE_ENTITY)
            .expect_text("missing field `price`")
            .await;
    }

    test_payload_must_be_json!(TestContext::setup().into_app(), route());
}
