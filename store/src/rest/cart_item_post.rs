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

//! API to add one unit of an item to a cart.

use crate::driver::Driver;
use crate::model::{CartAddition, CartId, ItemId};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use shop_core::rest::{EmptyBody, RestError};

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path((cart_id, item_id)): Path<(CartId, ItemId)>,
    _: EmptyBody,
) -> Result<(StatusCode, impl IntoResponse), RestError> {
    let (addition, cart) = driver.add_item_to_cart(cart_id, item_id).await?;
    let code = match addition {
        CartAddition::Created => StatusCode::CREATED,
        CartAddition::Merged => StatusCode::OK,
    };
    Ok((code, Json(cart)))
}

#[cfg(test)]
mod tests {
    use crate::model::*;
    use crate::rest::testutils::*;
    use axum::http::{self, StatusCode};
    use serde_json::{json, Value};
    use shop_core::rest::testutils::*;

    fn route(cart_id: u64, item_id: u64) -> (http::Method, String) {
        (http::Method::POST, format!("/cart/{}/add/{}", cart_id, item_id))
    }

    #[tokio::test]
    async fn test_create_then_merge() {
        let context = TestContext::setup();

        context.add_item("milk", 1.5).await;
        context.create_cart().await;

        let response = OneShotBuilder::new(context.app(), route(0, 0))
            .send_empty()
            .await
            .expect_status(StatusCode::CREATED)
            .expect_json::<Value>()
            .await;
        assert_eq!(json!(1), response["items"][0]["quantity"]);

        let response = OneShotBuilder::new(context.app(), route(0, 0))
            .send_empty()
            .await
            .expect_status(StatusCode::OK)
            .expect_json::<Value>()
            .await;
        let exp_response = json!({
            "id": 0,
            "items": [{"id": 0, "name": "milk", "quantity": 2, "available": true}],
            "price": 3.0,
            "quantity": 2,
        });
        assert_eq!(exp_response, response);
    }

    #[tokio::test]
    async fn test_deleted_item_can_be_added() {
        let context = TestContext::setup();

        let item = context.add_item("gone", 1.0).await;
        context.delete_item(*item.id()).await;
        context.create_cart().await;

        let response = OneShotBuilder::new(context.app(), route(0, 0))
            .send_empty()
            .await
            .expect_status(StatusCode::CREATED)
            .expect_json::<Value>()
            .await;
        assert_eq!(json!(false), response["items"][0]["available"]);
    }

    #[tokio::test]
    async fn test_missing_cart_or_item() {
        let context = TestContext::setup();

        context.add_item("milk", 1.5).await;
        context.create_cart().await;

        for (cart_id, item_id) in [(1, 0), (0, 1)] {
            OneShotBuilder::new(context.app(), route(cart_id, item_id))
                .send_empty()
                .await
                .expect_status(StatusCode::NOT_FOUND)
                .expect_error("not found")
                .await;
        }

        let cart = context.get_cart(CartId::new(0)).await.unwrap();
        assert!(cart.items().is_empty());
    }

    test_payload_must_be_empty!(TestContext::setup().into_app(), route(0, 0));
}
