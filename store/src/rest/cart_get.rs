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

//! API to get one cart.

use crate::driver::Driver;
use crate::model::CartId;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use shop_core::rest::{EmptyBody, RestError};

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<CartId>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let cart = driver.get_cart(id).await?;
    Ok(Json(cart))
}

#[cfg(test)]
mod tests {
    use crate::rest::testutils::*;
    use axum::http::{self, StatusCode};
    use serde_json::{json, Value};
    use shop_core::rest::testutils::*;

    fn route(id: u64) -> (http::Method, String) {
        (http::Method::GET, format!("/cart/{}", id))
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup();

        let milk = context.add_item("milk", 1.5).await;
        let bread = context.add_item("bread", 2.0).await;
        let cart = context.create_cart().await;
        context.add_item_to_cart(*cart.id(), *milk.id()).await;
        context.add_item_to_cart(*cart.id(), *bread.id()).await;
        context.add_item_to_cart(*cart.id(), *milk.id()).await;

        let response = OneShotBuilder::new(context.app(), route(0))
            .send_empty()
            .await
            .expect_json::<Value>()
            .await;
        let exp_response = json!({
            "id": 0,
            "items": [
                {"id": 0, "name": "milk", "quantity": 2, "available": true},
                {"id": 1, "name": "bread", "quantity": 1, "available": true},
            ],
            "price": 5.0,
            "quantity": 3,
        });
        assert_eq!(exp_response, response);
    }

    #[tokio::test]
    async fn test_reflects_deleted_items() {
        let context = TestContext::setup();

        let item = context.add_item("gone", 3.0).await;
        let cart = context.create_cart().await;
        context.add_item_to_cart(*cart.id(), *item.id()).await;
        context.delete_item(*item.id()).await;

        let response = OneShotBuilder::new(context.app(), route(0))
            .send_empty()
            .await
            .expect_json::<Value>()
            .await;
        assert_eq!(json!(false), response["items"][0]["available"]);
        assert_eq!(json!(3.0), response["price"]);
    }

    #[tokio::test]
    async fn test_missing() {
        let context = TestContext::setup();

        OneShotBuilder::new(context.app(), route(7))
            .send_empty()
            .await
            .expect_status(StatusCode::NOT_FOUND)
            .expect_error("Cart 7 not found")
            .await;
    }

    test_payload_must_be_empty!(TestContext::setup().into_app(), route(0));
}
