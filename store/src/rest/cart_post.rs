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

//! API to create a new empty cart.

use crate::driver::Driver;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use shop_core::rest::{EmptyBody, RestError};

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let cart = driver.create_cart().await?;
    let location = format!("/cart/{}", cart.id());
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(cart)))
}

#[cfg(test)]
mod tests {
    use crate::model::*;
    use crate::rest::testutils::*;
    use axum::http::{self, header, StatusCode};
    use serde_json::{json, Value};
    use shop_core::rest::testutils::*;

    fn route() -> (http::Method, String) {
        (http::Method::POST, "/cart".to_owned())
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup();

        context.add_item("unrelated", 1.0).await;

        for id in 0..2 {
            let response = OneShotBuilder::new(context.app(), route())
                .send_empty()
                .await
                .expect_status(StatusCode::CREATED)
                .expect_header(header::LOCATION, &format!("/cart/{}", id))
                .expect_json::<Value>()
                .await;
            let exp_response = json!({"id": id, "items": [], "price": 0.0, "quantity": 0});
            assert_eq!(exp_response, response);
        }

        assert!(context.get_cart(CartId::new(1)).await.is_some());
    }

    test_payload_must_be_empty!(TestContext::setup().into_app(), route());
}
