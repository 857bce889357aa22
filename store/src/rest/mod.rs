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

//! Entry point to the REST server.

use crate::driver::Driver;
use crate::monitoring::track_requests;
use axum::{middleware, Router};
use metrics_exporter_prometheus::PrometheusHandle;

mod cart_get;
mod cart_item_post;
mod cart_post;
mod carts_get;
mod item_delete;
mod item_get;
mod item_patch;
mod item_post;
mod item_put;
mod items_get;
mod metrics_get;
#[cfg(test)]
mod testutils;

/// Default number of entities returned by listing APIs.
const DEFAULT_LIMIT: usize = 10;

/// Returns the default value for the `limit` query parameter of listing APIs.
fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// Creates the router for the application, reporting request metrics to `metrics`.
pub(crate) fn app(driver: Driver, metrics: PrometheusHandle) -> Router {
    use axum::routing::{get, post};
    Router::new()
        .route("/item", get(items_get::handler).post(item_post::handler))
        .route(
            "/item/:id",
            get(item_get::handler)
                .put(item_put::handler)
                .patch(item_patch::handler)
                .delete(item_delete::handler),
        )
        .route("/cart", get(carts_get::handler).post(cart_post::handler))
        .route("/cart/:id", get(cart_get::handler))
        .route("/cart/:cart_id/add/:item_id", post(cart_item_post::handler))
        .with_state(driver)
        .route("/metrics", get(metrics_get::handler).with_state(metrics))
        .route_layer(middleware::from_fn(track_requests))
}
