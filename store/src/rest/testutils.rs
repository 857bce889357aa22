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

//! Test utilities for the REST API.

use crate::db::memory::MemoryStore;
use crate::db::Store;
use crate::driver::Driver;
use crate::model::*;
use crate::rest::app;
use axum::Router;
use std::sync::Arc;

pub(crate) struct TestContext {
    store: Arc<MemoryStore>,
    app: Router,
}

impl TestContext {
    pub(crate) fn setup() -> Self {
        shop_core::rest::testutils::setup_logging();
        let store = Arc::from(MemoryStore::default());
        let driver = Driver::new(store.clone());
        let metrics = crate::monitoring::install().unwrap();
        let app = app(driver, metrics);
        Self { store, app }
    }

    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    pub(crate) fn into_app(self) -> Router {
        self.app
    }

    pub(crate) async fn add_item(&self, name: &str, price: f64) -> Item {
        let info = ItemInfo::new(name.to_owned(), Price::from(price), false);
        self.store.add_item(info).await.unwrap()
    }

    pub(crate) async fn delete_item(&self, id: ItemId) {
        assert!(self.store.delete_item(id).await.unwrap());
    }

    pub(crate) async fn get_item(&self, id: ItemId) -> Option<Item> {
        self.store.get_item(id).await.unwrap()
    }

    pub(crate) async fn create_cart(&self) -> Cart {
        self.store.create_cart().await.unwrap()
    }

    pub(crate) async fn add_item_to_cart(&self, cart_id: CartId, item_id: ItemId) {
        self.store.add_item_to_cart(cart_id, item_id).await.unwrap().unwrap();
    }

    pub(crate) async fn get_cart(&self, id: CartId) -> Option<Cart> {
        self.store.get_cart(id).await.unwrap()
    }
}
