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

//! Operations on a collection of carts.

use crate::driver::Driver;
use crate::model::*;
use log::debug;
use shop_core::driver::DriverResult;

impl Driver {
    /// Gets the carts within `page` that satisfy `filter`.
    pub(crate) async fn list_carts(
        self,
        page: Page,
        filter: CartsFilter,
    ) -> DriverResult<Vec<Cart>> {
        let carts = self.store.list_carts(page, &filter).await?;
        debug!("Listed {} carts for {:?} and {:?}", carts.len(), page, filter);
        Ok(carts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Store;
    use crate::driver::testutils::*;

    #[tokio::test]
    async fn test_list_carts_none() {
        let context = TestContext::setup();

        let page = Page::new(0, 10).unwrap();
        let carts = context.driver().list_carts(page, CartsFilter::default()).await.unwrap();
        assert!(carts.is_empty());
    }

    #[tokio::test]
    async fn test_list_carts_some() {
        let context = TestContext::setup();

        let item = context.add_item("Milk", 80.0).await;
        let empty = context.store().create_cart().await.unwrap();
        let full = context.store().create_cart().await.unwrap();
        context.store().add_item_to_cart(*full.id(), *item.id()).await.unwrap().unwrap();

        let page = Page::new(0, 10).unwrap();
        let carts = context.driver().list_carts(page, CartsFilter::default()).await.unwrap();
        assert_eq!(vec![*full.id()], carts.iter().map(|cart| *cart.id()).collect::<Vec<_>>());

        let filter = CartsFilter::new(Bounds::default(), Bounds::new(0, Some(1)));
        let carts = context.driver().list_carts(page, filter).await.unwrap();
        assert!(carts.is_empty());

        let filter = CartsFilter::new(Bounds::new(-1.0, None), Bounds::default());
        let carts = context.driver().list_carts(page, filter).await.unwrap();
        assert!(!carts.iter().any(|cart| cart.id() == empty.id()));
    }
}
