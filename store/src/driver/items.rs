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

//! Operations on a collection of items.

use crate::driver::Driver;
use crate::model::*;
use log::debug;
use shop_core::driver::DriverResult;

impl Driver {
    /// Gets the items within `page` that satisfy `filter`.
    pub(crate) async fn list_items(
        self,
        page: Page,
        filter: ItemsFilter,
    ) -> DriverResult<Vec<Item>> {
        let items = self.store.list_items(page, &filter).await?;
        debug!("Listed {} items for {:?} and {:?}", items.len(), page, filter);
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Store;
    use crate::driver::testutils::*;

    #[tokio::test]
    async fn test_list_items_none() {
        let context = TestContext::setup();

        let page = Page::new(0, 10).unwrap();
        let items = context.driver().list_items(page, ItemsFilter::default()).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_list_items_some() {
        let context = TestContext::setup();

        let item0 = context.add_item("A", 5.0).await;
        let item1 = context.add_item("B", 15.0).await;
        let item2 = context.add_item("C", 25.0).await;
        context.store().delete_item(*item1.id()).await.unwrap();

        let page = Page::new(0, 10).unwrap();
        let items = context.driver().list_items(page, ItemsFilter::default()).await.unwrap();
        assert_eq!(vec![item0, item2.clone()], items);

        let filter = ItemsFilter::new(Bounds::new(10.0, None), false);
        let items = context.driver().list_items(page, filter).await.unwrap();
        assert_eq!(vec![item2], items);
    }
}
