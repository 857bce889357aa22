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

//! Storage abstraction and backends for the catalog tables.

use crate::model::*;
use shop_core::db::DbResult;

pub(crate) mod memory;
mod sequence;

/// Operations on the item and cart tables.
///
/// The expected absence of an entity is reported as `None` (or `false`) rather than as an error:
/// it is up to the caller to decide whether absence is a problem.  Every operation is atomic with
/// respect to the others.
#[async_trait::async_trait]
pub(crate) trait Store {
    /// Stores a new item described by `info` under a freshly-allocated identifier.
    async fn add_item(&self, info: ItemInfo) -> DbResult<Item>;

    /// Gets the item identified by `id`, or `None` if it does not exist.
    async fn get_item(&self, id: ItemId) -> DbResult<Option<Item>>;

    /// Gets up to `page.limit` items that satisfy `filter`, scanning identifiers upwards from
    /// `page.offset` and stopping at the first identifier that does not exist.
    async fn list_items(&self, page: Page, filter: &ItemsFilter) -> DbResult<Vec<Item>>;

    /// Overwrites all attributes of the item identified by `id` with `info`.  Returns the updated
    /// item, or `None` if it does not exist.
    async fn replace_item(&self, id: ItemId, info: ItemInfo) -> DbResult<Option<Item>>;

    /// Applies `patch` to the item identified by `id`.  Returns the updated item, or `None` if the
    /// item does not exist or is deleted, in which case nothing is modified.
    async fn patch_item(&self, id: ItemId, patch: &ItemPatch) -> DbResult<Option<Item>>;

    /// Marks the item identified by `id` as deleted.  Returns false if it does not exist.
    async fn delete_item(&self, id: ItemId) -> DbResult<bool>;

    /// Stores a new empty cart under a freshly-allocated identifier.
    async fn create_cart(&self) -> DbResult<Cart>;

    /// Gets the cart identified by `id`, or `None` if it does not exist.
    async fn get_cart(&self, id: CartId) -> DbResult<Option<Cart>>;

    /// Gets up to `page.limit` carts that satisfy `filter`, scanning identifiers upwards from
    /// `page.offset` and stopping at the first identifier that does not exist.
    async fn list_carts(&self, page: Page, filter: &CartsFilter) -> DbResult<Vec<Cart>>;

    /// Adds one unit of the item `item_id` to the cart `cart_id`.  Returns whether a new line was
    /// created along with the updated cart, or `None` if either the cart or the item do not exist,
    /// in which case nothing is modified.
    async fn add_item_to_cart(
        &self,
        cart_id: CartId,
        item_id: ItemId,
    ) -> DbResult<Option<(CartAddition, Cart)>>;
}
