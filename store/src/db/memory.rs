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

//! In-memory implementation of the catalog tables.

use crate::db::sequence::IdSequence;
use crate::db::Store;
use crate::model::*;
use futures::lock::Mutex;
use shop_core::db::{DbError, DbResult};
use std::collections::BTreeMap;

/// A keyed collection of rows along with the sequence that assigns their identifiers.
struct Table<T> {
    /// Rows keyed by their identifier.
    rows: BTreeMap<u64, T>,

    /// Source of identifiers for new rows.
    ids: IdSequence,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self { rows: BTreeMap::default(), ids: IdSequence::default() }
    }
}

impl<T> Table<T> {
    /// Stores `row` under a new identifier and returns that identifier.
    fn insert(&mut self, row: T) -> u64 {
        let id = self.ids.next_id();
        self.rows.insert(id, row);
        id
    }

    /// Stores `row` under the explicit identifier `id`, bypassing the sequence.
    #[cfg(test)]
    fn insert_at(&mut self, id: u64, row: T) {
        self.rows.insert(id, row);
    }

    /// Gets the row identified by `id`.
    fn get(&self, id: u64) -> Option<&T> {
        self.rows.get(&id)
    }

    /// Gets the row identified by `id` for modification.
    fn get_mut(&mut self, id: u64) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    /// Iterates over consecutive rows starting at `offset`, ending at the first identifier that
    /// is not present in the table.  Later rows are never reached, even if they exist.
    fn scan(&self, offset: u64) -> impl Iterator<Item = (u64, &T)> + '_ {
        (offset..=u64::MAX).map_while(move |id| self.rows.get(&id).map(|row| (id, row)))
    }
}

/// Stored representation of a cart line.  The item is referenced by identifier only so that the
/// cart always observes the current state of the item.
#[derive(Debug)]
struct CartLine {
    /// Identifier of the referenced item.
    item_id: ItemId,

    /// Number of units of the item.
    quantity: u64,
}

/// Builds the snapshot of the cart `id` with `lines` by resolving its items against `items`.
fn resolve_cart(id: u64, lines: &[CartLine], items: &Table<ItemInfo>) -> DbResult<Cart> {
    let mut cart_items = Vec::with_capacity(lines.len());
    for line in lines {
        let info = items.get(line.item_id.as_u64()).ok_or_else(|| {
            DbError::DataIntegrityError(format!(
                "Cart {} references unknown item {}",
                id, line.item_id
            ))
        })?;
        cart_items.push(CartItem::new(Item::new(line.item_id, info.clone()), line.quantity));
    }
    Ok(Cart::new(CartId::new(id), cart_items))
}

/// Catalog tables kept in process memory.
///
/// Each table is protected by its own lock.  Operations that need both tables always lock the
/// cart table first.
#[derive(Default)]
pub(crate) struct MemoryStore {
    /// The item table.
    items: Mutex<Table<ItemInfo>>,

    /// The cart table.
    carts: Mutex<Table<Vec<CartLine>>>,
}

impl MemoryStore {
    /// Stores an item under the explicit identifier `id`, leaving the id sequence untouched.
    /// Useful to craft tables with holes in them.
    #[cfg(test)]
    pub(crate) async fn insert_item_at(&self, id: ItemId, info: ItemInfo) {
        self.items.lock().await.insert_at(id.as_u64(), info);
    }

    /// Stores an empty cart under the explicit identifier `id`, leaving the id sequence untouched.
    /// Useful to craft tables with holes in them.
    #[cfg(test)]
    pub(crate) async fn insert_cart_at(&self, id: CartId) {
        self.carts.lock().await.insert_at(id.as_u64(), vec![]);
    }
}

#[async_trait::async_trait]
impl Store for MemoryStore {
    async fn add_item(&self, info: ItemInfo) -> DbResult<Item> {
        let mut items = self.items.lock().await;
        let id = items.insert(info.clone());
        Ok(Item::new(ItemId::new(id), info))
    }

    async fn get_item(&self, id: ItemId) -> DbResult<Option<Item>> {
        let items = self.items.lock().await;
        Ok(items.get(id.as_u64()).map(|info| Item::new(id, info.clone())))
    }

    async fn list_items(&self, page: Page, filter: &ItemsFilter) -> DbResult<Vec<Item>> {
        let items = self.items.lock().await;
        Ok(items
            .scan(*page.offset())
            .map(|(id, info)| Item::new(ItemId::new(id), info.clone()))
            .filter(|item| filter.matches(item))
            .take(*page.limit())
            .collect())
    }

    async fn replace_item(&self, id: ItemId, info: ItemInfo) -> DbResult<Option<Item>> {
        let mut items = self.items.lock().await;
        match items.get_mut(id.as_u64()) {
            Some(current) => {
                *current = info.clone();
                Ok(Some(Item::new(id, info)))
            }
            None => Ok(None),
        }
    }

    async fn patch_item(&self, id: ItemId, patch: &ItemPatch) -> DbResult<Option<Item>> {
        let mut items = self.items.lock().await;
        match items.get_mut(id.as_u64()) {
            Some(info) if !info.deleted() => {
                info.apply(patch);
                Ok(Some(Item::new(id, info.clone())))
            }
            _ => Ok(None),
        }
    }

    async fn delete_item(&self, id: ItemId) -> DbResult<bool> {
        let mut items = self.items.lock().await;
        match items.get_mut(id.as_u64()) {
            Some(info) => {
                info.mark_deleted();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn create_cart(&self) -> DbResult<Cart> {
        let mut carts = self.carts.lock().await;
        let id = carts.insert(vec![]);
        Ok(Cart::new(CartId::new(id), vec![]))
    }

    async fn get_cart(&self, id: CartId) -> DbResult<Option<Cart>> {
        let carts = self.carts.lock().await;
        let items = self.items.lock().await;
        carts.get(id.as_u64()).map(|lines| resolve_cart(id.as_u64(), lines, &items)).transpose()
    }

    async fn list_carts(&self, page: Page, filter: &CartsFilter) -> DbResult<Vec<Cart>> {
        let carts = self.carts.lock().await;
        let items = self.items.lock().await;
        let mut result = vec![];
        for (id, lines) in carts.scan(*page.offset()) {
            if result.len() == *page.limit() {
                break;
            }
            let cart = resolve_cart(id, lines, &items)?;
            if filter.matches(&cart) {
                result.push(cart);
            }
        }
        Ok(result)
    }

    async fn add_item_to_cart(
        &self,
        cart_id: CartId,
        item_id: ItemId,
    ) -> DbResult<Option<(CartAddition, Cart)>> {
        let mut carts = self.carts.lock().await;
        let items = self.items.lock().await;

        if items.get(item_id.as_u64()).is_none() {
            return Ok(None);
        }
        let lines = match carts.get_mut(cart_id.as_u64()) {
            Some(lines) => lines,
            None => return Ok(None),
        };

        let addition = match lines.iter_mut().find(|line| line.item_id == item_id) {
            Some(line) => {
                line.quantity += 1;
                CartAddition::Merged
            }
            None => {
                lines.push(CartLine { item_id, quantity: 1 });
                CartAddition::Created
            }
        };

        let cart = resolve_cart(cart_id.as_u64(), lines, &items)?;
        Ok(Some((addition, cart)))
    }
}
