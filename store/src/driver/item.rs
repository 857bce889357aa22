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

//! Operations on one item.

use crate::driver::Driver;
use crate::model::*;
use log::info;
use shop_core::driver::{DriverError, DriverResult};

impl Driver {
    /// Adds a new item described by `info` to the catalog.
    pub(crate) async fn create_item(self, info: ItemInfo) -> DriverResult<Item> {
        let item = self.store.add_item(info).await?;
        info!("Created item {} ({})", item.id(), item.info().name());
        Ok(item)
    }

    /// Gets the item identified by `id`, including deleted ones.
    pub(crate) async fn get_item(self, id: ItemId) -> DriverResult<Item> {
        match self.store.get_item(id).await? {
            Some(item) => Ok(item),
            None => Err(DriverError::NotFound(format!("Item {} not found", id))),
        }
    }

    /// Replaces all attributes of the existing item `id` with `info`.
    pub(crate) async fn replace_item(self, id: ItemId, info: ItemInfo) -> DriverResult<Item> {
        match self.store.replace_item(id, info).await? {
            Some(item) => {
                info!("Replaced item {}", id);
                Ok(item)
            }
            None => Err(DriverError::NotFound(format!("Item {} not found", id))),
        }
    }

    /// Applies `patch` to the existing and non-deleted item `id`.
    pub(crate) async fn patch_item(self, id: ItemId, patch: ItemPatch) -> DriverResult<Item> {
        match self.store.patch_item(id, &patch).await? {
            Some(item) => {
                info!("Patched item {}", id);
                Ok(item)
            }
            None => Err(DriverError::NotFound(format!("Item {} not found or deleted", id))),
        }
    }

    /// Marks the existing item `id` as deleted.
    pub(crate) async fn delete_item(self, id: ItemId) -> DriverResult<()> {
        if !self.store.delete_item(id).await? {
            return Err(DriverError::NotFound(format!("Item {} not found", id)));
        }
        info!("Deleted item {}", id);
        Ok(())
    }
}
