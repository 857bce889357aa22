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

//! Operations on one cart.

use crate::driver::Driver;
use crate::model::*;
use log::info;
use shop_core::driver::{DriverError, DriverResult};

impl Driver {
    /// Creates a new empty cart.
    pub(crate) async fn create_cart(self) -> DriverResult<Cart> {
        let cart = self.store.create_cart().await?;
        info!("Created cart {}", cart.id());
        Ok(cart)
    }

    /// Gets the cart identified by `id`.
    pub(crate) async fn get_cart(self, id: CartId) -> DriverResult<Cart> {
        match self.store.get_cart(id).await? {
            Some(cart) => Ok(cart),
            None => Err(DriverError::NotFound(format!("Cart {} not found", id))),
        }
    }

    /// Adds one unit of the item `item_id` to the cart `cart_id`, returning whether the cart got a
    /// new line for it.  Deleted items can be added too.
    pub(crate) async fn add_item_to_cart(
        self,
        cart_id: CartId,
        item_id: ItemId,
    ) -> DriverResult<(CartAddition, Cart)> {
        match self.store.add_item_to_cart(cart_id, item_id).await? {
            Some((addition, cart)) => {
                info!("Added item {} to cart {} ({:?})", item_id, cart_id, addition);
                Ok((addition, cart))
            }
            None => Err(DriverError::NotFound(format!(
                "Cannot add item {} to cart {}: not found",
                item_id, cart_id
            ))),
        }
    }
}
