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

//! High-level data types.
//!
//! Carts never own the items they contain: a cart line only remembers which item it refers to and
//! how many units of it were added.  The `Cart` and `CartItem` types in this module are snapshots
//! assembled by the storage layer on every read, which is why their derived properties (price,
//! quantity and availability) always reflect the current state of the referenced items.

use derive_getters::Getters;
use derive_more::{Constructor, Display};
use serde::de::Visitor;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use shop_core::model::{ModelError, ModelResult};

/// Identifier of an item.
#[derive(
    Clone, Constructor, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub(crate) struct ItemId(u64);

impl ItemId {
    /// Returns the raw numeric value of the identifier.
    pub(crate) fn as_u64(self) -> u64 {
        self.0
    }
}

/// Identifier of a cart.
#[derive(
    Clone, Constructor, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub(crate) struct CartId(u64);

impl CartId {
    /// Returns the raw numeric value of the identifier.
    pub(crate) fn as_u64(self) -> u64 {
        self.0
    }
}

/// A non-negative and finite monetary amount.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub(crate) struct Price(f64);

impl Price {
    /// Creates a new price from an untrusted `value`, making sure it is valid.
    pub(crate) fn new(value: f64) -> ModelResult<Self> {
        if !value.is_finite() {
            return Err(ModelError(format!("Price {} is not a finite number", value)));
        }
        if value < 0.0 {
            return Err(ModelError(format!("Price {} cannot be negative", value)));
        }
        Ok(Self(value))
    }

    /// Returns the price as a raw floating point number.
    pub(crate) fn as_f64(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
impl From<f64> for Price {
    /// Creates a new price from a hardcoded value, which must be valid.
    fn from(value: f64) -> Self {
        Price::new(value).expect("Hardcoded prices must be valid")
    }
}

/// A deserialization visitor for a `Price`.
struct PriceVisitor;

impl Visitor<'_> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a non-negative number")
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Price::new(v).map_err(|e| E::custom(e.to_string()))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Price::new(v as f64).map_err(|e| E::custom(e.to_string()))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Price::new(v as f64).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_f64(PriceVisitor)
    }
}

/// Mutable attributes of an item.
#[derive(Clone, Constructor, Debug, Deserialize, Getters, PartialEq, Serialize)]
pub(crate) struct ItemInfo {
    /// Human-readable name of the item.
    name: String,

    /// Price of one unit of the item.
    price: Price,

    /// Whether the item has been soft-deleted.
    #[serde(default)]
    deleted: bool,
}

impl ItemInfo {
    /// Applies the fields present in `patch` to this item, leaving the others untouched.
    pub(crate) fn apply(&mut self, patch: &ItemPatch) {
        if let Some(name) = patch.name() {
            self.name = name.clone();
        }
        if let Some(price) = patch.price() {
            self.price = *price;
        }
    }

    /// Marks the item as deleted.
    pub(crate) fn mark_deleted(&mut self) {
        self.deleted = true;
    }
}

/// Partial update of an item.
///
/// There is intentionally no way to express a change to the `deleted` flag: deletion goes through
/// its own operation.
#[derive(Clone, Constructor, Debug, Default, Getters, PartialEq)]
pub(crate) struct ItemPatch {
    /// New name for the item, if any.
    name: Option<String>,

    /// New price for the item, if any.
    price: Option<Price>,
}

/// An item stored in the catalog.
#[derive(Clone, Constructor, Debug, Getters, PartialEq, Serialize)]
pub(crate) struct Item {
    /// Identifier of the item, assigned at creation time.
    id: ItemId,

    /// Current attributes of the item.
    #[serde(flatten)]
    info: ItemInfo,
}

/// A line of a cart: one distinct item and how many units of it the cart holds.
#[derive(Clone, Constructor, Debug, Getters, PartialEq)]
pub(crate) struct CartItem {
    /// Snapshot of the referenced item at the time the cart was read.
    item: Item,

    /// Number of units of the item.  Always at least 1.
    quantity: u64,
}

impl CartItem {
    /// Whether the referenced item can still be purchased.
    pub(crate) fn available(&self) -> bool {
        !self.item.info.deleted
    }
}

impl Serialize for CartItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CartItem", 4)?;
        state.serialize_field("id", &self.item.id)?;
        state.serialize_field("name", &self.item.info.name)?;
        state.serialize_field("quantity", &self.quantity)?;
        state.serialize_field("available", &self.available())?;
        state.end()
    }
}

/// A cart with its lines in the order in which items were first added.
#[derive(Clone, Constructor, Debug, Getters, PartialEq)]
pub(crate) struct Cart {
    /// Identifier of the cart, assigned at creation time.
    id: CartId,

    /// Lines of the cart.
    items: Vec<CartItem>,
}

impl Cart {
    /// Total price of the cart given the current price of its items.
    pub(crate) fn price(&self) -> f64 {
        self.items.iter().map(|line| line.item.info.price.as_f64() * line.quantity as f64).sum()
    }

    /// Total number of units in the cart.
    pub(crate) fn quantity(&self) -> u64 {
        self.items.iter().map(|line| line.quantity).sum()
    }
}

impl Serialize for Cart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Cart", 4)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("items", &self.items)?;
        state.serialize_field("price", &self.price())?;
        state.serialize_field("quantity", &self.quantity())?;
        state.end()
    }
}

/// Outcome of adding an item to a cart.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CartAddition {
    /// The cart did not contain the item and got a new line for it.
    Created,

    /// The cart already contained the item and its quantity was incremented.
    Merged,
}

/// Window of a listing: where the id scan starts and how many matches to return at most.
#[derive(Clone, Copy, Debug, Getters, PartialEq)]
pub(crate) struct Page {
    /// First identifier to consider.
    offset: u64,

    /// Maximum number of matches to return.  Always positive.
    limit: usize,
}

impl Page {
    /// Creates a new page from untrusted values, making sure they are valid.
    pub(crate) fn new(offset: u64, limit: usize) -> ModelResult<Self> {
        if limit == 0 {
            return Err(ModelError("Limit must be positive".to_owned()));
        }
        Ok(Self { offset, limit })
    }
}

/// Open interval of accepted values: values must be strictly greater than `min` and, if `max` is
/// present, strictly smaller than it.
#[derive(Clone, Constructor, Copy, Debug, Default, PartialEq)]
pub(crate) struct Bounds<T> {
    /// Exclusive lower bound.
    min: T,

    /// Exclusive upper bound, or unbounded if `None`.
    max: Option<T>,
}

impl<T: Copy + PartialOrd> Bounds<T> {
    /// Checks whether `value` lies within the bounds.
    pub(crate) fn contains(&self, value: T) -> bool {
        self.min < value && self.max.map_or(true, |max| value < max)
    }
}

/// Criteria to select items in a listing.
#[derive(Clone, Constructor, Debug, Default, PartialEq)]
pub(crate) struct ItemsFilter {
    /// Accepted item prices.
    price: Bounds<f64>,

    /// Whether to include soft-deleted items.
    show_deleted: bool,
}

impl ItemsFilter {
    /// Checks whether `item` satisfies the filter.
    pub(crate) fn matches(&self, item: &Item) -> bool {
        self.price.contains(item.info.price.as_f64()) && (self.show_deleted || !item.info.deleted)
    }
}

/// Criteria to select carts in a listing.
#[derive(Clone, Constructor, Debug, Default, PartialEq)]
pub(crate) struct CartsFilter {
    /// Accepted total cart prices.
    price: Bounds<f64>,

    /// Accepted total cart quantities.
    quantity: Bounds<u64>,
}

impl CartsFilter {
    /// Checks whether `cart` satisfies the filter.
    pub(crate) fn matches(&self, cart: &Cart) -> bool {
        self.price.contains(cart.price()) && self.quantity.contains(cart.quantity())
    }
}
