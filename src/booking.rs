use crate::room::RoomCategory;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unit price applied to every food order, regardless of item.
pub const FOOD_UNIT_PRICE: Decimal = dec!(200);

/// Room number -> active booking. The sole persisted aggregate.
pub type Ledger = HashMap<u32, Booking>;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Customer {
    pub name: String,
    pub contact: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct FoodItem {
    pub item: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl FoodItem {
    pub fn new(item: impl Into<String>, quantity: u32) -> Self {
        Self {
            item: item.into(),
            quantity,
            unit_price: FOOD_UNIT_PRICE,
        }
    }

    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

/// Links one customer to one room plus its accumulated food orders. The room
/// is identified by number and category; the price derives from the category.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Booking {
    pub room_number: u32,
    pub category: RoomCategory,
    pub customer: Customer,
    pub food_orders: Vec<FoodItem>,
}

impl Booking {
    pub fn new(room_number: u32, category: RoomCategory, customer: Customer) -> Self {
        Self {
            room_number,
            category,
            customer,
            food_orders: Vec::new(),
        }
    }

    /// Appends to the order sequence; insertion order is preserved.
    pub fn add_food(&mut self, food: FoodItem) {
        self.food_orders.push(food);
    }
}
