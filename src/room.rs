use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum RoomCategory {
    Luxury,
    Deluxe,
}

impl RoomCategory {
    /// The nightly price is fixed per category.
    pub fn nightly_price(&self) -> Decimal {
        match self {
            RoomCategory::Luxury => dec!(5000),
            RoomCategory::Deluxe => dec!(3000),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoomCategory::Luxury => "Luxury Room",
            RoomCategory::Deluxe => "Deluxe Room",
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Room {
    pub number: u32,
    pub category: RoomCategory,
    pub booked: bool,
}

impl Room {
    pub fn new(number: u32, category: RoomCategory) -> Self {
        Self {
            number,
            category,
            booked: false,
        }
    }
}

/// The fixed room catalog: rooms 1-5 are Luxury, 6-10 are Deluxe. Rooms are
/// created once and never removed; only the `booked` flag changes.
#[derive(Debug, Default)]
pub struct Inventory {
    rooms: Vec<Room>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populates the catalog. Calling this on a non-empty inventory is a no-op.
    pub fn initialize(&mut self) {
        if !self.rooms.is_empty() {
            return;
        }

        for number in 1..=5 {
            self.rooms.push(Room::new(number, RoomCategory::Luxury));
        }
        for number in 6..=10 {
            self.rooms.push(Room::new(number, RoomCategory::Deluxe));
        }
    }

    pub fn find(&self, number: u32) -> Option<&Room> {
        self.rooms.iter().find(|room| room.number == number)
    }

    pub(crate) fn find_mut(&mut self, number: u32) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.number == number)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }
}
