use crate::bill::{self, BillBreakdown};
use crate::booking::{Booking, Customer, FoodItem, Ledger};
use crate::error::{HotelError, Result};
use crate::room::Inventory;

/// The booking session: the room inventory plus the ledger of active bookings.
///
/// Invariant: the ledger holds an entry for a room number exactly when that
/// room's `booked` flag is set. The flag is the authority when booking; a stale
/// ledger entry without a flag can never shadow an available room.
pub struct BookingEngine {
    inventory: Inventory,
    ledger: Ledger,
}

impl Default for BookingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingEngine {
    pub fn new() -> Self {
        Self::restore(Ledger::new())
    }

    /// Rebuilds the session from a previously saved ledger. The inventory is
    /// recreated fresh and the `booked` flag is set for every room with a
    /// ledger entry, re-establishing the invariant after a round-trip.
    pub fn restore(ledger: Ledger) -> Self {
        let mut inventory = Inventory::new();
        inventory.initialize();
        for room_number in ledger.keys() {
            if let Some(room) = inventory.find_mut(*room_number) {
                room.booked = true;
            }
        }
        Self { inventory, ledger }
    }

    /// Books a room for a new customer. Fails without touching any state if
    /// the room does not exist or is already booked.
    pub fn book_room(&mut self, room_number: u32, name: &str, contact: &str) -> Result<()> {
        let room = self
            .inventory
            .find(room_number)
            .ok_or(HotelError::RoomNotFound(room_number))?;
        if room.booked {
            return Err(HotelError::RoomAlreadyBooked(room_number));
        }
        let category = room.category;

        if let Some(room) = self.inventory.find_mut(room_number) {
            room.booked = true;
        }
        let customer = Customer {
            name: name.to_string(),
            contact: contact.to_string(),
        };
        self.ledger
            .insert(room_number, Booking::new(room_number, category, customer));
        Ok(())
    }

    /// Appends a food order to an existing booking. The unit price is the
    /// process-wide constant; only the quantity varies per order.
    pub fn order_food(&mut self, room_number: u32, item: &str, quantity: i64) -> Result<()> {
        if quantity < 1 {
            return Err(HotelError::InvalidQuantity(quantity));
        }
        let quantity =
            u32::try_from(quantity).map_err(|_| HotelError::InvalidQuantity(quantity))?;

        let booking = self
            .ledger
            .get_mut(&room_number)
            .ok_or(HotelError::BookingNotFound(room_number))?;
        booking.add_food(FoodItem::new(item, quantity));
        Ok(())
    }

    pub fn booking(&self, room_number: u32) -> Result<&Booking> {
        self.ledger
            .get(&room_number)
            .ok_or(HotelError::BookingNotFound(room_number))
    }

    /// Bookings sorted by room number. The ledger map does not order its
    /// entries; sorting keeps listings stable across runs.
    pub fn bookings(&self) -> Vec<(u32, &Booking)> {
        let mut entries: Vec<(u32, &Booking)> = self
            .ledger
            .iter()
            .map(|(number, booking)| (*number, booking))
            .collect();
        entries.sort_by_key(|(number, _)| *number);
        entries
    }

    pub fn bill(&self, room_number: u32) -> Result<BillBreakdown> {
        Ok(bill::compute(self.booking(room_number)?))
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }
}
