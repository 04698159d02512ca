use crate::booking::Booking;
use crate::room::RoomCategory;
use rust_decimal::Decimal;

#[derive(Debug, PartialEq, Clone)]
pub struct FoodLine {
    pub item: String,
    pub quantity: u32,
    pub line_total: Decimal,
}

/// Itemized charges for one booking.
#[derive(Debug, PartialEq, Clone)]
pub struct BillBreakdown {
    pub customer: String,
    pub room_number: u32,
    pub category: RoomCategory,
    pub room_charge: Decimal,
    pub food_lines: Vec<FoodLine>,
    pub food_total: Decimal,
    pub grand_total: Decimal,
}

/// Computes the bill for a booking. Pure: no mutation, no failure modes. Food
/// lines come out in insertion order.
pub fn compute(booking: &Booking) -> BillBreakdown {
    let room_charge = booking.category.nightly_price();
    let food_lines: Vec<FoodLine> = booking
        .food_orders
        .iter()
        .map(|food| FoodLine {
            item: food.item.clone(),
            quantity: food.quantity,
            line_total: food.line_total(),
        })
        .collect();
    let food_total: Decimal = food_lines.iter().map(|line| line.line_total).sum();

    BillBreakdown {
        customer: booking.customer.name.clone(),
        room_number: booking.room_number,
        category: booking.category,
        room_charge,
        food_lines,
        food_total,
        grand_total: room_charge + food_total,
    }
}
