use thiserror::Error;

pub type Result<T> = std::result::Result<T, HotelError>;

#[derive(Error, Debug)]
pub enum HotelError {
    #[error("room {0} does not exist")]
    RoomNotFound(u32),
    #[error("room {0} is already booked")]
    RoomAlreadyBooked(u32),
    #[error("no booking found for room {0}")]
    BookingNotFound(u32),
    #[error("quantity must be a positive number, got {0}")]
    InvalidQuantity(i64),
    #[error("invalid menu choice: {0}")]
    InvalidChoice(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
