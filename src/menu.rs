use crate::bill::BillBreakdown;
use crate::engine::BookingEngine;
use crate::error::{HotelError, Result};
use crate::store::LedgerStore;
use std::io::{BufRead, ErrorKind, Write};
use std::str::FromStr;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Command {
    BookRoom,
    OrderFood,
    GenerateBill,
    ViewBookings,
    Exit,
}

enum Outcome {
    Continue,
    Exit,
}

fn parse_choice(line: &str) -> Result<Command> {
    match line.trim() {
        "1" => Ok(Command::BookRoom),
        "2" => Ok(Command::OrderFood),
        "3" => Ok(Command::GenerateBill),
        "4" => Ok(Command::ViewBookings),
        "5" => Ok(Command::Exit),
        other => Err(HotelError::InvalidChoice(other.to_string())),
    }
}

/// Runs the interactive menu until the exit command saves the ledger, or the
/// input ends. End-of-input without an exit command leaves without saving;
/// changes since the last save are lost, matching the session model.
///
/// Domain errors are printed and the loop continues; IO and save failures
/// propagate to the caller.
pub fn run<S, R, W>(
    engine: &mut BookingEngine,
    store: &mut S,
    mut input: R,
    output: &mut W,
) -> Result<()>
where
    S: LedgerStore,
    R: BufRead,
    W: Write,
{
    loop {
        write_menu(output)?;
        let Some(line) = read_line(&mut input)? else {
            return Ok(());
        };

        let outcome = parse_choice(&line)
            .and_then(|command| dispatch(command, engine, store, &mut input, output));
        match outcome {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Exit) => return Ok(()),
            Err(HotelError::Io(err)) if err.kind() == ErrorKind::UnexpectedEof => return Ok(()),
            Err(err @ (HotelError::Io(_) | HotelError::Serialization(_))) => return Err(err),
            Err(err) => writeln!(output, "Error: {err}")?,
        }
    }
}

fn dispatch<S, R, W>(
    command: Command,
    engine: &mut BookingEngine,
    store: &mut S,
    input: &mut R,
    output: &mut W,
) -> Result<Outcome>
where
    S: LedgerStore,
    R: BufRead,
    W: Write,
{
    match command {
        Command::BookRoom => {
            let room_number = prompt_parsed(input, output, "Enter room number: ")?;
            let name = prompt_line(input, output, "Customer Name: ")?;
            let contact = prompt_line(input, output, "Contact Number: ")?;
            engine.book_room(room_number, &name, &contact)?;
            writeln!(output, "Room booked successfully!")?;
            Ok(Outcome::Continue)
        }
        Command::OrderFood => {
            let room_number = prompt_parsed(input, output, "Enter room number: ")?;
            let item = prompt_line(input, output, "Food item: ")?;
            let quantity: i64 = prompt_parsed(input, output, "Quantity: ")?;
            engine.order_food(room_number, &item, quantity)?;
            writeln!(output, "Food added successfully!")?;
            Ok(Outcome::Continue)
        }
        Command::GenerateBill => {
            let room_number = prompt_parsed(input, output, "Enter room number: ")?;
            let bill = engine.bill(room_number)?;
            write_bill(output, &bill)?;
            Ok(Outcome::Continue)
        }
        Command::ViewBookings => {
            write_bookings(output, engine)?;
            Ok(Outcome::Continue)
        }
        Command::Exit => {
            store.save(engine.ledger())?;
            writeln!(output, "Data saved. Exiting system...")?;
            Ok(Outcome::Exit)
        }
    }
}

fn write_menu<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "===== HOTEL MANAGEMENT SYSTEM =====")?;
    writeln!(output, "1. Book Room")?;
    writeln!(output, "2. Order Food")?;
    writeln!(output, "3. Generate Bill")?;
    writeln!(output, "4. View All Bookings")?;
    writeln!(output, "5. Exit")?;
    write!(output, "Enter choice: ")?;
    output.flush()?;
    Ok(())
}

fn write_bill<W: Write>(output: &mut W, bill: &BillBreakdown) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "----- BILL DETAILS -----")?;
    writeln!(output, "Customer: {}", bill.customer)?;
    writeln!(output, "Room Type: {}", bill.category.label())?;
    writeln!(output, "Room Charges: ₹{}", bill.room_charge)?;
    for line in &bill.food_lines {
        writeln!(
            output,
            "{} x {} = ₹{}",
            line.item, line.quantity, line.line_total
        )?;
    }
    writeln!(output, "Food Charges: ₹{}", bill.food_total)?;
    writeln!(output, "Total Bill: ₹{}", bill.grand_total)?;
    Ok(())
}

fn write_bookings<W: Write>(output: &mut W, engine: &BookingEngine) -> Result<()> {
    let bookings = engine.bookings();
    if bookings.is_empty() {
        writeln!(output, "No bookings found.")?;
        return Ok(());
    }
    for (number, booking) in bookings {
        writeln!(
            output,
            "Room {} | {} | {}",
            number,
            booking.customer.name,
            booking.category.label()
        )?;
    }
    Ok(())
}

fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;
    match read_line(input)? {
        Some(line) => Ok(line.trim().to_string()),
        None => Err(HotelError::Io(std::io::Error::new(
            ErrorKind::UnexpectedEof,
            "input closed",
        ))),
    }
}

fn prompt_parsed<T, R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<T>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    let line = prompt_line(input, output, prompt)?;
    line.parse()
        .map_err(|_| HotelError::InvalidInput(line.clone()))
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;
    use std::io::Cursor;

    fn run_session(engine: &mut BookingEngine, store: &mut InMemoryStore, script: &str) -> String {
        let mut output = Vec::new();
        run(engine, store, Cursor::new(script), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_book_and_bill_session() {
        let mut engine = BookingEngine::new();
        let mut store = InMemoryStore::new();

        let script = "1\n3\nAlice\n555-0100\n2\n3\nCoffee\n2\n3\n3\n5\n";
        let output = run_session(&mut engine, &mut store, script);

        assert!(output.contains("Room booked successfully!"));
        assert!(output.contains("Food added successfully!"));
        assert!(output.contains("Customer: Alice"));
        assert!(output.contains("Room Type: Luxury Room"));
        assert!(output.contains("Coffee x 2 = ₹400"));
        assert!(output.contains("Total Bill: ₹5400"));
        assert!(output.contains("Data saved. Exiting system..."));
    }

    #[test]
    fn test_exit_saves_ledger() {
        let mut engine = BookingEngine::new();
        let mut store = InMemoryStore::new();

        run_session(&mut engine, &mut store, "1\n3\nAlice\n555-0100\n5\n");

        let saved = store.load();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved.get(&3).unwrap().customer.name, "Alice");
    }

    #[test]
    fn test_invalid_choice_reports_and_continues() {
        let mut engine = BookingEngine::new();
        let mut store = InMemoryStore::new();

        let output = run_session(&mut engine, &mut store, "9\n4\n5\n");

        assert!(output.contains("Error: invalid menu choice: 9"));
        assert!(output.contains("No bookings found."));
        assert!(output.contains("Data saved. Exiting system..."));
    }

    #[test]
    fn test_unparseable_room_number_reports_and_continues() {
        let mut engine = BookingEngine::new();
        let mut store = InMemoryStore::new();

        let output = run_session(&mut engine, &mut store, "3\nabc\n5\n");

        assert!(output.contains("Error: invalid input: abc"));
        assert!(output.contains("Data saved. Exiting system..."));
    }

    #[test]
    fn test_domain_error_reports_and_continues() {
        let mut engine = BookingEngine::new();
        let mut store = InMemoryStore::new();

        let output = run_session(&mut engine, &mut store, "2\n3\nCoffee\n2\n5\n");

        assert!(output.contains("Error: no booking found for room 3"));
        assert!(output.contains("Data saved. Exiting system..."));
    }

    #[test]
    fn test_end_of_input_leaves_without_saving() {
        let mut engine = BookingEngine::new();
        let mut store = InMemoryStore::new();

        run_session(&mut engine, &mut store, "1\n3\nAlice\n555-0100\n");

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_view_bookings_lists_sorted_rooms() {
        let mut engine = BookingEngine::new();
        engine.book_room(7, "Bob", "555-0101").unwrap();
        engine.book_room(3, "Alice", "555-0100").unwrap();
        let mut store = InMemoryStore::new();

        let output = run_session(&mut engine, &mut store, "4\n5\n");

        let room3 = output.find("Room 3 | Alice | Luxury Room").unwrap();
        let room7 = output.find("Room 7 | Bob | Deluxe Room").unwrap();
        assert!(room3 < room7);
    }
}
