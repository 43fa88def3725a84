//! Operator console: reads menu choices and raw strings, calls into the lot,
//! prints the outcome.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::domain::Vehicle;
use crate::error::LotError;
use crate::facility::Lot;

const MENU: &str = "\n1. Park Vehicle\n2. Remove Vehicle\n3. Find Vehicle\n4. Display Available Spots\n5. Exit";

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Park,
    Remove,
    Find,
    Report,
    Exit,
}

impl MenuChoice {
    /// Accepts the menu number or its keyword, case-insensitive
    pub fn parse(input: &str) -> Option<MenuChoice> {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" | "park" => Some(MenuChoice::Park),
            "2" | "remove" => Some(MenuChoice::Remove),
            "3" | "find" => Some(MenuChoice::Find),
            "4" | "report" => Some(MenuChoice::Report),
            "5" | "exit" | "quit" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Holds the I/O handles for one operator session against a shared lot
pub struct Console<'a, R, W> {
    lot: &'a Lot,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(lot: &'a Lot, input: R, output: W) -> Self {
        Self { lot, input, output }
    }

    /// Serve menu requests until the operator exits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(line) = self.prompt("Choose an option: ")? else {
                return Ok(());
            };

            let keep_going = match MenuChoice::parse(&line) {
                Some(MenuChoice::Park) => self.park()?,
                Some(MenuChoice::Remove) => self.remove()?,
                Some(MenuChoice::Find) => self.find()?,
                Some(MenuChoice::Report) => {
                    self.print_report()?;
                    true
                }
                Some(MenuChoice::Exit) => false,
                None => {
                    writeln!(self.output, "Invalid option. Try again.")?;
                    true
                }
            };

            if !keep_going {
                return Ok(());
            }
        }
    }

    /// Print one availability line per floor
    pub fn print_report(&mut self) -> Result<()> {
        for entry in self.lot.available_report() {
            writeln!(self.output, "{}", entry)?;
        }
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `message` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read console input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn park(&mut self) -> Result<bool> {
        let Some(category) = self.prompt("Enter Vehicle Type (BIKE/CAR/TRUCK): ")? else {
            return Ok(false);
        };
        let Some(plate) = self.prompt("Enter License Plate: ")? else {
            return Ok(false);
        };

        match Vehicle::from_parts(&category, &plate) {
            Ok(vehicle) => {
                let outcome = if self.lot.park(vehicle) {
                    "Success"
                } else {
                    "Failed"
                };
                writeln!(self.output, "Parking: {}", outcome)?;
            }
            Err(LotError::InvalidCategory(_)) => {
                writeln!(self.output, "Invalid vehicle type. Try again.")?;
            }
            Err(LotError::EmptyPlate) => {
                writeln!(self.output, "Invalid license plate. Try again.")?;
            }
            Err(e) => return Err(e.into()),
        }
        Ok(true)
    }

    fn remove(&mut self) -> Result<bool> {
        let Some(plate) = self.prompt("Enter License Plate: ")? else {
            return Ok(false);
        };
        let outcome = if self.lot.remove(&plate) {
            "Success"
        } else {
            "Failed"
        };
        writeln!(self.output, "Removing: {}", outcome)?;
        Ok(true)
    }

    fn find(&mut self) -> Result<bool> {
        let Some(plate) = self.prompt("Enter License Plate: ")? else {
            return Ok(false);
        };
        writeln!(
            self.output,
            "Location: {}",
            self.lot.describe_location(&plate)
        )?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(lot: &Lot, script: &str) -> String {
        let mut console = Console::new(lot, Cursor::new(script.to_string()), Vec::new());
        console.run().unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Park));
        assert_eq!(MenuChoice::parse(" REMOVE "), Some(MenuChoice::Remove));
        assert_eq!(MenuChoice::parse("find"), Some(MenuChoice::Find));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Report));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_park_find_remove_session() {
        let lot = Lot::new(&[vec![2, 1]]).unwrap();
        let out = run_session(
            &lot,
            "1\ntruck\nTRK-1\n3\nTRK-1\n2\nTRK-1\n3\nTRK-1\n5\n",
        );

        assert!(out.contains("Parking: Success"));
        assert!(out.contains("Location: Floor 1 Spot 1"));
        assert!(out.contains("Removing: Success"));
        assert!(out.contains("Location: Vehicle Not Found"));
        assert_eq!(lot.total_available(), 3);
    }

    #[test]
    fn test_invalid_input_keeps_running() {
        let lot = Lot::new(&[vec![1]]).unwrap();
        let out = run_session(&lot, "9\n1\nbus\nB-1\n1\ncar\n   \n1\nbike\nBK-1\nexit\n");

        assert!(out.contains("Invalid option. Try again."));
        assert!(out.contains("Invalid vehicle type. Try again."));
        assert!(out.contains("Invalid license plate. Try again."));
        assert!(out.contains("Parking: Success"));
        assert_eq!(lot.locate("BK-1").map(|l| l.spot), Some(1));
    }

    #[test]
    fn test_full_lot_and_unknown_plate() {
        let lot = Lot::new(&[vec![1]]).unwrap();
        let out = run_session(&lot, "1\ncar\nA\n1\ncar\nB\n2\nZZZ\n");

        assert!(out.contains("Parking: Success"));
        assert!(out.contains("Parking: Failed"));
        assert!(out.contains("Removing: Failed"));
    }

    #[test]
    fn test_report() {
        let lot = Lot::new(&[vec![5, 3, 2], vec![4]]).unwrap();
        let out = run_session(&lot, "1\nCAR\nA\n4\n5\n");

        assert!(out.contains("Floor 1: 9 spots available\nFloor 2: 4 spots available\n"));
    }

    #[test]
    fn test_end_of_input_mid_prompt() {
        let lot = Lot::new(&[vec![2]]).unwrap();
        let out = run_session(&lot, "1\nCAR\n");

        assert!(out.ends_with("Enter License Plate: "));
        assert_eq!(lot.total_available(), 2);
    }
}
