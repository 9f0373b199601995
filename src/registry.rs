//! Registry of board headers.
//!
//! A header is registered once as rows of 1 or 2 slots following the physical layout of the connector: pin 1 is
//! row 0, column 0, and positions are counted row by row. Every slot is either an activated GPIO pin or a
//! fixed-function placeholder.

use std::collections::BTreeMap;

use log::debug;

use crate::error::RegistryError;
use crate::pin::{Fixed, HeaderPin, PinSet};

/// A header slot as boards describe it, before the pin is resolved against the activated pin set.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Slot {
    Gpio(&'static str),
    Fixed(Fixed),
}

/// Static description of one header of a board.
#[derive(Debug)]
pub struct HeaderLayout {
    pub name: &'static str,
    pub rows: &'static [&'static [Slot]],
}

#[derive(Clone, Debug, Default)]
pub struct Registry {
    headers: BTreeMap<String, Vec<Vec<HeaderPin>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a header.
    ///
    /// Fails if the name is taken, if a row doesn't hold 1 or 2 slots, if a GPIO pin was never activated, or if a
    /// GPIO pin is bound to two positions of this header. The same pin may appear on other headers. Nothing is
    /// registered on failure.
    ///
    /// The pins are taken as given: whether they belong to the chip is only checked by `register_layout`.
    pub fn register(&mut self, header: &str, rows: Vec<Vec<HeaderPin>>) -> Result<(), RegistryError> {
        use RegistryError::*;

        if self.headers.contains_key(header) {
            return Err(HeaderExists(header.to_owned()));
        }
        if rows.is_empty() {
            return Err(EmptyHeader(header.to_owned()));
        }

        let mut seen: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for (row_index, row) in rows.iter().enumerate() {
            if !(1..=2).contains(&row.len()) {
                return Err(InvalidRow {
                    header: header.to_owned(),
                    row: row_index,
                    len: row.len(),
                });
            }

            for (col_index, slot) in row.iter().enumerate() {
                let pin = match slot.as_gpio() {
                    Some(pin) => pin,
                    None => continue,
                };
                if !pin.available() {
                    return Err(NotActivated {
                        header: header.to_owned(),
                        pin: pin.name().to_owned(),
                    });
                }
                if let Some(&first) = seen.get(pin.name()) {
                    return Err(DuplicatePin {
                        header: header.to_owned(),
                        pin: pin.name().to_owned(),
                        first,
                        second: (row_index, col_index),
                    });
                }
                seen.insert(pin.name(), (row_index, col_index));
            }
        }

        debug!(
            "registry: Registered header {} with {} rows",
            header,
            rows.len()
        );
        self.headers.insert(header.to_owned(), rows);
        Ok(())
    }

    /// Resolves the slots of `layout` against `pins`, then registers the header.
    ///
    /// Every GPIO slot must name a pin of the set, and that pin must have been activated.
    pub fn register_layout(&mut self, layout: &HeaderLayout, pins: &PinSet) -> Result<(), RegistryError> {
        use RegistryError::UnknownPin;

        let mut rows = Vec::with_capacity(layout.rows.len());
        for row in layout.rows {
            let mut resolved = Vec::with_capacity(row.len());
            for slot in row.iter() {
                resolved.push(match *slot {
                    Slot::Fixed(fixed) => HeaderPin::Fixed(fixed),
                    Slot::Gpio(name) => {
                        let pin = pins.get(name).ok_or_else(|| UnknownPin {
                            header: layout.name.to_owned(),
                            pin: name.to_owned(),
                        })?;
                        HeaderPin::Gpio(pin.clone())
                    }
                });
            }
            rows.push(resolved);
        }

        self.register(layout.name, rows)
    }

    /// Slot at `row`, `col` of a header.
    pub fn lookup(&self, header: &str, row: usize, col: usize) -> Result<&HeaderPin, RegistryError> {
        self.rows(header)?
            .get(row)
            .and_then(|r| r.get(col))
            .ok_or_else(|| RegistryError::OutOfRange {
                header: header.to_owned(),
                position: format!("row {} column {}", row, col),
            })
    }

    /// Slot at physical `position` of a header, counting from 1 the way headers are labelled.
    pub fn pin(&self, header: &str, position: usize) -> Result<&HeaderPin, RegistryError> {
        let out_of_range = || RegistryError::OutOfRange {
            header: header.to_owned(),
            position: position.to_string(),
        };
        if position == 0 {
            return Err(out_of_range());
        }

        self.rows(header)?
            .iter()
            .flatten()
            .nth(position - 1)
            .ok_or_else(out_of_range)
    }

    /// Registered layout of a header.
    pub fn layout(&self, header: &str) -> Option<&[Vec<HeaderPin>]> {
        self.headers.get(header).map(Vec::as_slice)
    }

    /// Names of all registered headers, sorted.
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.headers.keys().map(String::as_str)
    }

    /// Every header position `pin` is wired to, as header name and physical position.
    pub fn positions_of(&self, pin: &str) -> Vec<(&str, usize)> {
        self.headers
            .iter()
            .flat_map(|(header, rows)| {
                rows.iter()
                    .flatten()
                    .enumerate()
                    .filter(move |(_, slot)| slot.is_gpio() && slot.name() == pin)
                    .map(move |(index, _)| (header.as_str(), index + 1))
            })
            .collect()
    }

    /// Whether `pin` is reachable on any registered header.
    pub fn is_connected(&self, pin: &str) -> bool {
        !self.positions_of(pin).is_empty()
    }

    fn rows(&self, header: &str) -> Result<&Vec<Vec<HeaderPin>>, RegistryError> {
        self.headers
            .get(header)
            .ok_or_else(|| RegistryError::UnknownHeader(header.to_owned()))
    }
}
