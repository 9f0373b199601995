//! Orange Pi Zero (H2+, and the LTS revision with an H3).
//!
//! http://www.orangepi.org/html/hardWare/computerAndMicrocontrollers/details/Orange-Pi-Zero.html

use crate::pin::Fixed::*;
use crate::registry::HeaderLayout;
use crate::registry::Slot::{Fixed as F, Gpio as G};

/// 26 pin main header.
pub const PA: HeaderLayout = HeaderLayout {
    name: "PA",
    rows: &[
        &[F(DcIn), F(V5)], // 3.3V rail fed from DC in
        &[G("PA12"), F(V5)],
        &[G("PA11"), F(Ground)],
        &[G("PA6"), G("PG6")],
        &[F(Ground), G("PG7")],
        &[G("PA1"), G("PA7")],
        &[G("PA0"), F(Ground)],
        &[G("PA3"), G("PA19")],
        &[F(DcIn), G("PA18")],
        &[G("PA15"), F(Ground)],
        &[G("PA16"), G("PA2")],
        &[G("PA14"), G("PA13")],
        &[F(Ground), G("PA10")],
    ],
};

/// 13 pin function interface.
pub const FUN: HeaderLayout = HeaderLayout {
    name: "FUN",
    rows: &[
        &[F(V5)],
        &[F(Ground)],
        &[F(Invalid)], // USB-DM2
        &[F(Invalid)], // USB-DP2
        &[F(Invalid)], // USB-DM3
        &[F(Invalid)], // USB-DP3
        &[F(Analog("HP_RIGHT"))],
        &[F(Analog("HP_LEFT"))],
        &[F(Invalid)], // TV out
        &[F(Invalid)], // mic bias
        &[F(Analog("MIC_IN"))],
        &[F(Analog("MIC_GND"))],
        &[G("PL11")], // IR receiver
    ],
};

pub const HEADERS: &[HeaderLayout] = &[PA, FUN];
