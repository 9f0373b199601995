//! Orange Pi Zero 3 (H618).

use crate::pin::Fixed::*;
use crate::registry::HeaderLayout;
use crate::registry::Slot::{Fixed as F, Gpio as G};

/// 26 pin main header.
pub const PA: HeaderLayout = HeaderLayout {
    name: "PA",
    rows: &[
        &[F(V3_3), F(V5)],
        &[G("PH5"), F(V5)],
        &[G("PH4"), F(Ground)],
        &[G("PC9"), G("PH2")],
        &[F(Ground), G("PH3")],
        &[G("PC6"), G("PC11")],
        &[G("PC5"), F(Ground)],
        &[G("PC8"), G("PC15")],
        &[F(V3_3), G("PC14")],
        &[G("PH7"), F(Ground)],
        &[G("PH8"), G("PC7")],
        &[G("PH6"), G("PH9")],
        &[F(Ground), G("PH10")],
    ],
};

pub const HEADERS: &[HeaderLayout] = &[PA];
