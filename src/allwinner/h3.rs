//! Pin functions of the Allwinner H3. The H2+ has the same pinout.
//!
//! Only the banks wired to the headers of supported boards are mapped (A, G and L). The remaining pins are
//! part of the identity set but stay unavailable.
//!
//! https://linux-sunxi.org/images/4/4b/Allwinner_H3_Datasheet_V1.2.pdf

use super::{FunctionTable, EINT_MARKER};
use crate::pin_map::Bank;

pub(super) const BANKS: &[(Bank, u8)] = &[
    (Bank::A, 22),
    (Bank::C, 19),
    (Bank::D, 18),
    (Bank::E, 16),
    (Bank::F, 7),
    (Bank::G, 14),
    (Bank::L, 12),
];

pub(super) static FUNCTIONS: FunctionTable = FunctionTable {
    chip: "H3",
    eint_marker: EINT_MARKER,
    entries: &[
        ("PA0", ["UART2_TX", "JTAG_MS", "", "", "PA_EINT0"]),
        ("PA1", ["UART2_RX", "JTAG_CK", "", "", "PA_EINT1"]),
        ("PA2", ["UART2_RTS", "JTAG_DO", "", "", "PA_EINT2"]),
        ("PA3", ["UART2_CTS", "JTAG_DI", "", "", "PA_EINT3"]),
        ("PA4", ["UART0_TX", "", "", "", "PA_EINT4"]),
        ("PA5", ["UART0_RX", "PWM0", "", "", "PA_EINT5"]),
        ("PA6", ["SIM_PWREN", "", "", "", "PA_EINT6"]),
        ("PA7", ["SIM_CLK", "", "", "", "PA_EINT7"]),
        ("PA8", ["SIM_DATA", "", "", "", "PA_EINT8"]),
        ("PA9", ["SIM_RST", "", "", "", "PA_EINT9"]),
        ("PA10", ["SIM_DET", "", "", "", "PA_EINT10"]),
        ("PA11", ["TWI0_SCK", "DI_TX", "", "", "PA_EINT11"]),
        ("PA12", ["TWI0_SDA", "DI_RX", "", "", "PA_EINT12"]),
        ("PA13", ["SPI1_CS", "UART3_TX", "", "", "PA_EINT13"]),
        ("PA14", ["SPI1_CLK", "UART3_RX", "", "", "PA_EINT14"]),
        ("PA15", ["SPI1_MOSI", "UART3_RTS", "", "", "PA_EINT15"]),
        ("PA16", ["SPI1_MISO", "UART3_CTS", "", "", "PA_EINT16"]),
        ("PA17", ["OWA_OUT", "", "", "", "PA_EINT17"]),
        ("PA18", ["PCM0_SYNC", "TWI1_SCK", "", "", "PA_EINT18"]),
        ("PA19", ["PCM0_CLK", "TWI1_SDA", "", "", "PA_EINT19"]),
        ("PA20", ["PCM0_DOUT", "SIM_VPPEN", "", "", "PA_EINT20"]),
        ("PA21", ["PCM0_DIN", "SIM_VPPPP", "", "", "PA_EINT21"]),
        //
        ("PG0", ["SDC1_CLK", "", "", "", "PG_EINT0"]),
        ("PG1", ["SDC1_CMD", "", "", "", "PG_EINT1"]),
        ("PG2", ["SDC1_D0", "", "", "", "PG_EINT2"]),
        ("PG3", ["SDC1_D1", "", "", "", "PG_EINT3"]),
        ("PG4", ["SDC1_D2", "", "", "", "PG_EINT4"]),
        ("PG5", ["SDC1_D3", "", "", "", "PG_EINT5"]),
        ("PG6", ["UART1_TX", "", "", "", "PG_EINT6"]),
        ("PG7", ["UART1_RX", "", "", "", "PG_EINT7"]),
        ("PG8", ["UART1_RTS", "", "", "", "PG_EINT8"]),
        ("PG9", ["UART1_CTS", "", "", "", "PG_EINT9"]),
        ("PG10", ["PCM1_SYNC", "", "", "", "PG_EINT10"]),
        ("PG11", ["PCM1_CLK", "", "", "", "PG_EINT11"]),
        ("PG12", ["PCM1_DOUT", "", "", "", "PG_EINT12"]),
        ("PG13", ["PCM1_DIN", "", "", "", "PG_EINT13"]),
        //
        ("PL0", ["S_TWI_SCK", "", "", "", "S_PL_EINT0"]),
        ("PL1", ["S_TWI_SDA", "", "", "", "S_PL_EINT1"]),
        ("PL2", ["S_UART_TX", "", "", "", "S_PL_EINT2"]),
        ("PL3", ["S_UART_RX", "", "", "", "S_PL_EINT3"]),
        ("PL4", ["S_JTAG_MS", "", "", "", "S_PL_EINT4"]),
        ("PL5", ["S_JTAG_CK", "", "", "", "S_PL_EINT5"]),
        ("PL6", ["S_JTAG_DO", "", "", "", "S_PL_EINT6"]),
        ("PL7", ["S_JTAG_DI", "", "", "", "S_PL_EINT7"]),
        ("PL8", ["", "", "", "", "S_PL_EINT8"]),
        ("PL9", ["", "", "", "", "S_PL_EINT9"]),
        ("PL10", ["S_PWM", "", "", "", "S_PL_EINT10"]),
        ("PL11", ["S_CIR_RX", "", "", "", "S_PL_EINT11"]),
    ],
};
