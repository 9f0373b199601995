//! Pin functions of the Allwinner H616. The H618 is the same die and uses this table too.
//!
//! The mapping comes from the datasheet, page 26:
//! https://linux-sunxi.org/images/3/30/H616_Datasheet_V1.0.pdf
//!
//! - The datasheet uses TWI instead of I2C, the name is kept here.
//! - SDC is the SD card controller.
//! - NAND connects to a NAND flash controller.

use super::{FunctionTable, EINT_MARKER};
use crate::pin_map::Bank;

pub(super) const BANKS: &[(Bank, u8)] = &[
    (Bank::C, 17),
    (Bank::F, 7),
    (Bank::G, 20),
    (Bank::H, 11),
    (Bank::I, 17),
];

pub(super) static FUNCTIONS: FunctionTable = FunctionTable {
    chip: "H616",
    eint_marker: EINT_MARKER,
    entries: &[
        ("PC0", ["NAND_WE", "SDC2_DS", "SPI0_CLK", "", "PC_EINT0"]),
        ("PC1", ["NAND_ALE", "SDC2_RST", "", "", "PC_EINT1"]),
        ("PC2", ["NAND_CLE", "", "SPI0_MOSI", "", "PC_EINT2"]),
        ("PC3", ["NAND_CE1", "", "SPI0_CS0", "BOOT_SEL1", "PC_EINT3"]),
        ("PC4", ["NAND_CE0", "", "SPI0_MISO", "BOOT_SEL2", "PC_EINT4"]),
        ("PC5", ["NAND_RE", "SDC2_CLK", "", "BOOT_SEL3", "PC_EINT5"]),
        ("PC6", ["NAND_RB0", "SDC2_CMD", "", "BOOT_SEL4", "PC_EINT6"]),
        ("PC7", ["NAND_RB1", "", "SPI0_CS1", "", "PC_EINT7"]),
        ("PC8", ["NAND_DQ7", "SDC2_D3", "", "", "PC_EINT8"]),
        ("PC9", ["NAND_DQ6", "SDC2_D4", "", "", "PC_EINT9"]),
        ("PC10", ["NAND_DQ5", "SDC2_D0", "", "", "PC_EINT10"]),
        ("PC11", ["NAND_DQ4", "SDC2_D5", "", "", "PC_EINT11"]),
        ("PC12", ["NAND_DQS", "", "", "", "PC_EINT12"]),
        ("PC13", ["NAND_DQ3", "SDC2_D1", "", "", "PC_EINT13"]),
        ("PC14", ["NAND_DQ2", "SDC2_D6", "", "", "PC_EINT14"]),
        ("PC15", ["NAND_DQ1", "SDC2_D2", "SPI0_WP", "", "PC_EINT15"]),
        ("PC16", ["NAND_DQ0", "SDC2_D7", "SPI0_HOLD", "", "PC_EINT16"]),
        //
        ("PF0", ["SDC0_D1", "JTAG_MS", "", "", "PF_EINT0"]),
        ("PF1", ["SDC0_D0", "JTAG_DI", "", "", "PF_EINT1"]),
        ("PF2", ["SDC0_CLK", "UART0_TX", "", "", "PF_EINT2"]),
        ("PF3", ["SDC0_CMD", "JTAG_DO", "", "", "PF_EINT3"]),
        ("PF4", ["SDC0_D3", "UART0_RX", "", "", "PF_EINT4"]),
        ("PF5", ["SDC0_D2", "JTAG_CK", "", "", "PF_EINT5"]),
        ("PF6", ["", "", "", "", "PF_EINT6"]),
        //
        ("PG0", ["SDC1_CLK", "", "", "", "PG_EINT0"]),
        ("PG1", ["SDC1_CMD", "", "", "", "PG_EINT1"]),
        ("PG2", ["SDC1_D0", "", "", "", "PG_EINT2"]),
        ("PG3", ["SDC1_D1", "", "", "", "PG_EINT3"]),
        ("PG4", ["SDC1_D2", "", "", "", "PG_EINT4"]),
        ("PG5", ["SDC1_D3", "", "", "", "PG_EINT5"]),
        ("PG6", ["UART1_TX", "", "JTAG_MS", "", "PG_EINT6"]),
        ("PG7", ["UART1_RX", "", "JTAG_CK", "", "PG_EINT7"]),
        ("PG8", ["UART1_RTS", "PLL_LOCK_DBG", "JTAG_DO", "", "PG_EINT8"]),
        ("PG9", ["UART1_CTS", "", "JTAG_DI", "", "PG_EINT9"]),
        ("PG10", ["H_I2S2_MCLK", "X32KFOUT", "", "", "PG_EINT10"]),
        ("PG11", ["H_I2S2_BCLK", "", "BIST_RESULT0", "", "PG_EINT11"]),
        ("PG12", ["H_I2S2_LRCK", "", "BIST_RESULT1", "", "PG_EINT12"]),
        ("PG13", ["H_I2S2_DOUT0", "H_I2S2_DIN1", "BIST_RESULT2", "", "PG_EINT13"]),
        ("PG14", ["H_I2S2_DIN0", "H_I2S2_DOUT1", "BIST_RESULT3", "", "PG_EINT14"]),
        ("PG15", ["UART2_TX", "", "", "TWI4_SCK", "PG_EINT15"]),
        ("PG16", ["UART2_RX", "", "", "TWI4_SDA", "PG_EINT16"]),
        ("PG17", ["UART2_RTS", "", "", "TWI3_SCK", "PG_EINT17"]),
        ("PG18", ["UART2_CTS", "", "", "TWI3_SDA", "PG_EINT18"]),
        ("PG19", ["", "", "PWM1", "", "PG_EINT19"]),
        //
        ("PH0", ["UART0_TX", "", "PWM3", "TWI1_SCK", "PH_EINT0"]),
        ("PH1", ["UART0_RX", "", "PWM4", "TWI1_SDA", "PH_EINT1"]),
        ("PH2", ["UART5_TX", "OWA_MCLK", "PWM2", "TWI2_SCK", "PH_EINT2"]),
        ("PH3", ["UART5_RX", "", "PWM1", "TWI2_SDA", "PH_EINT3"]),
        ("PH4", ["", "OWA_OUT", "", "TWI3_SCK", "PH_EINT4"]),
        ("PH5", ["UART2_TX", "I2S3_MCLK", "SPI1_CS0", "TWI3_SDA", "PH_EINT5"]),
        ("PH6", ["UART2_RX", "I2S3_BCLK", "SPI1_CLK", "TWI4_SCK", "PH_EINT6"]),
        ("PH7", ["UART2_RTS", "I2S3_LRCK", "SPI1_MOSI", "TWI4_SDA", "PH_EINT7"]),
        ("PH8", ["UART2_CTS", "I2S3_DOUT0", "SPI1_MISO", "I2S3_DIN1", "PH_EINT8"]),
        ("PH9", ["", "I2S3_DIN0", "SPI1_CS1", "I2S3_DOUT1", "PH_EINT9"]),
        ("PH10", ["", "IR_RX", "TCON_TRIG1", "", "PH_EINT10"]),
    ],
};
