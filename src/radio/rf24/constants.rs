/// Register offsets for the nRF24L01+.
pub mod registers {
    pub const CONFIG: u8 = 0x00;
    pub const EN_AA: u8 = 0x01;
    pub const EN_RXADDR: u8 = 0x02;
    pub const SETUP_AW: u8 = 0x03;
    pub const RF_CH: u8 = 0x05;
    pub const RF_SETUP: u8 = 0x06;
    pub const STATUS: u8 = 0x07;
    pub const RX_ADDR_P0: u8 = 0x0A;
    pub const TX_ADDR: u8 = 0x10;
    pub const RX_PW_P0: u8 = 0x11;

    /// Register addresses occupy the lower 5 bits of a register command.
    pub const MASK: u8 = 0x1F;
}

/// SPI commands for the nRF24L01+.
pub mod commands {
    pub const R_REGISTER: u8 = 0x00;
    pub const W_REGISTER: u8 = 0x20;
    pub const R_RX_PAYLOAD: u8 = 0x61;
    pub const W_TX_PAYLOAD: u8 = 0xA0;
    pub const FLUSH_TX: u8 = 0xE1;
    pub const FLUSH_RX: u8 = 0xE2;
    pub const NOP: u8 = 0xFF;
}

/// Bit mnemonics for the STATUS and CONFIG registers.
pub mod mnemonics {
    pub const MASK_RX_DR: u8 = 1 << 6;
    pub const MASK_TX_DS: u8 = 1 << 5;
    pub const MASK_MAX_RT: u8 = 1 << 4;

    pub const EN_CRC: u8 = 1 << 3;
    pub const PWR_UP: u8 = 1 << 1;
    pub const PRIM_RX: u8 = 1;

    /// SETUP_AW value for 5 byte addresses.
    pub const AW_5_BYTES: u8 = 0b11;
    /// Enable bit for pipe 0 in EN_AA and EN_RXADDR.
    pub const PIPE_0: u8 = 1;
}

/// Mandatory waits and bounds (in milliseconds unless noted otherwise).
pub mod timing {
    /// Power-on reset settling time before the first register write.
    pub const STARTUP_DELAY_MS: u32 = 100;
    /// Settle time after changing PWR_UP or PRIM_RX.
    pub const MODE_SETTLE_MS: u32 = 2;
    /// Width of the CE pulse that starts an on-air transmission.
    pub const CE_PULSE_MS: u32 = 1;
    /// Number of STATUS polls before a transmission is considered lost.
    pub const TX_POLL_LIMIT: u16 = 1000;
    /// Interval between STATUS polls.
    pub const TX_POLL_INTERVAL_MS: u32 = 1;
}
