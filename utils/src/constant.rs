pub const DAY_IN_LEDGERS: u32 = 17280;
