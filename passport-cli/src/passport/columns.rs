//! Column layout of the "Janitorial Services" sheet
//!
//! The Passport format is fixed: each field lives at a fixed column letter,
//! with data starting at row 4. The layout is not configurable at runtime.

/// Column indices, 0-based (sheet letters in comments)
pub mod cols {
    pub const CUSTOMER: u32 = 1; // B
    pub const BUILDING_ID: u32 = 2; // C
    pub const ADDRESS: u32 = 3; // D
    pub const CITY: u32 = 4; // E
    pub const STATE: u32 = 5; // F
    pub const ZIP: u32 = 6; // G
    pub const BUILDING_TYPE: u32 = 8; // I
    pub const TOTAL_SQ_FT: u32 = 9; // J
    pub const CLEANABLE_SQ_FT: u32 = 10; // K
    pub const ALTERNATE_PRODUCTIVITY: u32 = 12; // M

    /// Weekly cleaning schedule, Sunday..Saturday (R..X)
    pub const SCHEDULE: [u32; 7] = [17, 18, 19, 20, 21, 22, 23];

    pub const ADDITIONAL_COSTS: u32 = 27; // AB

    pub const EQUIPMENT_RENTAL_1: u32 = 33; // AH
    pub const CONTRACT_TERMS_1: u32 = 34; // AI
    pub const EQUIPMENT_RENTAL_2: u32 = 35; // AJ
    pub const CONTRACT_TERMS_2: u32 = 36; // AK

    pub const WAGE_ADJUSTMENT: u32 = 40; // AO

    /// Day porter hours, Sunday..Saturday (AQ..AW)
    pub const DAYPORTER: [u32; 7] = [42, 43, 44, 45, 46, 47, 48];

    /// Supervisor hours, Sunday..Saturday (AZ..BF)
    pub const SUPERVISOR: [u32; 7] = [51, 52, 53, 54, 55, 56, 57];
}

/// Convert a spreadsheet column letter ("B", "AB") to its 0-based index
pub fn column_index(letters: &str) -> u32 {
    letters
        .bytes()
        .fold(0u32, |acc, b| acc * 26 + u32::from(b - b'A') + 1)
        - 1
}
