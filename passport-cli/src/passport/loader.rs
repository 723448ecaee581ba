//! Scan the "Janitorial Services" sheet into accepted rows

use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};

use super::SHEET_NAME;
use super::columns::cols;
use super::error::LoadError;
use super::types::{Passport, RawRow, WeekHours};

/// First data row, 0-based (row 4 in sheet addressing)
const START_ROW: u32 = 3;
/// Last data row scanned, 0-based (row 100), bounds work on malformed sheets
const MAX_ROW: u32 = 99;

/// Load a Passport workbook (.xlsx or .xlsm) from disk
pub fn load_passport(path: &Path) -> Result<Passport, LoadError> {
    let mut workbook = open_workbook_auto(path)?;

    if !workbook.sheet_names().iter().any(|s| s == SHEET_NAME) {
        return Err(LoadError::SheetNotFound);
    }

    let range = workbook.worksheet_range(SHEET_NAME)?;
    Ok(parse_rows(&range))
}

/// Extract accepted rows and the customer name from a sheet range
///
/// A row is accepted only when its customer cell is non-empty, its building
/// id is non-empty after trimming, and its cleanable square footage is
/// present and non-zero. Rejected rows are skipped whole, never defaulted.
pub fn parse_rows(range: &Range<Data>) -> Passport {
    let mut passport = Passport::default();

    let Some((end_row, _)) = range.end() else {
        return passport;
    };

    for row in START_ROW..=end_row.min(MAX_ROW) {
        let customer = cell_str(range, row, cols::CUSTOMER);
        if customer.is_empty() {
            continue;
        }

        let building_id = cell_str(range, row, cols::BUILDING_ID);
        if building_id.is_empty() {
            log::debug!("row {}: no building id, skipping", row + 1);
            continue;
        }

        if !cell_present_nonzero(range, row, cols::CLEANABLE_SQ_FT) {
            log::debug!("row {}: no cleanable square footage, skipping", row + 1);
            continue;
        }

        let raw = RawRow {
            building_id,
            address: cell_str(range, row, cols::ADDRESS),
            city: cell_str(range, row, cols::CITY),
            state: cell_str(range, row, cols::STATE),
            zip: cell_num(range, row, cols::ZIP),
            // Facility type spacing is meaningful downstream, never trim it
            building_type: cell_str_raw(range, row, cols::BUILDING_TYPE),
            total_sq_ft: cell_num(range, row, cols::TOTAL_SQ_FT),
            cleanable_sq_ft: cell_num(range, row, cols::CLEANABLE_SQ_FT),
            alternate_productivity: cell_num(range, row, cols::ALTERNATE_PRODUCTIVITY),
            schedule: week_hours(range, row, cols::SCHEDULE),
            additional_costs: cell_num(range, row, cols::ADDITIONAL_COSTS),
            equipment_rental_1: cell_str(range, row, cols::EQUIPMENT_RENTAL_1),
            contract_terms_1: cell_str(range, row, cols::CONTRACT_TERMS_1),
            equipment_rental_2: cell_str(range, row, cols::EQUIPMENT_RENTAL_2),
            contract_terms_2: cell_str(range, row, cols::CONTRACT_TERMS_2),
            wage_adjustment: cell_num(range, row, cols::WAGE_ADJUSTMENT),
            dayporter: week_hours(range, row, cols::DAYPORTER),
            supervisor: week_hours(range, row, cols::SUPERVISOR),
            customer,
        };

        // The deal's customer comes from the first accepted row only
        if passport.customer_name.is_empty() {
            passport.customer_name = raw.customer.clone();
        }
        passport.rows.push(raw);
    }

    log::info!(
        "accepted {} building row(s) for customer '{}'",
        passport.rows.len(),
        passport.customer_name
    );
    passport
}

fn week_hours(range: &Range<Data>, row: u32, day_cols: [u32; 7]) -> WeekHours {
    WeekHours {
        sun: cell_num(range, row, day_cols[0]),
        mon: cell_num(range, row, day_cols[1]),
        tue: cell_num(range, row, day_cols[2]),
        wed: cell_num(range, row, day_cols[3]),
        thu: cell_num(range, row, day_cols[4]),
        fri: cell_num(range, row, day_cols[5]),
        sat: cell_num(range, row, day_cols[6]),
    }
}

/// Cell as display string, whitespace preserved
fn cell_str_raw(range: &Range<Data>, row: u32, col: u32) -> String {
    match range.get_value((row, col)) {
        Some(Data::String(s)) => s.clone(),
        Some(Data::Int(i)) => i.to_string(),
        Some(Data::Float(f)) => {
            // Whole-number floats render without the fraction
            if f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Some(Data::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Cell as display string, trimmed
fn cell_str(range: &Range<Data>, row: u32, col: u32) -> String {
    cell_str_raw(range, row, col).trim().to_string()
}

/// Cell as a number; unparseable text falls back to 0 silently
fn cell_num(range: &Range<Data>, row: u32, col: u32) -> f64 {
    match range.get_value((row, col)) {
        Some(Data::Int(i)) => *i as f64,
        Some(Data::Float(f)) => *f,
        Some(Data::String(s)) => s.trim().parse().unwrap_or_else(|_| {
            if !s.trim().is_empty() {
                log::debug!("row {}: cannot parse '{}' as a number, using 0", row + 1, s);
            }
            0.0
        }),
        _ => 0.0,
    }
}

/// Acceptance check for the cleanable-square-footage cell: raw value must be
/// present and non-zero, before any numeric coercion
fn cell_present_nonzero(range: &Range<Data>, row: u32, col: u32) -> bool {
    match range.get_value((row, col)) {
        Some(Data::Int(i)) => *i != 0,
        Some(Data::Float(f)) => *f != 0.0,
        Some(Data::String(s)) => !s.trim().is_empty(),
        Some(Data::Bool(b)) => *b,
        Some(Data::Empty) | None => false,
        Some(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a sheet range with the given (row, col, value) cells
    fn sheet(cells: &[(u32, u32, Data)]) -> Range<Data> {
        let mut range = Range::new((0, 0), (12, 60));
        for (row, col, value) in cells {
            range.set_value((*row, *col), value.clone());
        }
        range
    }

    fn valid_row(row: u32) -> Vec<(u32, u32, Data)> {
        vec![
            (row, cols::CUSTOMER, Data::String("Acme".into())),
            (row, cols::BUILDING_ID, Data::String("B1".into())),
            (row, cols::CLEANABLE_SQ_FT, Data::Float(5000.0)),
        ]
    }

    #[test]
    fn test_accepts_valid_row() {
        let passport = parse_rows(&sheet(&valid_row(3)));
        assert_eq!(passport.customer_name, "Acme");
        assert_eq!(passport.rows.len(), 1);
        assert_eq!(passport.rows[0].building_id, "B1");
        assert_eq!(passport.rows[0].cleanable_sq_ft, 5000.0);
    }

    #[test]
    fn test_skips_row_without_customer() {
        let cells = vec![
            (3, cols::BUILDING_ID, Data::String("B1".into())),
            (3, cols::CLEANABLE_SQ_FT, Data::Float(5000.0)),
        ];
        assert!(parse_rows(&sheet(&cells)).rows.is_empty());
    }

    #[test]
    fn test_skips_row_without_building_id() {
        let cells = vec![
            (3, cols::CUSTOMER, Data::String("Acme".into())),
            (3, cols::BUILDING_ID, Data::String("   ".into())),
            (3, cols::CLEANABLE_SQ_FT, Data::Float(5000.0)),
        ];
        assert!(parse_rows(&sheet(&cells)).rows.is_empty());
    }

    #[test]
    fn test_skips_row_with_zero_cleanable() {
        let cells = vec![
            (3, cols::CUSTOMER, Data::String("Acme".into())),
            (3, cols::BUILDING_ID, Data::String("B1".into())),
            (3, cols::CLEANABLE_SQ_FT, Data::Float(0.0)),
        ];
        assert!(parse_rows(&sheet(&cells)).rows.is_empty());
    }

    #[test]
    fn test_skips_row_with_missing_cleanable() {
        let cells = vec![
            (3, cols::CUSTOMER, Data::String("Acme".into())),
            (3, cols::BUILDING_ID, Data::String("B1".into())),
        ];
        assert!(parse_rows(&sheet(&cells)).rows.is_empty());
    }

    #[test]
    fn test_rows_before_start_row_ignored() {
        // Rows 1-3 hold headers; data starts at sheet row 4
        let passport = parse_rows(&sheet(&valid_row(2)));
        assert!(passport.rows.is_empty());
    }

    #[test]
    fn test_building_type_spacing_preserved() {
        let mut cells = valid_row(3);
        cells.push((3, cols::BUILDING_TYPE, Data::String("  Office  ".into())));
        let passport = parse_rows(&sheet(&cells));
        assert_eq!(passport.rows[0].building_type, "  Office  ");
    }

    #[test]
    fn test_other_strings_trimmed() {
        let mut cells = valid_row(3);
        cells.push((3, cols::ADDRESS, Data::String("  1 Main St  ".into())));
        cells.push((3, cols::STATE, Data::String(" GA ".into())));
        let passport = parse_rows(&sheet(&cells));
        assert_eq!(passport.rows[0].address, "1 Main St");
        assert_eq!(passport.rows[0].state, "GA");
    }

    #[test]
    fn test_numeric_strings_coerced() {
        let mut cells = valid_row(3);
        cells.push((3, cols::TOTAL_SQ_FT, Data::String("12000".into())));
        cells.push((3, cols::ZIP, Data::String("30301".into())));
        let passport = parse_rows(&sheet(&cells));
        assert_eq!(passport.rows[0].total_sq_ft, 12000.0);
        assert_eq!(passport.rows[0].zip, 30301.0);
    }

    #[test]
    fn test_unparseable_number_defaults_to_zero() {
        let mut cells = valid_row(3);
        cells.push((3, cols::TOTAL_SQ_FT, Data::String("abc".into())));
        let passport = parse_rows(&sheet(&cells));
        assert_eq!(passport.rows[0].total_sq_ft, 0.0);
    }

    #[test]
    fn test_missing_fields_default() {
        let passport = parse_rows(&sheet(&valid_row(3)));
        let row = &passport.rows[0];
        assert_eq!(row.address, "");
        assert_eq!(row.building_type, "");
        assert_eq!(row.total_sq_ft, 0.0);
        assert_eq!(row.schedule, WeekHours::default());
        assert_eq!(row.equipment_rental_1, "");
    }

    #[test]
    fn test_numeric_building_id_rendered_as_string() {
        let cells = vec![
            (3, cols::CUSTOMER, Data::String("Acme".into())),
            (3, cols::BUILDING_ID, Data::Float(101.0)),
            (3, cols::CLEANABLE_SQ_FT, Data::Float(5000.0)),
        ];
        let passport = parse_rows(&sheet(&cells));
        assert_eq!(passport.rows[0].building_id, "101");
    }

    #[test]
    fn test_week_blocks_extracted() {
        let mut cells = valid_row(3);
        cells.push((3, cols::SCHEDULE[2], Data::Float(2.0))); // Tuesday
        cells.push((3, cols::DAYPORTER[1], Data::Float(4.0))); // Monday
        cells.push((3, cols::SUPERVISOR[6], Data::Float(1.5))); // Saturday
        let passport = parse_rows(&sheet(&cells));
        let row = &passport.rows[0];
        assert_eq!(row.schedule.tue, 2.0);
        assert_eq!(row.dayporter.mon, 4.0);
        assert_eq!(row.supervisor.sat, 1.5);
    }

    #[test]
    fn test_customer_captured_from_first_accepted_row() {
        let mut cells = valid_row(3);
        // Second row names a different customer; the first one wins
        cells.extend(vec![
            (4, cols::CUSTOMER, Data::String("Globex".into())),
            (4, cols::BUILDING_ID, Data::String("B2".into())),
            (4, cols::CLEANABLE_SQ_FT, Data::Float(800.0)),
        ]);
        let passport = parse_rows(&sheet(&cells));
        assert_eq!(passport.customer_name, "Acme");
        assert_eq!(passport.rows.len(), 2);
        assert_eq!(passport.rows[1].customer, "Globex");
    }

    #[test]
    fn test_rows_kept_in_sheet_order() {
        let mut cells = valid_row(3);
        cells.extend(vec![
            (5, cols::CUSTOMER, Data::String("Acme".into())),
            (5, cols::BUILDING_ID, Data::String("B3".into())),
            (5, cols::CLEANABLE_SQ_FT, Data::Float(900.0)),
        ]);
        cells.extend(vec![
            (4, cols::CUSTOMER, Data::String("Acme".into())),
            (4, cols::BUILDING_ID, Data::String("B2".into())),
            (4, cols::CLEANABLE_SQ_FT, Data::Float(800.0)),
        ]);
        let passport = parse_rows(&sheet(&cells));
        let ids: Vec<&str> = passport.rows.iter().map(|r| r.building_id.as_str()).collect();
        assert_eq!(ids, vec!["B1", "B2", "B3"]);
    }

    #[test]
    fn test_skipped_row_between_accepted_rows() {
        let mut cells = valid_row(3);
        // Row 5 has no building id, row 6 is fine
        cells.push((4, cols::CUSTOMER, Data::String("Acme".into())));
        cells.extend(vec![
            (5, cols::CUSTOMER, Data::String("Acme".into())),
            (5, cols::BUILDING_ID, Data::String("B2".into())),
            (5, cols::CLEANABLE_SQ_FT, Data::Float(800.0)),
        ]);
        let passport = parse_rows(&sheet(&cells));
        let ids: Vec<&str> = passport.rows.iter().map(|r| r.building_id.as_str()).collect();
        assert_eq!(ids, vec!["B1", "B2"]);
    }

    #[test]
    fn test_rows_past_cap_ignored() {
        let mut range = Range::new((0, 0), (150, 60));
        for (row, col, value) in valid_row(3) {
            range.set_value((row, col), value);
        }
        // Past the 100-row scan bound
        range.set_value((120, cols::CUSTOMER), Data::String("Acme".into()));
        range.set_value((120, cols::BUILDING_ID), Data::String("B9".into()));
        range.set_value((120, cols::CLEANABLE_SQ_FT), Data::Float(700.0));
        let passport = parse_rows(&range);
        assert_eq!(passport.rows.len(), 1);
        assert_eq!(passport.rows[0].building_id, "B1");
    }

    #[test]
    fn test_empty_range() {
        let passport = parse_rows(&Range::empty());
        assert!(passport.rows.is_empty());
        assert_eq!(passport.customer_name, "");
    }
}
