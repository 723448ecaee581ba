//! Map accepted rows onto the deal document

use chrono::{DateTime, Local};

use crate::passport::{Passport, RawRow};

use super::types::{
    Building, BuildingDetails, CostAdjustments, Deal, Equipment, Location, ProductivityOverride,
    Service, ServiceInput,
};

/// Standard weeks-per-month assumption for monthly-to-weekly cost conversion
const WEEKS_PER_MONTH: f64 = 4.33;

/// Build the deal document for one conversion run
///
/// Returns `None` when no rows were accepted; a file with zero buildings
/// produces no document rather than a deal with an empty building list. The
/// generation timestamp is a parameter so output is deterministic in tests.
pub fn build_deal(passport: &Passport, generated_at: DateTime<Local>) -> Option<Deal> {
    if passport.rows.is_empty() {
        return None;
    }

    let customer = &passport.customer_name;
    let buildings = passport
        .rows
        .iter()
        .map(|row| build_building(row, customer))
        .collect();

    Some(Deal {
        deal_record_id: format!(
            "DEAL_{}_{}",
            customer,
            generated_at.format("%Y%m%d_%H%M%S")
        ),
        customer_record_id: format!("CUST_{}", customer),
        buildings,
    })
}

fn build_building(row: &RawRow, customer: &str) -> Building {
    Building {
        building_record_id: format!("BLDG_{}", row.building_id),
        building_id: row.building_id.clone(),
        building_name: format!("{} - {}", customer, row.building_id),
        facility_type: row.building_type.clone(),
        location: Location {
            state: row.state.clone(),
            postal_code: postal_code(row.zip),
            address: row.address.clone(),
            city: row.city.clone(),
            country: "USA".to_string(),
        },
        building_details: BuildingDetails {
            total_square_footage: row.total_sq_ft,
            cleanable_square_footage: row.cleanable_sq_ft,
        },
        // The source format never carries more than one service per building
        services: vec![build_service(row)],
    }
}

fn build_service(row: &RawRow) -> Service {
    Service {
        line_item_object_id: format!("LINE_{}", row.building_id),
        service_type: "RJS".to_string(),
        service_frequency: "weekly".to_string(),
        schedule: row.schedule.into(),
        inputs: vec![ServiceInput {
            item_name: "cleanableSquareFootage".to_string(),
            item_value: row.cleanable_sq_ft,
        }],
        productivity_override: ProductivityOverride {
            value: (row.alternate_productivity != 0.0).then_some(row.alternate_productivity),
        },
        cost_adjustments: CostAdjustments {
            // The sheet's wage adjustment feeds dayporterHourlyWageAdjustment
            // below, never this field
            hourly_wage_adjustment: 0.0,
            weekly_additional_costs: weekly_additional_costs(row.additional_costs),
        },
        equipment: build_equipment(row),
        dayporter_hours: row.dayporter.into(),
        dayporter_hourly_wage_adjustment: row.wage_adjustment,
        supervisor_hours: row.supervisor.into(),
    }
}

fn build_equipment(row: &RawRow) -> Vec<Equipment> {
    let slots = [
        (&row.equipment_rental_1, &row.contract_terms_1),
        (&row.equipment_rental_2, &row.contract_terms_2),
    ];

    slots
        .into_iter()
        .filter(|(rental, _)| !rental.is_empty())
        .map(|(rental, term)| Equipment {
            equipment_type: rental.clone(),
            contract_term: map_contract_term(term).to_string(),
        })
        .collect()
}

/// Contract term lengths the API accepts; anything else maps to empty
fn map_contract_term(raw: &str) -> &'static str {
    match raw {
        "12" => "12",
        "24" => "24",
        "36" => "36",
        "60" => "60",
        "" => "",
        other => {
            log::warn!("unknown contract term '{}', leaving empty", other);
            ""
        }
    }
}

fn weekly_additional_costs(monthly: f64) -> f64 {
    if WEEKS_PER_MONTH > 0.0 {
        monthly / WEEKS_PER_MONTH
    } else {
        0.0
    }
}

/// Render a zip as an integer string; zero or non-numeric zips become empty
fn postal_code(zip: f64) -> String {
    if zip != 0.0 {
        (zip.trunc() as i64).to_string()
    } else {
        String::new()
    }
}
