//! Output schema for the deal API
//!
//! Field names and nesting mirror the API's input document exactly; structs
//! serialize in declaration order.

use serde::Serialize;

use crate::passport::WeekHours;

/// Top-level document grouping one customer's buildings
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub deal_record_id: String,
    pub customer_record_id: String,
    pub buildings: Vec<Building>,
}

/// One physical facility with its location and services
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub building_record_id: String,
    pub building_id: String,
    pub building_name: String,
    pub facility_type: String,
    pub location: Location,
    pub building_details: BuildingDetails,
    pub services: Vec<Service>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub state: String,
    pub postal_code: String,
    pub address: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingDetails {
    pub total_square_footage: f64,
    pub cleanable_square_footage: f64,
}

/// One line item of janitorial work with its schedule and cost inputs
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub line_item_object_id: String,
    pub service_type: String,
    pub service_frequency: String,
    pub schedule: WeekdayMap,
    pub inputs: Vec<ServiceInput>,
    pub productivity_override: ProductivityOverride,
    pub cost_adjustments: CostAdjustments,
    pub equipment: Vec<Equipment>,
    pub dayporter_hours: WeekdayMap,
    pub dayporter_hourly_wage_adjustment: f64,
    pub supervisor_hours: WeekdayMap,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInput {
    pub item_name: String,
    pub item_value: f64,
}

/// Serializes as `{}` when no override is present
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ProductivityOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostAdjustments {
    pub hourly_wage_adjustment: f64,
    pub weekly_additional_costs: f64,
}

/// An optional rented equipment item tied to a contract term length
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub equipment_type: String,
    pub contract_term: String,
}

/// Weekly hours keyed by day name, as the API expects
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct WeekdayMap {
    pub sunday: f64,
    pub monday: f64,
    pub tuesday: f64,
    pub wednesday: f64,
    pub thursday: f64,
    pub friday: f64,
    pub saturday: f64,
}

impl From<WeekHours> for WeekdayMap {
    fn from(hours: WeekHours) -> Self {
        WeekdayMap {
            sunday: hours.sun,
            monday: hours.mon,
            tuesday: hours.tue,
            wednesday: hours.wed,
            thursday: hours.thu,
            friday: hours.fri,
            saturday: hours.sat,
        }
    }
}
