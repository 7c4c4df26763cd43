//! This module stores the column names of the historical interventions table and of the
//! prescriptions table written by this crate. Note that these must stay in sync with the
//! column headers used by the upstream intervention plan files!

pub const COUNTRY_NAME: &str = "CountryName";
pub const REGION_NAME: &str = "RegionName";
pub const DATE: &str = "Date";

pub const C1M_SCHOOL_CLOSING: &str = "C1M_School closing";
pub const C2M_WORKPLACE_CLOSING: &str = "C2M_Workplace closing";
pub const C3M_CANCEL_PUBLIC_EVENTS: &str = "C3M_Cancel public events";
pub const C4M_RESTRICTIONS_ON_GATHERINGS: &str = "C4M_Restrictions on gatherings";
pub const C5M_CLOSE_PUBLIC_TRANSPORT: &str = "C5M_Close public transport";
pub const C6M_STAY_AT_HOME_REQUIREMENTS: &str = "C6M_Stay at home requirements";
pub const C7M_RESTRICTIONS_ON_INTERNAL_MOVEMENT: &str = "C7M_Restrictions on internal movement";
pub const C8EV_INTERNATIONAL_TRAVEL_CONTROLS: &str = "C8EV_International travel controls";
pub const H1_PUBLIC_INFORMATION_CAMPAIGNS: &str = "H1_Public information campaigns";
pub const H2_TESTING_POLICY: &str = "H2_Testing policy";
pub const H3_CONTACT_TRACING: &str = "H3_Contact tracing";
pub const H6M_FACIAL_COVERINGS: &str = "H6M_Facial Coverings";

pub const PRESCRIPTION_INDEX: &str = "PrescriptionIndex";

/// Columns that must be present in a historical interventions table.
pub const REQUIRED_HISTORICAL_COLUMNS: [&str; 2] = [COUNTRY_NAME, REGION_NAME];
