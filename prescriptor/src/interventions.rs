//! Maximum stringency values for each NPI column.

use crate::COL;

/// Intervention column names paired with their maximum value, sorted ascending by column name.
pub static INTERVENTION_MAXIMA: [(&str, i32); 12] = [
    (COL::C1M_SCHOOL_CLOSING, 3),
    (COL::C2M_WORKPLACE_CLOSING, 3),
    (COL::C3M_CANCEL_PUBLIC_EVENTS, 2),
    (COL::C4M_RESTRICTIONS_ON_GATHERINGS, 4),
    (COL::C5M_CLOSE_PUBLIC_TRANSPORT, 2),
    (COL::C6M_STAY_AT_HOME_REQUIREMENTS, 3),
    (COL::C7M_RESTRICTIONS_ON_INTERNAL_MOVEMENT, 2),
    (COL::C8EV_INTERNATIONAL_TRAVEL_CONTROLS, 4),
    (COL::H1_PUBLIC_INFORMATION_CAMPAIGNS, 2),
    (COL::H2_TESTING_POLICY, 3),
    (COL::H3_CONTACT_TRACING, 2),
    (COL::H6M_FACIAL_COVERINGS, 4),
];

pub fn intervention_columns() -> impl Iterator<Item = &'static str> {
    INTERVENTION_MAXIMA.iter().map(|(column, _)| *column)
}
