//! DTOs for the spreadsheet export endpoint.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::LinkRecord;

/// Request to export previously verified records.
#[derive(Debug, Deserialize, Validate)]
pub struct ExportRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Nenhum dado disponível para exportar"))]
    pub records: Vec<LinkRecord>,
}
