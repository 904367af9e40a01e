pub mod company_columns;
pub mod overview;

pub use company_columns::{
    CategoryHeader, CompanyCategory, CompanyColumn, CompanyLayout, OTHER_CATEGORY,
};
pub use overview::{AuditOverview, MatrixRow, OverviewRequest};
