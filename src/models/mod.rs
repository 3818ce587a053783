pub mod clock;
pub mod month_summary;
pub mod record;
