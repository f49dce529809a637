//! SeaORM entity definitions for PostgreSQL database.

pub mod facility;
pub mod production_line;
pub mod test_result;
