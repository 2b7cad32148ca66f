//! Database schema definitions

/// SQL to create the cars table
pub const CREATE_CARS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS cars (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    brand TEXT NOT NULL,
    price TEXT NOT NULL
)
"#;

/// Secondary lookup indexes over brand and price, non-unique.
/// Defined as part of the v1 layout; no current query uses them.
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_cars_brand ON cars(brand)",
    "CREATE INDEX IF NOT EXISTS idx_cars_price ON cars(price)",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_CARS_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
