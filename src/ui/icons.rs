pub struct Icons;

impl Icons {
    pub const CAR: &str = "🚗";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
}
