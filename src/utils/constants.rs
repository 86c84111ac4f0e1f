/// sessionStorage key holding the booking draft
pub const BOOKING_INFO_KEY: &str = "bookingInfo";

/// Valid phone: optional `+`, no leading zero, at most 16 ASCII digits
pub const PHONE_PATTERN: &str = r"^\+?[1-9][0-9]{0,15}$";

/// Owner id that should never exist, prefilled in the FK demo
pub const DEMO_MISSING_OWNER_ID: &str = "99999";
