/// Default number of days ahead an anniversary still counts as upcoming.
pub const DEFAULT_LOOKAHEAD_DAYS: u32 = 7;

/// Base URL of the roster API when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Wire format for calendar dates.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
