use workout_tracker_lib::workout::Coords;

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "&copy; <a href=\"http://www.openstreetmap.org/copyright\">OpenStreetMap</a>";
pub const MAX_ZOOM: f64 = 19.;
pub const DEFAULT_ZOOM: f64 = 13.;

// Used when the browser refuses to share a position
pub const FALLBACK_CENTER: Coords = Coords(56.175188, 10.196123);

pub const FORM_HIDE_DELAY_MS: u32 = 1000;

pub const INVALID_INPUT_MESSAGE: &str = "Inputs have to be positive numbers!";
pub const LOCATION_DENIED_MESSAGE: &str = "Could not get your position, showing the default location instead";
