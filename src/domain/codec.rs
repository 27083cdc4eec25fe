// WMO weather-code and wind-bearing mapping tables

/// Short English phrase for a WMO weather code.
///
/// Codes outside the table degrade to "Unknown conditions" rather than
/// erroring; the vocabulary is fixed by the API, not by us.
pub fn describe(code: u16) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 | 48 => "Foggy",
        51 | 53 | 55 => "Light drizzle",
        61 | 63 | 65 => "Rainy",
        71 | 73 | 75 => "Snowy",
        77 => "Snow grains",
        80 | 81 | 82 => "Rain showers",
        85 | 86 => "Snow showers",
        95 => "Thunderstorm",
        96 | 99 => "Thunderstorm with hail",
        _ => "Unknown conditions",
    }
}

/// Glyph for the condition family a code belongs to.
pub fn emoji(code: u16) -> &'static str {
    match code {
        0 => "☀️",
        1 | 2 => "🌤️",
        3 => "☁️",
        45 | 48 => "🌫️",
        51 | 53 | 55 | 61 | 63 | 65 | 80 | 81 | 82 => "🌧️",
        95 | 96 | 99 => "⛈️",
        71 | 73 | 75 | 77 | 85 | 86 => "❄️",
        _ => "🌤️",
    }
}

const COMPASS_POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Compass label for a wind bearing in degrees.
///
/// The compass is split into eight 45° sectors centered on the cardinal and
/// intercardinal points, so N covers 337.5°..22.5° and wraps at 359°.
pub fn compass_label(bearing_deg: u16) -> &'static str {
    let sector = ((f64::from(bearing_deg) + 22.5) / 45.0) as usize % 8;
    COMPASS_POINTS[sector]
}
