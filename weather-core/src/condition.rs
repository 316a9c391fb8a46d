/// Label and emoji shown for a provider weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionInfo {
    pub label: &'static str,
    pub emoji: &'static str,
}

/// Returned for any code the table does not know.
pub const UNKNOWN_CONDITION: ConditionInfo = ConditionInfo {
    label: "Unknown",
    emoji: "❔",
};

const fn info(label: &'static str, emoji: &'static str) -> ConditionInfo {
    ConditionInfo { label, emoji }
}

/// Map a WMO weather code to its display condition. Never fails.
pub const fn condition_for(code: i64) -> ConditionInfo {
    match code {
        0 => info("Clear sky", "☀️"),
        1 => info("Mainly clear", "🌤️"),
        2 => info("Partly cloudy", "⛅"),
        3 => info("Overcast", "☁️"),
        45 => info("Fog", "🌫️"),
        61 => info("Slight rain", "🌦️"),
        63 => info("Moderate rain", "🌧️"),
        65 => info("Heavy rain", "🌧️"),
        71 => info("Snowfall", "❄️"),
        80 => info("Rain showers", "🌦️"),
        95 => info("Thunderstorm", "⛈️"),
        _ => UNKNOWN_CONDITION,
    }
}
