use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Temperature unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Auto,
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Convert a Celsius reading into this unit. `Auto` displays Celsius.
    pub fn convert(&self, celsius: f64) -> f64 {
        match self {
            Self::Auto | Self::Celsius => celsius,
            Self::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Auto | Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

/// Wind speed unit preference. Records always carry m/s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WindUnit {
    #[default]
    MetersPerSecond,
    KilometersPerHour,
    MilesPerHour,
    Knots,
}

impl WindUnit {
    pub fn convert(&self, mps: f64) -> f64 {
        match self {
            Self::MetersPerSecond => mps,
            Self::KilometersPerHour => mps * 3.6,
            Self::MilesPerHour => mps * 2.236_936,
            Self::Knots => mps * 1.943_844,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::MetersPerSecond => "m/s",
            Self::KilometersPerHour => "km/h",
            Self::MilesPerHour => "mph",
            Self::Knots => "kn",
        }
    }
}

/// Weather condition categories mapped from WMO codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    #[default]
    Clear,
    PartlyCloudy,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    HeavyRain,
    Snow,
    Sleet,
    Thunderstorm,
}

impl WeatherCondition {
    /// Convert WMO weather code to WeatherCondition
    /// See: https://open-meteo.com/en/docs#weathervariables
    pub fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => Self::Clear,
            1..=2 => Self::PartlyCloudy,
            3 => Self::Cloudy,
            45 | 48 => Self::Fog,
            51 | 53 | 55 => Self::Drizzle,
            56 | 57 => Self::Sleet, // Freezing drizzle
            61 | 63 | 80 => Self::Rain,
            65 | 81 | 82 => Self::HeavyRain,
            66 | 67 => Self::Sleet, // Freezing rain
            71 | 73 | 75 | 77 | 85 | 86 => Self::Snow,
            95 | 96 | 99 => Self::Thunderstorm,
            _ => Self::Clear,
        }
    }

    /// Whether this condition brings rain, snow, sleet or storms.
    pub fn is_precipitation(&self) -> bool {
        !matches!(
            self,
            Self::Clear | Self::PartlyCloudy | Self::Cloudy | Self::Fog
        )
    }
}

/// Geographic location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub city_name: Option<String>,
}

impl Location {
    pub fn display_name(&self) -> String {
        self.city_name
            .clone()
            .unwrap_or_else(|| format!("{:.2}, {:.2}", self.latitude, self.longitude))
    }
}

/// Current conditions. Wind speed in m/s, temperatures in Celsius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    #[serde(default)]
    pub wind_direction: f64,
    #[serde(default)]
    pub precipitation_chance: u8,
    pub condition: WeatherCondition,
    pub updated_at: DateTime<Utc>,
}

/// Hourly forecast entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    pub time: NaiveDateTime,
    pub temperature: f64,
    #[serde(default)]
    pub wind_speed: f64,
    #[serde(default)]
    pub wind_direction: f64,
    #[serde(default)]
    pub precipitation_chance: u8,
    #[serde(default)]
    pub weather_code: i32,
}

/// Daily forecast entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayForecast {
    pub date: NaiveDate,
    pub high: f64,
    pub low: f64,
    pub condition: WeatherCondition,
    pub precipitation_chance: u8,
    pub sunrise: NaiveTime,
    pub sunset: NaiveTime,
    /// Absent when the moon does not rise or set on this date.
    #[serde(default)]
    pub moonrise: Option<NaiveTime>,
    #[serde(default)]
    pub moonset: Option<NaiveTime>,
    /// Illuminated fraction, 0 to 1.
    #[serde(default)]
    pub moon_illumination: Option<f64>,
    #[serde(default)]
    pub moon_waxing: Option<bool>,
}

/// Air quality reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQuality {
    /// US EPA index
    pub aqi: f64,
    #[serde(default)]
    pub pm2_5: Option<f64>,
    #[serde(default)]
    pub pm10: Option<f64>,
    #[serde(default)]
    pub ozone: Option<f64>,
    #[serde(default)]
    pub nitrogen_dioxide: Option<f64>,
}

/// Everything a render pass needs, as handed over by the data providers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: Location,
    pub current: CurrentWeather,
    #[serde(default)]
    pub hourly: Vec<HourlyForecast>,
    #[serde(default)]
    pub daily: Vec<DayForecast>,
    #[serde(default)]
    pub air_quality: Option<AirQuality>,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    /// Forecast for `date`. `None` when the snapshot does not cover it.
    pub fn day(&self, date: NaiveDate) -> Option<&DayForecast> {
        self.daily.iter().find(|d| d.date == date)
    }

    /// Hourly entries starting at the hour containing `now`.
    pub fn hours_from(&self, now: NaiveDateTime) -> &[HourlyForecast] {
        let hour_start = now
            .with_minute(0)
            .and_then(|t| t.with_second(0))
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(now);
        let first = self
            .hourly
            .iter()
            .position(|h| h.time >= hour_start)
            .unwrap_or(self.hourly.len());
        &self.hourly[first..]
    }
}

/// Weather data source errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 6, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn hourly(h: u32) -> HourlyForecast {
        HourlyForecast {
            time: at(h, 0),
            temperature: f64::from(h),
            wind_speed: 0.0,
            wind_direction: 0.0,
            precipitation_chance: 0,
            weather_code: 0,
        }
    }

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            location: Location {
                latitude: 47.6062,
                longitude: -122.3321,
                city_name: None,
            },
            current: CurrentWeather {
                temperature: 18.0,
                feels_like: 17.0,
                humidity: 60,
                wind_speed: 3.0,
                wind_direction: 270.0,
                precipitation_chance: 10,
                condition: WeatherCondition::Clear,
                updated_at: Utc::now(),
            },
            hourly: (0..24).map(hourly).collect(),
            daily: Vec::new(),
            air_quality: None,
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn test_wmo_code_clear() {
        assert_eq!(WeatherCondition::from_wmo_code(0), WeatherCondition::Clear);
    }

    #[test]
    fn test_wmo_code_partly_cloudy() {
        assert_eq!(WeatherCondition::from_wmo_code(1), WeatherCondition::PartlyCloudy);
        assert_eq!(WeatherCondition::from_wmo_code(2), WeatherCondition::PartlyCloudy);
    }

    #[test]
    fn test_wmo_code_rain() {
        assert_eq!(WeatherCondition::from_wmo_code(61), WeatherCondition::Rain);
        assert_eq!(WeatherCondition::from_wmo_code(80), WeatherCondition::Rain);
        assert_eq!(WeatherCondition::from_wmo_code(82), WeatherCondition::HeavyRain);
    }

    #[test]
    fn test_wmo_code_sleet() {
        assert_eq!(WeatherCondition::from_wmo_code(56), WeatherCondition::Sleet);
        assert_eq!(WeatherCondition::from_wmo_code(67), WeatherCondition::Sleet);
    }

    #[test]
    fn test_wmo_code_unknown_defaults_to_clear() {
        assert_eq!(WeatherCondition::from_wmo_code(999), WeatherCondition::Clear);
        assert_eq!(WeatherCondition::from_wmo_code(-1), WeatherCondition::Clear);
    }

    #[test]
    fn test_precipitation_flag() {
        assert!(WeatherCondition::Drizzle.is_precipitation());
        assert!(WeatherCondition::Thunderstorm.is_precipitation());
        assert!(!WeatherCondition::Fog.is_precipitation());
    }

    #[test]
    fn test_temperature_conversion() {
        assert_eq!(TemperatureUnit::Fahrenheit.convert(100.0), 212.0);
        assert_eq!(TemperatureUnit::Auto.convert(21.5), 21.5);
        assert_eq!(TemperatureUnit::Fahrenheit.symbol(), "°F");
    }

    #[test]
    fn test_wind_conversion() {
        assert_eq!(WindUnit::KilometersPerHour.convert(10.0), 36.0);
        assert_eq!(WindUnit::MetersPerSecond.convert(4.2), 4.2);
        assert!((WindUnit::Knots.convert(1.0) - 1.943_844).abs() < 1e-9);
    }

    #[test]
    fn test_hours_from_skips_past_hours() {
        let snap = snapshot();
        let hours = snap.hours_from(at(5, 42));
        assert_eq!(hours.len(), 19);
        assert_eq!(hours[0].time, at(5, 0));
    }

    #[test]
    fn test_hours_from_after_last_entry_is_empty() {
        let snap = snapshot();
        let late = NaiveDate::from_ymd_opt(2026, 6, 2)
            .unwrap()
            .and_hms_opt(1, 0, 0)
            .unwrap();
        assert!(snap.hours_from(late).is_empty());
    }

    #[test]
    fn test_location_display_name_falls_back_to_coordinates() {
        assert_eq!(snapshot().location.display_name(), "47.61, -122.33");
    }
}
