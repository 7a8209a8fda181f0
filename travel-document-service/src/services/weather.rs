//! Simulated airport weather.
//!
//! Readings come from a season × time-of-day profile table plus a little
//! random noise. Reports are cached per airport per clock hour.

use super::airports::{find_airport, Airport};
use chrono::{DateTime, Datelike, Local, Timelike};
use dashmap::DashMap;
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WeatherError {
    #[error("Airport code {0} not found")]
    UnknownAirport(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Winter,
    Spring,
    Summer,
}

impl Season {
    pub fn from_month(month: u32) -> Self {
        match month {
            12 | 1 | 2 => Season::Winter,
            3..=5 => Season::Spring,
            _ => Season::Summer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPhase {
    Day,
    Night,
}

impl DayPhase {
    pub fn from_hour(hour: u32) -> Self {
        if (6..=18).contains(&hour) {
            DayPhase::Day
        } else {
            DayPhase::Night
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Haze,
    Mist,
}

impl Condition {
    pub fn main(&self) -> &'static str {
        match self {
            Condition::Clear => "Clear",
            Condition::Clouds => "Clouds",
            Condition::Rain => "Rain",
            Condition::Haze => "Haze",
            Condition::Mist => "Mist",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Condition::Clear => "Clear sky",
            Condition::Clouds => "Partly cloudy",
            Condition::Rain => "Light rain",
            Condition::Haze => "Hazy",
            Condition::Mist => "Misty",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Condition::Clear => "\u{2600}\u{fe0f}",
            Condition::Clouds => "\u{2601}\u{fe0f}",
            Condition::Rain => "\u{1f327}\u{fe0f}",
            Condition::Haze | Condition::Mist => "\u{1f32b}\u{fe0f}",
        }
    }
}

/// Temperature is `base + gain * (hour - origin)`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Profile {
    base: f64,
    gain: f64,
    origin: u32,
    conditions: [Condition; 3],
}

fn profile(season: Season, phase: DayPhase) -> Profile {
    use Condition::*;

    let (base, gain, origin, conditions) = match (phase, season) {
        (DayPhase::Day, Season::Winter) => (18.0, 1.0, 6, [Clear, Clouds, Clear]),
        (DayPhase::Day, Season::Spring) => (25.0, 1.0, 6, [Clear, Haze, Clear]),
        (DayPhase::Day, Season::Summer) => (28.0, 1.0, 6, [Clear, Clouds, Rain]),
        (DayPhase::Night, Season::Winter) => (12.0, 0.25, 0, [Clear, Mist, Clear]),
        (DayPhase::Night, _) => (20.0, 1.0 / 6.0, 0, [Clear, Clouds, Clear]),
    };

    Profile {
        base,
        gain,
        origin,
        conditions,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    pub success: bool,
    pub airport_code: &'static str,
    pub city: &'static str,
    pub temperature: i64,
    pub description: &'static str,
    pub main: &'static str,
    pub emoji: &'static str,
    pub humidity: u8,
    pub wind_speed: f64,
    pub timestamp: DateTime<Local>,
    pub source: &'static str,
}

/// One simulated reading for `airport` at `now`.
pub fn simulate<R: Rng>(airport: &Airport, now: DateTime<Local>, rng: &mut R) -> WeatherReport {
    let hour = now.hour();
    let profile = profile(Season::from_month(now.month()), DayPhase::from_hour(hour));

    let condition = profile.conditions[rng.gen_range(0..profile.conditions.len())];
    let temperature = profile.base + profile.gain * (hour as f64 - profile.origin as f64)
        + rng.gen_range(-2.0..=2.0);
    let wind_speed: f64 = rng.gen_range(1.0..=15.0);

    WeatherReport {
        success: true,
        airport_code: airport.code,
        city: airport.city,
        temperature: temperature.round() as i64,
        description: condition.description(),
        main: condition.main(),
        emoji: condition.emoji(),
        humidity: rng.gen_range(40..=80),
        wind_speed: (wind_speed * 10.0).round() / 10.0,
        timestamp: now,
        source: "simulated_realtime",
    }
}

#[derive(Debug, Clone)]
pub struct CachedReport {
    report: WeatherReport,
    stored_at: Instant,
}

pub type WeatherCache = Arc<DashMap<String, CachedReport>>;

#[derive(Clone)]
pub struct WeatherService {
    cache: WeatherCache,
    ttl: Duration,
}

impl WeatherService {
    pub fn new(cache: WeatherCache, ttl: Duration) -> Self {
        Self { cache, ttl }
    }

    pub fn report(&self, code: &str) -> Result<WeatherReport, WeatherError> {
        self.report_at(code, Local::now())
    }

    pub fn report_at(&self, code: &str, now: DateTime<Local>) -> Result<WeatherReport, WeatherError> {
        let airport = find_airport(code)
            .ok_or_else(|| WeatherError::UnknownAirport(code.trim().to_uppercase()))?;
        let key = format!("{}_{}", airport.code, now.format("%Y%m%d%H"));

        if let Some(cached) = self.cache.get(&key) {
            if cached.stored_at.elapsed() < self.ttl {
                tracing::debug!(airport = airport.code, "Weather cache hit");
                return Ok(cached.report.clone());
            }
        }

        let report = simulate(airport, now, &mut rand::thread_rng());

        let ttl = self.ttl;
        self.cache.retain(|_, entry| entry.stored_at.elapsed() < ttl);
        self.cache.insert(
            key,
            CachedReport {
                report: report.clone(),
                stored_at: Instant::now(),
            },
        );

        Ok(report)
    }
}
