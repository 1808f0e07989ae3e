//! Heat index calculation
//!
//! Implements the NWS Rothfusz regression. The polynomial is applied to every input
//! without clamping or the NWS low-range adjustments; it is only physically meaningful
//! for roughly T >= 27°C (80°F) and RH >= 40%, and outside that range the result can
//! drift far from the air temperature.

/// Regression coefficients c1..c9 (Fahrenheit, percent humidity)
const C1: f64 = -42.379;
const C2: f64 = 2.049_015_23;
const C3: f64 = 10.143_331_27;
const C4: f64 = -0.224_755_41;
const C5: f64 = -6.837_83e-3;
const C6: f64 = -5.481_717e-2;
const C7: f64 = 1.228_74e-3;
const C8: f64 = 8.528_2e-4;
const C9: f64 = -1.99e-6;

#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

#[must_use]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Raw Rothfusz regression in Fahrenheit
#[must_use]
pub fn rothfusz_fahrenheit(temperature_f: f64, humidity_pct: f64) -> f64 {
    let t = temperature_f;
    let h = humidity_pct;

    C1 + C2 * t + C3 * h + C4 * t * h + C5 * t * t + C6 * h * h + C7 * t * t * h
        + C8 * t * h * h
        + C9 * t * t * h * h
}

/// Heat index in Celsius before rounding
#[must_use]
pub fn heat_index_unrounded(temperature_c: f64, humidity_pct: f64) -> f64 {
    let temperature_f = celsius_to_fahrenheit(temperature_c);
    fahrenheit_to_celsius(rothfusz_fahrenheit(temperature_f, humidity_pct))
}

/// Heat index in Celsius, rounded to one decimal (half away from zero).
///
/// Humidity is expected in 0-100 but not validated; any finite input yields a value.
#[must_use]
pub fn heat_index(temperature_c: f64, humidity_pct: f64) -> f64 {
    round_one_decimal(heat_index_unrounded(temperature_c, humidity_pct))
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
