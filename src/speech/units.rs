/// Convert Fahrenheit to whole degrees Celsius, rounding half to even
#[must_use]
pub fn degrees_f_to_c(fahrenheit: f64) -> i64 {
    ((fahrenheit - 32.0) * 100.0 / 180.0).round_ties_even() as i64
}
