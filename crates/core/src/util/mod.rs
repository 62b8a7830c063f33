pub mod range;

/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, logs how long it took to evaluate, and returns the value of the
/// expression.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} ms", $label, elapsed.as_millis());
        value
    }};
}

/// Linearly interpolate between two values. `t` is not clamped, so values
/// outside `[0, 1]` will extrapolate. That's intentional, since the back
/// easings overshoot.
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
