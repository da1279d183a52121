/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, logs the elapsed time, and evaluates to the value of the
/// expression.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Trace, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} µs", $label, elapsed.as_micros());
        value
    }};
}

/// Calculate the number of hexes in a hexagon-shaped grid based on its
/// radius. Radius 0 means 1 hex, 1 is 7 hexes, 2 is 19, etc.
pub fn hexagon_len(radius: u16) -> usize {
    // We'll always have 3r^2+3r+1 hexes (a reduction of a geometric sum).
    // f(0) = 1, and we add 6r hexes for every step after that, so:
    // 1, (+6) 7, (+12) 19, (+18) 37, ...
    let r = radius as usize;
    3 * r * r + 3 * r + 1
}

/// Calculate the number of hexes in a triangle-shaped grid with the given
/// side length. This is just the triangular number.
pub fn triangle_len(size: u16) -> usize {
    let n = size as usize;
    n * (n + 1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hexagon_len() {
        assert_eq!(hexagon_len(0), 1);
        assert_eq!(hexagon_len(1), 7);
        assert_eq!(hexagon_len(2), 19);
        assert_eq!(hexagon_len(3), 37);
    }

    #[test]
    fn test_triangle_len() {
        assert_eq!(triangle_len(0), 0);
        assert_eq!(triangle_len(1), 1);
        assert_eq!(triangle_len(2), 3);
        assert_eq!(triangle_len(5), 15);
    }
}
