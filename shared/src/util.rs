/// Wall clock, milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Product id source: millisecond clock in the high bits, 12 random low bits.
///
/// Counting starts at 2024-01-01 UTC so the value stays under 2^53 and
/// survives a round trip through a JSON number. Two calls within one
/// millisecond may return the same value; `products::list::fresh_id`
/// retries against the target list.
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    const CLOCK_START_MS: i64 = 1_704_067_200_000;
    const CLOCK_BITS: i64 = (1 << 41) - 1;
    const RANDOM_BITS: u32 = 12;

    let elapsed = (now_millis() - CLOCK_START_MS) & CLOCK_BITS;
    let noise: i64 = rand::thread_rng().gen_range(0..1 << RANDOM_BITS);
    (elapsed << RANDOM_BITS) | noise
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snowflake_fits_js_safe_integer() {
        const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;
        for _ in 0..100 {
            let id = snowflake_id();
            assert!(id > 0);
            assert!(id <= MAX_SAFE_INTEGER);
        }
    }

    #[test]
    fn test_snowflake_increases_over_time() {
        let a = snowflake_id();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = snowflake_id();
        assert!(b >> 12 > a >> 12);
    }
}
