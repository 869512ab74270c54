//! Utility functions

use rand::Rng;

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a snowflake-style unique ID (i64)
///
/// Layout: 41 bits of millisecond timestamp since 2024-01-01, then 12
/// random bits. Fits in a JS safe integer and stays collision-free at
/// back-office write rates, unlike second-resolution wall-clock IDs.
pub fn snowflake_id() -> i64 {
    const EPOCH_MS: i64 = 1_704_067_200_000; // 2024-01-01 00:00:00 UTC

    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits

    (ts << 12) | rand_bits
}
