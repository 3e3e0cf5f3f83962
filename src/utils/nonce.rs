//! Clock and randomness feeding the tokens embedded in generated deep links.

use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

/// Wall-clock and randomness capability consumed by the taobao and alipay
/// converters. Behind a trait so tests can pin generated URIs to exact
/// strings.
pub trait NonceSource: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;

    /// 24 random bits for the taobao session nonce.
    fn rand_bits(&self) -> u32;

    /// Random identifier used to build the alipay launch key.
    fn uuid(&self) -> String;
}

/// Taobao session nonce in the shape `rnd<6 hex digits>_<millis>`.
pub fn slk_sid(source: &dyn NonceSource) -> String {
    format!(
        "rnd{:06x}_{}",
        source.rand_bits() & 0xff_ffff,
        source.now_millis()
    )
}

/// Alipay request-scoped launch key: a uuid glued to the current millis.
pub fn launch_key(source: &dyn NonceSource) -> String {
    format!("{}{}", source.uuid(), source.now_millis())
}

/// Production source backed by the system clock and process randomness.
pub struct SystemNonce;

impl NonceSource for SystemNonce {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    fn rand_bits(&self) -> u32 {
        rand::random::<u32>() & 0xff_ffff
    }

    fn uuid(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl NonceSource for Fixed {
        fn now_millis(&self) -> u64 {
            1700000000000
        }
        fn rand_bits(&self) -> u32 {
            0x00abcdef
        }
        fn uuid(&self) -> String {
            "0a1b2c3d-0000-4000-8000-feedfacecafe".to_string()
        }
    }

    #[test]
    fn test_slk_sid_shape() {
        assert_eq!(slk_sid(&Fixed), "rndabcdef_1700000000000");
    }

    #[test]
    fn test_slk_sid_pads_small_values() {
        struct Small;
        impl NonceSource for Small {
            fn now_millis(&self) -> u64 {
                7
            }
            fn rand_bits(&self) -> u32 {
                0x1
            }
            fn uuid(&self) -> String {
                String::new()
            }
        }
        assert_eq!(slk_sid(&Small), "rnd000001_7");
    }

    #[test]
    fn test_launch_key_concatenation() {
        assert_eq!(
            launch_key(&Fixed),
            "0a1b2c3d-0000-4000-8000-feedfacecafe1700000000000"
        );
    }

    #[test]
    fn test_system_nonce_masks_to_24_bits() {
        for _ in 0..32 {
            assert!(SystemNonce.rand_bits() <= 0xff_ffff);
        }
    }
}
