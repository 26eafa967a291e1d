//! Generated identifiers: shipment tracking ids and merchant referral codes.

use rand::Rng;
use url::Url;

pub const TRACKING_PREFIX: &str = "SP";
pub const REFERRAL_PREFIX: &str = "SWIFT-";

const BASE36_UPPER: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const REFERRAL_LEN: usize = 6;

/// `SP` followed by six digits, never starting with zero.
pub fn tracking_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{TRACKING_PREFIX}{}", rng.gen_range(100_000..1_000_000))
}

/// `SWIFT-` followed by six base-36 upper-case characters.
pub fn referral_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    let suffix: String = (0..REFERRAL_LEN)
        .map(|_| BASE36_UPPER[rng.gen_range(0..BASE36_UPPER.len())] as char)
        .collect();
    format!("{REFERRAL_PREFIX}{suffix}")
}

/// Signup link carrying the referral code as `?ref=`.
pub fn referral_link(origin: &Url, code: &str) -> Url {
    let mut link = origin.clone();
    link.set_path("/ecommerce/signup");
    link.set_query(None);
    link.query_pairs_mut().append_pair("ref", code);
    link
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn tracking_ids_have_two_letters_and_six_digits() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let id = tracking_id(&mut rng);
            assert_eq!(id.len(), 8);
            assert!(id.starts_with("SP"));
            assert!(id[2..].chars().all(|ch| ch.is_ascii_digit()));
            assert_ne!(&id[2..3], "0");
        }
    }

    #[test]
    fn referral_codes_are_upper_base36() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let code = referral_code(&mut rng);
            let suffix = code.strip_prefix("SWIFT-").unwrap();
            assert_eq!(suffix.len(), 6);
            assert!(suffix
                .chars()
                .all(|ch| ch.is_ascii_digit() || ch.is_ascii_uppercase()));
        }
    }

    #[test]
    fn referral_link_replaces_path_and_query() {
        let origin = Url::parse("https://swiftpointlogistics.co.ke/ecommerce?x=1").unwrap();
        let link = referral_link(&origin, "SWIFT-AB12CD");
        assert_eq!(
            link.as_str(),
            "https://swiftpointlogistics.co.ke/ecommerce/signup?ref=SWIFT-AB12CD"
        );
    }
}
