//! Image and website URLs.

use rand::Rng;

use super::pattern::generate_pattern;

const IMAGE_HOSTS: [&str; 2] = ["https://dummyimage.com", "https://picsum.photos"];

/// Placeholder image URL with random dimensions.
pub fn image_url<R: Rng>(rng: &mut R) -> String {
    let width: u32 = rng.gen_range(1..=1024);
    let height: u32 = rng.gen_range(1..=1024);
    if rng.gen_bool(0.5) {
        format!("{}/{width}x{height}", IMAGE_HOSTS[0])
    } else {
        format!("{}/{width}/{height}", IMAGE_HOSTS[1])
    }
}

/// Website URL built from a word (usually a surname) and a domain suffix.
///
/// Non-ASCII words fall back to a generated `site###` host name.
pub fn website<R: Rng>(word: &str, suffix: &str, rng: &mut R) -> String {
    let host: String = word
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    let host = if host.is_empty() {
        generate_pattern("site###", rng)
    } else {
        host
    };
    format!("https://www.{host}.{suffix}/")
}
