use xxhash_rust::xxh3::xxh3_64;

/// 7 lowercase hex chars of the xxh3 digest, the same width the asset name
/// templates use for `[hash:7]`.
pub fn short_hash(input: &[u8]) -> String {
  let mut hex = format!("{:016x}", xxh3_64(input));
  hex.truncate(7);
  hex
}

#[test]
fn test_short_hash() {
  let hash = short_hash(b"hello");
  assert_eq!(hash.len(), 7);
  assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
  assert_eq!(hash, short_hash(b"hello"));
  assert_ne!(hash, short_hash(b"hello!"));
}
