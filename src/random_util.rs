use std::fmt::Write;

/// A 16 character (8 entropy bytes) hex string, used to tag freshly
/// received records that have no server-side identity yet.
pub fn random_id() -> Result<String, getrandom::Error> {
    let mut buf = [0u8; 8];
    getrandom::getrandom(&mut buf)?;
    let mut s = String::new();
    for byte in buf {
        write!(&mut s, "{:02x}", byte).unwrap();
    }
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_random_id() {
        let id = random_id().unwrap();
        assert_eq!(id.len(), 16);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
