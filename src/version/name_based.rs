use crate::codec::Uuid;
use crate::digest::{md5, sha1};
use crate::error::UuidError;

/// Name-based UUID over MD5: deterministic for a given namespace and name.
pub fn uuid_v3(namespace: &[u8], name: &str) -> Result<Uuid, UuidError> {
    let mut bytes = md5(&hash_input(namespace, name)?);
    super::stamp(&mut bytes, 3);
    Ok(Uuid::from_bytes(bytes))
}

/// Name-based UUID over SHA-1, truncated to the first 16 digest bytes.
pub fn uuid_v5(namespace: &[u8], name: &str) -> Result<Uuid, UuidError> {
    let digest = sha1(&hash_input(namespace, name)?);
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    super::stamp(&mut bytes, 5);
    Ok(Uuid::from_bytes(bytes))
}

fn hash_input(namespace: &[u8], name: &str) -> Result<Vec<u8>, UuidError> {
    if namespace.len() != 16 {
        return Err(UuidError::InvalidNamespace(namespace.len()));
    }
    let mut input = Vec::with_capacity(16 + name.len());
    input.extend_from_slice(namespace);
    input.extend_from_slice(name.as_bytes());
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::NAMESPACE_DNS;

    #[test]
    fn v3_known_answer() {
        let uuid = uuid_v3(NAMESPACE_DNS.as_bytes(), "python.org").unwrap();
        assert_eq!(uuid.to_string(), "6fa459ea-ee8a-3ca4-894e-db77e160355e");
    }

    #[test]
    fn v5_known_answers() {
        let uuid = uuid_v5(NAMESPACE_DNS.as_bytes(), "python.org").unwrap();
        assert_eq!(uuid.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
        let uuid = uuid_v5(NAMESPACE_DNS.as_bytes(), "www.example.com").unwrap();
        assert_eq!(uuid.to_string(), "2ed6657d-e927-568b-95e1-2665a8aea6a2");
    }

    #[test]
    fn deterministic_and_sensitive_to_both_inputs() {
        let ns = NAMESPACE_DNS.as_bytes();
        let other_ns = crate::namespace::NAMESPACE_URL;
        assert_eq!(uuid_v3(ns, "widgets").unwrap(), uuid_v3(ns, "widgets").unwrap());
        assert_ne!(uuid_v3(ns, "widgets").unwrap(), uuid_v3(ns, "gadgets").unwrap());
        assert_ne!(
            uuid_v3(ns, "widgets").unwrap(),
            uuid_v3(other_ns.as_bytes(), "widgets").unwrap()
        );
        assert_ne!(uuid_v3(ns, "widgets").unwrap(), uuid_v5(ns, "widgets").unwrap());
    }

    #[test]
    fn rejects_wrong_length_namespaces() {
        assert_eq!(uuid_v3(&[0; 15], "x"), Err(UuidError::InvalidNamespace(15)));
        assert_eq!(uuid_v5(&[0; 17], "x"), Err(UuidError::InvalidNamespace(17)));
        assert_eq!(uuid_v5(b"", "x"), Err(UuidError::InvalidNamespace(0)));
    }

    #[test]
    fn empty_name_is_valid() {
        let uuid = uuid_v3(NAMESPACE_DNS.as_bytes(), "").unwrap();
        assert_eq!(uuid.version_num(), 3);
        assert_eq!(uuid.variant(), 0b10);
    }
}
