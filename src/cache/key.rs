//! Derivação de chaves do cache.

use sha2::{Digest, Sha256};

/// Chave de cache: hash SHA256 dos bytes UTF-8 do texto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey([u8; 32]);

impl CacheKey {
    /// Deriva a chave de um texto.
    ///
    /// Textos idênticos sempre geram a mesma chave. Nenhuma normalização é
    /// aplicada: textos que diferem apenas em espaços geram chaves distintas.
    pub fn derive(text: &str) -> Self {
        let digest = Sha256::digest(text.as_bytes());
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// Bytes do digest.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_text_same_key() {
        let key1 = CacheKey::derive("How do we reduce churn?");
        let key2 = CacheKey::derive("How do we reduce churn?");
        let key3 = CacheKey::derive("How do we reduce cost?");

        assert_eq!(key1, key2);
        assert_ne!(key1, key3);
    }

    #[test]
    fn test_whitespace_is_significant() {
        assert_ne!(CacheKey::derive("problem"), CacheKey::derive(" problem "));
    }

    #[test]
    fn test_empty_text() {
        // SHA256 da string vazia
        assert_eq!(
            CacheKey::derive("").to_string(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        let key = CacheKey::derive("ideia");
        let encoded = key.to_string();
        assert_eq!(encoded.len(), 64);
        assert!(encoded
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(hex::decode(&encoded).unwrap(), key.as_bytes().to_vec());
    }
}
