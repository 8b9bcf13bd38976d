//! Token encryption utilities.
//!
//! Admin access tokens are stored on disk AES-256-GCM-encrypted and
//! Base64-encoded. Each encryption uses a fresh random nonce; the stored
//! value is `[nonce (12 bytes)][ciphertext]` as Base64.

use crate::error::Error;
use aes_gcm::{
    Aes256Gcm,
    aead::{Aead, AeadCore, KeyInit, Nonce, OsRng},
};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

type Result<T, E = Error> = std::result::Result<T, E>;

/// Master encryption key for the token vault.
///
/// WARNING: In production this should come from the platform keychain or
/// an environment variable rather than being compiled in.
const MASTER_KEY: &[u8; 32] = b"CastadminTokenVault2026Secret!!!";

/// Encrypt a plaintext token for storage.
pub fn encrypt(plain_text: &str) -> Result<String> {
    let cipher = Aes256Gcm::new(MASTER_KEY.into());
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plain_text.as_bytes())
        .map_err(|e| Error::Invalid {
            message: format!("Encryption failed: {e}"),
        })?;

    let mut combined = nonce.to_vec();
    combined.extend_from_slice(&ciphertext);

    Ok(BASE64.encode(combined))
}

/// Decrypt a Base64-encoded value produced by [`encrypt`].
pub fn decrypt(cipher_text: &str) -> Result<String> {
    let data = BASE64.decode(cipher_text).map_err(|e| Error::Invalid {
        message: format!("Base64 decode failed: {e}"),
    })?;

    // Nonce is 12 bytes
    if data.len() < 12 {
        return Err(Error::Invalid {
            message: "Ciphertext too short".to_string(),
        });
    }

    let cipher = Aes256Gcm::new(MASTER_KEY.into());
    let nonce = Nonce::<Aes256Gcm>::from_slice(&data[0..12]);

    let plaintext_bytes = cipher.decrypt(nonce, &data[12..]).map_err(|e| Error::Invalid {
        message: format!("Decryption failed: {e}"),
    })?;

    String::from_utf8(plaintext_bytes).map_err(|e| Error::Invalid {
        message: format!("UTF-8 decode failed: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_decrypt() {
        let original = "an-access-token";
        let encrypted = encrypt(original).expect("Encryption failed");
        let decrypted = decrypt(&encrypted).expect("Decryption failed");
        assert_eq!(original, decrypted);
    }

    #[test]
    fn test_encrypt_produces_different_ciphertext() {
        let encrypted1 = encrypt("token").expect("Encryption failed");
        let encrypted2 = encrypt("token").expect("Encryption failed");
        // Random nonce per encryption
        assert_ne!(encrypted1, encrypted2);
    }

    #[test]
    fn test_decrypt_invalid_base64() {
        assert!(decrypt("not_valid_base64!!!").is_err());
    }

    #[test]
    fn test_decrypt_too_short() {
        // Only 4 bytes once decoded
        assert!(decrypt("AQIDBA==").is_err());
    }
}
