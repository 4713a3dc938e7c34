//! Ed25519 request signature verification.
//!
//! Discord signs `timestamp || body` and sends the detached signature and the
//! timestamp in headers. Signature and public key are both hex strings.

use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum SignatureError {
    #[error("public key not configured")]
    MissingPublicKey,

    #[error("invalid hex string: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("public key must be 32 bytes, got {0}")]
    KeyLength(usize),

    #[error("malformed key or signature: {0}")]
    Malformed(ed25519_dalek::SignatureError),

    #[error("signature does not match")]
    Mismatch,
}

/// Decode a hex string into bytes, rejecting odd lengths and non-hex characters
pub fn decode_hex(input: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(input)
}

/// Verify `signature` over `timestamp` followed by the raw `body`
pub fn verify(
    public_key: Option<&str>,
    signature: &str,
    timestamp: &str,
    body: &[u8],
) -> Result<(), SignatureError> {
    let public_key = public_key.ok_or(SignatureError::MissingPublicKey)?;

    let signature_bytes = decode_hex(signature)?;
    let key_bytes = decode_hex(public_key)?;

    let key_bytes: [u8; 32] = key_bytes
        .as_slice()
        .try_into()
        .map_err(|_| SignatureError::KeyLength(key_bytes.len()))?;
    let verifying_key =
        VerifyingKey::from_bytes(&key_bytes).map_err(SignatureError::Malformed)?;
    let signature = Signature::from_slice(&signature_bytes).map_err(SignatureError::Malformed)?;

    let mut message = Vec::with_capacity(timestamp.len() + body.len());
    message.extend_from_slice(timestamp.as_bytes());
    message.extend_from_slice(body);

    verifying_key
        .verify(&message, &signature)
        .map_err(|_| SignatureError::Mismatch)
}

/// Fail-closed wrapper around [`verify`]
pub fn is_valid_signature(
    public_key: Option<&str>,
    signature: &str,
    timestamp: &str,
    body: &[u8],
) -> bool {
    match verify(public_key, signature, timestamp, body) {
        Ok(()) => true,
        Err(SignatureError::MissingPublicKey) => {
            error!("DISCORD_PUBLIC_KEY not configured");
            false
        }
        Err(e) => {
            warn!("Failed to verify signature: {}", e);
            false
        }
    }
}
