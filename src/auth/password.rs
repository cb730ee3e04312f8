/**
 * Password Hashing
 *
 * bcrypt hashing and verification for stored credentials. Each hash gets
 * a fresh random salt, so two users with the same password never share a
 * digest, and the output string embeds algorithm, cost, and salt, so
 * verification needs nothing besides the stored value.
 */

use crate::error::AuthError;

/// Hash a plaintext password with the given work factor
///
/// # Arguments
///
/// * `password` - plaintext password
/// * `cost` - bcrypt work factor (the service default is 10)
pub fn hash_password(password: &str, cost: u32) -> Result<String, AuthError> {
    Ok(bcrypt::hash(password, cost)?)
}

/// Verify a plaintext password against a stored hash
///
/// A mismatch is `Ok(false)`, never an error; errors mean the stored hash
/// itself is unusable.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    Ok(bcrypt::verify(password, hash)?)
}
