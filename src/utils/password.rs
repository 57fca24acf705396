use crate::error::{self, Result};
use pbkdf2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Params, Pbkdf2,
};

// PBKDF2-SHA256 with a per-user random salt. The round count is well below
// the crate default, which is tuned for interactive logins measured in
// hundreds of milliseconds.
const ROUNDS: u32 = 10_000;

pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Pbkdf2
        .hash_password_customized(
            password.as_bytes(),
            None,
            None,
            Params {
                rounds: ROUNDS,
                output_length: 32,
            },
            &salt,
        )
        .map_err(|err| {
            error!("failed to hash password: {:?}", err);
            error::INTERNAL
        })?;

    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };

    Pbkdf2.verify_password(password.as_bytes(), &parsed).is_ok()
}
