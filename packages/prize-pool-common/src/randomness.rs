use cosmwasm_schema::cw_serde;
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RandomnessError {
    #[error("randomness already committed")]
    AlreadyCommitted,

    #[error("no commitment to reveal against")]
    NotCommitted,

    #[error("reveal pre-image mismatch: sha256(secret, salt) != committed hash")]
    RevealMismatch,

    #[error("invalid commitment: {reason}")]
    InvalidCommitment { reason: String },
}

/// Two-phase commit-reveal randomness for a single draw.
///
/// The secret hash is committed before the weight snapshot is final and
/// before the reveal block is known, so the committer cannot steer the
/// outcome by choosing the secret. The final randomness folds in entropy
/// from the reveal block, which is unknown at commit time. The committer
/// can still choose whether to reveal at all; that asymmetry is accepted
/// and handled operationally, not by this state machine.
#[cw_serde]
pub enum CommitReveal {
    None,
    Committed {
        /// sha256(secret, salt), hex-encoded
        secret_hash: String,
    },
    Revealed {
        secret_hash: String,
        /// hex-encoded
        secret: String,
        /// hex-encoded
        salt: String,
        /// sha256(secret, salt, block_entropy), hex-encoded
        randomness: String,
    },
}

impl CommitReveal {
    pub fn new() -> Self {
        CommitReveal::None
    }

    /// Store a hex-encoded sha256 commitment. Valid only before any
    /// commitment exists.
    pub fn commit(&mut self, secret_hash: String) -> Result<(), RandomnessError> {
        match self {
            CommitReveal::None => {
                let decoded = hex::decode(&secret_hash).map_err(|_| {
                    RandomnessError::InvalidCommitment {
                        reason: "not valid hex".to_string(),
                    }
                })?;
                if decoded.len() != 32 {
                    return Err(RandomnessError::InvalidCommitment {
                        reason: format!("expected 32 bytes, got {}", decoded.len()),
                    });
                }
                *self = CommitReveal::Committed { secret_hash };
                Ok(())
            }
            _ => Err(RandomnessError::AlreadyCommitted),
        }
    }

    /// Check the pre-image against the commitment and fold in the block
    /// entropy. On mismatch the state is left untouched so the caller can
    /// retry with the correct pre-image.
    pub fn reveal(
        &mut self,
        secret: &[u8],
        salt: &[u8],
        block_entropy: &[u8],
    ) -> Result<[u8; 32], RandomnessError> {
        let secret_hash = match self {
            CommitReveal::Committed { secret_hash } => secret_hash.clone(),
            _ => return Err(RandomnessError::NotCommitted),
        };

        let pre_image = commitment(secret, salt);
        if hex::encode(pre_image) != secret_hash {
            return Err(RandomnessError::RevealMismatch);
        }

        let randomness = combine(secret, salt, block_entropy);
        *self = CommitReveal::Revealed {
            secret_hash,
            secret: hex::encode(secret),
            salt: hex::encode(salt),
            randomness: hex::encode(randomness),
        };
        Ok(randomness)
    }

    pub fn secret_hash(&self) -> Option<&str> {
        match self {
            CommitReveal::None => None,
            CommitReveal::Committed { secret_hash } => Some(secret_hash),
            CommitReveal::Revealed { secret_hash, .. } => Some(secret_hash),
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self, CommitReveal::Revealed { .. })
    }
}

impl Default for CommitReveal {
    fn default() -> Self {
        Self::new()
    }
}

/// `sha256(secret, salt)`: the value committed at draw open.
pub fn commitment(secret: &[u8], salt: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(secret);
    hasher.update(salt);
    hasher.finalize().into()
}

/// `sha256(secret, salt, block_entropy)`: the final per-draw randomness.
pub fn combine(secret: &[u8], salt: &[u8], block_entropy: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(secret);
    hasher.update(salt);
    hasher.update(block_entropy);
    hasher.finalize().into()
}

/// Entropy derived from the reveal block, unknown at commit time.
pub fn block_entropy(height: u64, time_nanos: u64) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(height.to_be_bytes());
    hasher.update(time_nanos.to_be_bytes());
    hasher.finalize().into()
}

/// Reduce the randomness to a value in `[0, total_weight)`: big-endian
/// u128 from the first 16 bytes, mod the total.
///
/// `total_weight` must be positive; an empty population is resolved by the
/// caller before any pick is taken.
pub fn pick(randomness: &[u8; 32], total_weight: u128) -> u128 {
    debug_assert!(total_weight > 0);
    let mut ticket_bytes = [0u8; 16];
    ticket_bytes.copy_from_slice(&randomness[0..16]);
    u128::from_be_bytes(ticket_bytes) % total_weight
}
