//! Session access gate.

/// Shared-passphrase gate in front of the studio UI.
///
/// This is a UI toggle, not a security control: a plain string comparison
/// that unlocks the session on match.
///
/// # Examples
///
/// ```
/// use atelier_studio::AccessGate;
///
/// let mut gate = AccessGate::new("CraneBay");
/// assert!(!gate.is_unlocked());
/// assert!(!gate.unlock("wrong"));
/// assert!(gate.unlock("CraneBay"));
/// assert!(gate.is_unlocked());
/// ```
#[derive(Debug, Clone)]
pub struct AccessGate {
    passphrase: String,
    unlocked: bool,
}

impl AccessGate {
    /// Create a locked gate guarding the given passphrase.
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: passphrase.into(),
            unlocked: false,
        }
    }

    /// Attempt to unlock with the entered text. Returns whether it matched.
    pub fn unlock(&mut self, attempt: &str) -> bool {
        if attempt == self.passphrase {
            self.unlocked = true;
        }
        self.unlocked
    }

    /// Whether the session has been unlocked.
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_leaves_gate_locked() {
        let mut gate = AccessGate::new("CraneBay");
        assert!(!gate.unlock("cranebay"));
        assert!(!gate.is_unlocked());
    }

    #[test]
    fn unlock_persists_for_the_session() {
        let mut gate = AccessGate::new("CraneBay");
        assert!(gate.unlock("CraneBay"));
        // A later mismatch does not re-lock.
        assert!(gate.unlock("other"));
        assert!(gate.is_unlocked());
    }
}
