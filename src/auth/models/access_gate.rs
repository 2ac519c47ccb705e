use std::sync::atomic::{AtomicBool, Ordering};

/// Static-password gate in front of the pane grid. A plain string compare
/// that, once passed, stays open for the life of the process.
#[derive(Debug)]
pub struct AccessGate {
    password: Option<String>,
    unlocked: AtomicBool,
}

impl AccessGate {
    pub fn new(password: Option<String>) -> Self {
        Self {
            password: password.filter(|p| !p.is_empty()),
            unlocked: AtomicBool::new(false),
        }
    }

    pub fn is_open(&self) -> bool {
        self.password.is_none() || self.unlocked.load(Ordering::Relaxed)
    }

    pub fn unlock(&self, attempt: &str) -> bool {
        let matches = match &self.password {
            Some(password) => password == attempt,
            None => true,
        };

        if matches {
            self.unlocked.store(true, Ordering::Relaxed);
        }

        matches
    }
}
