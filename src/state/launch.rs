#[cfg(test)]
#[path = "launch_test.rs"]
mod launch_test;

/// Page launch flag.
///
/// Written only by the hero call-to-action; read by the page shell to decide
/// whether the content sections are mounted. Once set it stays set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LaunchState {
    launched: bool,
}

impl LaunchState {
    #[must_use]
    pub fn is_launched(self) -> bool {
        self.launched
    }

    /// Set the flag. Returns `true` only for the call that flipped it, so the
    /// caller knows whether to run the one-time reveal (scroll, logging).
    pub fn launch(&mut self) -> bool {
        if self.launched {
            return false;
        }
        self.launched = true;
        true
    }
}
