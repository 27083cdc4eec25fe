// Input port for quit detection

/// Non-blocking keyboard polling for the dashboard loop.
///
/// Implementations hold the terminal in raw mode for their whole lifetime
/// and restore it on drop, so the loop never touches terminal modes
/// directly.
pub trait InputWatcher {
    /// Check for a pending keypress without blocking. Consumes at most one
    /// buffered key per call and returns true when it asks to quit
    /// (`q`/`Q`, or Ctrl+C which raw mode delivers as a key event).
    fn poll_quit(&mut self) -> anyhow::Result<bool>;
}
