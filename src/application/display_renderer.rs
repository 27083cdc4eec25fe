// Display port for full-screen redraws
use crate::domain::session::DashboardState;

/// Full-screen redraw of the dashboard from the current state.
///
/// Rendering must be a pure function of the state apart from the clear and
/// write side effects: identical states produce identical screens.
pub trait DisplayRenderer {
    fn render(&mut self, state: &DashboardState) -> anyhow::Result<()>;
}
