// Full-screen dashboard renderer
use crate::application::dashboard_service::REFRESH_INTERVAL;
use crate::application::display_renderer::DisplayRenderer;
use crate::domain::codec;
use crate::domain::session::DashboardState;
use crossterm::cursor::MoveTo;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use crossterm::{execute, queue};
use std::io::{self, Stdout, Write};

/// Lay out the whole screen as text. Pure: identical states produce
/// identical output, byte for byte.
pub fn compose(state: &DashboardState) -> String {
    let mut screen = String::new();

    screen.push_str("╔══════════════════════════════════════════════╗\n");
    screen.push_str("║     Singapore Weather - Live Updates         ║\n");
    screen.push_str("╚══════════════════════════════════════════════╝\n");
    screen.push('\n');

    if let Some(message) = &state.last_error {
        screen.push_str(&format!("⚠️  Error: {message}\n"));
        screen.push('\n');
    }

    if let Some(record) = &state.latest {
        let code = record.weather_code;
        screen.push_str(&format!(
            "  {} {}\n",
            codec::emoji(code),
            codec::describe(code)
        ));
        screen.push('\n');

        screen.push_str(&format!(
            "  🌡️  Temperature:  {:.1}°C\n",
            record.temperature_c
        ));
        screen.push_str(&format!(
            "  🤔 Feels like:    {:.1}°C\n",
            record.apparent_temperature_c
        ));
        screen.push_str(&format!(
            "  💧 Humidity:      {}%\n",
            record.relative_humidity_pct
        ));
        screen.push_str(&format!(
            "  ☁️  Cloud cover:   {}%\n",
            record.cloud_cover_pct
        ));
        screen.push_str(&format!(
            "  💨 Wind speed:    {:.1} km/h\n",
            record.wind_speed_kmh
        ));
        screen.push_str(&format!(
            "  🧭 Wind direction: {} ({}°)\n",
            codec::compass_label(record.wind_direction_deg),
            record.wind_direction_deg
        ));
        screen.push('\n');

        screen.push_str("  📍 Location: Singapore\n");
        if let Some(at) = &state.last_update {
            screen.push_str(&format!("  🕐 Last updated: {}\n", at.format("%H:%M:%S")));
        }
        screen.push('\n');
    }

    screen.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    screen.push_str("  Press 'q' or Ctrl+C to exit\n");
    screen.push_str(&format!(
        "  Updates every {} seconds\n",
        REFRESH_INTERVAL.as_secs()
    ));

    screen
}

/// Writes composed screens to a terminal: clear, home the cursor, redraw.
pub struct Screen<W: Write> {
    out: W,
}

impl Screen<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Screen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Wipe the screen, used on teardown so the shell gets a clean prompt.
    pub fn clear(&mut self) -> anyhow::Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    fn draw(&mut self, state: &DashboardState) -> anyhow::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        // Raw mode disables output post-processing, so lines need explicit
        // carriage returns.
        for line in compose(state).lines() {
            queue!(self.out, Print(line), Print("\r\n"))?;
        }
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> DisplayRenderer for Screen<W> {
    fn render(&mut self, state: &DashboardState) -> anyhow::Result<()> {
        self.draw(state)
    }
}
