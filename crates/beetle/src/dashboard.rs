use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use tracing::warn;

use beetle_core::{DeviceState, Event, HtmlColor, Observer, RecordsView, StripSet};

use crate::table::GraphTable;

/// Pixels drawn per strip before the rest is summarised.
const MAX_STRIP_PIXELS: usize = 48;

/// Terminal view of the polled records, driven by refresh loop events.
///
/// Nothing is drawn until the first `Refreshed`; from then on every change
/// event redraws the whole frame. A `LostConnection` banner stays up until a
/// cycle completes without failures.
pub struct Dashboard<W> {
    out: W,
    base_url: String,
    colors: bool,
    live: bool,
    collections: Vec<String>,
    cycle: u64,
    next_delay_ms: u64,
    cycle_failed: bool,
    banner: Option<String>,
    rendered_once: bool,
    frames: u64,
}

impl<W: Write + Send> Dashboard<W> {
    pub fn new(out: W, base_url: impl Into<String>) -> Self {
        Self {
            out,
            base_url: base_url.into(),
            colors: false,
            live: false,
            collections: Vec::new(),
            cycle: 0,
            next_delay_ms: 0,
            cycle_failed: false,
            banner: None,
            rendered_once: false,
            frames: 0,
        }
    }

    /// Draw swatches with 24-bit background colors instead of hex codes.
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    /// Clear the screen before each frame.
    pub fn live(mut self, live: bool) -> Self {
        self.live = live;
        self
    }

    fn handle(&mut self, event: &Event, records: &RecordsView<'_>) -> io::Result<()> {
        match event {
            Event::TypesLoaded { collections } => {
                self.collections = collections.clone();
            }
            Event::DoRefresh { cycle } => {
                self.cycle = *cycle;
                self.cycle_failed = false;
            }
            Event::DeviceChanged { .. } | Event::StripsChanged { .. } => {
                if self.rendered_once {
                    self.render(records)?;
                }
            }
            Event::LostConnection {
                url,
                error,
                retry_in_ms,
            } => {
                self.cycle_failed = true;
                self.banner = Some(format!(
                    "Lost connection to {}: {} (retrying in {} ms)",
                    url, error, retry_in_ms
                ));
                if self.rendered_once {
                    self.render(records)?;
                }
            }
            Event::Refreshed { next_delay_ms, .. } => {
                self.next_delay_ms = *next_delay_ms;
                let recovered = !self.cycle_failed && self.banner.take().is_some();
                if !self.rendered_once || recovered {
                    self.render(records)?;
                }
            }
        }
        Ok(())
    }

    /// Draw one complete frame.
    pub fn render(&mut self, records: &RecordsView<'_>) -> io::Result<()> {
        if self.live {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        writeln!(
            self.out,
            "beetle | {} | cycle {} | next refresh in {} ms | {}",
            self.base_url,
            self.cycle,
            self.next_delay_ms,
            chrono::Local::now().format("%H:%M:%S")
        )?;
        if !self.collections.is_empty() {
            writeln!(self.out, "collections: {}", self.collections.join(", "))?;
        }
        if let Some(banner) = &self.banner {
            if self.colors {
                queue!(
                    self.out,
                    SetForegroundColor(Color::Yellow),
                    Print(format!("⚠ {}", banner)),
                    ResetColor,
                    Print("\n")
                )?;
            } else {
                writeln!(self.out, "⚠ {}", banner)?;
            }
        }
        writeln!(self.out)?;

        self.render_device(records.device)?;
        writeln!(self.out)?;
        self.render_strips(records.strips)?;

        self.out.flush()?;
        self.rendered_once = true;
        self.frames += 1;
        Ok(())
    }

    fn render_device(&mut self, device: Option<&DeviceState>) -> io::Result<()> {
        writeln!(self.out, "Device")?;
        let Some(device) = device else {
            writeln!(self.out, "  waiting for the first successful fetch")?;
            return Ok(());
        };

        write!(self.out, "  color    ")?;
        self.swatch(device.color.parse().ok(), 2)?;
        writeln!(self.out, " {}", device.color)?;
        writeln!(self.out, "  tick     {}", device.tick)?;
        if !device.debug.is_empty() {
            writeln!(self.out, "  debug    {}", device.debug)?;
        }

        if !device.spectrum.is_empty() {
            writeln!(self.out, "\nSpectrum")?;
            for line in device.spectrum.lines() {
                writeln!(self.out, "  {}", line)?;
            }
        }

        let table = GraphTable::new(device);
        if !table.is_empty() {
            writeln!(self.out, "\nGraph")?;
            for line in table.lines() {
                writeln!(self.out, "  {}", line)?;
            }
        }
        Ok(())
    }

    fn render_strips(&mut self, strips: &StripSet) -> io::Result<()> {
        writeln!(self.out, "Strips ({})", strips.len())?;
        for strip in strips.iter() {
            write!(
                self.out,
                "  #{:<4} x{:<2} {:>4} px  ",
                strip.sid,
                strip.copies,
                strip.len()
            )?;
            for color in strip.colors().take(MAX_STRIP_PIXELS) {
                self.swatch(color, 1)?;
                if !self.colors {
                    write!(self.out, " ")?;
                }
            }
            if strip.len() > MAX_STRIP_PIXELS {
                write!(self.out, " +{} more", strip.len() - MAX_STRIP_PIXELS)?;
            }
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// A colored block `cells` wide, or the hex code when colors are off.
    fn swatch(&mut self, color: Option<HtmlColor>, cells: usize) -> io::Result<()> {
        match (color, self.colors) {
            (Some(c), true) => queue!(
                self.out,
                SetBackgroundColor(Color::Rgb {
                    r: c.r,
                    g: c.g,
                    b: c.b
                }),
                Print(" ".repeat(cells)),
                ResetColor
            ),
            (Some(c), false) => write!(self.out, "{}", c.to_hex()),
            (None, true) => write!(self.out, "{}", "?".repeat(cells)),
            (None, false) => write!(self.out, "?"),
        }
    }
}

impl<W: Write + Send> Observer for Dashboard<W> {
    fn notify(&mut self, event: &Event, records: &RecordsView<'_>) {
        if let Err(e) = self.handle(event, records) {
            warn!(
                event = "cli.dashboard.render_failed",
                trigger = event.name(),
                error = %e
            );
        }
    }
}
