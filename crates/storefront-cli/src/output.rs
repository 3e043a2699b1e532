//! Terminal rendering of page effects and views.

use std::io::{self, Write};

use storefront_core::{Decorations, MenuView, PageEffect, TestimonialView};

/// How effects are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    /// One JSON object per effect
    Json,
}

pub struct Printer {
    mode: OutputMode,
}

impl Printer {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    pub fn effects(&self, effects: &[PageEffect]) -> io::Result<()> {
        let mut out = io::stdout().lock();
        for effect in effects {
            match self.mode {
                OutputMode::Json => {
                    serde_json::to_writer(&mut out, effect)?;
                    writeln!(out)?;
                }
                OutputMode::Text => write_effect(&mut out, effect)?,
            }
        }
        out.flush()
    }

    pub fn menu(&self, view: &MenuView) -> io::Result<()> {
        let mut out = io::stdout().lock();
        match self.mode {
            OutputMode::Json => {
                serde_json::to_writer(&mut out, view)?;
                writeln!(out)
            }
            OutputMode::Text => write_menu(&mut out, view),
        }
    }

    pub fn decorations(&self, decorations: &Decorations) -> io::Result<()> {
        let mut out = io::stdout().lock();
        match self.mode {
            OutputMode::Json => {
                serde_json::to_writer(&mut out, decorations)?;
                writeln!(out)
            }
            OutputMode::Text => {
                writeln!(out, "Particles ({})", decorations.particles.len())?;
                for p in &decorations.particles {
                    writeln!(
                        out,
                        "  {:>5.1}px at ({:>4.1}%, {:>4.1}%) {} {}",
                        p.size_px,
                        p.left_pct,
                        p.top_pct,
                        p.color,
                        p.animation()
                    )?;
                }
                writeln!(out, "Sparkles ({})", decorations.sparkles.len())?;
                for s in &decorations.sparkles {
                    writeln!(
                        out,
                        "  at ({:>4.1}%, {:>4.1}%) {} delay {:.2}s",
                        s.left_pct, s.top_pct, s.color, s.delay_s
                    )?;
                }
                Ok(())
            }
        }
    }

    pub fn line(&self, text: &str) -> io::Result<()> {
        if self.mode == OutputMode::Text {
            println!("{text}");
        }
        Ok(())
    }
}

fn write_effect(out: &mut impl Write, effect: &PageEffect) -> io::Result<()> {
    match effect {
        PageEffect::CartRendered(view) => writeln!(out, "{view}"),
        PageEffect::FlashAdded { item, duration } => {
            writeln!(out, "✓ added menu item {item} ({} ms)", duration.as_millis())
        }
        PageEffect::Alert { message } => writeln!(out, "! {message}"),
        PageEffect::OpenExternal { url, .. } => writeln!(out, "→ opening {url}"),
        PageEffect::CartPanel { open } => {
            writeln!(out, "cart panel {}", if *open { "open" } else { "closed" })
        }
        PageEffect::MenuFiltered(view) => write_menu(out, view),
        PageEffect::TestimonialShown(view) => write_testimonial(out, view),
        PageEffect::BackToTopVisible { visible } => {
            writeln!(out, "back-to-top {}", if *visible { "shown" } else { "hidden" })
        }
        PageEffect::Revealed { reveals } => {
            let cards: Vec<String> = reveals
                .iter()
                .map(|reveal| reveal.target.index.to_string())
                .collect();
            writeln!(out, "revealed menu cards {}", cards.join(", "))
        }
        PageEffect::ScrollTo { top, smooth } => {
            writeln!(out, "scrolling to {top}{}", if *smooth { " (smooth)" } else { "" })
        }
        PageEffect::ContactFormReset => writeln!(out, "contact form cleared"),
        PageEffect::NavMenu { open } => {
            writeln!(out, "nav menu {}", if *open { "open" } else { "closed" })
        }
    }
}

fn write_menu(out: &mut impl Write, view: &MenuView) -> io::Result<()> {
    let tabs: Vec<String> = view
        .tabs
        .iter()
        .map(|tab| {
            if tab.active {
                format!("[{}]", tab.selection)
            } else {
                tab.selection.to_string()
            }
        })
        .collect();
    writeln!(out, "Menu: {}", tabs.join("  "))?;
    for entry in view.entries.iter().filter(|entry| entry.visible) {
        writeln!(
            out,
            "  {:>2}. {:<28} {:>10}  ({})",
            entry.index, entry.title, entry.price_text, entry.category
        )?;
    }
    Ok(())
}

fn write_testimonial(out: &mut impl Write, view: &TestimonialView) -> io::Result<()> {
    match &view.active {
        Some(t) => {
            write!(out, "“{}” - {}", t.quote, t.author)?;
            if let Some(role) = &t.role {
                write!(out, ", {role}")?;
            }
            writeln!(out, "  ({}/{})", view.index + 1, view.count)
        }
        None => writeln!(out, "({}/{})", view.index + 1, view.count),
    }
}
