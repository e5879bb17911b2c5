//! Toggle command implementation.

use anyhow::Result;
use console::style;
use std::cell::RefCell;
use std::fmt::{self, Write};
use std::rc::Rc;

use themecell::config::StylingConfig;
use themecell::theme::{bind_dark_class, RootClasses};
use themecell::{ThemeContext, ThemeMode};

use super::ToggleArgs;

/// Run the toggle command.
pub fn run(args: ToggleArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    print!("{}", render(&config, args.from, args.times)?);
    Ok(())
}

/// Wires a fresh context the way an application would at startup, toggles it
/// `times` times, and reports what every listener saw.
pub fn render(
    config: &StylingConfig,
    from: ThemeMode,
    times: usize,
) -> Result<String, fmt::Error> {
    let ctx = ThemeContext::with_mode(from);
    let root = Rc::new(RefCell::new(RootClasses::new()));
    let binding = bind_dark_class(ctx.cell(), Rc::clone(&root), &config.dark_mode);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let recorder = ctx.subscribe(move |mode| sink.borrow_mut().push(*mode));

    for _ in 0..times {
        ctx.toggle_theme();
    }
    recorder.unsubscribe();

    let mut out = String::new();
    let modes = seen.borrow();
    writeln!(out, "{} {}", style("initial:").bold(), modes[0])?;
    for (i, mode) in modes.iter().skip(1).enumerate() {
        writeln!(out, "  toggle {:>2} -> {}", i + 1, mode)?;
    }
    writeln!(out, "{} {}", style("final:").bold(), ctx.mode())?;

    let classes = match binding {
        Some(_) if root.borrow().is_empty() => "(none)".to_string(),
        Some(_) => root.borrow().class_attr(),
        None => format!("(not bound, darkMode is {})", config.dark_mode),
    };
    writeln!(out, "{} {}", style("root classes:").bold(), classes)?;
    Ok(out)
}
