use std::fmt;
use std::io::Write;

use libs::once_cell::sync::Lazy;
use libs::termcolor::{Ansi, Color, ColorSpec, WriteColor};

static USE_COLOR: Lazy<bool> =
    Lazy::new(|| std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stderr));

pub fn use_color() -> bool {
    *USE_COLOR
}

fn paint(s: &str, colorspec: &ColorSpec) -> std::io::Result<String> {
    let mut v = Vec::new();
    let mut ansi_writer = Ansi::new(&mut v);
    ansi_writer.set_color(colorspec)?;
    ansi_writer.write_all(s.as_bytes())?;
    ansi_writer.reset()?;
    Ok(String::from_utf8_lossy(&v).into_owned())
}

fn style<S: AsRef<str>>(s: S, colorspec: ColorSpec) -> impl fmt::Display {
    if !use_color() {
        return String::from(s.as_ref());
    }
    paint(s.as_ref(), &colorspec).unwrap_or_else(|_| String::from(s.as_ref()))
}

pub fn red_bold<S: AsRef<str>>(s: S) -> impl fmt::Display {
    let mut style_spec = ColorSpec::new();
    style_spec.set_fg(Some(Color::Red)).set_bold(true);
    style(s, style_spec)
}

pub fn yellow<S: AsRef<str>>(s: S) -> impl fmt::Display {
    let mut style_spec = ColorSpec::new();
    style_spec.set_fg(Some(Color::Yellow));
    style(s, style_spec)
}

pub fn green<S: AsRef<str>>(s: S) -> impl fmt::Display {
    let mut style_spec = ColorSpec::new();
    style_spec.set_fg(Some(Color::Green));
    style(s, style_spec)
}
