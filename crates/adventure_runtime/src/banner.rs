//! Startup banner.

const LOGO: [&str; 7] = [
    r"    _       _                 _                  ",
    r"   / \   __| |_   _____ _ __ | |_ _   _ _ __ ___ ",
    r"  / _ \ / _` \ \ / / _ \ '_ \| __| | | | '__/ _ \",
    r" / ___ \ (_| |\ V /  __/ | | | |_| |_| | | |  __/",
    r"/_/   \_\__,_| \_/ \___|_| |_|\__|\__,_|_|  \___|",
    r" ~~~^~~~~~~^~~~~~~~~^~~~~~~^~~~~~~~~^~~~~~~~^~~~ ",
    r"~~^~~~~~~~~~~^~~~~~~~~^~~~~~~~^~~~~~~~~~^~~~~~^~~",
];

/// Line printed under the logo.
pub const WELCOME: &str = "Adventure!";

const CYAN: &str = "\x1b[36m";
const BLUE: &str = "\x1b[34m";
const WHITE: &str = "\x1b[37m";
const DEFAULT_FG: &str = "\x1b[39m";

/// Foreground color for a logo row: sky on top, water below.
fn row_color(row: usize) -> &'static str {
    match row {
        0..=4 => CYAN,
        5..=6 => BLUE,
        _ => WHITE,
    }
}

/// Renders the logo and welcome line, one row per line.
#[must_use]
pub fn render(color: bool) -> String {
    let mut out = String::new();
    for (row, line) in LOGO.iter().enumerate() {
        if color {
            out.push_str(row_color(row));
            out.push_str(line);
            out.push_str(DEFAULT_FG);
        } else {
            out.push_str(line);
        }
        out.push('\n');
    }
    if color {
        out.push_str(WHITE);
        out.push_str(WELCOME);
        out.push_str(DEFAULT_FG);
    } else {
        out.push_str(WELCOME);
    }
    out.push('\n');
    out
}
