use std::cell::Cell;

use colored::*;
use nessus_common::log::PRINT_TARGET;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

thread_local! {
    /// Width the keys of [`aligned_line`] are padded to.
    pub static GLOBAL_KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }
    let label: String = format!("⟦ NESSUS v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    print(&labelled_rule(label.bright_green().bold(), '═'));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }
    let label: String = format!("⟦ {} ⟧", msg.to_uppercase());
    print(&labelled_rule(label.bright_green(), '─'));
}

pub fn fat_separator() {
    print(&rule('═'));
}

pub fn end_of_program(q_level: u8) {
    if q_level == 0 {
        fat_separator();
    }
}

/// `key.....: value`, padded to [`GLOBAL_KEY_WIDTH`].
pub fn aligned_line(key: &str, value: ColoredString) {
    let dots: String = ".".repeat((GLOBAL_KEY_WIDTH.get() + 1).saturating_sub(key.len()));
    print_status(format!(
        "{}{}{} {}",
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    ));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    print(&format!(
        "{} {}",
        ">".color(colors::SEPARATOR),
        msg.as_ref().color(colors::TEXT_DEFAULT)
    ));
}

pub fn tree_head(idx: usize, name: &str) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));
}

pub fn as_tree_one_level(details: Vec<(String, ColoredString)>) {
    let key_width: usize = details.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let last: usize = details.len().saturating_sub(1);

    for (i, (key, value)) in details.iter().enumerate() {
        let branch: &str = if i == last { "└─" } else { "├─" };
        print(&format!(
            " {} {}{}{} {}",
            branch.color(colors::SEPARATOR),
            key.color(colors::TEXT_DEFAULT),
            ".".repeat(key_width - key.len()).color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

pub fn centerln(msg: &str) {
    let pad: String = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{pad}{msg}{pad}"));
}

pub fn no_results(what: &str) {
    centerln(&format!("no {what} in this report").red().bold().to_string());
}

fn rule(fill: char) -> String {
    fill.to_string()
        .repeat(TOTAL_WIDTH)
        .color(colors::SEPARATOR)
        .to_string()
}

/// A rule of `fill` with `label` in the middle.
fn labelled_rule(label: ColoredString, fill: char) -> String {
    let label_width: usize = UnicodeWidthStr::width(&*label);
    let side: usize = TOTAL_WIDTH.saturating_sub(label_width);
    let left: String = fill.to_string().repeat(side / 2);
    let right: String = fill.to_string().repeat(side - side / 2);
    format!(
        "{}{}{}",
        left.color(colors::SEPARATOR),
        label,
        right.color(colors::SEPARATOR)
    )
}
