use anyhow::Result;
use crossterm::style::{
    Attribute, Color as CrosstermColor, ResetColor, SetAttribute, SetForegroundColor,
};
use std::fmt::Write;

use crate::export::{option_label, preview_window};
use crate::quiz::ParsedQuestion;
use crate::ColorDepth;

pub struct AnsiOptions {
    pub terminal_width: usize,
    pub color_depth: ColorDepth,
    pub preview_limit: usize,
}

impl Default for AnsiOptions {
    fn default() -> Self {
        Self {
            terminal_width: std::env::var("COLUMNS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(80),
            color_depth: ColorDepth::Auto,
            preview_limit: 3,
        }
    }
}

pub fn export_to_ansi_with_options(
    questions: &[ParsedQuestion],
    options: &AnsiOptions,
) -> Result<String> {
    let mut output = String::new();
    let window = preview_window(questions, options.preview_limit);

    writeln!(
        output,
        "{}",
        format_ansi_text(
            &format!("■ Found {} question(s)", questions.len()),
            true,
            false,
            Some("#FFFF00"), // Yellow
            options,
        )
    )?;

    let separator = "=".repeat(std::cmp::min(50, options.terminal_width));
    writeln!(output, "{separator}")?;

    for (number, question) in window.shown.iter().enumerate() {
        output.push('\n');
        write_ansi_question(&mut output, number + 1, question, options)?;
    }

    if window.remaining > 0 {
        output.push('\n');
        writeln!(
            output,
            "{}",
            format_ansi_text(
                &format!("... and {} more question(s)", window.remaining),
                false,
                true,
                Some("#A0A0A0"), // Light gray
                options,
            )
        )?;
    }

    Ok(output)
}

fn write_ansi_question(
    output: &mut String,
    number: usize,
    question: &ParsedQuestion,
    options: &AnsiOptions,
) -> Result<()> {
    let heading = format_ansi_text(
        &format!("{number}. {}", question.question),
        true,
        false,
        Some("#00FFFF"), // Cyan
        options,
    );
    writeln!(output, "{heading}")?;

    for (index, option) in question.options.iter().enumerate() {
        let label = format!("   {}) ", option_label(index));
        let is_correct = !option.is_empty() && *option == question.correct_answer;

        if option.is_empty() {
            writeln!(
                output,
                "{}{}",
                label,
                format_ansi_text("(empty)", false, true, Some("#666666"), options)
            )?;
        } else if is_correct {
            writeln!(
                output,
                "{}{}",
                label,
                format_ansi_text(&format!("{option} ✓"), true, false, Some("#00FF00"), options)
            )?;
        } else {
            writeln!(output, "{label}{option}")?;
        }
    }

    Ok(())
}

fn format_ansi_text(
    text: &str,
    bold: bool,
    italic: bool,
    color: Option<&str>,
    options: &AnsiOptions,
) -> String {
    let mut result = String::new();

    if bold {
        result.push_str(&format!("{}", SetAttribute(Attribute::Bold)));
    }
    if italic {
        result.push_str(&format!("{}", SetAttribute(Attribute::Italic)));
    }

    if let Some(color_hex) = color {
        result.push_str(&format_ansi_color(Some(color_hex), options));
    }

    result.push_str(text);

    // Reset after every span so styles do not bleed into the next line
    if bold || italic {
        result.push_str(&format!("{}", SetAttribute(Attribute::Reset)));
    }
    result.push_str(&format_ansi_reset());

    result
}

fn format_ansi_color(color_hex: Option<&str>, options: &AnsiOptions) -> String {
    let Some(hex) = color_hex else {
        return String::new();
    };

    match convert_hex_to_crossterm_color(hex, &options.color_depth) {
        Some(color) => format!("{}", SetForegroundColor(color)),
        None => String::new(),
    }
}

fn format_ansi_reset() -> String {
    format!("{ResetColor}")
}

fn convert_hex_to_crossterm_color(hex: &str, color_depth: &ColorDepth) -> Option<CrosstermColor> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    match color_depth {
        ColorDepth::Monochrome => None,
        ColorDepth::Standard => Some(CrosstermColor::AnsiValue(rgb_to_ansi_16(r, g, b))),
        ColorDepth::Extended => Some(CrosstermColor::AnsiValue(rgb_to_ansi_256(r, g, b))),
        ColorDepth::TrueColor | ColorDepth::Auto => Some(CrosstermColor::Rgb { r, g, b }),
    }
}

fn rgb_to_ansi_16(r: u8, g: u8, b: u8) -> u8 {
    let base = match (r > 64, g > 64, b > 64) {
        (false, false, false) => 0, // Black
        (false, false, true) => 4,  // Blue
        (false, true, false) => 2,  // Green
        (false, true, true) => 6,   // Cyan
        (true, false, false) => 1,  // Red
        (true, false, true) => 5,   // Magenta
        (true, true, false) => 3,   // Yellow
        (true, true, true) => 7,    // White
    };

    if r > 127 || g > 127 || b > 127 {
        base + 8
    } else {
        base
    }
}

fn rgb_to_ansi_256(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        // Grayscale ramp
        if r < 8 {
            16
        } else if r > 247 {
            231
        } else {
            232 + (r - 8) / 10
        }
    } else {
        // Color cube: 16 + 36*r + 6*g + b
        let r_index = (r as f32 / 255.0 * 5.0) as u8;
        let g_index = (g as f32 / 255.0 * 5.0) as u8;
        let b_index = (b as f32 / 255.0 * 5.0) as u8;
        16 + 36 * r_index + 6 * g_index + b_index
    }
}
