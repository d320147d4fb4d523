//! Element markup builders
//!
//! Pure HTML generators for each decorative element kind, plus the static
//! backdrop layers. All sizing is inline so a node's look depends only on
//! its spec; positioning and transforms are applied separately per frame.

use crate::sim::{DecorativeElementSpec, ElementKind};
use crate::theme;

/// Append a two-digit hex alpha to a `#rrggbb` color
fn with_alpha(color: &str, alpha: &str) -> String {
    format!("{color}{alpha}")
}

/// Minimal HTML escaping for user-facing labels
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Three traffic-light dots shared by terminal and window chrome
fn header_dots(size: f32) -> String {
    let dot = size / 56.0;
    let mut out = String::new();
    for color in [theme::RED, theme::YELLOW, theme::GREEN] {
        out.push_str(&format!(
            "<span style=\"display:inline-block;width:{dot}px;height:{dot}px;\
             border-radius:50%;background:{color};margin-right:4px\"></span>"
        ));
    }
    out
}

fn terminal_window(size: f32, color: &str, content: &str) -> String {
    let height = size * 0.7;
    let title_px = size / 20.0;
    let text_px = size / 16.0;
    let prompt = escape(content);
    format!(
        "<div style=\"width:{size}px;height:{height}px;border-radius:6px;overflow:hidden;\
         display:flex;flex-direction:column;background:{crust};\
         border:1px solid {surface};box-shadow:0 4px 6px -1px rgba(0,0,0,0.1)\">\
         <div style=\"display:flex;align-items:center;padding:2px 8px;background:{surface};\
         font-size:{title_px}px;color:{text}\">{dots}<span style=\"margin:0 auto\">bash</span></div>\
         <div style=\"padding:8px;font-size:{text_px}px;font-family:monospace\">\
         <span style=\"color:{color}\">air@airwu</span>\
         <span style=\"color:{text}\">:</span>\
         <span style=\"color:{blue}\">~</span>\
         <span style=\"color:{text}\"> $ {prompt}</span></div></div>",
        crust = theme::CRUST,
        surface = theme::SURFACE0,
        text = theme::TEXT,
        blue = theme::BLUE,
        dots = header_dots(size),
    )
}

fn window_pane(size: f32, color: &str, content: &str) -> String {
    let height = size * 0.75;
    let title_px = size / 20.0;
    let text_px = size / 12.0;
    let body = escape(content);
    format!(
        "<div style=\"width:{size}px;height:{height}px;border-radius:6px;overflow:hidden;\
         display:flex;flex-direction:column;background:{bg};backdrop-filter:blur(8px);\
         border:1px solid {border};box-shadow:0 10px 15px -3px rgba(0,0,0,0.1)\">\
         <div style=\"display:flex;align-items:center;padding:2px 8px;background:{header};\
         font-size:{title_px}px;color:{text}\">{dots}<span style=\"margin:0 auto\">notepad</span></div>\
         <div style=\"flex:1;display:flex;align-items:center;justify-content:center;\
         font-size:{text_px}px;font-weight:bold;color:{color}\">{body}</div></div>",
        bg = with_alpha(color, "10"),
        border = with_alpha(color, "30"),
        header = with_alpha(color, "20"),
        text = theme::TEXT,
        dots = header_dots(size),
    )
}

fn tux_icon(size: f32) -> String {
    format!(
        "<div style=\"width:{size}px;height:{size}px;display:flex;align-items:center;\
         justify-content:center\">\
         <svg viewBox=\"0 0 100 100\" width=\"{size}\" height=\"{size}\">\
         <path d=\"M50,10 C30,10 25,30 25,40 C25,50 30,55 25,65 C20,75 10,80 15,90 \
         C20,100 40,95 50,90 C60,95 80,100 85,90 C90,80 80,75 75,65 C70,55 75,50 75,40 \
         C75,30 70,10 50,10 Z\" fill=\"#000000\"/>\
         <ellipse cx=\"35\" cy=\"35\" rx=\"5\" ry=\"7\" fill=\"white\"/>\
         <ellipse cx=\"65\" cy=\"35\" rx=\"5\" ry=\"7\" fill=\"white\"/>\
         <ellipse cx=\"35\" cy=\"37\" rx=\"2\" ry=\"3\" fill=\"black\"/>\
         <ellipse cx=\"65\" cy=\"37\" rx=\"2\" ry=\"3\" fill=\"black\"/>\
         <ellipse cx=\"50\" cy=\"50\" rx=\"10\" ry=\"7\" fill=\"{yellow}\"/>\
         <ellipse cx=\"50\" cy=\"60\" rx=\"5\" ry=\"3\" fill=\"{red}\"/>\
         </svg></div>",
        yellow = theme::YELLOW,
        red = theme::RED,
    )
}

fn folder_icon(size: f32, color: &str) -> String {
    let svg = size * 0.8;
    let label_px = size / 8.0;
    format!(
        "<div style=\"width:{size}px;height:{size}px;display:flex;flex-direction:column;\
         align-items:center;justify-content:center\">\
         <svg viewBox=\"0 0 24 24\" width=\"{svg}\" height=\"{svg}\">\
         <path d=\"M10 4H4c-1.1 0-1.99.9-1.99 2L2 18c0 1.1.9 2 2 2h16c1.1 0 2-.9 2-2V8\
         c0-1.1-.9-2-2-2h-8l-2-2z\" fill=\"{color}\"/></svg>\
         <span style=\"color:{text};font-size:{label_px}px\">home</span></div>",
        text = theme::TEXT,
    )
}

fn command_chip(size: f32, color: &str, command: &str) -> String {
    let height = size * 0.4;
    let text_px = size / 8.0;
    let body = escape(command);
    format!(
        "<div style=\"width:{size}px;height:{height}px;border-radius:6px;display:flex;\
         align-items:center;justify-content:center;padding:8px;background:{bg};\
         border:1px solid {border}\">\
         <span style=\"color:{color};font-size:{text_px}px;font-weight:bold;\
         font-family:monospace\">{body}</span></div>",
        bg = with_alpha(color, "20"),
        border = with_alpha(color, "40"),
    )
}

fn vim_icon(size: f32) -> String {
    let badge = size * 0.8;
    let text_px = size / 4.0;
    let label_px = size / 8.0;
    format!(
        "<div style=\"width:{size}px;height:{size}px;display:flex;flex-direction:column;\
         align-items:center;justify-content:center\">\
         <div style=\"width:{badge}px;height:{badge}px;border-radius:6px;display:flex;\
         align-items:center;justify-content:center;background:{green};color:white;\
         font-size:{text_px}px;font-weight:bold\">Vim</div>\
         <span style=\"color:{text};font-size:{label_px}px\">editor</span></div>",
        green = theme::VIM_GREEN,
        text = theme::TEXT,
    )
}

fn desktop_icon(size: f32, color: &str, name: &str) -> String {
    let circle = size * 0.7;
    let initial_px = size / 5.0;
    let label_px = size / 8.0;
    let initial: String = name.chars().take(1).collect();
    let label = escape(name);
    format!(
        "<div style=\"width:{size}px;height:{size}px;display:flex;flex-direction:column;\
         align-items:center;justify-content:center\">\
         <div style=\"width:{circle}px;height:{circle}px;border-radius:50%;display:flex;\
         align-items:center;justify-content:center;background:{color};color:white;\
         font-size:{initial_px}px;font-weight:bold\">{initial}</div>\
         <span style=\"color:{text};font-size:{label_px}px;margin-top:4px\">{label}</span></div>",
        text = theme::TEXT,
    )
}

fn package_icon(size: f32, color: &str, name: &str) -> String {
    let svg = size * 0.7;
    let label_px = size / 8.0;
    let label = escape(name);
    format!(
        "<div style=\"width:{size}px;height:{size}px;display:flex;flex-direction:column;\
         align-items:center;justify-content:center\">\
         <svg viewBox=\"0 0 24 24\" width=\"{svg}\" height=\"{svg}\">\
         <path d=\"M20.54 5.23l-1.39-1.68C18.88 3.21 18.47 3 18 3H6c-.47 0-.88.21-1.16.55\
         L3.46 5.23C3.17 5.57 3 6.02 3 6.5V19c0 1.1.9 2 2 2h14c1.1 0 2-.9 2-2V6.5\
         c0-.48-.17-.93-.46-1.27zM12 17.5L6.5 12H10v-2h4v2h3.5L12 17.5z\" fill=\"{color}\"/>\
         </svg><span style=\"color:{text};font-size:{label_px}px\">{label}</span></div>",
        text = theme::TEXT,
    )
}

/// Build the inner markup for one element spec
pub fn element_markup(spec: &DecorativeElementSpec) -> String {
    let size = spec.size;
    let color = spec.accent_color.as_deref();
    let label = spec.label.as_deref();

    match spec.kind {
        ElementKind::Terminal => {
            terminal_window(size, color.unwrap_or(theme::MAUVE), label.unwrap_or("$ ls -la"))
        }
        ElementKind::Window => {
            window_pane(size, color.unwrap_or(theme::BLUE), label.unwrap_or("Linux Rules!"))
        }
        ElementKind::Tux => tux_icon(size),
        ElementKind::Folder => folder_icon(size, color.unwrap_or(theme::YELLOW)),
        ElementKind::Command => {
            command_chip(size, color.unwrap_or(theme::GREEN), label.unwrap_or("sudo"))
        }
        ElementKind::Vim => vim_icon(size),
        ElementKind::Desktop => {
            desktop_icon(size, color.unwrap_or(theme::MAUVE), label.unwrap_or("KDE"))
        }
        ElementKind::Package => {
            package_icon(size, color.unwrap_or(theme::RED), label.unwrap_or("apt"))
        }
    }
}

/// Vertical gradient overlay covering the backdrop
pub fn gradient_layer() -> String {
    format!(
        "position:absolute;inset:0;background:linear-gradient(to bottom,{mantle},{base},{mantle})",
        mantle = theme::MANTLE,
        base = theme::BASE,
    )
}

/// Fixed glow blob positions: (top, left, bottom, right, size px, color)
const GLOW_BLOBS: [(&str, &str, f32, &str); 3] = [
    ("top:25%", "left:25%", 300.0, theme::MAUVE),
    ("bottom:25%", "right:25%", 250.0, "#A020F0"),
    ("top:50%", "right:33%", 200.0, theme::PINK),
];

/// Inline styles for the three static ambient glow blobs
pub fn glow_styles() -> Vec<String> {
    GLOW_BLOBS
        .iter()
        .map(|(vertical, horizontal, size, color)| {
            format!(
                "position:absolute;{vertical};{horizontal};width:{size}px;height:{size}px;\
                 border-radius:50%;filter:blur(100px);background:{bg}",
                bg = with_alpha(color, "0d"),
            )
        })
        .collect()
}
