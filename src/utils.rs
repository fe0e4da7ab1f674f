//! Utility functions

use std::path::PathBuf;

// With stroke — for the header logo (large display)
pub const LOGO_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 160 160"><defs><style>.c1{fill:#fff;stroke:#09090b;stroke-width:1px}.c2{fill:#a78bfa;stroke:#09090b;stroke-width:1px}</style></defs><rect class="c1" x="18" y="96" width="24" height="46" rx="4"/><rect class="c2" x="54" y="72" width="24" height="70" rx="4"/><rect class="c1" x="90" y="84" width="24" height="58" rx="4"/><rect class="c2" x="126" y="52" width="24" height="90" rx="4"/><path class="c2" d="m80,10 64,26-64,26L16,36Z"/><path class="c1" d="m44,46v18c0,8 16,14 36,14s36-6 36-14v-18l-36,14Z"/></svg>"#;

// No stroke — for window/taskbar icons
pub const ICON_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 160 160"><defs><style>.c1{fill:#fff}.c2{fill:#a78bfa}</style></defs><rect class="c1" x="18" y="96" width="24" height="46" rx="4"/><rect class="c2" x="54" y="72" width="24" height="70" rx="4"/><rect class="c1" x="90" y="84" width="24" height="58" rx="4"/><rect class="c2" x="126" y="52" width="24" height="90" rx="4"/><path class="c2" d="m80,10 64,26-64,26L16,36Z"/><path class="c1" d="m44,46v18c0,8 16,14 36,14s36-6 36-14v-18l-36,14Z"/></svg>"#;

/// Rasterize the logo SVG at the given width, preserving aspect ratio.
pub fn rasterize_logo(width: u32) -> (Vec<u8>, u32, u32) {
    let tree = resvg::usvg::Tree::from_str(LOGO_SVG, &resvg::usvg::Options::default()).unwrap();
    let svg_size = tree.size();
    let scale = width as f32 / svg_size.width();
    let height = (svg_size.height() * scale).ceil() as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height).unwrap();
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    (premul_to_straight(&pixmap), width, height)
}

/// Rasterize the icon SVG to a square image (for window/taskbar icons).
pub fn rasterize_logo_square(size: u32) -> (Vec<u8>, u32, u32) {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()).unwrap();
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size).unwrap();
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    (premul_to_straight(&pixmap), size, size)
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// App data directory (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Student Rating Client")
}

/// Where the daily-rolling log files live
pub fn get_logs_dir() -> PathBuf {
    get_data_dir().join("logs")
}
