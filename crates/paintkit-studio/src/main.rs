mod badge;

use std::sync::Arc;

use anyhow::Context;
use paintkit_engine::coords::{Rect, ResizingBehavior};
use paintkit_engine::logging::{init_logging, LoggingConfig};
use paintkit_engine::paint::Color;
use paintkit_engine::scene::{DrawCmd, DrawList};
use paintkit_engine::text::{self, DirectoryFonts, FontMetrics, TextPaint, Typeface};

use badge::BadgeDrawing;

const FRAMES: usize = 6;

/// Well-known system font locations tried when none is given.
const SYSTEM_FONTS: &[(&str, &str)] = &[
    ("/usr/share/fonts/TTF", "DejaVuSans.ttf"),
    ("/usr/share/fonts/truetype/dejavu", "DejaVuSans.ttf"),
    ("/usr/share/fonts/dejavu", "DejaVuSans.ttf"),
    ("/usr/share/fonts/noto", "NotoSans-Regular.ttf"),
    ("/usr/share/fonts/truetype/noto", "NotoSans-Regular.ttf"),
];

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let mut args = std::env::args().skip(1);
    let face = match (args.next(), args.next()) {
        (Some(dir), Some(name)) => Some(load_face(&dir, &name)?),
        (Some(_), None) => anyhow::bail!("usage: paintkit-studio [<font-dir> <font-name>]"),
        _ => find_system_face()?,
    };

    let mut paint = TextPaint::new(14.0, Color::WHITE);
    match face {
        Some(face) => {
            log::info!("label typeface: {}", face.name());
            paint = paint.with_typeface(face);
        }
        None => log::info!("no typeface found; label metrics are estimated"),
    }

    let metrics = FontMetrics::new();
    let mut list = DrawList::new();
    let mut badge = BadgeDrawing::new(Color::from_rgb(0x2d, 0x6c, 0xdf));

    for frame in 0..FRAMES {
        // Halfway through, the host resizes the view.
        let target = if frame < FRAMES / 2 {
            Rect::new(0.0, 0.0, 240.0, 80.0)
        } else {
            Rect::new(0.0, 0.0, 300.0, 150.0)
        };

        list.clear();
        badge.draw(&mut list, &metrics, target, ResizingBehavior::AspectFit, "Ready", &paint);

        let (fill, glow, label) = badge.builds();
        log::info!(
            "frame {frame}: {} commands, {} live shaders, builds fill={fill} glow={glow} label={label}",
            list.items().len(),
            list.live_shaders(),
        );
    }

    for cmd in list.items() {
        match cmd {
            DrawCmd::FillPath { path, .. } => log::info!("fill {:?}", path.bounds()),
            DrawCmd::TextOnPath { text, offset, .. } => log::info!("text {text:?} at {offset:?}"),
        }
    }

    badge.release(&mut list);
    anyhow::ensure!(list.live_shaders() == 0, "shaders leaked after release");
    Ok(())
}

fn load_face(dir: &str, name: &str) -> anyhow::Result<Arc<Typeface>> {
    text::install_typeface_provider(DirectoryFonts::new(dir));
    text::typeface(name).with_context(|| format!("loading typeface '{name}' from {dir}"))
}

fn find_system_face() -> anyhow::Result<Option<Arc<Typeface>>> {
    let Some(&(dir, name)) = SYSTEM_FONTS
        .iter()
        .find(|(dir, name)| std::path::Path::new(dir).join(name).is_file())
    else {
        return Ok(None);
    };
    load_face(dir, name).map(Some)
}
