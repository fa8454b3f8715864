// Write `preview.html` showing the palette of a base color (first
// argument, default #3b82f6) for every harmony mode.
//
//     cargo run --example preview -- '#f59e0b'

use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use color_harmony::{Color, HarmonyMode, PaletteState, Scale, DEFAULT_BASE};
use color_harmony::contrast::{best_text_color, AccessibilityReport};
use color_harmony::export::{export, ExportFormat};

type Err = Box<dyn Error>;

fn table_of_colors(fh: &mut impl Write, scale: &Scale,
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for (step, c) in scale {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {c}; color: {}; \
                      font: 9px monospace; text-align: center\">{step}</td>",
                 best_text_color(c))?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for (_, c) in scale {
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>",
                 c.to_gray())?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn palette(fh: &mut impl Write, palette: &PaletteState) -> Result<(), Err> {
    for (role, scale) in palette.scales() {
        let comment = format!("{role} ({})", scale.base());
        table_of_colors(fh, scale, 43, &comment)?;
    }
    writeln!(fh, "<pre>{}</pre>", AccessibilityReport::of(palette))?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let base = match env::args().nth(1) {
        Some(hex) => hex.parse()?,
        None => DEFAULT_BASE,
    };
    let mut fh = BufWriter::new(File::create("preview.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Color harmony: {base}</title>\n\
                  </head>\n\
                  <body>")?;
    let mut state = PaletteState::new(base, HarmonyMode::default());
    for &mode in HarmonyMode::all() {
        state.set_harmony(mode);
        writeln!(fh, "<h3>{mode}</h3>")?;
        palette(&mut fh, &state)?;
    }

    writeln!(fh, "<h3>Manual accent (locked)</h3>")?;
    state.set_color(color_harmony::PaletteRole::Accent, Color::new(0xf5, 0x9e, 0x0b));
    state.set_harmony(HarmonyMode::Triadic);
    palette(&mut fh, &state)?;
    writeln!(fh, "<pre>{}</pre>", export(&state, ExportFormat::Css))?;

    writeln!(fh, "</body>\n\
                  </html>")?;
    fh.flush()?;
    Ok(())
}
