use std::env;
use std::fs;

use identicon_core::{Color, Identicon, IdenticonStyle};
use png::{BitDepth, ColorType, Encoder};
use serde::Deserialize;

/// Optional style overrides loaded from a JSON file; anything absent
/// falls back to the default style.
#[derive(Clone, Debug, Default, Deserialize)]
struct StyleConfig {
    background: Option<String>,
    padding: Option<f32>,
    saturation: Option<f32>,
    color_lightness: Option<[f32; 2]>,
    gray_lightness: Option<[f32; 2]>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: identicon <value> <output.(svg|png)> [size] [style.json]");
        eprintln!("  <value>  text to hash with SHA-1, or hex:<bytes> for a raw hash");
        std::process::exit(2);
    }
    let value = &args[1];
    let output = &args[2];
    let size = parse_size(args.get(3))?;
    let style = match args.get(4) {
        Some(path) => {
            let txt = fs::read_to_string(path)?;
            let config: StyleConfig = serde_json::from_str(&txt)?;
            build_style(&config)?
        }
        None => IdenticonStyle::default(),
    };

    let icon = match value.strip_prefix("hex:") {
        Some(hex) => Identicon::from_hash(parse_hex_bytes(hex)?, size, style)?,
        None => Identicon::from_value(value, size, style)?,
    };
    let svg = icon.to_svg();

    if output.ends_with(".svg") {
        fs::write(output, svg)?;
        return Ok(());
    }
    if !output.ends_with(".png") {
        eprintln!("warning: unknown output extension, writing PNG data");
    }

    // Rasterize the SVG and encode it deterministically.
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_str(&svg, &opt).map_err(|e| format!("SVG parse error: {e:?}"))?;
    let mut pixmap = tiny_skia::Pixmap::new(size, size).ok_or("pixmap alloc failed")?;
    let mut pm = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pm);
    fs::write(output, encode_rgba_to_png_bytes(size, size, pixmap.data())?)?;
    Ok(())
}

fn build_style(config: &StyleConfig) -> Result<IdenticonStyle, Box<dyn std::error::Error>> {
    let defaults = IdenticonStyle::default();
    let background = match &config.background {
        Some(text) => parse_hex_color(text)?,
        None => defaults.background_color(),
    };
    let color_lightness = match config.color_lightness {
        Some([lo, hi]) => lo..=hi,
        None => defaults.color_lightness().clone(),
    };
    let gray_lightness = match config.gray_lightness {
        Some([lo, hi]) => lo..=hi,
        None => defaults.gray_lightness().clone(),
    };
    let style = IdenticonStyle::new(
        background,
        config.padding.unwrap_or(defaults.padding()),
        config.saturation.unwrap_or(defaults.saturation()),
        color_lightness,
        gray_lightness,
    )?;
    Ok(style)
}

// Accepts "#rrggbb" or "#rrggbbaa"; a 6-digit color is taken as opaque.
fn parse_hex_color(text: &str) -> Result<Color, Box<dyn std::error::Error>> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    let rgba = match digits.len() {
        6 => u32::from_str_radix(digits, 16)? << 8 | 0xff,
        8 => u32::from_str_radix(digits, 16)?,
        _ => return Err(format!("invalid color {text:?}: expected 6 or 8 hex digits").into()),
    };
    Ok(Color::from_hex(rgba))
}

fn parse_hex_bytes(hex: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    // Reject non-ASCII before slicing: a fixed two-byte stride would land
    // mid-character on multi-byte input.
    if !hex.is_ascii() {
        return Err(format!("hex hash {hex:?} should only contain hex digits").into());
    }
    if hex.len() % 2 != 0 {
        return Err("hex hash should have an even number of digits".into());
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).map_err(Into::into))
        .collect()
}

fn parse_size(arg: Option<&String>) -> Result<u32, Box<dyn std::error::Error>> {
    match arg {
        Some(text) => text
            .parse()
            .map_err(|_| format!("invalid size {text:?}: expected a pixel count").into()),
        None => Ok(128),
    }
}

// RGBA -> PNG bytes (deterministic for the same input).
fn encode_rgba_to_png_bytes(
    width: u32,
    height: u32,
    rgba: &[u8],
) -> Result<Vec<u8>, png::EncodingError> {
    let mut buf = Vec::new();
    {
        let mut enc = Encoder::new(&mut buf, width, height);
        enc.set_color(ColorType::Rgba);
        enc.set_depth(BitDepth::Eight);
        let mut writer = enc.write_header()?;
        writer.write_image_data(rgba)?;
    }
    Ok(buf)
}
