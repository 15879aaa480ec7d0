use camino::{Utf8Path, Utf8PathBuf};
use cornertag::tag::{CornerTag, CornerType, TagDirection, svg};
use cornertag::types::Bounds;
use rayon::prelude::*;
use std::fs;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  gallery    Generate an HTML page with every direction and corner type");
        eprintln!("             plus each attribute file under tests/data");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "gallery" => gallery(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

struct Card {
    title: String,
    body: String,
    is_err: bool,
}

fn gallery() {
    let root = Utf8Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("xtask lives inside the workspace")
        .to_owned();
    let data_dir = root.join("tests/data");
    let output_path = root.join("gallery.html");

    // Every combination on a square and on a wide frame
    let mut combos = Vec::new();
    for (w, h) in [(100.0, 100.0), (200.0, 80.0)] {
        for corner in CornerType::ALL {
            for direction in TagDirection::ALL {
                combos.push((w, h, corner, direction));
            }
        }
    }
    let mut cards: Vec<Card> = combos
        .par_iter()
        .map(|&(w, h, corner, direction)| {
            let bounds = Bounds::try_new(w, h).expect("gallery frames are valid");
            let tag = CornerTag::new(bounds, direction, corner);
            Card {
                title: format!("{corner} · {direction} · {w}x{h}"),
                body: svg::render(&tag),
                is_err: false,
            }
        })
        .collect();

    let mut files: Vec<Utf8PathBuf> = fs::read_dir(&data_dir)
        .expect("Failed to read tests/data")
        .filter_map(|e| e.ok())
        .filter_map(|e| Utf8PathBuf::from_path_buf(e.path()).ok())
        .filter(|p| p.extension() == Some("tag"))
        .collect();
    files.sort();

    cards.par_extend(files.par_iter().map(|path| {
        eprintln!("Processing {}...", path);
        let source = fs::read_to_string(path).unwrap_or_default();
        let name = path.file_name().unwrap_or(path.as_str());
        match cornertag::corner_tag_named(name, &source) {
            Ok(tag) => Card {
                title: name.to_string(),
                body: svg::render(&tag),
                is_err: false,
            },
            Err(e) => Card {
                title: name.to_string(),
                body: format!("{e:?}"),
                is_err: true,
            },
        }
    }));

    let mut html = String::from(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Corner tag gallery</title>
    <style>
        body { font-family: system-ui, sans-serif; background: #eee; margin: 0; padding: 24px; }
        .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 16px; }
        .card { background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.08); padding: 12px; }
        .title { font-size: 12px; font-weight: 600; margin-bottom: 8px; }
        .frame { outline: 1px dashed #bbb; display: inline-block; line-height: 0; }
        .error { font-family: monospace; font-size: 11px; color: #991b1b; white-space: pre-wrap; }
    </style>
</head>
<body>
<div class="grid">
"#,
    );

    for card in &cards {
        let body = if card.is_err {
            format!(r#"<div class="error">{}</div>"#, html_escape(&card.body))
        } else {
            format!(r#"<div class="frame">{}</div>"#, card.body)
        };
        html.push_str(&format!(
            "<div class=\"card\"><div class=\"title\">{}</div>{}</div>\n",
            html_escape(&card.title),
            body
        ));
    }

    html.push_str("</div>\n</body></html>\n");

    fs::write(&output_path, html).expect("Failed to write HTML");
    println!("Generated gallery at: {}", output_path);
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
