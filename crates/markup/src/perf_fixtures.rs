use styled_text::{AttributeTable, Attributes, Color};

pub const BLOCK_TEMPLATE: &str =
    "<title>Chapter</title> <body>Some <em>emphasis</em>, a <strong>bold &amp; loud</strong> word &lt;here&gt;.</body>\n";

pub fn make_blocks(blocks: usize) -> String {
    let mut markup = String::with_capacity(BLOCK_TEMPLATE.len() * blocks);
    for _ in 0..blocks {
        markup.push_str(BLOCK_TEMPLATE);
    }
    markup
}

/// `depth` nested tags around a single word.
pub fn make_nested(depth: usize) -> String {
    let mut markup = String::with_capacity(depth * 8 + 4);
    for level in 0..depth {
        markup.push_str(&format!("<t{}>", level % 4));
    }
    markup.push_str("word");
    for level in (0..depth).rev() {
        markup.push_str(&format!("</t{}>", level % 4));
    }
    markup
}

pub fn fixture_table() -> AttributeTable {
    [
        ("title", Attributes::builder().font("Georgia").font_size(24.0).build()),
        ("body", Attributes::builder().font("Georgia").font_size(14.0).build()),
        ("em", Attributes::builder().obliqueness(0.2).build()),
        (
            "strong",
            Attributes::builder()
                .font("Georgia-Bold")
                .color(Color::rgb(128, 0, 0))
                .build(),
        ),
        ("t0", Attributes::builder().kern(1.0).build()),
        ("t1", Attributes::builder().color(Color::BLACK).build()),
        ("t2", Attributes::builder().underline_style(1).build()),
        ("t3", Attributes::builder().kern(2.0).build()),
    ]
    .into_iter()
    .collect()
}
