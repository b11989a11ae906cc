//! HTML pages

use shapeshifter::{Bank, Config};

/// Preview size of each wave on a bank page
const THUMB_WIDTH: u32 = 256;
const THUMB_HEIGHT: u32 = 128;

/// Ordered list of banks linking to their pages
pub fn index_page(config: &Config) -> String {
    let mut page = String::from(
        "<html>\n<head><title>Shapeshifter Customizer</title></head>\n<body>\n<ol start=\"0\">\n",
    );
    for (i, bank) in config.iter().enumerate() {
        page.push_str(&format!(
            "<li><a href=\"/bank/{}\">{}</a></li>\n",
            i,
            escape(&bank.name_lossy())
        ));
    }
    page.push_str("</ol>\n</body>\n</html>\n");
    page
}

/// Every wave of one bank, drawn and playable
pub fn bank_page(index: usize, bank: &Bank) -> String {
    let name = escape(&bank.name_lossy());
    let mut page = format!(
        "<html>\n<head><title>Shapeshifter Customizer - Bank {name}</title></head>\n<body>\n\
         <h1>{index}: {name}</h1>\n<p><a href=\"/\">All banks</a></p>\n"
    );
    for wave in 0..bank.waves.len() {
        page.push_str(&format!(
            "<img src=\"/draw?bank={index}&amp;wave={wave}\" width=\"{THUMB_WIDTH}\" height=\"{THUMB_HEIGHT}\">\n\
             <audio src=\"/play?bank={index}&amp;wave={wave}\" controls preload=\"none\"></audio>\n"
        ));
    }
    page.push_str("</body>\n</html>\n");
    page
}

/// Escape text for use in element content and attribute values
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
