use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;

/// Everything under `assets/` ships inside the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Asset {
    Stylesheet,
    Favicon,
}

impl Asset {
    fn path(&self) -> &'static str {
        match self {
            Asset::Stylesheet => "main.css",
            Asset::Favicon => "favicon.svg",
        }
    }

    fn mime(&self) -> &'static str {
        match self {
            Asset::Stylesheet => "text/css",
            Asset::Favicon => "image/svg+xml",
        }
    }
}

static STYLESHEET: OnceLock<String> = OnceLock::new();
static FAVICON: OnceLock<String> = OnceLock::new();

/// The application stylesheet.
pub fn main_css() -> &'static str {
    STYLESHEET.get_or_init(|| load_text(Asset::Stylesheet))
}

/// The favicon as a `data:` URI, usable without a file server.
pub fn favicon_data_uri() -> &'static str {
    FAVICON.get_or_init(|| {
        let asset = Asset::Favicon;
        format!(
            "data:{};base64,{}",
            asset.mime(),
            encode_base64(&load_bytes(asset))
        )
    })
}

fn load_text(asset: Asset) -> String {
    String::from_utf8_lossy(&load_bytes(asset)).into_owned()
}

fn load_bytes(asset: Asset) -> Cow<'static, [u8]> {
    match EmbeddedAssets::get(asset.path()) {
        Some(file) => file.data,
        None => {
            tracing::error!(path = asset.path(), "embedded asset missing");
            Cow::Borrowed(&[])
        }
    }
}

fn encode_base64(input: &[u8]) -> String {
    const TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut output = String::with_capacity(input.len().div_ceil(3) * 4);

    for chunk in input.chunks(3) {
        let bytes = [
            chunk[0],
            chunk.get(1).copied().unwrap_or(0),
            chunk.get(2).copied().unwrap_or(0),
        ];
        let packed = (u32::from(bytes[0]) << 16) | (u32::from(bytes[1]) << 8) | u32::from(bytes[2]);

        for slot in 0..4 {
            if slot <= chunk.len() {
                let index = (packed >> (18 - slot * 6)) & 0b11_1111;
                output.push(TABLE[index as usize] as char);
            } else {
                output.push('=');
            }
        }
    }

    output
}
